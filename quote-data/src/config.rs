//! TOML loading for [`EstimatorConfig`].
//!
//! Every table is optional. A file that only sets
//!
//! ```toml
//! total_rounding_step = 50
//!
//! [location]
//! high = 1.35
//! ```
//!
//! keeps the default rate card for everything else.

use std::path::Path;

use quote_core::calculations::{ConfigError, EstimatorConfig};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid TOML in config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Parse and validate a TOML document.
pub fn config_from_str(input: &str) -> Result<EstimatorConfig, ConfigLoadError> {
    let config: EstimatorConfig = toml::from_str(input)?;
    config.validate()?;
    Ok(config)
}

/// Read, parse and validate a TOML file.
pub fn load_config(path: &Path) -> Result<EstimatorConfig, ConfigLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = config_from_str(&contents)?;
    info!(path = %path.display(), "loaded estimator config");
    Ok(config)
}

/// Use the file at `path` if given, otherwise the built-in rate card.
pub fn load_or_default(path: Option<&Path>) -> Result<EstimatorConfig, ConfigLoadError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(EstimatorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::PriceRange;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_document_is_the_default_rate_card() {
        let config = config_from_str("").expect("empty TOML is valid");

        assert_eq!(config, EstimatorConfig::default());
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let toml = r#"
total_rounding_step = 50

[location]
high = 1.35

[base_rates]
refinish = { min = 4, max = 6 }
"#;

        let config = config_from_str(toml).expect("valid");

        assert_eq!(config.total_rounding_step, dec!(50));
        assert_eq!(config.location.high, dec!(1.35));
        assert_eq!(config.location.low, dec!(0.9));
        assert_eq!(
            config.base_rates.refinish,
            PriceRange::new(dec!(4), dec!(6))
        );
        assert_eq!(
            config.base_rates.new_hardwood,
            PriceRange::new(dec!(6), dec!(11))
        );
        assert_eq!(config.small_job_minimum_sqft, dec!(600));
    }

    #[test]
    fn assumptions_can_be_replaced() {
        let toml = r#"assumptions = ["Bay Area pricing."]"#;

        let config = config_from_str(toml).expect("valid");

        assert_eq!(config.assumptions, vec!["Bay Area pricing.".to_string()]);
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let result = config_from_str("[location\nhigh = 1.2");

        assert!(matches!(result, Err(ConfigLoadError::Toml(_))));
    }

    #[test]
    fn inconsistent_values_fail_validation() {
        let toml = r#"
[add_ons]
rush_fraction = { min = 0.5, max = 0.25 }
"#;

        let result = config_from_str(toml);

        assert!(matches!(
            result,
            Err(ConfigLoadError::Invalid(ConfigError::InvalidRushFraction { .. }))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/no/such/rates.toml")).expect_err("missing file");

        assert!(err.to_string().contains("/no/such/rates.toml"));
    }

    #[test]
    fn no_path_means_default() {
        assert_eq!(load_or_default(None).unwrap(), EstimatorConfig::default());
    }
}
