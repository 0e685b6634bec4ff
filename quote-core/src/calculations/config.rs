//! Rate tables and multipliers that drive the estimator.
//!
//! [`EstimatorConfig::default`] is the canonical rule set. Every table can be
//! overridden (for example from a TOML file); partial overrides keep the
//! defaults for anything they do not name.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::EstimatorConfig;
//! use quote_core::ProjectType;
//!
//! let config = EstimatorConfig::default();
//!
//! let refinish = config.base_rates.for_project(ProjectType::Refinish);
//! assert_eq!(refinish.min, dec!(3.5));
//! assert_eq!(refinish.max, dec!(5.5));
//! assert!(config.validate().is_ok());
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Condition, LocationTier, PriceRange, ProjectType, Quality, TierSelection};

/// Errors reported by [`EstimatorConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A rate range has a negative end or its min exceeds its max.
    #[error("{name} rate range is invalid: min {min}, max {max}")]
    InvalidRateRange {
        name: &'static str,
        min: Decimal,
        max: Decimal,
    },

    /// Multipliers must be strictly positive.
    #[error("{name} multiplier must be positive, got {value}")]
    InvalidMultiplier { name: &'static str, value: Decimal },

    /// The small-job minimum area must be non-negative.
    #[error("small job minimum must be non-negative, got {0}")]
    InvalidSmallJobMinimum(Decimal),

    /// Rounding steps must be strictly positive.
    #[error("{name} rounding step must be positive, got {value}")]
    InvalidRoundingStep { name: &'static str, value: Decimal },

    /// Rush fractions must lie in [0, 1] with min not above max.
    #[error("rush fraction must be within [0, 1], got min {min}, max {max}")]
    InvalidRushFraction { min: Decimal, max: Decimal },
}

/// Per-unit `[min, max]` base rates, one row per project type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseRates {
    pub refinish: PriceRange,
    pub new_hardwood: PriceRange,
    pub luxury_vinyl: PriceRange,
    /// Floor portion only; the kitchen scope add-on covers the rest.
    pub kitchen_remodel: PriceRange,
    pub engineered: PriceRange,
    /// Per step rather than per square foot.
    pub stairs_only: PriceRange,
}

impl BaseRates {
    pub fn for_project(
        &self,
        project_type: ProjectType,
    ) -> PriceRange {
        match project_type {
            ProjectType::Refinish => self.refinish,
            ProjectType::NewHardwood => self.new_hardwood,
            ProjectType::LuxuryVinyl => self.luxury_vinyl,
            ProjectType::KitchenRemodel => self.kitchen_remodel,
            ProjectType::Engineered => self.engineered,
            ProjectType::StairsOnly => self.stairs_only,
        }
    }
}

impl Default for BaseRates {
    fn default() -> Self {
        Self {
            refinish: PriceRange::new(dec!(3.5), dec!(5.5)),
            new_hardwood: PriceRange::new(dec!(6), dec!(11)),
            luxury_vinyl: PriceRange::new(dec!(3), dec!(6.5)),
            kitchen_remodel: PriceRange::new(dec!(7), dec!(12)),
            engineered: PriceRange::new(dec!(7), dec!(12)),
            stairs_only: PriceRange::new(dec!(80), dec!(150)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityMultipliers {
    pub economy: Decimal,
    pub standard: Decimal,
    pub premium: Decimal,
}

impl Default for QualityMultipliers {
    fn default() -> Self {
        Self {
            economy: dec!(0.9),
            standard: dec!(1),
            premium: dec!(1.25),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionMultipliers {
    pub light: Decimal,
    pub average: Decimal,
    pub heavy: Decimal,
}

impl Default for ConditionMultipliers {
    fn default() -> Self {
        Self {
            light: dec!(1),
            average: dec!(1.1),
            heavy: dec!(1.25),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationMultipliers {
    pub low: Decimal,
    pub medium: Decimal,
    pub high: Decimal,
}

impl Default for LocationMultipliers {
    fn default() -> Self {
        Self {
            low: dec!(0.9),
            medium: dec!(1),
            high: dec!(1.2),
        }
    }
}

/// Add-on pricing. Every amount here is scaled by the location multiplier
/// only, never by quality or condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOnRates {
    pub per_stair: PriceRange,
    pub demo_per_sqft: PriceRange,
    pub subfloor_per_sqft: PriceRange,
    pub move_furniture: PriceRange,
    pub haul_away: PriceRange,
    pub kitchen_scope: PriceRange,
    /// Fraction of the running subtotal charged for rush scheduling.
    pub rush_fraction: PriceRange,
}

impl Default for AddOnRates {
    fn default() -> Self {
        Self {
            per_stair: PriceRange::new(dec!(80), dec!(130)),
            demo_per_sqft: PriceRange::new(dec!(0.75), dec!(1.5)),
            subfloor_per_sqft: PriceRange::new(dec!(0.75), dec!(1.5)),
            move_furniture: PriceRange::new(dec!(250), dec!(550)),
            haul_away: PriceRange::new(dec!(150), dec!(350)),
            kitchen_scope: PriceRange::new(dec!(15000), dec!(35000)),
            rush_fraction: PriceRange::new(dec!(0.10), dec!(0.25)),
        }
    }
}

/// Complete estimator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub base_rates: BaseRates,
    pub quality: QualityMultipliers,
    pub condition: ConditionMultipliers,
    pub location: LocationMultipliers,
    pub add_ons: AddOnRates,

    /// Jobs smaller than this are billed as this many square feet for the
    /// base subtotal.
    pub small_job_minimum_sqft: Decimal,

    /// Totals are rounded to the nearest multiple of this amount.
    pub total_rounding_step: Decimal,

    /// Price per square foot is rounded to the nearest multiple of this amount.
    pub per_sqft_rounding_step: Decimal,

    /// Caveats shown alongside every quote.
    pub assumptions: Vec<String>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            base_rates: BaseRates::default(),
            quality: QualityMultipliers::default(),
            condition: ConditionMultipliers::default(),
            location: LocationMultipliers::default(),
            add_ons: AddOnRates::default(),
            small_job_minimum_sqft: dec!(600),
            total_rounding_step: dec!(25),
            per_sqft_rounding_step: dec!(0.05),
            assumptions: vec![
                "Pricing is based on typical LA-area labor & material costs.".to_string(),
                "Final quote depends on on-site inspection, material selections, and layout."
                    .to_string(),
                "Range shown includes labor, basic materials, and typical jobsite costs."
                    .to_string(),
            ],
        }
    }
}

impl EstimatorConfig {
    /// Multiplier for whichever axis fills the tier slot.
    pub fn tier_multiplier(
        &self,
        tier: TierSelection,
    ) -> Decimal {
        match tier {
            TierSelection::Quality(Quality::Economy) => self.quality.economy,
            TierSelection::Quality(Quality::Standard) => self.quality.standard,
            TierSelection::Quality(Quality::Premium) => self.quality.premium,
            TierSelection::Condition(Condition::Light) => self.condition.light,
            TierSelection::Condition(Condition::Average) => self.condition.average,
            TierSelection::Condition(Condition::Heavy) => self.condition.heavy,
        }
    }

    pub fn location_multiplier(
        &self,
        location: LocationTier,
    ) -> Decimal {
        match location {
            LocationTier::Low => self.location.low,
            LocationTier::Medium => self.location.medium,
            LocationTier::High => self.location.high,
        }
    }

    /// Validates every table.
    ///
    /// Positive multipliers and ordered, non-negative rate ranges are what
    /// keep `totals.min <= totals.max` for every input.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use quote_core::calculations::{ConfigError, EstimatorConfig};
    ///
    /// let mut config = EstimatorConfig::default();
    /// config.total_rounding_step = dec!(0);
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ConfigError::InvalidRoundingStep { name: "total", value: dec!(0) })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = &self.base_rates;
        check_range("refinish", rates.refinish)?;
        check_range("new_hardwood", rates.new_hardwood)?;
        check_range("luxury_vinyl", rates.luxury_vinyl)?;
        check_range("kitchen_remodel", rates.kitchen_remodel)?;
        check_range("engineered", rates.engineered)?;
        check_range("stairs_only", rates.stairs_only)?;

        check_multiplier("quality.economy", self.quality.economy)?;
        check_multiplier("quality.standard", self.quality.standard)?;
        check_multiplier("quality.premium", self.quality.premium)?;
        check_multiplier("condition.light", self.condition.light)?;
        check_multiplier("condition.average", self.condition.average)?;
        check_multiplier("condition.heavy", self.condition.heavy)?;
        check_multiplier("location.low", self.location.low)?;
        check_multiplier("location.medium", self.location.medium)?;
        check_multiplier("location.high", self.location.high)?;

        let add_ons = &self.add_ons;
        check_range("per_stair", add_ons.per_stair)?;
        check_range("demo_per_sqft", add_ons.demo_per_sqft)?;
        check_range("subfloor_per_sqft", add_ons.subfloor_per_sqft)?;
        check_range("move_furniture", add_ons.move_furniture)?;
        check_range("haul_away", add_ons.haul_away)?;
        check_range("kitchen_scope", add_ons.kitchen_scope)?;

        let rush = add_ons.rush_fraction;
        if rush.min < Decimal::ZERO || rush.max > Decimal::ONE || rush.min > rush.max {
            return Err(ConfigError::InvalidRushFraction {
                min: rush.min,
                max: rush.max,
            });
        }

        if self.small_job_minimum_sqft < Decimal::ZERO {
            return Err(ConfigError::InvalidSmallJobMinimum(
                self.small_job_minimum_sqft,
            ));
        }
        if self.total_rounding_step <= Decimal::ZERO {
            return Err(ConfigError::InvalidRoundingStep {
                name: "total",
                value: self.total_rounding_step,
            });
        }
        if self.per_sqft_rounding_step <= Decimal::ZERO {
            return Err(ConfigError::InvalidRoundingStep {
                name: "per_sqft",
                value: self.per_sqft_rounding_step,
            });
        }
        Ok(())
    }
}

fn check_range(
    name: &'static str,
    range: PriceRange,
) -> Result<(), ConfigError> {
    if range.min < Decimal::ZERO || !range.is_ordered() {
        return Err(ConfigError::InvalidRateRange {
            name,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

fn check_multiplier(
    name: &'static str,
    value: Decimal,
) -> Result<(), ConfigError> {
    if value <= Decimal::ZERO {
        return Err(ConfigError::InvalidMultiplier { name, value });
    }
    Ok(())
}
