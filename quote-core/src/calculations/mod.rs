//! Quote calculation logic.
//!
//! The [`Estimator`] prices a project description against an
//! [`EstimatorConfig`]; [`material_cost`] is the catalog's separate
//! `area × unit price` computation.

pub mod common;
pub mod config;
pub mod estimator;
pub mod material;

pub use config::{
    AddOnRates, BaseRates, ConditionMultipliers, ConfigError, EstimatorConfig,
    LocationMultipliers, QualityMultipliers,
};
pub use estimator::{EstimateError, Estimator};
pub use material::material_cost;

use crate::models::{QuoteRequest, QuoteResult};

/// Prices a request with the default rate tables.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::QuoteRequest;
/// use quote_core::calculations::estimate;
///
/// let request = QuoteRequest {
///     project_type: Some("refinish".to_string()),
///     square_feet: Some(dec!(1000)),
///     ..QuoteRequest::default()
/// };
///
/// let result = estimate(&request).unwrap();
/// assert_eq!(result.totals.min, dec!(3500));
/// assert_eq!(result.totals.max, dec!(5500));
/// ```
pub fn estimate(request: &QuoteRequest) -> Result<QuoteResult, EstimateError> {
    Estimator::default().estimate(request)
}
