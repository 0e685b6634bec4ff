use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A material option shown in the AR visualizer.
///
/// Catalog pricing is independent of the estimator's base-rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WoodProfile {
    pub sku: String,
    pub name: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price_per_sqft: Option<Decimal>,
    pub glb_url: Option<String>,
    pub usdz_url: Option<String>,
    pub poster_url: Option<String>,
}
