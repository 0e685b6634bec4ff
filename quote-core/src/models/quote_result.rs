use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LocationTier, PriceRange, ProjectType, TierSelection};

/// Identifies which rule produced a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOnKind {
    Stairs,
    Demolition,
    SubfloorPrep,
    FurnitureMoving,
    HaulAway,
    KitchenScope,
    Rush,
}

/// One priced line item layered on top of the base subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub kind: AddOnKind,
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
    /// Formatted as `$3,500 – $5,500`.
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteMeta {
    #[serde(with = "rust_decimal::serde::float")]
    pub small_job_minimum_sq_ft: Decimal,
    pub assumptions: Vec<String>,
}

/// Everything the wizard displays for one set of answers.
///
/// Recomputed from scratch on every input change; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub project_type: ProjectType,
    /// The caller's square footage, never the small-job floor.
    #[serde(with = "rust_decimal::serde::float")]
    pub square_feet: Decimal,
    pub tier: TierSelection,
    pub location: LocationTier,

    /// Subtotal rounded to the nearest $25.
    pub totals: Totals,
    /// Totals divided by the raw square footage, nearest $0.05.
    pub price_per_sq_ft: PriceRange,
    /// Base material and labor, whole dollars.
    pub base: PriceRange,
    /// Active line items in evaluation order, whole dollars.
    pub add_ons: Vec<AddOn>,
    /// Exact `base + add-ons` before any rounding.
    pub subtotal: PriceRange,

    pub meta: QuoteMeta,
}

impl QuoteResult {
    /// Finds a line item by kind.
    pub fn add_on(
        &self,
        kind: AddOnKind,
    ) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.kind == kind)
    }
}
