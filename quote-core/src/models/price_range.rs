use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A low/high pair of dollar amounts or per-unit rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
}

impl PriceRange {
    pub const ZERO: PriceRange = PriceRange {
        min: Decimal::ZERO,
        max: Decimal::ZERO,
    };

    pub fn new(
        min: Decimal,
        max: Decimal,
    ) -> Self {
        Self { min, max }
    }

    /// Multiplies both ends by the same factor. `None` if either end
    /// overflows.
    pub fn checked_scale(
        self,
        factor: Decimal,
    ) -> Option<Self> {
        Some(Self {
            min: self.min.checked_mul(factor)?,
            max: self.max.checked_mul(factor)?,
        })
    }

    /// Adds each end independently. `None` if either end overflows.
    pub fn checked_add(
        self,
        rhs: PriceRange,
    ) -> Option<Self> {
        Some(Self {
            min: self.min.checked_add(rhs.min)?,
            max: self.max.checked_add(rhs.max)?,
        })
    }

    /// Applies `f` to both ends.
    pub fn map(
        self,
        f: impl Fn(Decimal) -> Decimal,
    ) -> Self {
        Self {
            min: f(self.min),
            max: f(self.max),
        }
    }

    /// Applies a fallible `f` to both ends.
    pub fn try_map(
        self,
        f: impl Fn(Decimal) -> Option<Decimal>,
    ) -> Option<Self> {
        Some(Self {
            min: f(self.min)?,
            max: f(self.max)?,
        })
    }

    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}
