//! Flooring price estimator.
//!
//! Maps a [`QuoteInput`] to a [`QuoteResult`]: a rounded price range, a
//! line-item breakdown and per-square-foot figures for display.
//!
//! # Evaluation Order
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Base `[min, max]` rate for the project type |
//! | 2    | × quality or condition multiplier |
//! | 3    | × location multiplier |
//! | 4    | Billable area: raw area, or the small-job minimum if larger |
//! | 5    | Base subtotal: rate × billable area |
//! | 6    | Add-ons: stairs, demo, subfloor, furniture, haul-away, kitchen scope |
//! | 7    | Rush: a fraction of base plus every add-on before it |
//! | 8    | Totals to the nearest $25; per-sq-ft to the nearest $0.05 |
//!
//! Add-ons are scaled by the location multiplier only. Area-based add-ons
//! and the per-square-foot figures use the caller's raw area, never the
//! small-job minimum.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::Estimator;
//! use quote_core::{LocationTier, ProjectType, QuoteInput};
//!
//! let estimator = Estimator::default();
//!
//! let input = QuoteInput {
//!     location: LocationTier::High,
//!     ..QuoteInput::new(ProjectType::Refinish, dec!(1000))
//! };
//! let result = estimator.calculate(&input).unwrap();
//!
//! assert_eq!(result.base.min, dec!(4200));
//! assert_eq!(result.base.max, dec!(6600));
//! assert_eq!(result.totals.display, "$4,200 – $6,600");
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{format_usd_range, round_to_step, round_whole_dollars};
use crate::calculations::config::{ConfigError, EstimatorConfig};
use crate::models::{
    AddOn, AddOnKind, PriceRange, ProjectType, QuoteInput, QuoteMeta, QuoteRequest, QuoteResult,
    Totals, ValidationError,
};

/// Errors returned by the estimator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// The request broke the input contract.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The configured rate tables are inconsistent.
    #[error("invalid estimator configuration: {0}")]
    Config(#[from] ConfigError),
}

/// An add-on before display rounding.
#[derive(Debug, Clone)]
struct LineItem {
    kind: AddOnKind,
    label: String,
    amount: PriceRange,
}

impl LineItem {
    fn new(
        kind: AddOnKind,
        label: impl Into<String>,
        amount: PriceRange,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            amount,
        }
    }

    fn into_add_on(self) -> AddOn {
        AddOn {
            kind: self.kind,
            label: self.label,
            min: round_whole_dollars(self.amount.min),
            max: round_whole_dollars(self.amount.max),
        }
    }
}

/// Stateless calculator over an [`EstimatorConfig`].
///
/// `calculate` takes `&self` and touches no shared state, so one estimator
/// can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

/// Every amount is derived from the area, so an overflow anywhere means the
/// area is outside what `Decimal` can price.
fn out_of_range() -> EstimateError {
    ValidationError::SquareFeetOutOfRange.into()
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Validates raw form answers and prices them.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Validation`] for a missing or unknown project
    /// type or a non-positive or unpriceable area, and [`EstimateError::Config`]
    /// if the configuration is invalid.
    pub fn estimate(
        &self,
        request: &QuoteRequest,
    ) -> Result<QuoteResult, EstimateError> {
        let input = request.validate()?;
        self.calculate(&input)
    }

    /// Prices a validated input.
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::Config`] if the configuration is invalid, or
    /// [`EstimateError::Validation`] if `square_feet` is not positive or so
    /// extreme that an amount overflows.
    pub fn calculate(
        &self,
        input: &QuoteInput,
    ) -> Result<QuoteResult, EstimateError> {
        self.config.validate()?;

        if input.square_feet <= Decimal::ZERO {
            return Err(ValidationError::InvalidSquareFeet.into());
        }

        let location_mult = self.config.location_multiplier(input.location);

        // Steps 1-3
        let rate = self.adjusted_rate(input, location_mult)?;

        // Step 4
        let billable_area = self.billable_area(input);

        // Step 5
        let base = rate.checked_scale(billable_area).ok_or_else(out_of_range)?;

        // Step 6
        let mut items = self.fixed_add_ons(input, location_mult)?;

        // Step 7
        if input.rush_job {
            items.push(self.rush_surcharge(base, &items)?);
        }

        let subtotal = sum_items(base, &items)?;

        // Step 8
        let totals = subtotal
            .try_map(|v| round_to_step(v, self.config.total_rounding_step))
            .ok_or_else(out_of_range)?;
        let price_per_sq_ft = totals
            .try_map(|v| {
                round_to_step(
                    v.checked_div(input.square_feet)?,
                    self.config.per_sqft_rounding_step,
                )
            })
            .ok_or_else(out_of_range)?;

        debug!(
            project_type = %input.project_type,
            subtotal_min = %subtotal.min,
            subtotal_max = %subtotal.max,
            total_min = %totals.min,
            total_max = %totals.max,
            "quote calculated"
        );

        Ok(QuoteResult {
            project_type: input.project_type,
            square_feet: input.square_feet,
            tier: input.tier,
            location: input.location,
            totals: Totals {
                min: totals.min,
                max: totals.max,
                display: format_usd_range(totals.min, totals.max),
            },
            price_per_sq_ft,
            base: base.map(round_whole_dollars),
            add_ons: items.into_iter().map(LineItem::into_add_on).collect(),
            subtotal: subtotal.map(|v| v.normalize()),
            meta: QuoteMeta {
                small_job_minimum_sq_ft: self.config.small_job_minimum_sqft,
                assumptions: self.config.assumptions.clone(),
            },
        })
    }

    /// Base rate scaled by the tier and location multipliers.
    fn adjusted_rate(
        &self,
        input: &QuoteInput,
        location_mult: Decimal,
    ) -> Result<PriceRange, EstimateError> {
        let base_rate = self.config.base_rates.for_project(input.project_type);
        let tier_mult = self.config.tier_multiplier(input.tier);
        let rate = base_rate
            .checked_scale(tier_mult)
            .and_then(|r| r.checked_scale(location_mult))
            .ok_or_else(out_of_range)?;

        debug!(
            project_type = %input.project_type,
            tier_mult = %tier_mult,
            location_mult = %location_mult,
            rate_min = %rate.min,
            rate_max = %rate.max,
            "adjusted base rate"
        );

        Ok(rate)
    }

    /// Area used for the base subtotal only.
    fn billable_area(
        &self,
        input: &QuoteInput,
    ) -> Decimal {
        let minimum = self.config.small_job_minimum_sqft;

        if input.project_type.uses_small_job_floor() && input.square_feet < minimum {
            debug!(
                square_feet = %input.square_feet,
                minimum = %minimum,
                "small job; billing base at minimum area"
            );
            return minimum;
        }

        input.square_feet
    }

    /// Every add-on except rush, in display order.
    fn fixed_add_ons(
        &self,
        input: &QuoteInput,
        location_mult: Decimal,
    ) -> Result<Vec<LineItem>, EstimateError> {
        let rates = &self.config.add_ons;
        let local = |rate: PriceRange| rate.checked_scale(location_mult);
        let per_area = |rate: PriceRange| local(rate)?.checked_scale(input.square_feet);
        let mut items = Vec::new();

        if input.stair_count > 0 {
            let stairs = Decimal::from(input.stair_count);
            items.push(LineItem::new(
                AddOnKind::Stairs,
                format!("Stairs ({})", input.stair_count),
                local(rates.per_stair)
                    .and_then(|r| r.checked_scale(stairs))
                    .ok_or_else(out_of_range)?,
            ));
        }

        if input.needs_demo {
            items.push(LineItem::new(
                AddOnKind::Demolition,
                "Remove & dispose existing flooring",
                per_area(rates.demo_per_sqft).ok_or_else(out_of_range)?,
            ));
        }

        if input.needs_subfloor_prep {
            items.push(LineItem::new(
                AddOnKind::SubfloorPrep,
                "Subfloor prep / leveling allowance",
                per_area(rates.subfloor_per_sqft).ok_or_else(out_of_range)?,
            ));
        }

        if input.move_furniture {
            items.push(LineItem::new(
                AddOnKind::FurnitureMoving,
                "Move & reset furniture",
                local(rates.move_furniture).ok_or_else(out_of_range)?,
            ));
        }

        if input.haul_away_debris {
            items.push(LineItem::new(
                AddOnKind::HaulAway,
                "Jobsite cleanup & debris haul-away",
                local(rates.haul_away).ok_or_else(out_of_range)?,
            ));
        }

        if input.project_type == ProjectType::KitchenRemodel {
            items.push(LineItem::new(
                AddOnKind::KitchenScope,
                "Cabinets, counters, layout & trades (kitchen scope)",
                local(rates.kitchen_scope).ok_or_else(out_of_range)?,
            ));
        }

        Ok(items)
    }

    /// Rush surcharge as a fraction of everything priced so far.
    fn rush_surcharge(
        &self,
        base: PriceRange,
        prior: &[LineItem],
    ) -> Result<LineItem, EstimateError> {
        let running = sum_items(base, prior)?;
        let fraction = self.config.add_ons.rush_fraction;
        let amount = running
            .min
            .checked_mul(fraction.min)
            .zip(running.max.checked_mul(fraction.max))
            .map(|(min, max)| PriceRange::new(min, max))
            .ok_or_else(out_of_range)?;

        Ok(LineItem::new(
            AddOnKind::Rush,
            "Rush scheduling / overtime allowance",
            amount,
        ))
    }
}

fn sum_items(
    base: PriceRange,
    items: &[LineItem],
) -> Result<PriceRange, EstimateError> {
    items
        .iter()
        .try_fold(base, |acc, item| acc.checked_add(item.amount))
        .ok_or_else(out_of_range)
}
