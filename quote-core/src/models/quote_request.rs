use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::{Condition, LocationTier, ProjectType, Quality, TierSelection};

/// Contract violations in a quote request. These indicate a caller bug and
/// are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("projectType required")]
    MissingProjectType,

    #[error("unknown projectType: {0}")]
    UnknownProjectType(String),

    #[error("squareFeet must be positive")]
    InvalidSquareFeet,

    /// Positive, but too large or too small for the amounts to be computed.
    #[error("squareFeet out of range")]
    SquareFeetOutOfRange,
}

/// Raw wizard answers, as posted by the form or read from a CSV row.
///
/// Every field is optional here; [`QuoteRequest::validate`] decides which
/// omissions are errors and which fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub project_type: Option<String>,
    pub square_feet: Option<Decimal>,
    pub quality: Option<String>,
    pub condition: Option<String>,
    pub location_cost_tier: Option<String>,
    pub has_stairs: bool,
    pub stair_count: Option<u32>,
    pub needs_demo: bool,
    pub needs_subfloor_prep: bool,
    pub move_furniture: bool,
    pub haul_away_debris: bool,
    pub rush_job: bool,
}

/// A fully-formed, validated project description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteInput {
    pub project_type: ProjectType,
    /// Area in square feet, or the step count for [`ProjectType::StairsOnly`].
    pub square_feet: Decimal,
    pub tier: TierSelection,
    pub location: LocationTier,
    /// Zero unless the request had stairs.
    pub stair_count: u32,
    pub needs_demo: bool,
    pub needs_subfloor_prep: bool,
    pub move_furniture: bool,
    pub haul_away_debris: bool,
    pub rush_job: bool,
}

impl QuoteInput {
    /// A minimal input with every option at its default.
    pub fn new(
        project_type: ProjectType,
        square_feet: Decimal,
    ) -> Self {
        Self {
            project_type,
            square_feet,
            tier: TierSelection::default(),
            location: LocationTier::default(),
            stair_count: 0,
            needs_demo: false,
            needs_subfloor_prep: false,
            move_furniture: false,
            haul_away_debris: false,
            rush_job: false,
        }
    }
}

impl QuoteRequest {
    /// Checks the two required fields and resolves everything else to a
    /// concrete value.
    ///
    /// Unknown `quality`, `condition` and `locationCostTier` values are not
    /// errors: they resolve to the neutral choice and a warning is logged.
    /// When both `quality` and `condition` are present, `quality` fills the
    /// multiplier slot.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::MissingProjectType`] if `projectType` is absent or blank.
    /// * [`ValidationError::UnknownProjectType`] if it names no known project.
    /// * [`ValidationError::InvalidSquareFeet`] if `squareFeet` is absent, zero
    ///   or negative.
    pub fn validate(&self) -> Result<QuoteInput, ValidationError> {
        let raw_type = self
            .project_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingProjectType)?;

        let project_type = ProjectType::parse(raw_type)
            .ok_or_else(|| ValidationError::UnknownProjectType(raw_type.to_string()))?;

        let square_feet = self
            .square_feet
            .filter(|sqft| *sqft > Decimal::ZERO)
            .ok_or(ValidationError::InvalidSquareFeet)?;

        let stair_count = if self.has_stairs {
            self.stair_count.unwrap_or(0)
        } else {
            0
        };

        Ok(QuoteInput {
            project_type,
            square_feet,
            tier: self.resolve_tier(),
            location: self.resolve_location(),
            stair_count,
            needs_demo: self.needs_demo,
            needs_subfloor_prep: self.needs_subfloor_prep,
            move_furniture: self.move_furniture,
            haul_away_debris: self.haul_away_debris,
            rush_job: self.rush_job,
        })
    }

    fn resolve_tier(&self) -> TierSelection {
        if let Some(raw) = self.quality.as_deref() {
            if self.condition.is_some() {
                warn!(
                    quality = raw,
                    condition = ?self.condition,
                    "both quality and condition supplied; using quality"
                );
            }
            let quality = Quality::parse(raw).unwrap_or_else(|| {
                warn!(quality = raw, "unrecognized quality; using standard");
                Quality::default()
            });
            return TierSelection::Quality(quality);
        }

        if let Some(raw) = self.condition.as_deref() {
            let condition = Condition::parse(raw).unwrap_or_else(|| {
                warn!(condition = raw, "unrecognized condition; using light");
                Condition::default()
            });
            return TierSelection::Condition(condition);
        }

        TierSelection::default()
    }

    fn resolve_location(&self) -> LocationTier {
        match self.location_cost_tier.as_deref() {
            Some(raw) => LocationTier::parse(raw).unwrap_or_else(|| {
                warn!(location_cost_tier = raw, "unrecognized location tier; using medium");
                LocationTier::default()
            }),
            None => LocationTier::default(),
        }
    }
}
