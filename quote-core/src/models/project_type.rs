use serde::{Deserialize, Serialize};

/// The kind of flooring job being quoted. Selects the base-rate row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Refinish,
    NewHardwood,
    LuxuryVinyl,
    KitchenRemodel,
    Engineered,
    /// Priced per step; the square-footage field carries the step count.
    StairsOnly,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        Self::Refinish,
        Self::NewHardwood,
        Self::LuxuryVinyl,
        Self::KitchenRemodel,
        Self::Engineered,
        Self::StairsOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Refinish => "refinish",
            Self::NewHardwood => "new_hardwood",
            Self::LuxuryVinyl => "luxury_vinyl",
            Self::KitchenRemodel => "kitchen_remodel",
            Self::Engineered => "engineered",
            Self::StairsOnly => "stairs_only",
        }
    }

    /// Parses both `new_hardwood` and `new-hardwood` spellings. Matching is
    /// case-insensitive and ignores surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "refinish" => Some(Self::Refinish),
            "new_hardwood" => Some(Self::NewHardwood),
            "luxury_vinyl" => Some(Self::LuxuryVinyl),
            "kitchen_remodel" => Some(Self::KitchenRemodel),
            "engineered" => Some(Self::Engineered),
            "stairs_only" => Some(Self::StairsOnly),
            _ => None,
        }
    }

    /// Whether the 600 sq ft small-job minimum applies to the base subtotal.
    pub fn uses_small_job_floor(&self) -> bool {
        !matches!(self, Self::StairsOnly)
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
