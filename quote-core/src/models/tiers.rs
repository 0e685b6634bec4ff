use serde::{Deserialize, Serialize};

/// Material and finish grade chosen in the wizard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Economy,
    #[default]
    Standard,
    Premium,
}

impl Quality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Standard => "standard",
            Self::Premium => "premium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Some(Self::Economy),
            "standard" => Some(Self::Standard),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }
}

/// Wear on the existing floor, used by refinishing flows in place of
/// [`Quality`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Light,
    Average,
    Heavy,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Average => "average",
            Self::Heavy => "heavy",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "average" => Some(Self::Average),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

/// Regional labor and material cost band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationTier {
    Low,
    #[default]
    Medium,
    High,
}

impl LocationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// The single multiplier slot applied to the base rate.
///
/// Quality and condition are alternative ways of filling the same slot and
/// are never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "axis", content = "value", rename_all = "snake_case")]
pub enum TierSelection {
    Quality(Quality),
    Condition(Condition),
}

impl Default for TierSelection {
    fn default() -> Self {
        Self::Quality(Quality::default())
    }
}
