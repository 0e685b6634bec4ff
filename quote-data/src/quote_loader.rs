//! CSV loader for batches of quote requests.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Only
//! `project_type` and `square_feet` are expected on every row; every other
//! column may be omitted from the header or left empty.
//!
//! | Column               | Type    | Notes                                       |
//! |----------------------|---------|---------------------------------------------|
//! | `project_type`       | string  | `refinish`, `new_hardwood`, `luxury_vinyl`, `kitchen_remodel`, `engineered`, `stairs_only` |
//! | `square_feet`        | decimal | Step count for `stairs_only`                |
//! | `quality`            | string  | `economy`, `standard`, `premium`            |
//! | `condition`          | string  | `light`, `average`, `heavy`                 |
//! | `location_cost_tier` | string  | `low`, `medium`, `high`                     |
//! | `stair_count`        | integer | Non-empty and > 0 implies stairs            |
//! | `needs_demo`         | bool    | `true`/`false`, `yes`/`no`, `1`/`0`          |
//! | `needs_subfloor_prep`| bool    |                                             |
//! | `move_furniture`     | bool    |                                             |
//! | `haul_away_debris`   | bool    |                                             |
//! | `rush_job`           | bool    |                                             |
//!
//! Rows are not validated here: a row with a missing project type still loads
//! and is rejected by the estimator, so one bad row never hides the others.
//!
//! ### Example
//!
//! ```csv
//! project_type,square_feet,quality,location_cost_tier,stair_count,rush_job
//! refinish,1000,standard,medium,,
//! new_hardwood,500,,,10,yes
//! ```

use quote_core::QuoteRequest;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    project_type: Option<String>,
    #[serde(default)]
    square_feet: Option<Decimal>,
    #[serde(default)]
    quality: Option<String>,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    location_cost_tier: Option<String>,
    #[serde(default)]
    stair_count: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    needs_demo: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    needs_subfloor_prep: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    move_furniture: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    haul_away_debris: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    rush_job: bool,
}

/// Accepts the spellings spreadsheets produce for checkboxes. Empty is false.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    let Some(s) = s else {
        return Ok(false);
    };
    match s.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" | "x" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "invalid flag '{other}'"
        ))),
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<CsvRow> for QuoteRequest {
    fn from(row: CsvRow) -> Self {
        QuoteRequest {
            project_type: blank_to_none(row.project_type),
            square_feet: row.square_feet,
            quality: blank_to_none(row.quality),
            condition: blank_to_none(row.condition),
            location_cost_tier: blank_to_none(row.location_cost_tier),
            has_stairs: row.stair_count.is_some_and(|n| n > 0),
            stair_count: row.stair_count,
            needs_demo: row.needs_demo,
            needs_subfloor_prep: row.needs_subfloor_prep,
            move_furniture: row.move_furniture,
            haul_away_debris: row.haul_away_debris,
            rush_job: row.rush_job,
        }
    }
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading quote request CSV data.
#[derive(Debug, thiserror::Error)]
pub enum QuoteCsvError {
    /// The underlying CSV deserialisation failed (bad structure, type
    /// mismatch, unreadable flag, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parse CSV text and return one [`QuoteRequest`] per data row, in file order.
///
/// # Errors
///
/// * [`QuoteCsvError::Parse`] – if the CSV is structurally invalid or a
///   field cannot be deserialised.
pub fn load_from_str(input: &str) -> Result<Vec<QuoteRequest>, QuoteCsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .map(|result| -> Result<QuoteRequest, QuoteCsvError> { Ok(result?.into()) })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
///
/// # Errors
///
/// [`QuoteCsvError::Io`] when the file cannot be read, or any error from
/// [`load_from_str`].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<QuoteRequest>, QuoteCsvError> {
    let contents = std::fs::read_to_string(path).map_err(|source| QuoteCsvError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
