use std::io::Read;

use quote_core::{CatalogError, CatalogRepository, WoodProfile};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading wood profile data.
#[derive(Debug, Error)]
pub enum WoodProfileLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Duplicate SKU '{sku}' on row {row}")]
    DuplicateSku { sku: String, row: usize },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<csv::Error> for WoodProfileLoaderError {
    fn from(err: csv::Error) -> Self {
        WoodProfileLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the wood profiles CSV file.
///
/// - `sku`: Catalog identifier
/// - `name`: Display name
/// - `price_per_sqft`: Material price per square foot (empty if unpriced)
/// - `glb_url`, `usdz_url`, `poster_url`: Visualizer assets (empty if absent)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WoodProfileRecord {
    pub sku: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub price_per_sqft: Option<Decimal>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub glb_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub usdz_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub poster_url: Option<String>,
}

impl From<WoodProfileRecord> for WoodProfile {
    fn from(record: WoodProfileRecord) -> Self {
        WoodProfile {
            sku: record.sku,
            name: record.name,
            price_per_sqft: record.price_per_sqft,
            glb_url: record.glb_url,
            usdz_url: record.usdz_url,
            poster_url: record.poster_url,
        }
    }
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Loader for wood profile data from CSV files.
///
/// Reads CSV data and stores it via the [`CatalogRepository`] trait, so it
/// works with any catalog backend.
pub struct WoodProfileLoader;

impl WoodProfileLoader {
    /// Parse wood profile records from a CSV reader.
    ///
    /// Rows are returned in file order. A SKU appearing twice is an error,
    /// reported with the 1-based row number of the second occurrence.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<WoodProfileRecord>, WoodProfileLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records: Vec<WoodProfileRecord> = Vec::new();

        for (idx, result) in csv_reader.deserialize().enumerate() {
            let record: WoodProfileRecord = result?;
            if records.iter().any(|r| r.sku == record.sku) {
                return Err(WoodProfileLoaderError::DuplicateSku {
                    sku: record.sku,
                    row: idx + 1,
                });
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Store profile records in the catalog.
    ///
    /// Existing profiles with the same SKU are replaced, so running the same
    /// load twice leaves the catalog unchanged.
    pub async fn load<R: CatalogRepository + ?Sized>(
        repo: &R,
        records: &[WoodProfileRecord],
    ) -> Result<usize, WoodProfileLoaderError> {
        let mut stored = 0;

        for record in records {
            repo.upsert_profile(record.clone().into()).await?;
            stored += 1;
        }

        debug!(stored, "wood profiles loaded");
        Ok(stored)
    }
}
