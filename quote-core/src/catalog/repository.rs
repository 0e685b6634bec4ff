use async_trait::async_trait;
use thiserror::Error;

use crate::models::WoodProfile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Wood profile not found: {0}")]
    NotFound(String),

    #[error("Invalid wood profile: {0}")]
    InvalidProfile(String),
}

/// Read-mostly store of wood profiles shown in the visualizer.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_by_sku(&self, sku: &str) -> Result<WoodProfile, CatalogError>;
    async fn list_profiles(&self) -> Result<Vec<WoodProfile>, CatalogError>;

    /// Inserts the profile, replacing any existing one with the same SKU.
    async fn upsert_profile(&self, profile: WoodProfile) -> Result<(), CatalogError>;
}
