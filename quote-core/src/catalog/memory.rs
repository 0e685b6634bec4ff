use std::collections::BTreeMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::debug;

use super::repository::{CatalogError, CatalogRepository};
use crate::models::WoodProfile;

/// Catalog held in process memory, keyed by SKU.
///
/// Listing returns profiles in SKU order.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    profiles: RwLock<BTreeMap<String, WoodProfile>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_profile(profile: &WoodProfile) -> Result<(), CatalogError> {
    if profile.sku.trim().is_empty() {
        return Err(CatalogError::InvalidProfile("sku is empty".to_string()));
    }
    if profile.name.trim().is_empty() {
        return Err(CatalogError::InvalidProfile(format!(
            "name is empty for sku '{}'",
            profile.sku
        )));
    }
    if let Some(price) = profile.price_per_sqft.filter(|p| *p < Decimal::ZERO) {
        return Err(CatalogError::InvalidProfile(format!(
            "negative price {price} for sku '{}'",
            profile.sku
        )));
    }
    Ok(())
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn get_by_sku(
        &self,
        sku: &str,
    ) -> Result<WoodProfile, CatalogError> {
        self.profiles
            .read()
            .await
            .get(sku.trim())
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(sku.to_string()))
    }

    async fn list_profiles(&self) -> Result<Vec<WoodProfile>, CatalogError> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn upsert_profile(
        &self,
        mut profile: WoodProfile,
    ) -> Result<(), CatalogError> {
        check_profile(&profile)?;
        profile.sku = profile.sku.trim().to_string();

        let replaced = self
            .profiles
            .write()
            .await
            .insert(profile.sku.clone(), profile)
            .is_some();
        debug!(replaced, "wood profile stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn profile(
        sku: &str,
        price: Option<Decimal>,
    ) -> WoodProfile {
        WoodProfile {
            sku: sku.to_string(),
            name: format!("Profile {sku}"),
            price_per_sqft: price,
            glb_url: Some(format!("https://cdn.example.com/{sku}.glb")),
            usdz_url: None,
            poster_url: None,
        }
    }

    #[tokio::test]
    async fn get_by_sku_returns_stored_profile() {
        let catalog = InMemoryCatalog::new();
        catalog
            .upsert_profile(profile("OAK-01", Some(dec!(6.25))))
            .await
            .unwrap();

        let found = catalog.get_by_sku("OAK-01").await.unwrap();

        assert_eq!(found, profile("OAK-01", Some(dec!(6.25))));
    }

    #[tokio::test]
    async fn get_by_sku_reports_missing_sku() {
        let catalog = InMemoryCatalog::new();

        let result = catalog.get_by_sku("NOPE").await;

        assert_eq!(result, Err(CatalogError::NotFound("NOPE".to_string())));
    }

    #[tokio::test]
    async fn upsert_replaces_existing_sku() {
        let catalog = InMemoryCatalog::new();
        catalog
            .upsert_profile(profile("OAK-01", Some(dec!(6.25))))
            .await
            .unwrap();
        catalog
            .upsert_profile(profile("OAK-01", Some(dec!(7.00))))
            .await
            .unwrap();

        let all = catalog.list_profiles().await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].price_per_sqft, Some(dec!(7.00)));
    }

    #[tokio::test]
    async fn list_is_sorted_by_sku() {
        let catalog = InMemoryCatalog::new();
        for sku in ["WAL-02", "ASH-09", "OAK-01"] {
            catalog.upsert_profile(profile(sku, None)).await.unwrap();
        }

        let skus: Vec<_> = catalog
            .list_profiles()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.sku)
            .collect();

        assert_eq!(skus, vec!["ASH-09", "OAK-01", "WAL-02"]);
    }

    #[tokio::test]
    async fn upsert_rejects_blank_sku() {
        let catalog = InMemoryCatalog::new();

        let result = catalog.upsert_profile(profile("  ", None)).await;

        assert_eq!(
            result,
            Err(CatalogError::InvalidProfile("sku is empty".to_string()))
        );
    }

    #[tokio::test]
    async fn upsert_rejects_negative_price() {
        let catalog = InMemoryCatalog::new();

        let result = catalog
            .upsert_profile(profile("OAK-01", Some(dec!(-1))))
            .await;

        assert!(matches!(result, Err(CatalogError::InvalidProfile(_))));
    }

    #[tokio::test]
    async fn sku_lookup_trims_whitespace() {
        let catalog = InMemoryCatalog::new();
        catalog
            .upsert_profile(profile(" OAK-01 ", None))
            .await
            .unwrap();

        assert!(catalog.get_by_sku("OAK-01").await.is_ok());
        assert!(catalog.get_by_sku(" OAK-01").await.is_ok());
    }
}
