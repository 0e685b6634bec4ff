pub mod calculations;
pub mod catalog;
pub mod models;

pub use calculations::{EstimateError, Estimator, EstimatorConfig, estimate};
pub use catalog::{CatalogError, CatalogRepository, InMemoryCatalog};
pub use models::*;
