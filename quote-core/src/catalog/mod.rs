mod memory;
mod repository;

pub use memory::InMemoryCatalog;
pub use repository::{CatalogError, CatalogRepository};
