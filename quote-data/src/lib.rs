pub mod batch;
pub mod config;
pub mod logging;
pub mod profile_loader;
pub mod quote_loader;
pub mod report;

pub use batch::{BatchRow, estimate_batch};
pub use config::{ConfigLoadError, config_from_str, load_config, load_or_default};
pub use profile_loader::{WoodProfileLoader, WoodProfileLoaderError, WoodProfileRecord};
pub use quote_loader::QuoteCsvError;
