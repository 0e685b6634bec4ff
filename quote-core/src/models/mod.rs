mod price_range;
mod project_type;
mod quote_request;
mod quote_result;
mod tiers;
mod wood_profile;

pub use price_range::PriceRange;
pub use project_type::ProjectType;
pub use quote_request::{QuoteInput, QuoteRequest, ValidationError};
pub use quote_result::{AddOn, AddOnKind, QuoteMeta, QuoteResult, Totals};
pub use tiers::{Condition, LocationTier, Quality, TierSelection};
pub use wood_profile::WoodProfile;
