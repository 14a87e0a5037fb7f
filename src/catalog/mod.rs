pub mod brands;
pub mod filter;
pub mod geo;
pub mod types;

pub use filter::{filter_listings, search};
pub use geo::{distance_km, find_city, City, PORTUGUESE_CITIES};
pub use types::{Condition, FilterCriteria, SearchHit};
