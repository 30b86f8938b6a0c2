//! Property search: free text, type, location, and price range criteria

mod filter;
mod price;

pub use filter::{filter_properties, FilterSpec, PropertyFilter};
pub use price::PriceRange;
