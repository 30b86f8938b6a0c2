//! Property listings and catalog loading

mod data;
pub mod loader;

pub use data::{Property, PropertyType, RiskLevel, sample_properties};
pub use loader::{load_properties, load_properties_from_reader, load_properties_json};
