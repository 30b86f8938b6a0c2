//! ResiFund - Investment projections and property search for the ResiFund platform
//!
//! This library provides:
//! - Return projections for a principal compounded monthly at a risk-tier rate
//! - Year-by-year growth schedules for the performance chart
//! - Property catalog loading (built-in samples, CSV, JSON)
//! - Search/type/location/price filtering over the catalog
//! - Contact form field validation
//! - Mock portfolio figures for the dashboard
//!
//! Nothing here renders, stores, or talks to the network; callers own presentation.

pub mod error;
pub mod property;
pub mod calculator;
pub mod search;
pub mod catalog;
pub mod validation;
pub mod portfolio;

// Re-export commonly used types
pub use error::{ResiFundError, Result};
pub use property::{Property, PropertyType, RiskLevel};
pub use calculator::{calculate, CalculatorInput, CalculatorResult, RiskTier};
pub use search::{filter_properties, FilterSpec, PriceRange};
pub use catalog::PropertyCatalog;
