//! Property catalog for repeated searches
//!
//! Loads the listing set once, then answers any number of searches against it
//! without re-reading the source. The set is read-only after load.

use crate::error::Result;
use crate::property::{self, loader, Property};
use crate::search::{filter_properties, FilterSpec};
use std::path::Path;

/// Pre-loaded, immutable listing set
///
/// # Example
/// ```
/// use resifund::{FilterSpec, PropertyCatalog};
///
/// let catalog = PropertyCatalog::sample();
/// let offices = catalog.search(&FilterSpec::default().with_text("office"));
/// assert_eq!(offices.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    /// Create a catalog from already-loaded listings, rejecting duplicate ids
    pub fn new(properties: Vec<Property>) -> Result<Self> {
        loader::ensure_unique_ids(&properties)?;
        Ok(Self { properties })
    }

    /// Catalog of the built-in sample listings
    pub fn sample() -> Self {
        Self {
            properties: property::sample_properties(),
        }
    }

    /// Create catalog by loading a CSV file
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            properties: loader::load_properties(path)?,
        })
    }

    /// Create catalog from a JSON listings payload
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        Ok(Self {
            properties: loader::load_properties_json(reader)?,
        })
    }

    /// Properties matching every criterion, in catalog order
    pub fn search(&self, spec: &FilterSpec) -> Vec<&Property> {
        filter_properties(&self.properties, spec)
    }

    /// Look up a listing by id
    pub fn get(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// All listings in catalog order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for PropertyCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResiFundError;
    use crate::property::{PropertyType, RiskLevel};

    #[test]
    fn test_sample_catalog_searches() {
        let catalog = PropertyCatalog::sample();
        assert_eq!(catalog.len(), 4);

        let everything = catalog.search(&FilterSpec::default());
        assert_eq!(everything.len(), 4);

        let open_ended = catalog.search(&FilterSpec::default().with_price_range("4000000-"));
        assert_eq!(open_ended.len(), 1);
        assert_eq!(open_ended[0].title, "Commercial Office Building");

        // Catalog is untouched by searching
        assert_eq!(catalog.properties(), property::sample_properties().as_slice());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = PropertyCatalog::sample();
        assert_eq!(catalog.get(3).map(|p| p.title.as_str()), Some("Suburban Family Homes"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let listing = Property::new(
            1,
            "Twin",
            "Anywhere",
            PropertyType::Residential,
            100,
            1.0,
            RiskLevel::Low,
            "Same id twice",
        );
        let err = PropertyCatalog::new(vec![listing.clone(), listing]).unwrap_err();
        assert!(matches!(err, ResiFundError::DuplicateId(1)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = PropertyCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.search(&FilterSpec::default()).is_empty());
    }
}
