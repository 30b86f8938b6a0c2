//! Property search and filtering

use super::price::PriceRange;
use crate::property::{Property, PropertyType};
use log::debug;
use serde::{Deserialize, Serialize};

/// Raw filter criteria as taken from the search form
///
/// Every field accepts `"all"` (or empty) to disable that criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    /// Free-text search over title and description; surrounding whitespace is ignored
    pub text: String,

    /// "all", "Residential" or "Commercial" (any case)
    #[serde(rename = "type")]
    pub property_type: String,

    /// "all" or a location substring (any case)
    pub location: String,

    /// "all", "min-max" or "min-"
    pub price_range: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            property_type: "all".to_string(),
            location: "all".to_string(),
            price_range: "all".to_string(),
        }
    }
}

impl FilterSpec {
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_type(mut self, property_type: &str) -> Self {
        self.property_type = property_type.to_string();
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_price_range(mut self, price_range: &str) -> Self {
        self.price_range = price_range.to_string();
        self
    }

    /// Normalise the criteria once per search
    pub fn compile(&self) -> PropertyFilter {
        let text = self.text.trim().to_lowercase();

        let property_type = if is_wildcard(&self.property_type) {
            TypeCriterion::Any
        } else {
            match PropertyType::parse(&self.property_type) {
                Some(t) => TypeCriterion::Only(t),
                None => TypeCriterion::Nothing,
            }
        };

        let location = if is_wildcard(&self.location) {
            None
        } else {
            Some(self.location.trim().to_lowercase())
        };

        PropertyFilter {
            text: (!text.is_empty()).then_some(text),
            property_type,
            location,
            price_range: PriceRange::parse(&self.price_range),
        }
    }
}

fn is_wildcard(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeCriterion {
    Any,
    Only(PropertyType),
    /// Unrecognized type selected
    Nothing,
}

/// Compiled form of a [`FilterSpec`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    text: Option<String>,
    property_type: TypeCriterion,
    location: Option<String>,
    price_range: Option<PriceRange>,
}

impl PropertyFilter {
    /// Check a property against all four criteria
    pub fn matches(&self, property: &Property) -> bool {
        self.matches_text(property)
            && self.matches_type(property)
            && self.matches_location(property)
            && self.matches_price(property)
    }

    fn matches_text(&self, property: &Property) -> bool {
        match &self.text {
            None => true,
            Some(term) => {
                property.title.to_lowercase().contains(term.as_str())
                    || property.description.to_lowercase().contains(term.as_str())
            }
        }
    }

    fn matches_type(&self, property: &Property) -> bool {
        match self.property_type {
            TypeCriterion::Any => true,
            TypeCriterion::Only(t) => property.property_type == t,
            TypeCriterion::Nothing => false,
        }
    }

    fn matches_location(&self, property: &Property) -> bool {
        match &self.location {
            None => true,
            Some(needle) => property.location.to_lowercase().contains(needle.as_str()),
        }
    }

    fn matches_price(&self, property: &Property) -> bool {
        self.price_range.map_or(true, |range| range.contains(property.price))
    }
}

/// Return the properties satisfying every criterion, in their original order
pub fn filter_properties<'a>(properties: &'a [Property], spec: &FilterSpec) -> Vec<&'a Property> {
    let filter = spec.compile();
    let matched: Vec<&Property> = properties.iter().filter(|p| filter.matches(p)).collect();

    debug!(
        "Filter {:?} matched {} of {} properties",
        spec,
        matched.len(),
        properties.len()
    );

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::sample_properties;

    fn ids(matched: &[&Property]) -> Vec<u32> {
        matched.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_returns_everything_in_order() {
        let properties = sample_properties();
        let matched = filter_properties(&properties, &FilterSpec::default());
        assert_eq!(ids(&matched), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_text_search() {
        let properties = sample_properties();

        let matched = filter_properties(&properties, &FilterSpec::default().with_text("office"));
        assert_eq!(ids(&matched), vec![2]);
        assert_eq!(matched[0].title, "Commercial Office Building");

        // Description-only hit, any case
        let matched = filter_properties(&properties, &FilterSpec::default().with_text("TENANTS"));
        assert_eq!(ids(&matched), vec![2, 4]);

        let matched = filter_properties(&properties, &FilterSpec::default().with_text("castle"));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_blank_search_text_matches_everything() {
        let properties = sample_properties();
        let matched = filter_properties(&properties, &FilterSpec::default().with_text("   "));
        assert_eq!(ids(&matched), vec![1, 2, 3, 4]);

        let matched = filter_properties(&properties, &FilterSpec::default().with_text("  office "));
        assert_eq!(ids(&matched), vec![2]);
    }

    #[test]
    fn test_type_filter() {
        let properties = sample_properties();

        let matched = filter_properties(&properties, &FilterSpec::default().with_type("commercial"));
        assert_eq!(ids(&matched), vec![2, 4]);

        let matched = filter_properties(&properties, &FilterSpec::default().with_type("Residential"));
        assert_eq!(ids(&matched), vec![1, 3]);

        let matched = filter_properties(&properties, &FilterSpec::default().with_type("industrial"));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_location_filter() {
        let properties = sample_properties();

        let matched = filter_properties(&properties, &FilterSpec::default().with_location("district"));
        assert_eq!(ids(&matched), vec![1, 2]);

        let matched = filter_properties(&properties, &FilterSpec::default().with_location("Main"));
        assert_eq!(ids(&matched), vec![4]);
    }

    #[test]
    fn test_price_ranges() {
        let properties = sample_properties();

        let matched = filter_properties(
            &properties,
            &FilterSpec::default().with_price_range("2000000-3000000"),
        );
        assert_eq!(ids(&matched), vec![1]);
        assert_eq!(matched[0].price, 2_500_000);

        let matched = filter_properties(&properties, &FilterSpec::default().with_price_range("4000000-"));
        assert_eq!(ids(&matched), vec![2]);
        assert_eq!(matched[0].price, 5_000_000);
    }

    #[test]
    fn test_criteria_combine() {
        let properties = sample_properties();
        let spec = FilterSpec::default()
            .with_type("residential")
            .with_price_range("0-2000000");
        assert_eq!(ids(&filter_properties(&properties, &spec)), vec![3]);

        let spec = FilterSpec::default()
            .with_text("modern")
            .with_location("downtown");
        assert_eq!(ids(&filter_properties(&properties, &spec)), vec![1]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let properties = sample_properties();
        let spec = FilterSpec::default().with_type("Commercial").with_text("center");

        let once: Vec<Property> = filter_properties(&properties, &spec)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<Property> = filter_properties(&once, &spec).into_iter().cloned().collect();

        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
    }

    #[test]
    fn test_empty_list() {
        assert!(filter_properties(&[], &FilterSpec::default()).is_empty());
    }

    #[test]
    fn test_spec_from_partial_json() {
        let spec: FilterSpec = serde_json::from_str(r#"{"text": "office"}"#).unwrap();
        assert_eq!(spec, FilterSpec::default().with_text("office"));
    }
}
