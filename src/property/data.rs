//! Property data structures matching the listing format

use serde::{Deserialize, Serialize};

/// Kind of real estate offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Residential,
    Commercial,
}

impl PropertyType {
    /// Get the string representation used in listings and filter selects
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "Residential",
            PropertyType::Commercial => "Commercial",
        }
    }

    /// Case-insensitive lookup; None for anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("residential") {
            Some(PropertyType::Residential)
        } else if value.eq_ignore_ascii_case("commercial") {
            Some(PropertyType::Commercial)
        } else {
            None
        }
    }
}

/// Risk badge shown on a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Case-insensitive lookup; None for anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }
}

/// A single investable property listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique listing identifier
    pub id: u32,

    pub title: String,

    /// Free-text area name (e.g. "Downtown District")
    pub location: String,

    #[serde(rename = "type")]
    pub property_type: PropertyType,

    /// Whole-dollar investment price
    pub price: u64,

    /// Expected annual return in percent (8.5 = 8.5%)
    pub expected_return: f64,

    pub risk_level: RiskLevel,

    pub description: String,

    /// Listing photo URL (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Property {
    /// Create a new property with required fields
    pub fn new(
        id: u32,
        title: &str,
        location: &str,
        property_type: PropertyType,
        price: u64,
        expected_return: f64,
        risk_level: RiskLevel,
        description: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            location: location.to_string(),
            property_type,
            price,
            expected_return,
            risk_level,
            description: description.to_string(),
            image: None,
        }
    }

    /// Attach a listing photo
    pub fn with_image(mut self, url: &str) -> Self {
        self.image = Some(url.to_string());
        self
    }
}

/// The four listings shown on the landing page, in display order
pub fn sample_properties() -> Vec<Property> {
    vec![
        Property::new(
            1,
            "Modern Downtown Apartment Complex",
            "Downtown District",
            PropertyType::Residential,
            2_500_000,
            8.5,
            RiskLevel::Medium,
            "Prime location apartment complex with 24 units",
        )
        .with_image("https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=400"),
        Property::new(
            2,
            "Commercial Office Building",
            "Business District",
            PropertyType::Commercial,
            5_000_000,
            12.0,
            RiskLevel::High,
            "Modern office building with long-term tenants",
        )
        .with_image("https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=400"),
        Property::new(
            3,
            "Suburban Family Homes",
            "Greenwood Suburbs",
            PropertyType::Residential,
            1_800_000,
            6.5,
            RiskLevel::Low,
            "Collection of 8 family homes in growing suburb",
        )
        .with_image("https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=400"),
        Property::new(
            4,
            "Retail Shopping Center",
            "Main Street",
            PropertyType::Commercial,
            3_200_000,
            9.2,
            RiskLevel::Medium,
            "Established shopping center with diverse tenants",
        )
        .with_image("https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=400"),
    ]
}
