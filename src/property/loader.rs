//! Load property listings from CSV files or JSON payloads

use super::{Property, PropertyType, RiskLevel};
use crate::error::{ResiFundError, Result};
use csv::Reader;
use log::debug;
use std::collections::HashSet;
use std::path::Path;

/// Raw CSV row matching the listings export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Id")]
    id: u32,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Type")]
    property_type: String,
    #[serde(rename = "Price")]
    price: u64,
    #[serde(rename = "ExpectedReturn")]
    expected_return: f64,
    #[serde(rename = "RiskLevel")]
    risk_level: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Image", default)]
    image: Option<String>,
}

impl CsvRow {
    fn into_property(self) -> Result<Property> {
        let property_type = PropertyType::parse(&self.property_type).ok_or_else(|| {
            ResiFundError::UnknownValue {
                field: "Type",
                value: self.property_type.clone(),
                id: self.id,
            }
        })?;

        let risk_level = RiskLevel::parse(&self.risk_level).ok_or_else(|| {
            ResiFundError::UnknownValue {
                field: "RiskLevel",
                value: self.risk_level.clone(),
                id: self.id,
            }
        })?;

        Ok(Property {
            id: self.id,
            title: self.title,
            location: self.location,
            property_type,
            price: self.price,
            expected_return: self.expected_return,
            risk_level,
            description: self.description,
            image: self.image.filter(|url| !url.trim().is_empty()),
        })
    }
}

/// Reject listings that reuse an id
pub fn ensure_unique_ids(properties: &[Property]) -> Result<()> {
    let mut seen = HashSet::with_capacity(properties.len());
    for property in properties {
        if !seen.insert(property.id) {
            return Err(ResiFundError::DuplicateId(property.id));
        }
    }
    Ok(())
}

/// Load all properties from a CSV file
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<Property>> {
    let reader = Reader::from_path(path.as_ref())?;
    let properties = read_rows(reader)?;
    debug!("Loaded {} properties from {}", properties.len(), path.as_ref().display());
    Ok(properties)
}

/// Load properties from any reader (e.g., string buffer, network stream)
pub fn load_properties_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Property>> {
    read_rows(Reader::from_reader(reader))
}

/// Load properties from a JSON array, as a listings API would return them
pub fn load_properties_json<R: std::io::Read>(reader: R) -> Result<Vec<Property>> {
    let properties: Vec<Property> = serde_json::from_reader(reader)?;
    ensure_unique_ids(&properties)?;
    debug!("Loaded {} properties from JSON", properties.len());
    Ok(properties)
}

fn read_rows<R: std::io::Read>(mut csv_reader: Reader<R>) -> Result<Vec<Property>> {
    let mut properties = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        properties.push(row.into_property()?);
    }

    ensure_unique_ids(&properties)?;
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LISTINGS_CSV: &str = "\
Id,Title,Location,Type,Price,ExpectedReturn,RiskLevel,Description,Image
10,Harbor Lofts,Waterfront,residential,1200000,7.1,low,Converted warehouse lofts,
11,Logistics Park,Airport Road,Commercial,4100000,10.4,High,Last-mile distribution units,https://example.com/park.jpg
";

    #[test]
    fn test_load_properties_from_reader() {
        let properties = load_properties_from_reader(LISTINGS_CSV.as_bytes()).unwrap();
        assert_eq!(properties.len(), 2);

        let lofts = &properties[0];
        assert_eq!(lofts.id, 10);
        assert_eq!(lofts.property_type, PropertyType::Residential);
        assert_eq!(lofts.risk_level, RiskLevel::Low);
        assert_eq!(lofts.image, None);

        let park = &properties[1];
        assert_eq!(park.price, 4_100_000);
        assert_eq!(park.image.as_deref(), Some("https://example.com/park.jpg"));
    }

    #[test]
    fn test_image_column_optional() {
        let csv = "\
Id,Title,Location,Type,Price,ExpectedReturn,RiskLevel,Description
1,Corner Shop,High Street,Commercial,900000,6.0,Medium,Ground floor retail
";
        let properties = load_properties_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(properties[0].image, None);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let csv = "\
Id,Title,Location,Type,Price,ExpectedReturn,RiskLevel,Description
5,Cold Storage,Dockside,Industrial,700000,5.5,Low,Refrigerated warehouse
";
        let err = load_properties_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ResiFundError::UnknownValue { field: "Type", id: 5, .. }
        ));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let csv = "\
Id,Title,Location,Type,Price,ExpectedReturn,RiskLevel,Description
1,A,Here,Commercial,1,1.0,Low,a
1,B,There,Residential,2,2.0,High,b
";
        let err = load_properties_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ResiFundError::DuplicateId(1)));
    }

    #[test]
    fn test_load_properties_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LISTINGS_CSV.as_bytes()).unwrap();

        let properties = load_properties(file.path()).unwrap();
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[1].title, "Logistics Park");
    }

    #[test]
    fn test_missing_file() {
        let err = load_properties("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, ResiFundError::Csv(_)));
    }

    #[test]
    fn test_load_properties_json() {
        let json = r#"[
            {"id": 7, "title": "Garden Duplex", "location": "Eastside", "type": "Residential",
             "price": 650000, "expectedReturn": 5.9, "riskLevel": "Low",
             "description": "Two units with shared garden"}
        ]"#;
        let properties = load_properties_json(json.as_bytes()).unwrap();
        assert_eq!(properties.len(), 1);
        assert_eq!(properties[0].id, 7);
        assert_eq!(properties[0].risk_level, RiskLevel::Low);
        assert_eq!(properties[0].image, None);
    }

    #[test]
    fn test_json_round_trip_of_samples() {
        let samples = crate::property::sample_properties();
        let json = serde_json::to_string(&samples).unwrap();
        let loaded = load_properties_json(json.as_bytes()).unwrap();
        assert_eq!(loaded, samples);
    }
}
