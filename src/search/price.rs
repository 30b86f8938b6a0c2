//! Price range selector values ("all", "min-max", "min-")

use log::warn;
use serde::{Deserialize, Serialize};

/// Inclusive price bounds parsed from a selector value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    /// None = no upper bound
    pub max: Option<u64>,
}

impl PriceRange {
    /// Parse a selector value; None means "all"
    ///
    /// An unparseable minimum is treated as 0 and an unparseable, empty, or
    /// zero maximum as unbounded.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return None;
        }

        let (min_part, max_part) = match value.split_once('-') {
            Some((min, max)) => (min.trim(), max.trim()),
            None => (value, ""),
        };

        let min = if min_part.is_empty() {
            0
        } else {
            min_part.parse::<u64>().unwrap_or_else(|_| {
                warn!("Ignoring unparseable price minimum {:?}", min_part);
                0
            })
        };

        let max = if max_part.is_empty() {
            None
        } else {
            match max_part.parse::<u64>() {
                Ok(0) => None,
                Ok(max) => Some(max),
                Err(_) => {
                    warn!("Ignoring unparseable price maximum {:?}", max_part);
                    None
                }
            }
        };

        Some(Self { min, max })
    }

    /// Check whether a price falls within the bounds
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}
