//! Risk tiers and their fixed annual return assumptions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual return assumed for the low risk tier
pub const LOW_ANNUAL_RATE: f64 = 0.06;

/// Annual return assumed for the medium risk tier
pub const MEDIUM_ANNUAL_RATE: f64 = 0.08;

/// Annual return assumed for the high risk tier
pub const HIGH_ANNUAL_RATE: f64 = 0.12;

/// Risk appetite selected in the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    /// Lenient lookup used for form input: anything unrecognized is Medium
    pub fn from_str_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => RiskTier::Low,
            "medium" => RiskTier::Medium,
            "high" => RiskTier::High,
            _ => RiskTier::default(),
        }
    }

    /// Nominal annual rate for this tier
    pub fn annual_rate(&self) -> f64 {
        match self {
            RiskTier::Low => LOW_ANNUAL_RATE,
            RiskTier::Medium => MEDIUM_ANNUAL_RATE,
            RiskTier::High => HIGH_ANNUAL_RATE,
        }
    }

    /// Monthly rate: annual / 12 (nominal, not effective)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate() / 12.0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
