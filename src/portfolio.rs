//! Dashboard portfolio figures
//!
//! The dashboard shows a mock portfolio until real account data exists.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline figures for an investor's portfolio
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_investment: f64,
    pub current_value: f64,
    pub total_returns: f64,
    pub active_investments: u32,
    pub monthly_income: f64,
}

impl PortfolioSummary {
    /// Mock portfolio shown on the dashboard
    pub fn sample() -> Self {
        Self {
            total_investment: 150_000.0,
            current_value: 168_500.0,
            total_returns: 18_500.0,
            active_investments: 3,
            monthly_income: 2_100.0,
        }
    }

    /// Returns relative to the amount invested, in percent (0 when nothing invested)
    pub fn return_percentage(&self) -> f64 {
        if self.total_investment > 0.0 {
            self.total_returns / self.total_investment * 100.0
        } else {
            0.0
        }
    }

    pub fn is_gaining(&self) -> bool {
        self.return_percentage() > 0.0
    }
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self {
            total_investment: 0.0,
            current_value: 0.0,
            total_returns: 0.0,
            active_investments: 0,
            monthly_income: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Investment,
    Dividend,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Investment => "Investment",
            ActivityKind::Dividend => "Dividend",
        }
    }
}

/// One line of the "recent activity" feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub date: NaiveDate,
    pub kind: ActivityKind,
    pub property: String,
    /// Credited amount in dollars
    pub amount: f64,
}

/// Mock activity feed, newest first
pub fn recent_activity() -> Vec<Activity> {
    let entries = [
        ((2024, 1, 5), ActivityKind::Investment, "Retail Shopping Center", 800.0),
        ((2024, 1, 15), ActivityKind::Investment, "Downtown Apartment Complex", 2_100.0),
        ((2024, 1, 10), ActivityKind::Dividend, "Commercial Office Building", 1_500.0),
    ];

    let mut activity: Vec<Activity> = entries
        .iter()
        .filter_map(|&((y, m, d), kind, property, amount)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Activity {
                date,
                kind,
                property: property.to_string(),
                amount,
            })
        })
        .collect();

    activity.sort_by(|a, b| b.date.cmp(&a.date));
    activity
}
