//! Year-by-year growth schedule for the performance chart

use super::engine::CalculatorInput;
use log::warn;
use serde::{Deserialize, Serialize};

/// A single row of the growth schedule for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRow {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Value at the start of the year
    pub opening_value: f64,

    /// Interest earned during the year (twelve monthly credits)
    pub interest: f64,

    /// Value at the end of the year
    pub closing_value: f64,

    /// Closing value less the original investment
    pub cumulative_returns: f64,
}

/// Complete growth schedule for an investment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthSchedule {
    pub input: CalculatorInput,
    pub rows: Vec<GrowthRow>,
}

impl GrowthSchedule {
    /// Closing value of the last year (the investment itself for an empty schedule)
    pub fn final_value(&self) -> f64 {
        self.rows
            .last()
            .map(|r| r.closing_value)
            .unwrap_or(self.input.amount)
    }

    /// Sum of yearly interest
    pub fn total_interest(&self) -> f64 {
        self.rows.iter().map(|r| r.interest).sum()
    }

    /// Closing value of each year relative to the final year, in percent
    ///
    /// Used as bar heights; the last bar is always 100.
    pub fn bar_heights(&self) -> Vec<f64> {
        let final_value = self.final_value();
        if final_value <= 0.0 {
            return vec![0.0; self.rows.len()];
        }
        self.rows
            .iter()
            .map(|r| r.closing_value / final_value * 100.0)
            .collect()
    }
}

/// Longest schedule built; later years are dropped
pub const MAX_SCHEDULE_YEARS: u32 = 1_000;

/// Build the yearly schedule, compounding monthly within each year
///
/// At most [`MAX_SCHEDULE_YEARS`] rows are built, and the schedule stops
/// early at the first year whose closing value is no longer finite.
pub fn growth_schedule(input: &CalculatorInput) -> GrowthSchedule {
    let yearly_growth = (1.0 + input.risk_tier.monthly_rate()).powi(12);
    let years = input.duration_years.min(MAX_SCHEDULE_YEARS);
    if years < input.duration_years {
        warn!(
            "Growth schedule truncated to {} of {} years",
            years, input.duration_years
        );
    }

    let mut rows = Vec::new();
    let mut value = input.amount;

    for year in 1..=years {
        let opening_value = value;
        value = opening_value * yearly_growth;
        if !value.is_finite() {
            warn!("Growth schedule overflows in year {}; stopping", year);
            break;
        }

        rows.push(GrowthRow {
            year,
            opening_value,
            interest: value - opening_value,
            closing_value: value,
            cumulative_returns: value - input.amount,
        });
    }

    GrowthSchedule { input: *input, rows }
}
