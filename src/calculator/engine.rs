//! Return projection for a single lump-sum investment

use super::rates::RiskTier;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Calculator request as built from the form fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Principal invested at month 0 (never negative)
    pub amount: f64,

    /// Investment horizon in whole years (at least 1)
    pub duration_years: u32,

    pub risk_tier: RiskTier,
}

impl CalculatorInput {
    /// Create an input, coercing out-of-range values to safe defaults
    ///
    /// Negative or non-finite amounts become 0; a zero duration becomes 1.
    pub fn new(amount: f64, duration_years: u32, risk_tier: RiskTier) -> Self {
        let amount = if amount.is_finite() && amount > 0.0 {
            amount
        } else {
            if amount != 0.0 {
                warn!("Coercing investment amount {} to 0", amount);
            }
            0.0
        };

        Self {
            amount,
            duration_years: duration_years.max(1),
            risk_tier,
        }
    }

    /// Build an input from raw form text
    ///
    /// Unparseable amount → 0, unparseable or non-positive duration → 1,
    /// unknown risk tier → medium. Never fails.
    pub fn from_raw(amount: &str, duration_years: &str, risk_tier: &str) -> Self {
        let amount = amount.trim().parse::<f64>().unwrap_or_else(|_| {
            if !amount.trim().is_empty() {
                warn!("Coercing non-numeric amount {:?} to 0", amount);
            }
            0.0
        });

        let duration_years = duration_years.trim().parse::<u32>().unwrap_or_else(|_| {
            if !duration_years.trim().is_empty() {
                warn!("Coercing duration {:?} to 1 year", duration_years);
            }
            1
        });

        Self::new(amount, duration_years, RiskTier::from_str_lenient(risk_tier))
    }

    /// Total number of compounding periods
    pub fn total_months(&self) -> f64 {
        f64::from(self.duration_years) * 12.0
    }
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self::new(0.0, 1, RiskTier::default())
    }
}

/// Projected outcome of an investment; derived, never stored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    pub investment: f64,
    pub duration_years: u32,
    pub future_value: f64,
    pub total_returns: f64,
    pub annual_rate: f64,
}

impl CalculatorResult {
    /// Total returns as a fraction of the investment (0 when nothing invested)
    pub fn return_multiple(&self) -> f64 {
        if self.investment > 0.0 {
            self.total_returns / self.investment
        } else {
            0.0
        }
    }
}

/// Project the future value of a lump sum with monthly compounding
///
/// `future_value = amount * (1 + annual_rate / 12) ^ (years * 12)`
pub fn calculate(input: &CalculatorInput) -> CalculatorResult {
    let annual_rate = input.risk_tier.annual_rate();

    // Nothing invested grows to nothing, whatever the horizon
    if input.amount == 0.0 {
        return CalculatorResult {
            investment: 0.0,
            duration_years: input.duration_years,
            future_value: 0.0,
            total_returns: 0.0,
            annual_rate,
        };
    }

    let monthly_rate = annual_rate / 12.0;
    let total_months = input.total_months();

    let mut future_value = input.amount * (1.0 + monthly_rate).powf(total_months);
    if !future_value.is_finite() {
        warn!(
            "Projection of {} over {} years overflows; clamping to f64::MAX",
            input.amount, input.duration_years
        );
        future_value = f64::MAX;
    }
    let total_returns = future_value - input.amount;

    debug!(
        "Projected {} over {} years at {} ({}): {}",
        input.amount, input.duration_years, annual_rate, input.risk_tier, future_value
    );

    CalculatorResult {
        investment: input.amount,
        duration_years: input.duration_years,
        future_value,
        total_returns,
        annual_rate,
    }
}
