//! Investment return calculator

mod rates;
mod engine;
mod schedule;
pub mod format;

pub use rates::{RiskTier, LOW_ANNUAL_RATE, MEDIUM_ANNUAL_RATE, HIGH_ANNUAL_RATE};
pub use engine::{calculate, CalculatorInput, CalculatorResult};
pub use schedule::{growth_schedule, GrowthRow, GrowthSchedule, MAX_SCHEDULE_YEARS};
