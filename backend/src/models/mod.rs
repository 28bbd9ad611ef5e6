//! Domain models for the debt payoff planner

pub mod debt;
pub mod lump_sum;
pub mod projection;

// Re-exports
pub use debt::{Debt, DebtError};
pub use lump_sum::{total_for_period, LumpSum};
pub use projection::{DebtPayment, DebtSummary, MonthlyProjection, ProjectionResult};
