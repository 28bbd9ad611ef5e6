//! Lump sum model
//!
//! A one-time extra contribution tied to a calendar period. Lump sums in
//! the period being simulated are added to that period's extra budget;
//! anything keyed to a period the simulation never reaches is ignored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::period::PeriodKey;

/// A one-time extra contribution
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{LumpSum, PeriodKey};
/// use rust_decimal_macros::dec;
///
/// let bonus = LumpSum::new(dec!(500), PeriodKey::new(2026, 12));
/// assert_eq!(bonus.amount(), dec!(500));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpSum {
    /// Contribution amount
    amount: Decimal,

    /// Period the contribution applies to
    period: PeriodKey,
}

impl LumpSum {
    /// Create a new lump sum
    ///
    /// # Panics
    /// Panics if amount is not positive
    pub fn new(amount: Decimal, period: PeriodKey) -> Self {
        assert!(amount > Decimal::ZERO, "amount must be positive");
        Self { amount, period }
    }

    /// Get contribution amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Get the period the contribution applies to
    pub fn period(&self) -> PeriodKey {
        self.period
    }
}

/// Sum of all contributions keyed to one period
///
/// Multiple lump sums in the same period stack; periods with no matching
/// lump sum contribute zero.
pub fn total_for_period(lump_sums: &[LumpSum], period: PeriodKey) -> Decimal {
    lump_sums
        .iter()
        .filter(|ls| ls.period == period)
        .map(|ls| ls.amount)
        .sum()
}
