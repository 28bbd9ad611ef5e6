//! Projection result types
//!
//! The output side of a simulation run: one payment record per debt per
//! period, rolled up into per-period snapshots and an aggregate result.
//! All of these are plain values created fresh by each run and never
//! mutated after they are returned.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::period::PeriodKey;
use crate::strategy::Strategy;

/// One debt's payment for one simulated period
///
/// `payment` is the cash actually consumed, so
/// `payment == principal + interest` holds exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayment {
    /// Debt this payment applies to
    pub debt_id: String,

    /// Effective cash applied this period
    pub payment: Decimal,

    /// Portion of the payment that reduced the balance
    ///
    /// Negative when the payment did not cover the period's interest.
    pub principal: Decimal,

    /// Interest accrued this period
    pub interest: Decimal,

    /// Balance after this payment (never negative)
    pub remaining_balance: Decimal,
}

/// All payments of one simulated period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// Period these payments fall in
    pub period: PeriodKey,

    /// Per-debt payments in the priority order of this period
    pub payments: Vec<DebtPayment>,

    /// Sum of all payments this period
    pub total_payment: Decimal,

    /// Sum of all interest accrued this period
    pub total_interest: Decimal,

    /// Sum of all principal reduction this period
    pub total_principal: Decimal,
}

impl MonthlyProjection {
    /// Roll a period's payments up into a snapshot
    pub fn from_payments(period: PeriodKey, payments: Vec<DebtPayment>) -> Self {
        let total_payment = payments.iter().map(|p| p.payment).sum();
        let total_interest = payments.iter().map(|p| p.interest).sum();
        let total_principal = payments.iter().map(|p| p.principal).sum();
        Self {
            period,
            payments,
            total_payment,
            total_interest,
            total_principal,
        }
    }
}

/// Per-debt rollup across a whole schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    /// Debt this summary describes
    pub debt_id: String,

    /// Balance at the start of the simulation
    pub starting_balance: Decimal,

    /// Net principal repaid over the schedule
    pub principal_paid: Decimal,

    /// Interest paid over the schedule
    pub interest_paid: Decimal,

    /// Period the balance reached zero, if it did
    pub payoff_period: Option<PeriodKey>,

    /// Fraction of the original amount repaid by the end of the schedule
    pub fraction_paid: Decimal,
}

/// Aggregate outcome of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Strategy the run was ordered by
    pub strategy: Strategy,

    /// Per-period schedule, oldest first
    pub projections: Vec<MonthlyProjection>,

    /// Total interest across the schedule, rounded to 2 decimal places
    pub total_interest_paid: Decimal,

    /// Period the last debt cleared; None when the period cap was hit first
    pub debt_free_date: Option<PeriodKey>,

    /// Calendar months covered by the schedule
    pub months_to_payoff: u32,

    /// Per-debt rollups, in input order
    pub debt_summaries: Vec<DebtSummary>,

    /// Ids of debts whose minimum payment never covered their interest
    pub non_amortizing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_payments_sums_totals() {
        let payments = vec![
            DebtPayment {
                debt_id: "a".to_string(),
                payment: dec!(150),
                principal: dec!(130),
                interest: dec!(20),
                remaining_balance: dec!(870),
            },
            DebtPayment {
                debt_id: "b".to_string(),
                payment: dec!(50),
                principal: dec!(45),
                interest: dec!(5),
                remaining_balance: dec!(455),
            },
        ];

        let projection = MonthlyProjection::from_payments(PeriodKey::new(2026, 4), payments);
        assert_eq!(projection.total_payment, dec!(200));
        assert_eq!(projection.total_interest, dec!(25));
        assert_eq!(projection.total_principal, dec!(175));
        assert_eq!(projection.payments.len(), 2);
    }
}
