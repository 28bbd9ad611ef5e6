//! Repayment strategies
//!
//! A strategy decides which debt the extra budget is aimed at by sorting
//! the debts into a priority order each period. The set of strategies is a
//! closed enum so dispatch is exhaustive at compile time.
//!
//! # Critical Invariants
//!
//! 1. Sorts are stable: debts with equal keys keep their input order, which
//!    pins down who receives the extra payment on ties
//! 2. Ordering is recomputed every period because snowball and avalanche
//!    ranks shift as balances fall

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::debt::Debt;

/// How debts are prioritized for extra payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest current balance first
    Snowball,

    /// Highest annual interest rate first
    Avalanche,

    /// Caller-assigned priority rank, ascending
    Custom,

    /// Input order, minimums only in spirit: the extra still goes to the
    /// first active debt, there is just no reordering
    Minimum,
}

impl Strategy {
    /// Map a strategy name to a variant
    ///
    /// Unrecognized names fall back to [`Strategy::Minimum`], the
    /// pay-minimums baseline. This is the lenient boundary for callers
    /// bridging string inputs; serde is strict about the four names.
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::Strategy;
    ///
    /// assert_eq!(Strategy::from_name("avalanche"), Strategy::Avalanche);
    /// assert_eq!(Strategy::from_name("surprise"), Strategy::Minimum);
    /// ```
    pub fn from_name(name: &str) -> Strategy {
        match name {
            "snowball" => Strategy::Snowball,
            "avalanche" => Strategy::Avalanche,
            "custom" => Strategy::Custom,
            _ => Strategy::Minimum,
        }
    }

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Snowball => "snowball",
            Strategy::Avalanche => "avalanche",
            Strategy::Custom => "custom",
            Strategy::Minimum => "minimum",
        }
    }

    /// Sort debts into this strategy's priority order
    ///
    /// Returns indices into the input slice, highest priority first.
    /// `balances` are the current working balances, parallel to `debts`;
    /// snowball ranks by those rather than the recorded balances so the
    /// order tracks the simulation as it runs.
    ///
    /// # Panics
    /// Panics if `balances` is not parallel to `debts`.
    pub fn priority_order(&self, debts: &[Debt], balances: &[Decimal]) -> Vec<usize> {
        assert_eq!(
            debts.len(),
            balances.len(),
            "balances must parallel debts"
        );

        let mut order: Vec<usize> = (0..debts.len()).collect();
        match self {
            Strategy::Snowball => {
                order.sort_by(|&a, &b| balances[a].cmp(&balances[b]));
            }
            Strategy::Avalanche => {
                order.sort_by(|&a, &b| {
                    debts[b]
                        .annual_rate_percent()
                        .cmp(&debts[a].annual_rate_percent())
                });
            }
            Strategy::Custom => {
                order.sort_by(|&a, &b| debts[a].priority().cmp(&debts[b].priority()));
            }
            Strategy::Minimum => {
                // Identity order, nothing to sort
            }
        }
        order
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
