//! Payoff simulation engine
//!
//! Drives the period-by-period loop over a whole debt portfolio:
//!
//! ```text
//! For each period p (monthly cadence):
//! 1. Gather the extra budget (monthly extra + lump sums keyed to p)
//! 2. Re-sort the active debts by the configured strategy
//! 3. Allocate payments (minimums + extra waterfall)
//! 4. Amortize each active debt for the period
//! 5. Record the period snapshot
//! 6. Stop when every balance is zero or the period cap is reached
//! ```
//!
//! The engine clones working balances out of the configured debts and
//! never mutates the caller's records. Everything here is synchronous and
//! deterministic: identical configs produce identical results.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::amortization::{amortize_period, period_rate};
use crate::core::period::{PaymentInterval, PeriodKey, PeriodTimeline};
use crate::models::debt::Debt;
use crate::models::lump_sum::{total_for_period, LumpSum};
use crate::models::projection::{DebtPayment, MonthlyProjection, ProjectionResult};
use crate::simulation::aggregate;
use crate::simulation::allocator::allocate_payments;
use crate::strategy::Strategy;

/// Hard cap on simulated periods (50 years at monthly cadence)
///
/// Plans that cannot clear within the cap stop with a partial schedule
/// and no debt-free date.
pub const MAX_PERIODS: usize = 600;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete configuration for one simulation run
///
/// # Fields
///
/// * `debts` - The portfolio, in the caller's order (ties resolve to it)
/// * `strategy` - How the extra budget is aimed
/// * `monthly_extra` - Budget on top of the minimums, every period
/// * `lump_sums` - One-time contributions keyed to calendar periods
/// * `start_period` - First simulated period; always explicit, the engine
///   has no clock of its own
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Debts to simulate, in input order
    pub debts: Vec<Debt>,

    /// Repayment strategy for the run
    pub strategy: Strategy,

    /// Extra budget applied every period on top of the minimums
    pub monthly_extra: Decimal,

    /// One-time contributions
    pub lump_sums: Vec<LumpSum>,

    /// First period of the schedule
    pub start_period: PeriodKey,
}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Plan validation error
    #[error("invalid plan: {0}")]
    InvalidPlan(String),
}

/// Where the state machine currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationStatus {
    /// At least one debt still carries a balance and the cap is not hit
    Running,

    /// Every debt reached zero
    AllDebtsCleared,

    /// The period cap was reached with balances outstanding
    CapReached,
}

// ============================================================================
// Simulation
// ============================================================================

/// The period-by-period payoff state machine
///
/// Create with [`PayoffSimulation::new`], then either call
/// [`step`](PayoffSimulation::step) per period or [`run`](PayoffSimulation::run)
/// to completion. [`project_payoff`] wraps the whole cycle for callers that
/// just want the result.
#[derive(Debug, Clone)]
pub struct PayoffSimulation {
    /// Portfolio snapshot taken from the config
    debts: Vec<Debt>,

    /// Strategy the run is ordered by
    strategy: Strategy,

    /// Extra budget per period
    monthly_extra: Decimal,

    /// One-time contributions
    lump_sums: Vec<LumpSum>,

    /// Current period, monthly cadence
    timeline: PeriodTimeline,

    /// Working balances, parallel to `debts`
    balances: Vec<Decimal>,

    /// Period snapshots accumulated so far
    schedule: Vec<MonthlyProjection>,

    /// Flags for debts whose minimum never covered their interest
    non_amortizing: Vec<bool>,

    /// Period the last balance cleared, once it has
    debt_free_date: Option<PeriodKey>,

    /// Current state machine position
    status: SimulationStatus,
}

impl PayoffSimulation {
    /// Create a simulation from a plan
    ///
    /// Validates plan structure up front and fails fast on duplicate debt
    /// ids, a negative extra budget, or non-positive lump sums. A plan with
    /// no payable debt is valid and starts already cleared.
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::{
    ///     Debt, PaymentInterval, PayoffSimulation, PeriodKey, PlanConfig, Strategy,
    /// };
    /// use rust_decimal_macros::dec;
    ///
    /// let config = PlanConfig {
    ///     debts: vec![Debt::new(
    ///         "Card".to_string(),
    ///         dec!(1200),
    ///         dec!(1200),
    ///         dec!(0),
    ///         dec!(100),
    ///         PaymentInterval::Monthly,
    ///     )],
    ///     strategy: Strategy::Snowball,
    ///     monthly_extra: dec!(0),
    ///     lump_sums: vec![],
    ///     start_period: PeriodKey::new(2026, 1),
    /// };
    ///
    /// let mut simulation = PayoffSimulation::new(config).unwrap();
    /// let result = simulation.run();
    /// assert_eq!(result.months_to_payoff, 12);
    /// ```
    pub fn new(config: PlanConfig) -> Result<Self, SimulationError> {
        Self::validate_plan(&config)?;

        let balances: Vec<Decimal> = config.debts.iter().map(|d| d.balance()).collect();
        let status = if balances.iter().any(|b| *b > Decimal::ZERO) {
            SimulationStatus::Running
        } else {
            SimulationStatus::AllDebtsCleared
        };
        let non_amortizing = vec![false; config.debts.len()];

        Ok(Self {
            debts: config.debts,
            strategy: config.strategy,
            monthly_extra: config.monthly_extra,
            lump_sums: config.lump_sums,
            timeline: PeriodTimeline::new(config.start_period, PaymentInterval::Monthly),
            balances,
            schedule: Vec::new(),
            non_amortizing,
            debt_free_date: None,
            status,
        })
    }

    /// Validate plan structure
    fn validate_plan(config: &PlanConfig) -> Result<(), SimulationError> {
        if config.monthly_extra < Decimal::ZERO {
            return Err(SimulationError::InvalidPlan(
                "monthly extra must be non-negative".to_string(),
            ));
        }

        for lump_sum in &config.lump_sums {
            if lump_sum.amount() <= Decimal::ZERO {
                return Err(SimulationError::InvalidPlan(format!(
                    "lump sum for {} must be positive",
                    lump_sum.period()
                )));
            }
        }

        // Check for duplicate debt IDs
        let mut ids = HashSet::new();
        for debt in &config.debts {
            if !ids.insert(debt.id()) {
                return Err(SimulationError::InvalidPlan(format!(
                    "duplicate debt ID: {}",
                    debt.id()
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current state machine position
    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    /// Period snapshots accumulated so far
    pub fn schedule(&self) -> &[MonthlyProjection] {
        &self.schedule
    }

    /// Working balances, parallel to the configured debts
    pub fn balances(&self) -> &[Decimal] {
        &self.balances
    }

    // ========================================================================
    // Period Loop
    // ========================================================================

    /// Simulate one period
    ///
    /// No-op once the simulation has reached a terminal status; callers can
    /// loop on the returned status without tracking it themselves.
    pub fn step(&mut self) -> SimulationStatus {
        if self.status != SimulationStatus::Running {
            return self.status;
        }

        let period = self.timeline.current_period();

        // STEP 1: EXTRA BUDGET
        let available_extra = self.monthly_extra + total_for_period(&self.lump_sums, period);

        // STEP 2: PRIORITY ORDER
        // Recomputed every period: snowball and avalanche ranks move as
        // balances fall.
        let order = self.strategy.priority_order(&self.debts, &self.balances);

        // STEP 3: PAYMENT ALLOCATION
        let payments = allocate_payments(&self.debts, &self.balances, &order, available_extra);

        // STEP 4: AMORTIZE ACTIVE DEBTS
        // Walk in priority order so the snapshot records payments the way
        // the strategy ranked them this period.
        let mut period_payments: Vec<DebtPayment> = Vec::new();
        for &idx in &order {
            if self.balances[idx] <= Decimal::ZERO {
                continue;
            }
            let debt = &self.debts[idx];
            let rate = period_rate(debt.annual_rate_percent(), debt.interval());
            let record = amortize_period(debt.id(), self.balances[idx], payments[idx], rate);

            if record.principal <= Decimal::ZERO && payments[idx] <= debt.minimum_payment() {
                self.non_amortizing[idx] = true;
            }

            self.balances[idx] = record.remaining_balance;
            period_payments.push(record);
        }

        // STEP 5: RECORD SNAPSHOT
        self.schedule
            .push(MonthlyProjection::from_payments(period, period_payments));

        // STEP 6: TERMINAL TRANSITIONS
        if self.balances.iter().all(|b| *b <= Decimal::ZERO) {
            self.status = SimulationStatus::AllDebtsCleared;
            self.debt_free_date = Some(period);
        } else if self.schedule.len() >= MAX_PERIODS {
            self.status = SimulationStatus::CapReached;
        } else {
            self.timeline.advance();
        }

        self.status
    }

    /// Run to a terminal status and aggregate the result
    pub fn run(&mut self) -> ProjectionResult {
        while self.step() == SimulationStatus::Running {}

        aggregate::build_result(
            self.strategy,
            &self.debts,
            &self.schedule,
            self.debt_free_date,
            &self.non_amortizing,
            PaymentInterval::Monthly.months_per_interval(),
        )
    }
}

/// Run a whole plan in one call
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{
///     project_payoff, Debt, PaymentInterval, PeriodKey, PlanConfig, Strategy,
/// };
/// use rust_decimal_macros::dec;
///
/// let config = PlanConfig {
///     debts: vec![Debt::new(
///         "Card".to_string(),
///         dec!(600),
///         dec!(600),
///         dec!(0),
///         dec!(100),
///         PaymentInterval::Monthly,
///     )],
///     strategy: Strategy::Avalanche,
///     monthly_extra: dec!(100),
///     lump_sums: vec![],
///     start_period: PeriodKey::new(2026, 1),
/// };
///
/// let result = project_payoff(config).unwrap();
/// assert_eq!(result.months_to_payoff, 3);
/// ```
pub fn project_payoff(config: PlanConfig) -> Result<ProjectionResult, SimulationError> {
    let mut simulation = PayoffSimulation::new(config)?;
    Ok(simulation.run())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn zero_rate_debt(name: &str, balance: Decimal, minimum: Decimal) -> Debt {
        Debt::new(
            name.to_string(),
            balance,
            balance.max(Decimal::ONE),
            Decimal::ZERO,
            minimum,
            PaymentInterval::Monthly,
        )
    }

    fn plan(debts: Vec<Debt>) -> PlanConfig {
        PlanConfig {
            debts,
            strategy: Strategy::Snowball,
            monthly_extra: Decimal::ZERO,
            lump_sums: vec![],
            start_period: PeriodKey::new(2026, 1),
        }
    }

    #[test]
    fn test_validate_rejects_duplicate_debt_ids() {
        let debt = zero_rate_debt("a", dec!(100), dec!(10));
        let twin = debt.clone();
        let result = PayoffSimulation::new(plan(vec![debt, twin]));
        assert!(matches!(
            result,
            Err(SimulationError::InvalidPlan(msg)) if msg.contains("duplicate debt ID")
        ));
    }

    #[test]
    fn test_validate_rejects_negative_extra() {
        let mut config = plan(vec![zero_rate_debt("a", dec!(100), dec!(10))]);
        config.monthly_extra = dec!(-5);
        assert!(PayoffSimulation::new(config).is_err());
    }

    #[test]
    fn test_empty_plan_starts_cleared() {
        let simulation = PayoffSimulation::new(plan(vec![])).unwrap();
        assert_eq!(simulation.status(), SimulationStatus::AllDebtsCleared);
    }

    #[test]
    fn test_step_exposes_working_balances() {
        let config = plan(vec![zero_rate_debt("a", dec!(30), dec!(10))]);
        let mut simulation = PayoffSimulation::new(config).unwrap();
        assert_eq!(simulation.balances(), [dec!(30)]);

        simulation.step();
        assert_eq!(
            simulation.balances(),
            [dec!(20)],
            "each step applies one period of principal"
        );
    }

    #[test]
    fn test_step_is_noop_after_terminal_status() {
        let config = plan(vec![zero_rate_debt("a", dec!(10), dec!(10))]);
        let mut simulation = PayoffSimulation::new(config).unwrap();

        assert_eq!(simulation.step(), SimulationStatus::AllDebtsCleared);
        let periods = simulation.schedule().len();
        assert_eq!(simulation.step(), SimulationStatus::AllDebtsCleared);
        assert_eq!(
            simulation.schedule().len(),
            periods,
            "terminal step must not extend the schedule"
        );
    }

    #[test]
    fn test_debt_free_date_is_last_period() {
        let config = plan(vec![zero_rate_debt("a", dec!(30), dec!(10))]);
        let result = project_payoff(config).unwrap();

        assert_eq!(result.months_to_payoff, 3);
        assert_eq!(result.debt_free_date, Some(PeriodKey::new(2026, 3)));
    }
}
