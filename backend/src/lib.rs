//! Debt Payoff Core - Rust Engine
//!
//! Deterministic debt payoff simulation: given a portfolio of debts, an
//! extra-payment budget and a repayment strategy, projects the month by
//! month amortization schedule, the payoff date and the interest total.
//!
//! # Architecture
//!
//! - **core**: calendar periods and the explicit timeline
//! - **models**: domain types (Debt, LumpSum, projection results)
//! - **strategy**: priority ordering (snowball, avalanche, custom, minimum)
//! - **amortization**: per-period interest accrual and principal reduction
//! - **simulation**: payment allocation, the period loop, aggregation
//! - **compare**: snowball vs avalanche recommendation
//!
//! # Critical Invariants
//!
//! 1. All money values are `rust_decimal::Decimal`, never binary floats
//! 2. Strategy sorts are stable, so ties resolve to input order
//! 3. The engine is pure: no clock, no I/O, callers' records are never
//!    mutated, and identical inputs produce identical results

// Module declarations
pub mod amortization;
pub mod compare;
pub mod core;
pub mod models;
pub mod simulation;
pub mod strategy;

// Re-exports for convenience
pub use amortization::{amortize_period, period_rate, BALANCE_EPSILON};
pub use compare::{compare_strategies, StrategyComparison, AVALANCHE_SAVINGS_THRESHOLD};
pub use self::core::period::{PaymentInterval, PeriodError, PeriodKey, PeriodTimeline};
pub use models::{
    debt::{Debt, DebtError},
    lump_sum::{total_for_period, LumpSum},
    projection::{DebtPayment, DebtSummary, MonthlyProjection, ProjectionResult},
};
pub use simulation::{
    engine::{
        project_payoff, PayoffSimulation, PlanConfig, SimulationError, SimulationStatus,
        MAX_PERIODS,
    },
    single_debt::{project_single_debt, SingleDebtProjection},
};
pub use strategy::Strategy;
