//! Simulation loop and supporting pieces
//!
//! - **allocator**: per-period payment waterfall
//! - **engine**: the period-by-period state machine
//! - **aggregate**: schedule to result rollup
//! - **single_debt**: one-debt projection for the detail view

pub mod aggregate;
pub mod allocator;
pub mod engine;
pub mod single_debt;

// Re-exports
pub use engine::{
    project_payoff, PayoffSimulation, PlanConfig, SimulationError, SimulationStatus, MAX_PERIODS,
};
pub use single_debt::{project_single_debt, SingleDebtProjection};
