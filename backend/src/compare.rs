//! Strategy comparison
//!
//! Runs the same plan under snowball and avalanche and recommends one.
//! Avalanche always minimizes interest on paper; it is only recommended
//! when the savings are large enough to outweigh the motivational value
//! of snowball's quick early payoffs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::period::PeriodKey;
use crate::models::debt::Debt;
use crate::models::lump_sum::LumpSum;
use crate::models::projection::ProjectionResult;
use crate::simulation::engine::{project_payoff, PlanConfig, SimulationError};
use crate::strategy::Strategy;

/// Interest savings avalanche must clear before it is recommended
pub const AVALANCHE_SAVINGS_THRESHOLD: Decimal = dec!(1000);

/// Side-by-side outcome of the two stock strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Full snowball run
    pub snowball: ProjectionResult,

    /// Full avalanche run
    pub avalanche: ProjectionResult,

    /// Strategy the comparison recommends
    pub recommended: Strategy,

    /// Snowball interest minus avalanche interest
    pub interest_savings: Decimal,

    /// Human-readable rationale for the recommendation
    pub reason: String,
}

/// Run snowball and avalanche on identical inputs and pick one
///
/// Deterministic: identical inputs always produce the same recommendation.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{compare_strategies, Debt, PaymentInterval, PeriodKey, Strategy};
/// use rust_decimal_macros::dec;
///
/// let debts = vec![Debt::new(
///     "Card".to_string(),
///     dec!(1000),
///     dec!(1000),
///     dec!(12),
///     dec!(50),
///     PaymentInterval::Monthly,
/// )];
///
/// let comparison =
///     compare_strategies(&debts, dec!(50), &[], PeriodKey::new(2026, 1)).unwrap();
/// assert_eq!(comparison.recommended, Strategy::Snowball);
/// ```
pub fn compare_strategies(
    debts: &[Debt],
    monthly_extra: Decimal,
    lump_sums: &[LumpSum],
    start_period: PeriodKey,
) -> Result<StrategyComparison, SimulationError> {
    let run = |strategy: Strategy| {
        project_payoff(PlanConfig {
            debts: debts.to_vec(),
            strategy,
            monthly_extra,
            lump_sums: lump_sums.to_vec(),
            start_period,
        })
    };

    let snowball = run(Strategy::Snowball)?;
    let avalanche = run(Strategy::Avalanche)?;

    let interest_savings = snowball.total_interest_paid - avalanche.total_interest_paid;

    let (recommended, reason) = if interest_savings > AVALANCHE_SAVINGS_THRESHOLD {
        (
            Strategy::Avalanche,
            format!(
                "avalanche saves {interest_savings} in interest over snowball by \
                 clearing the highest-rate debt first"
            ),
        )
    } else {
        (
            Strategy::Snowball,
            format!(
                "interest savings of {interest_savings} are modest; snowball's quick \
                 early payoffs keep the plan motivating"
            ),
        )
    };

    Ok(StrategyComparison {
        snowball,
        avalanche,
        recommended,
        interest_savings,
        reason,
    })
}
