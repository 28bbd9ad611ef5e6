//! Single-debt projection
//!
//! Answers the debt-detail question "when is this one debt gone at a given
//! payment", running at the debt's own billing cadence rather than the
//! monthly cadence of the portfolio plan. A payment that does not cover
//! one period's interest is reported as never finishing, with a warning,
//! before any looping happens.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::amortize_period;
use crate::core::period::{PeriodKey, PeriodTimeline};
use crate::models::debt::Debt;
use crate::simulation::aggregate::round_currency;
use crate::simulation::engine::MAX_PERIODS;

/// Outcome of projecting one debt in isolation
///
/// The `Option` fields are `None` when the debt never pays off at the
/// given payment, either because the payment does not cover interest or
/// because the period cap cut the projection short; `warning` says which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDebtProjection {
    /// Debt that was projected
    pub debt_id: String,

    /// Per-period payment the projection assumed
    pub payment: Decimal,

    /// Billing periods until the balance reaches zero
    pub intervals_to_payoff: Option<u32>,

    /// Calendar months until the balance reaches zero
    pub months_to_payoff: Option<u32>,

    /// Interest paid over the projection, rounded to 2 decimal places
    pub total_interest: Option<Decimal>,

    /// Period of the final payment
    pub payoff_period: Option<PeriodKey>,

    /// Fraction of the original amount already repaid before the projection
    pub fraction_paid: Decimal,

    /// Why the debt never pays off, when it does not
    pub warning: Option<String>,
}

/// Project one debt at its own billing cadence
///
/// `payment` defaults to the debt's minimum payment when not supplied.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{project_single_debt, Debt, PaymentInterval, PeriodKey};
/// use rust_decimal_macros::dec;
///
/// let debt = Debt::new(
///     "Card".to_string(),
///     dec!(1200),
///     dec!(1200),
///     dec!(0),
///     dec!(100),
///     PaymentInterval::Monthly,
/// );
///
/// let projection = project_single_debt(&debt, None, PeriodKey::new(2026, 1));
/// assert_eq!(projection.intervals_to_payoff, Some(12));
/// assert_eq!(projection.payoff_period, Some(PeriodKey::new(2026, 12)));
/// ```
pub fn project_single_debt(
    debt: &Debt,
    payment: Option<Decimal>,
    start_period: PeriodKey,
) -> SingleDebtProjection {
    let payment = payment.unwrap_or_else(|| debt.minimum_payment());
    let fraction_paid = debt
        .fraction_paid(debt.balance())
        .round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero);

    // Already cleared: nothing to project
    if debt.balance() <= Decimal::ZERO {
        return SingleDebtProjection {
            debt_id: debt.id().to_string(),
            payment,
            intervals_to_payoff: Some(0),
            months_to_payoff: Some(0),
            total_interest: Some(Decimal::ZERO),
            payoff_period: None,
            fraction_paid,
            warning: None,
        };
    }

    let rate = debt.period_rate();
    let first_interest = debt.balance() * rate;

    // The payment must beat one period's interest or the balance can never
    // decrease; report that without entering the loop.
    if payment <= first_interest {
        return SingleDebtProjection {
            debt_id: debt.id().to_string(),
            payment,
            intervals_to_payoff: None,
            months_to_payoff: None,
            total_interest: None,
            payoff_period: None,
            fraction_paid,
            warning: Some(format!(
                "payment of {} does not cover the periodic interest of {}; the balance will never decrease",
                payment,
                round_currency(first_interest)
            )),
        };
    }

    let mut timeline = PeriodTimeline::new(start_period, debt.interval());
    let mut working = debt.balance();
    let mut total_interest = Decimal::ZERO;
    let mut payoff_period = None;

    while working > Decimal::ZERO && (timeline.periods_elapsed() as usize) < MAX_PERIODS {
        let record = amortize_period(debt.id(), working, payment, rate);
        total_interest += record.interest;
        working = record.remaining_balance;
        if working == Decimal::ZERO {
            payoff_period = Some(timeline.current_period());
        }
        timeline.advance();
    }

    if working > Decimal::ZERO {
        // Converging, but too slowly for the cap
        return SingleDebtProjection {
            debt_id: debt.id().to_string(),
            payment,
            intervals_to_payoff: None,
            months_to_payoff: None,
            total_interest: None,
            payoff_period: None,
            fraction_paid,
            warning: Some(format!(
                "balance not cleared within the {MAX_PERIODS} period cap"
            )),
        };
    }

    let intervals = timeline.periods_elapsed();
    SingleDebtProjection {
        debt_id: debt.id().to_string(),
        payment,
        intervals_to_payoff: Some(intervals),
        months_to_payoff: Some(intervals * debt.interval().months_per_interval()),
        total_interest: Some(round_currency(total_interest)),
        payoff_period,
        fraction_paid,
        warning: None,
    }
}
