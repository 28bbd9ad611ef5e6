//! Schedule aggregation
//!
//! Rolls a finished schedule up into the [`ProjectionResult`] handed back
//! to callers. Totals reported here are rounded to currency precision
//! (2 decimal places, half-up); the schedule rows themselves keep full
//! precision, and nothing is rounded while the simulation is still
//! running.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::period::PeriodKey;
use crate::models::debt::Debt;
use crate::models::projection::{DebtSummary, MonthlyProjection, ProjectionResult};
use crate::strategy::Strategy;

/// Round a reported currency total to 2 decimal places, half-up
pub(crate) fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Build the aggregate result for a finished schedule
///
/// `non_amortizing` and the summary order both follow the input order of
/// `debts`. `months_per_period` converts the period count to calendar
/// months (1 for the monthly multi-debt plan).
pub fn build_result(
    strategy: Strategy,
    debts: &[Debt],
    schedule: &[MonthlyProjection],
    debt_free_date: Option<PeriodKey>,
    non_amortizing: &[bool],
    months_per_period: u32,
) -> ProjectionResult {
    let index_of: HashMap<&str, usize> = debts
        .iter()
        .enumerate()
        .map(|(idx, debt)| (debt.id(), idx))
        .collect();

    let mut interest_paid = vec![Decimal::ZERO; debts.len()];
    let mut principal_paid = vec![Decimal::ZERO; debts.len()];
    let mut final_balance: Vec<Decimal> = debts.iter().map(|d| d.balance()).collect();
    let mut payoff_period: Vec<Option<PeriodKey>> = vec![None; debts.len()];

    let mut total_interest = Decimal::ZERO;
    for projection in schedule {
        total_interest += projection.total_interest;
        for payment in &projection.payments {
            let idx = match index_of.get(payment.debt_id.as_str()) {
                Some(&idx) => idx,
                None => continue,
            };
            interest_paid[idx] += payment.interest;
            principal_paid[idx] += payment.principal;
            final_balance[idx] = payment.remaining_balance;
            if payment.remaining_balance == Decimal::ZERO && payoff_period[idx].is_none() {
                payoff_period[idx] = Some(projection.period);
            }
        }
    }

    let debt_summaries: Vec<DebtSummary> = debts
        .iter()
        .enumerate()
        .map(|(idx, debt)| DebtSummary {
            debt_id: debt.id().to_string(),
            starting_balance: debt.balance(),
            principal_paid: round_currency(principal_paid[idx]),
            interest_paid: round_currency(interest_paid[idx]),
            payoff_period: payoff_period[idx],
            fraction_paid: debt
                .fraction_paid(final_balance[idx])
                .round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect();

    let non_amortizing: Vec<String> = debts
        .iter()
        .zip(non_amortizing)
        .filter(|(_, &flagged)| flagged)
        .map(|(debt, _)| debt.id().to_string())
        .collect();

    ProjectionResult {
        strategy,
        projections: schedule.to_vec(),
        total_interest_paid: round_currency(total_interest),
        debt_free_date,
        months_to_payoff: schedule.len() as u32 * months_per_period,
        debt_summaries,
        non_amortizing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::period::PaymentInterval;
    use crate::models::projection::DebtPayment;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summaries_track_payoff_and_interest() {
        let debt = Debt::new(
            "Card".to_string(),
            dec!(200),
            dec!(400),
            dec!(12),
            dec!(100),
            PaymentInterval::Monthly,
        );
        let id = debt.id().to_string();

        let schedule = vec![
            MonthlyProjection::from_payments(
                PeriodKey::new(2026, 1),
                vec![DebtPayment {
                    debt_id: id.clone(),
                    payment: dec!(100),
                    principal: dec!(98),
                    interest: dec!(2),
                    remaining_balance: dec!(102),
                }],
            ),
            MonthlyProjection::from_payments(
                PeriodKey::new(2026, 2),
                vec![DebtPayment {
                    debt_id: id.clone(),
                    payment: dec!(103.02),
                    principal: dec!(102),
                    interest: dec!(1.02),
                    remaining_balance: Decimal::ZERO,
                }],
            ),
        ];

        let result = build_result(
            Strategy::Snowball,
            std::slice::from_ref(&debt),
            &schedule,
            Some(PeriodKey::new(2026, 2)),
            &[false],
            1,
        );

        assert_eq!(result.total_interest_paid, dec!(3.02));
        assert_eq!(result.months_to_payoff, 2);

        let summary = &result.debt_summaries[0];
        assert_eq!(summary.payoff_period, Some(PeriodKey::new(2026, 2)));
        assert_eq!(summary.interest_paid, dec!(3.02));
        assert_eq!(summary.principal_paid, dec!(200));
        // 400 original, 200 repaid before the run, 200 repaid by it
        assert_eq!(summary.fraction_paid, dec!(1));
    }

    #[test]
    fn test_empty_schedule_reports_zeroes() {
        let result = build_result(Strategy::Minimum, &[], &[], None, &[], 1);
        assert_eq!(result.total_interest_paid, Decimal::ZERO);
        assert_eq!(result.months_to_payoff, 0);
        assert!(result.projections.is_empty());
        assert!(result.debt_summaries.is_empty());
        assert!(result.non_amortizing.is_empty());
    }
}
