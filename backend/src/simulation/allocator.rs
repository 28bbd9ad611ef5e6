//! Payment allocation waterfall
//!
//! Decides how much cash each debt is offered in one period: every active
//! debt gets its minimum payment, and the entire extra budget lands on the
//! first active debt in priority order. The extra is never split across
//! debts, and when the top debt clears for less than the offered extra the
//! remainder is simply unspent for that period rather than being passed
//! down the order.

use rust_decimal::Decimal;

use crate::models::debt::Debt;

/// Offered payments for one period, parallel to the input debts
///
/// Cleared debts (working balance at zero) are offered nothing. The caller
/// supplies the priority order as indices from
/// [`Strategy::priority_order`](crate::strategy::Strategy::priority_order).
pub fn allocate_payments(
    debts: &[Debt],
    balances: &[Decimal],
    order: &[usize],
    available_extra: Decimal,
) -> Vec<Decimal> {
    let mut payments = vec![Decimal::ZERO; debts.len()];

    for (idx, debt) in debts.iter().enumerate() {
        if balances[idx] > Decimal::ZERO {
            payments[idx] = debt.minimum_payment();
        }
    }

    // Whole extra to the highest-priority debt still carrying a balance
    if available_extra > Decimal::ZERO {
        if let Some(&target) = order.iter().find(|&&idx| balances[idx] > Decimal::ZERO) {
            payments[target] += available_extra;
        }
    }

    payments
}
