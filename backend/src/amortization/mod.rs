//! Period amortization
//!
//! Applies one billing period of interest accrual and principal reduction
//! to a single debt. This is the only place balances change, and it is a
//! pure function: the simulation loop owns the working balances and feeds
//! them through here one period at a time.
//!
//! # Critical Invariants
//!
//! 1. All arithmetic is `rust_decimal::Decimal`, full precision, no
//!    intermediate rounding
//! 2. The recorded payment is the cash actually consumed, so
//!    `payment == principal + interest` holds exactly
//! 3. A balance within [`BALANCE_EPSILON`] of zero is floored to zero so
//!    residue can never produce an infinite tail of periods
//! 4. A balance that negative amortization pushes past `Decimal`'s range
//!    pins at `Decimal::MAX`; the payment is then recorded as pure interest

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::period::PaymentInterval;
use crate::models::projection::DebtPayment;

/// Balances at or below this are considered paid off
pub const BALANCE_EPSILON: Decimal = dec!(0.01);

/// Interest rate applied in one billing period, as a fraction
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{period_rate, PaymentInterval};
/// use rust_decimal_macros::dec;
///
/// // 18% annual, billed monthly: 1.5% per period
/// assert_eq!(period_rate(dec!(18), PaymentInterval::Monthly), dec!(0.015));
/// ```
pub fn period_rate(annual_rate_percent: Decimal, interval: PaymentInterval) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(interval.intervals_per_year())
}

/// Apply one period's payment to one debt
///
/// Accrues `balance * period_rate` of interest, then puts the rest of the
/// payment toward principal, clamped so the balance never goes negative.
/// When the payment does not cover the interest the principal is negative
/// and the remaining balance grows; detecting and reporting that case is
/// the caller's job. A balance that such growth pushes past `Decimal`'s
/// range pins at `Decimal::MAX` with the payment recorded as pure interest.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::amortize_period;
/// use rust_decimal_macros::dec;
///
/// let record = amortize_period("debt-1", dec!(1000), dec!(100), dec!(0.015));
/// assert_eq!(record.interest, dec!(15));
/// assert_eq!(record.principal, dec!(85));
/// assert_eq!(record.remaining_balance, dec!(915));
/// ```
pub fn amortize_period(
    debt_id: &str,
    balance: Decimal,
    payment: Decimal,
    period_rate: Decimal,
) -> DebtPayment {
    let interest = match balance.checked_mul(period_rate) {
        Some(interest) => interest,
        None => return pinned_payment(debt_id, payment),
    };
    let principal = (payment - interest).min(balance);

    let mut remaining_balance = match balance.checked_sub(principal) {
        Some(remaining) => remaining,
        None => return pinned_payment(debt_id, payment),
    };
    if remaining_balance <= BALANCE_EPSILON {
        remaining_balance = Decimal::ZERO;
    }

    DebtPayment {
        debt_id: debt_id.to_string(),
        payment: interest + principal,
        principal,
        interest,
        remaining_balance,
    }
}

/// Payment record for a balance negative amortization has compounded past
/// `Decimal`'s range
///
/// The balance pins at `Decimal::MAX` and the whole payment counts as
/// interest, keeping `payment == principal + interest` exact and the
/// schedule totals representable out to the period cap.
fn pinned_payment(debt_id: &str, payment: Decimal) -> DebtPayment {
    DebtPayment {
        debt_id: debt_id.to_string(),
        payment,
        principal: Decimal::ZERO,
        interest: payment,
        remaining_balance: Decimal::MAX,
    }
}
