//! Debt model
//!
//! Represents one liability being paid down.
//! Each debt has:
//! - Current balance and original amount
//! - Annual interest rate in percent
//! - Minimum payment due each billing period
//! - Billing interval (monthly, half-yearly, yearly)
//! - Priority used by the custom strategy
//!
//! CRITICAL: All money values are rust_decimal::Decimal, never binary floats

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::period::PaymentInterval;

/// Errors reported by [`Debt::validate`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DebtError {
    #[error("balance must be non-negative, got {0}")]
    NegativeBalance(Decimal),

    #[error("original amount must be positive, got {0}")]
    NonPositiveOriginalAmount(Decimal),

    #[error("annual rate must be between 0 and 100 percent, got {0}")]
    RateOutOfRange(Decimal),

    #[error("minimum payment must be positive, got {0}")]
    NonPositiveMinimumPayment(Decimal),
}

/// One liability in a payoff plan
///
/// Debts are value objects: the simulation clones working balances from them
/// and never mutates the records it was given.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{Debt, PaymentInterval};
/// use rust_decimal_macros::dec;
///
/// let debt = Debt::new(
///     "Car loan".to_string(),
///     dec!(8500),
///     dec!(12000),
///     dec!(6.9),
///     dec!(240),
///     PaymentInterval::Monthly,
/// )
/// .with_priority(2);
///
/// assert_eq!(debt.minimum_payment(), dec!(240));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Unique debt identifier (UUID for freshly created debts)
    id: String,

    /// Display label, not used in any math
    name: String,

    /// Current outstanding principal
    balance: Decimal,

    /// Principal at the time the debt was first recorded
    ///
    /// Used only for progress reporting, never for amortization.
    original_amount: Decimal,

    /// Annual interest rate in percent (0 to 100)
    annual_rate_percent: Decimal,

    /// Payment due every billing period
    minimum_payment: Decimal,

    /// Billing cadence, serialized as intervals per year (12, 2 or 1)
    #[serde(default)]
    interval: PaymentInterval,

    /// Tie-break rank for the custom strategy (lower pays off first)
    #[serde(default)]
    priority: u32,
}

impl Debt {
    /// Create a new debt with a fresh UUID
    ///
    /// # Panics
    /// Panics if balance is negative, original_amount is not positive,
    /// the rate is outside 0..=100 or the minimum payment is not positive.
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::{Debt, PaymentInterval};
    /// use rust_decimal_macros::dec;
    ///
    /// let debt = Debt::new(
    ///     "Store card".to_string(),
    ///     dec!(1500),
    ///     dec!(1500),
    ///     dec!(19.9),
    ///     dec!(45),
    ///     PaymentInterval::Monthly,
    /// );
    /// ```
    pub fn new(
        name: String,
        balance: Decimal,
        original_amount: Decimal,
        annual_rate_percent: Decimal,
        minimum_payment: Decimal,
        interval: PaymentInterval,
    ) -> Self {
        assert!(balance >= Decimal::ZERO, "balance must be non-negative");
        assert!(
            original_amount > Decimal::ZERO,
            "original amount must be positive"
        );
        assert!(
            annual_rate_percent >= Decimal::ZERO && annual_rate_percent <= Decimal::ONE_HUNDRED,
            "annual rate must be between 0 and 100"
        );
        assert!(
            minimum_payment > Decimal::ZERO,
            "minimum payment must be positive"
        );

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            balance,
            original_amount,
            annual_rate_percent,
            minimum_payment,
            interval,
            priority: 0, // Default priority
        }
    }

    /// Create a debt from a stored record, keeping the caller's id
    ///
    /// No validation is performed; callers bridging untrusted records should
    /// follow up with [`Debt::validate`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_record(
        id: String,
        name: String,
        balance: Decimal,
        original_amount: Decimal,
        annual_rate_percent: Decimal,
        minimum_payment: Decimal,
        interval: PaymentInterval,
        priority: u32,
    ) -> Self {
        Self {
            id,
            name,
            balance,
            original_amount,
            annual_rate_percent,
            minimum_payment,
            interval,
            priority,
        }
    }

    /// Set the custom-strategy priority (builder pattern)
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Check the numeric domains of every field
    ///
    /// The simulation assumes pre-validated debts; this is the tool for the
    /// boundary that receives records from storage or files.
    pub fn validate(&self) -> Result<(), DebtError> {
        if self.balance < Decimal::ZERO {
            return Err(DebtError::NegativeBalance(self.balance));
        }
        if self.original_amount <= Decimal::ZERO {
            return Err(DebtError::NonPositiveOriginalAmount(self.original_amount));
        }
        if self.annual_rate_percent < Decimal::ZERO
            || self.annual_rate_percent > Decimal::ONE_HUNDRED
        {
            return Err(DebtError::RateOutOfRange(self.annual_rate_percent));
        }
        if self.minimum_payment <= Decimal::ZERO {
            return Err(DebtError::NonPositiveMinimumPayment(self.minimum_payment));
        }
        Ok(())
    }

    /// Get debt ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get current outstanding balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Get original principal
    pub fn original_amount(&self) -> Decimal {
        self.original_amount
    }

    /// Get annual interest rate in percent
    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    /// Get per-period minimum payment
    pub fn minimum_payment(&self) -> Decimal {
        self.minimum_payment
    }

    /// Get billing interval
    pub fn interval(&self) -> PaymentInterval {
        self.interval
    }

    /// Get custom-strategy priority
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Interest rate applied in one billing period, as a fraction
    pub fn period_rate(&self) -> Decimal {
        crate::amortization::period_rate(self.annual_rate_percent, self.interval)
    }

    /// Fraction of the original amount repaid at a given balance
    ///
    /// Clamped to 0..=1 so overpayment residue and balance growth on
    /// non-amortizing debts never produce out-of-range progress.
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::{Debt, PaymentInterval};
    /// use rust_decimal_macros::dec;
    ///
    /// let debt = Debt::new(
    ///     "Loan".to_string(),
    ///     dec!(750),
    ///     dec!(1000),
    ///     dec!(5),
    ///     dec!(50),
    ///     PaymentInterval::Monthly,
    /// );
    /// assert_eq!(debt.fraction_paid(dec!(750)), dec!(0.25));
    /// assert_eq!(debt.fraction_paid(dec!(0)), dec!(1));
    /// ```
    pub fn fraction_paid(&self, current_balance: Decimal) -> Decimal {
        if self.original_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        let fraction = (self.original_amount - current_balance) / self.original_amount;
        fraction.clamp(Decimal::ZERO, Decimal::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_debt() -> Debt {
        Debt::new(
            "Credit card".to_string(),
            dec!(2000),
            dec!(2500),
            dec!(18),
            dec!(60),
            PaymentInterval::Monthly,
        )
    }

    #[test]
    fn test_new_mints_unique_ids() {
        let a = sample_debt();
        let b = sample_debt();
        assert_ne!(a.id(), b.id(), "each debt should get its own UUID");
    }

    #[test]
    fn test_default_priority_is_zero() {
        let debt = sample_debt();
        assert_eq!(debt.priority(), 0);

        let ranked = sample_debt().with_priority(3);
        assert_eq!(ranked.priority(), 3);
    }

    #[test]
    #[should_panic(expected = "minimum payment must be positive")]
    fn test_zero_minimum_payment_panics() {
        Debt::new(
            "Bad".to_string(),
            dec!(100),
            dec!(100),
            dec!(5),
            dec!(0),
            PaymentInterval::Monthly,
        );
    }

    #[test]
    fn test_validate_flags_bad_record() {
        let debt = Debt::from_record(
            "debt-1".to_string(),
            "Imported".to_string(),
            dec!(100),
            dec!(100),
            dec!(250), // Rate way out of range
            dec!(10),
            PaymentInterval::Monthly,
            0,
        );
        assert_eq!(debt.validate(), Err(DebtError::RateOutOfRange(dec!(250))));
    }

    #[test]
    fn test_fraction_paid_clamps() {
        let debt = sample_debt();
        // Balance grew past the original amount: progress floors at zero
        assert_eq!(debt.fraction_paid(dec!(3000)), Decimal::ZERO);
        // Cleared: progress caps at one
        assert_eq!(debt.fraction_paid(Decimal::ZERO), Decimal::ONE);
    }

    #[test]
    fn test_period_rate_uses_interval() {
        let debt = Debt::new(
            "Yearly loan".to_string(),
            dec!(1000),
            dec!(1000),
            dec!(12),
            dec!(200),
            PaymentInterval::Yearly,
        );
        assert_eq!(debt.period_rate(), dec!(0.12));
    }
}
