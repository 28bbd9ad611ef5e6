//! Calendar periods for the simulation
//!
//! The simulation operates in discrete billing periods keyed by calendar
//! year-month ("YYYY-MM"). This module provides deterministic period
//! advancement; there is no ambient clock anywhere in the engine, the
//! start period is always an explicit input.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for period parsing and interval conversion
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("period must be formatted as YYYY-MM, got '{0}'")]
    InvalidFormat(String),

    #[error("payment interval must be 12, 2, or 1 intervals per year, got {0}")]
    InvalidInterval(u32),
}

/// How often a debt bills and accrues interest
///
/// Serialized as the number of intervals per year: 12 (monthly),
/// 2 (half-yearly) or 1 (yearly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PaymentInterval {
    /// 12 billing periods per year
    Monthly,
    /// 2 billing periods per year
    HalfYearly,
    /// 1 billing period per year
    Yearly,
}

impl PaymentInterval {
    /// Number of billing periods in one year
    pub fn intervals_per_year(&self) -> u32 {
        match self {
            PaymentInterval::Monthly => 12,
            PaymentInterval::HalfYearly => 2,
            PaymentInterval::Yearly => 1,
        }
    }

    /// Number of calendar months covered by one billing period
    pub fn months_per_interval(&self) -> u32 {
        12 / self.intervals_per_year()
    }
}

impl Default for PaymentInterval {
    fn default() -> Self {
        PaymentInterval::Monthly
    }
}

impl TryFrom<u32> for PaymentInterval {
    type Error = PeriodError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(PaymentInterval::Monthly),
            2 => Ok(PaymentInterval::HalfYearly),
            1 => Ok(PaymentInterval::Yearly),
            other => Err(PeriodError::InvalidInterval(other)),
        }
    }
}

impl From<PaymentInterval> for u32 {
    fn from(interval: PaymentInterval) -> u32 {
        interval.intervals_per_year()
    }
}

/// A calendar year-month, the unit of scheduling
///
/// Periods are totally ordered and serialized as "YYYY-MM". Lump sums are
/// matched against periods by exact equality.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::PeriodKey;
///
/// let start: PeriodKey = "2026-11".parse().unwrap();
/// assert_eq!(start.advance(3).to_string(), "2027-02");
/// assert!(start < start.next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    /// Create a period from a year and a 1-based month
    ///
    /// # Panics
    /// Panics if month is not in 1..=12
    pub fn new(year: i32, month: u32) -> Self {
        assert!((1..=12).contains(&month), "month must be in 1..=12");
        Self { year, month }
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month (1-based)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The period a given number of months later
    pub fn advance(&self, months: u32) -> PeriodKey {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + months as i64;
        PeriodKey {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// The next calendar month
    pub fn next(&self) -> PeriodKey {
        self.advance(1)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PeriodKey {
    type Err = PeriodError;

    /// Parse a "YYYY-MM" string, validating the month via the calendar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|_| PeriodError::InvalidFormat(s.to_string()))?;
        Ok(PeriodKey {
            year: date.year(),
            month: date.month(),
        })
    }
}

impl Serialize for PeriodKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Tracks the current period of a running simulation
///
/// Advances in steps of one billing interval from an explicit start period.
///
/// # Example
/// ```
/// use debt_payoff_core_rs::{PaymentInterval, PeriodKey, PeriodTimeline};
///
/// let start = PeriodKey::new(2026, 1);
/// let mut timeline = PeriodTimeline::new(start, PaymentInterval::Monthly);
/// assert_eq!(timeline.current_period(), start);
///
/// timeline.advance();
/// assert_eq!(timeline.current_period(), PeriodKey::new(2026, 2));
/// assert_eq!(timeline.periods_elapsed(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodTimeline {
    /// Period currently being simulated
    current: PeriodKey,
    /// Billing cadence of this timeline
    interval: PaymentInterval,
    /// Periods completed since the start period
    periods_elapsed: u32,
}

impl PeriodTimeline {
    /// Create a timeline positioned at the start period
    pub fn new(start: PeriodKey, interval: PaymentInterval) -> Self {
        Self {
            current: start,
            interval,
            periods_elapsed: 0,
        }
    }

    /// Period currently being simulated
    pub fn current_period(&self) -> PeriodKey {
        self.current
    }

    /// Periods completed since the start period
    pub fn periods_elapsed(&self) -> u32 {
        self.periods_elapsed
    }

    /// Calendar months covered by the completed periods
    ///
    /// # Example
    /// ```
    /// use debt_payoff_core_rs::{PaymentInterval, PeriodKey, PeriodTimeline};
    ///
    /// let mut timeline =
    ///     PeriodTimeline::new(PeriodKey::new(2026, 1), PaymentInterval::HalfYearly);
    /// timeline.advance();
    /// assert_eq!(timeline.months_elapsed(), 6);
    /// ```
    pub fn months_elapsed(&self) -> u32 {
        self.periods_elapsed * self.interval.months_per_interval()
    }

    /// Move to the next billing period
    pub fn advance(&mut self) {
        self.current = self.current.advance(self.interval.months_per_interval());
        self.periods_elapsed += 1;
    }
}
