//! Measuring the span between two dates.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::weekend::{days_from_sunday, days_until_sunday};
use super::{days_between, ordered};
use crate::constants::{
    BUSINESS_DAYS_PER_WEEK, DAYS_PER_WEEK, LEADING_WEEKEND_CORRECTION, MEAN_MONTH_DAYS, MEAN_YEAR_DAYS,
};

/// Approximate calendar breakdown of a span plus its exact length in days.
///
/// `years`, `months` and `days` come from dividing `total_days` by a mean
/// year of 365.2425 days and a mean month of a twelfth of that, truncating at
/// each step. They are not a calendar-field subtraction and can be off by a
/// day or so near month boundaries; `total_days` is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDuration {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub total_days: u64,
}

impl CalendarDuration {
    /// Decompose an exact day count with the mean-year approximation.
    #[must_use]
    pub fn from_total_days(total_days: u64) -> Self {
        let total = total_days as f64;
        let years = (total / MEAN_YEAR_DAYS).floor();
        let months = ((total - years * MEAN_YEAR_DAYS) / MEAN_MONTH_DAYS).floor();
        let days = (total - years * MEAN_YEAR_DAYS - months * MEAN_MONTH_DAYS).floor();

        Self {
            years: years as u64,
            months: months as u64,
            days: days as u64,
            total_days,
        }
    }
}

impl fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years\n{} months\n{} days\n\n[{} total days]",
            self.years, self.months, self.days, self.total_days
        )
    }
}

/// Number of business days between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BusinessDayCount(pub u64);

impl BusinessDayCount {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BusinessDayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} business days", self.0)
    }
}

/// Span between `a` and `b` as an approximate years/months/days breakdown.
///
/// The order of the arguments does not matter.
#[must_use]
pub fn calendar_difference(a: NaiveDate, b: NaiveDate) -> CalendarDuration {
    let (start, end) = ordered(a, b);
    CalendarDuration::from_total_days(days_between(start, end).unsigned_abs())
}

/// Span between `a` and `b` counted in business days.
///
/// Splits the span at the first Sunday on or after the start and the last
/// Sunday on or before the end, counts five business days per whole week in
/// between, and adds the partial weeks at either side. The leading partial
/// week has two days taken off before it is floored at zero. Both arguments
/// are interchangeable.
#[must_use]
pub fn business_day_difference(a: NaiveDate, b: NaiveDate) -> BusinessDayCount {
    let (start, end) = ordered(a, b);
    let total_days = days_between(start, end);

    let pre_days = i64::from(days_until_sunday(start));
    let post_days = i64::from(days_from_sunday(end));

    // Truncating division; negative when both ends sit in the same week.
    let weeks = (total_days - pre_days - post_days) / DAYS_PER_WEEK;

    let days = (pre_days - LEADING_WEEKEND_CORRECTION).max(0) + post_days + weeks * BUSINESS_DAYS_PER_WEEK;
    BusinessDayCount(u64::try_from(days).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_total_days_truncates_each_step() {
        let duration = CalendarDuration::from_total_days(63);
        assert_eq!((duration.years, duration.months, duration.days), (0, 2, 2));

        let duration = CalendarDuration::from_total_days(31);
        assert_eq!((duration.years, duration.months, duration.days), (0, 1, 0));
    }

    #[test]
    fn test_zero_days() {
        let duration = CalendarDuration::from_total_days(0);
        assert_eq!(
            duration,
            CalendarDuration {
                years: 0,
                months: 0,
                days: 0,
                total_days: 0
            }
        );
    }
}
