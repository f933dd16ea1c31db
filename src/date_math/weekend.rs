//! Weekend helpers used by the business-day arithmetic.
//!
//! A business day is Monday through Friday. The Sunday walks below are bounded
//! by construction: any seven consecutive days contain exactly one Sunday.

use chrono::{Datelike, NaiveDate, Weekday};
use std::iter::successors;

/// Whether `date` falls on Monday through Friday.
#[must_use]
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Number of one-day steps forward from `start` until a Sunday is reached.
///
/// Returns 0 when `start` is itself a Sunday.
#[must_use]
pub fn days_until_sunday(start: NaiveDate) -> u32 {
    steps_to_sunday(start, |date| date.succ_opt())
}

/// Number of one-day steps backward from `end` until a Sunday is reached.
///
/// Returns 0 when `end` is itself a Sunday.
#[must_use]
pub fn days_from_sunday(end: NaiveDate) -> u32 {
    steps_to_sunday(end, |date| date.pred_opt())
}

fn steps_to_sunday(from: NaiveDate, step: impl Fn(NaiveDate) -> Option<NaiveDate>) -> u32 {
    let steps = successors(Some(from), |date| step(*date))
        .take_while(|date| date.weekday() != Weekday::Sun)
        .count();
    // At most six non-Sundays in a row.
    steps as u32
}
