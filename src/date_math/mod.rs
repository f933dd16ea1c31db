//! Date arithmetic engine.
//!
//! Every date is a timezone-naive [`NaiveDate`]. Operations come in two
//! flavours:
//!
//! - **Shifting** a base date by a calendar offset (years, months, days) or by
//!   a number of business days.
//! - **Differencing** two dates, either as an approximate calendar breakdown
//!   or as a count of business days.
//!
//! All functions are pure and total: they never fail and never mutate their
//! inputs. Results that would fall outside the representable date range
//! saturate at [`NaiveDate::MIN`] / [`NaiveDate::MAX`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod difference;
mod shift;
pub mod weekend;

pub use difference::{business_day_difference, calendar_difference, BusinessDayCount, CalendarDuration};
pub use shift::{add_business_days, add_calendar};

/// A signed offset applied to a base date.
///
/// The two modes are mutually exclusive: a calendar offset never counts
/// business days and a business offset never carries years or months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Offset {
    Calendar { years: i64, months: i64, days: i64 },
    Business(i64),
}

impl Offset {
    /// Returns `true` when applying this offset leaves every date unchanged.
    pub fn is_zero(&self) -> bool {
        match *self {
            Offset::Calendar { years, months, days } => years == 0 && months == 0 && days == 0,
            Offset::Business(amount) => amount == 0,
        }
    }
}

/// Apply an [`Offset`] to `base`.
pub fn shift(base: NaiveDate, offset: Offset) -> NaiveDate {
    match offset {
        Offset::Calendar { years, months, days } => add_calendar(base, years, months, days),
        Offset::Business(amount) => add_business_days(base, amount),
    }
}

/// Order two dates so the earlier one comes first.
fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Whole calendar days from `start` to `end`.
fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}
