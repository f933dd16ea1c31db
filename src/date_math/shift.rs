//! Shifting a base date by a calendar or business-day offset.

use chrono::{Days, Months, NaiveDate};

use super::weekend::is_business_day;

/// Add signed years, months and days to `base`, in that order.
///
/// Year and month shifts keep the day-of-month when the target month has it
/// and otherwise clamp to the last day of that month, so 2024-02-29 plus one
/// year is 2025-02-28. The day shift then steps whole calendar days. The order
/// matters: 2023-01-30 plus one month and one day is 2023-03-01, while adding
/// the day first would land on 2023-02-28.
#[must_use]
pub fn add_calendar(base: NaiveDate, years: i64, months: i64, days: i64) -> NaiveDate {
    let shifted = add_months(base, years.saturating_mul(12));
    let shifted = add_months(shifted, months);
    add_days(shifted, days)
}

/// Add `amount` business days (Monday through Friday) to `base`.
///
/// The walk moves one calendar day at a time in the direction of `amount` and
/// only counts days it lands on that are not Saturday or Sunday, so a non-zero
/// shift never ends on a weekend. Cost is linear in `|amount|`.
#[must_use]
pub fn add_business_days(base: NaiveDate, amount: i64) -> NaiveDate {
    let forward = amount > 0;
    let mut remaining = amount.unsigned_abs();
    let mut current = base;

    while remaining > 0 {
        let next = if forward { current.succ_opt() } else { current.pred_opt() };
        match next {
            Some(date) => current = date,
            None => break,
        }
        if is_business_day(current) {
            remaining -= 1;
        }
    }

    current
}

fn add_months(date: NaiveDate, months: i64) -> NaiveDate {
    // Anything past u32::MAX months is far outside the date range anyway.
    let span = Months::new(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));
    if months >= 0 {
        date.checked_add_months(span).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(span).unwrap_or(NaiveDate::MIN)
    }
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let span = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(span).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(span).unwrap_or(NaiveDate::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_shift_clamps_day() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
    }

    #[test]
    fn test_shifts_saturate_at_range_edges() {
        assert_eq!(add_months(date(2024, 1, 1), i64::MAX), NaiveDate::MAX);
        assert_eq!(add_months(date(2024, 1, 1), i64::MIN), NaiveDate::MIN);
        assert_eq!(add_days(date(2024, 1, 1), i64::MAX), NaiveDate::MAX);
        assert_eq!(add_days(date(2024, 1, 1), i64::MIN), NaiveDate::MIN);
    }
}
