//! Constants used throughout the application
//!
//! This module centralizes magic numbers, user-facing text, and other constant
//! values to improve maintainability and consistency.

// Calendar approximation
/// Mean Gregorian year length (97 leap years every 400 years)
pub const MEAN_YEAR_DAYS: f64 = 365.2425;
/// Mean month length derived from the mean year
pub const MEAN_MONTH_DAYS: f64 = MEAN_YEAR_DAYS / 12.0;

// Business week
pub const DAYS_PER_WEEK: i64 = 7;
pub const BUSINESS_DAYS_PER_WEEK: i64 = 5;
/// Correction subtracted from the leading partial week of a business-day span
pub const LEADING_WEEKEND_CORRECTION: i64 = 2;

// Offset limits
/// Default bound applied to each offset component before shifting
pub const DEFAULT_OFFSET_LIMIT: i64 = 250;
/// Largest offset bound a configuration may request
pub const MAX_OFFSET_LIMIT: i64 = 10_000;

// Mode notifications
pub const BUSINESS_MODE_ON: &str = "Strictly business from here on out";
pub const BUSINESS_MODE_OFF: &str = "Everyday normal mode";

// Help text
pub const ABOUT_APPROXIMATION: &str = "When using this date calculator, keep in mind that the \
calculations are based on there being 97 leap years every 400 years. That is, there are \
365.2425 days in a year. This may result in a small error.";

pub const ABOUT_MODES: &str = "There are two kinds of calculation:\n\n  \
compare  measure the span between two dates\n  \
add      shift a base date by years, months and days\n\n\
Pass --business to count only Monday through Friday. In business mode the \
years and months offsets are ignored and the days offset counts business days. \
A negative offset subtracts.";

// Config
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const CONFIG_FILE_NAME: &str = "datecalc.toml";
pub const APP_DIR_NAME: &str = "datecalc";
pub const LOG_FILE_NAME: &str = "datecalc.log";

// Logging
/// Timestamp format used for log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";
