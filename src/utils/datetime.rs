//! Date parsing and formatting at the text boundary
//!
//! The engine only ever sees [`NaiveDate`] values. This module turns user text
//! into dates and dates back into text, and is the only place where malformed
//! input can be rejected.

use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use std::fmt::Write;

use crate::error::DateCalcError;

/// ISO 8601 calendar date, e.g. `2024-01-15`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Human-readable label format, e.g. `2024 Jan 15 [Mon]`
pub const DISPLAY_DATE_FORMAT: &str = "%Y %b %d [%a]";

/// Keyword accepted in place of a date to mean the current local date
pub const TODAY_KEYWORD: &str = "today";

/// Current local date with no time-of-day component
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a date in ISO form, display form, or the `today` keyword
///
/// # Arguments
/// * `text` - Date text; surrounding whitespace is ignored
///
/// # Returns
/// * `Result<NaiveDate, DateCalcError>` - Parsed date or `InvalidDate`
pub fn parse_date(text: &str) -> Result<NaiveDate, DateCalcError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(TODAY_KEYWORD) {
        return Ok(today());
    }

    [ISO_DATE_FORMAT, DISPLAY_DATE_FORMAT]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| DateCalcError::InvalidDate(text.to_string()))
}

/// Parse a date trying a caller-supplied format before the built-in ones
pub fn parse_date_with_format(text: &str, format: &str) -> Result<NaiveDate, DateCalcError> {
    match NaiveDate::parse_from_str(text.trim(), format) {
        Ok(date) => Ok(date),
        Err(_) => parse_date(text),
    }
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Format a date with a strftime-style format string
///
/// Unlike `NaiveDate::format(..).to_string()`, this does not panic when the
/// format is malformed or asks for fields a date does not have (such as `%H`).
pub fn format_date(date: NaiveDate, format: &str) -> Result<String, DateCalcError> {
    let items = StrftimeItems::new(format);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(DateCalcError::InvalidFormat(format.to_string()));
    }

    let mut rendered = String::new();
    write!(rendered, "{}", date.format_with_items(items))
        .map_err(|_| DateCalcError::InvalidFormat(format.to_string()))?;
    Ok(rendered)
}
