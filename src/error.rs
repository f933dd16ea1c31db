//! Error types for the text boundary around the date engine.
//!
//! The arithmetic in [`crate::date_math`] is total and never fails; the only
//! recoverable failures happen while turning user text into dates or while
//! rendering dates with a user-supplied format.

/// Errors raised while converting between text and dates.
#[derive(Debug, thiserror::Error)]
pub enum DateCalcError {
    #[error("Invalid date '{0}': expected YYYY-MM-DD, \"YYYY Mon DD [Day]\" or 'today'")]
    InvalidDate(String),

    #[error("Invalid date format '{0}'")]
    InvalidFormat(String),
}
