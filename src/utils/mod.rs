//! Utility modules for the date calculator.
//!
//! This module contains helpers that sit at the edge of the date engine:
//! turning user-entered text into dates and dates back into text.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date parsing and formatting functions

pub mod datetime;
