//! Datecalc - a small date calculator
//!
//! This library shifts dates by calendar offsets or business days and measures
//! the span between two dates, either as an approximate years/months/days
//! breakdown or as a business-day count.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`date_math`] - The pure date arithmetic engine
//! * [`calculator`] - Mode-aware façade used by front ends
//! * [`config`] - Application configuration management
//! * [`utils`] - Date parsing and formatting helpers

/// Mode-aware façade over the date engine
pub mod calculator;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Pure date arithmetic: shifting and differencing
pub mod date_math;

/// Error types for the text boundary
pub mod error;

/// Logging setup
pub mod logger;

/// Utility functions for date parsing and formatting
pub mod utils;

pub use calculator::{Addition, Calculator, Comparison};
pub use date_math::{BusinessDayCount, CalendarDuration, Offset};
pub use error::DateCalcError;
