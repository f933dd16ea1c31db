//! Calculator façade used by front ends.
//!
//! Holds the two user-level settings (business mode and the offset bound) and
//! routes add/compare requests to the matching engine operation.

use chrono::NaiveDate;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

use crate::config::Config;
use crate::constants::{BUSINESS_MODE_OFF, BUSINESS_MODE_ON, DEFAULT_OFFSET_LIMIT};
use crate::date_math::{self, BusinessDayCount, CalendarDuration, Offset};

/// Result of shifting a base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Addition {
    pub base: NaiveDate,
    pub offset: Offset,
    pub result: NaiveDate,
}

/// Result of comparing two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Calendar(CalendarDuration),
    Business(BusinessDayCount),
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Calendar(duration) => write!(f, "{}", duration),
            Comparison::Business(count) => write!(f, "{}", count),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    business_mode: bool,
    offset_limit: i64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(false, DEFAULT_OFFSET_LIMIT)
    }
}

impl Calculator {
    /// A non-positive `offset_limit` is treated as 0.
    pub fn new(business_mode: bool, offset_limit: i64) -> Self {
        Self {
            business_mode,
            offset_limit: offset_limit.max(0),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.calculation.business_mode, config.calculation.offset_limit)
    }

    pub fn business_mode(&self) -> bool {
        self.business_mode
    }

    pub fn offset_limit(&self) -> i64 {
        self.offset_limit
    }

    pub fn set_business_mode(&mut self, enabled: bool) {
        self.business_mode = enabled;
    }

    /// Flip business mode and return the notification to show the user.
    pub fn toggle_business_mode(&mut self) -> &'static str {
        self.business_mode = !self.business_mode;
        if self.business_mode {
            BUSINESS_MODE_ON
        } else {
            BUSINESS_MODE_OFF
        }
    }

    /// Build the offset for the current mode, clamping each component.
    ///
    /// In business mode `years` and `months` are ignored and `days` counts
    /// business days.
    pub fn offset(&self, years: i64, months: i64, days: i64) -> Offset {
        if self.business_mode {
            if years != 0 || months != 0 {
                debug!("Ignoring years/months offset in business mode");
            }
            Offset::Business(self.clamp("days", days))
        } else {
            Offset::Calendar {
                years: self.clamp("years", years),
                months: self.clamp("months", months),
                days: self.clamp("days", days),
            }
        }
    }

    /// Shift `base` by the given offset in the current mode.
    pub fn add(&self, base: NaiveDate, years: i64, months: i64, days: i64) -> Addition {
        let offset = self.offset(years, months, days);
        let result = date_math::shift(base, offset);
        debug!("{} + {:?} = {}", base, offset, result);
        Addition { base, offset, result }
    }

    /// Measure the span between two dates in the current mode.
    pub fn compare(&self, first: NaiveDate, second: NaiveDate) -> Comparison {
        let comparison = if self.business_mode {
            Comparison::Business(date_math::business_day_difference(first, second))
        } else {
            Comparison::Calendar(date_math::calendar_difference(first, second))
        };
        debug!("{} .. {} = {:?}", first, second, comparison);
        comparison
    }

    fn clamp(&self, component: &str, value: i64) -> i64 {
        let clamped = value.clamp(-self.offset_limit, self.offset_limit);
        if clamped != value {
            warn!(
                "{} offset {} is outside [-{}, {}], using {}",
                component, value, self.offset_limit, self.offset_limit, clamped
            );
        }
        clamped
    }
}
