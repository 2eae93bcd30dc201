//! Timestamp formatting for step descriptions

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::errors::{Result, TracklineError};

/// Month short, day, year, 12-hour clock with two-digit minutes and seconds.
/// e.g. `Nov 14, 2023, 10:13:20 PM`
pub const DISPLAY_FORMAT: &str = "%b %-d, %Y, %-I:%M:%S %p";

/// Renders Unix epoch seconds in a fixed UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    offset: FixedOffset,
}

impl Default for DateFormatter {
    fn default() -> Self {
        DateFormatter { offset: Utc.fix() }
    }
}

impl DateFormatter {
    /// Formatter for an offset east of UTC, in minutes
    pub fn from_offset_minutes(minutes: i32) -> Result<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| DateFormatter { offset })
            .ok_or_else(|| {
                TracklineError::ConfigError(format!("UTC offset out of range: {} minutes", minutes))
            })
    }

    /// Format epoch seconds for display.
    ///
    /// A zero timestamp means "not reported" and renders as an empty string,
    /// as does anything chrono cannot represent.
    pub fn format(&self, epoch_seconds: i64) -> String {
        if epoch_seconds == 0 {
            return String::new();
        }
        match DateTime::from_timestamp(epoch_seconds, 0) {
            Some(utc) => utc.with_timezone(&self.offset).format(DISPLAY_FORMAT).to_string(),
            None => String::new(),
        }
    }
}
