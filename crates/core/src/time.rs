//! # Time-of-day helpers
//!
//! Slot times travel as zero-padded 24-hour `HH:MM` strings. Arithmetic on
//! them is done in minutes since midnight, and the agent-facing pickers use a
//! 12-hour `HH:MM AM` rendering.

use chrono::{NaiveTime, Timelike};

use crate::errors::{AvailabilityError, AvailabilityResult};

/// Minutes in one day. A slot may not end at or beyond this boundary.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Start time used for a day's first slot.
pub const DEFAULT_START_TIME: &str = "09:00";

/// [`DEFAULT_START_TIME`] in minutes since midnight.
pub const DEFAULT_START_MINUTES: u32 = 9 * 60;

/// Meeting duration used when enabling a day and no duration is configured.
pub const FALLBACK_MEETING_DURATION: u32 = 60;

/// Parses a `HH:MM` time into minutes since midnight.
///
/// # Errors
///
/// Returns `AvailabilityError::InvalidTime` if the value is not a valid
/// 24-hour time.
pub fn parse_time_to_minutes(time: &str) -> AvailabilityResult<u32> {
    let parsed = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| AvailabilityError::InvalidTime(time.to_string()))?;

    Ok(parsed.hour() * 60 + parsed.minute())
}

/// Formats minutes since midnight as `HH:MM`.
///
/// Values past the end of the day are not clamped.
pub fn format_minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Cuts a backend `HH:MM:SS` time down to `HH:MM`.
pub fn truncate_to_minutes(time: &str) -> &str {
    time.get(..5).unwrap_or(time)
}

/// Converts `HH:MM` to `HH:MM AM`/`HH:MM PM`.
///
/// Malformed input is returned unchanged.
pub fn to_12_hour(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    match NaiveTime::parse_from_str(time.trim(), "%H:%M") {
        Ok(parsed) => parsed.format("%I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

/// Converts `HH:MM AM`/`HH:MM PM` (any case, optional space) to `HH:MM`.
///
/// Malformed input is returned unchanged.
pub fn to_24_hour(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    let upper = time.trim().to_ascii_uppercase();
    let (clock, period) = if let Some(clock) = upper.strip_suffix("AM") {
        (clock, "AM")
    } else if let Some(clock) = upper.strip_suffix("PM") {
        (clock, "PM")
    } else {
        return time.to_string();
    };

    let normalized = format!("{} {}", clock.trim_end(), period);
    match NaiveTime::parse_from_str(&normalized, "%I:%M %p") {
        Ok(parsed) => parsed.format("%H:%M").to_string(),
        Err(_) => time.to_string(),
    }
}
