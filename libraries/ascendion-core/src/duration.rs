//! `M:SS` duration strings
//!
//! Catalog items carry their length as a display string ("4:30"). Tracks
//! store whole seconds. These helpers convert between the two and render
//! elapsed time for the playback bar.

use crate::error::{CoreError, Result};

/// Parse a `M:SS` duration string into whole seconds
///
/// Minutes are one or more ASCII digits. Seconds are exactly two ASCII
/// digits below 60. Surrounding whitespace is ignored.
///
/// ```rust
/// use ascendion_core::duration::parse_duration;
///
/// assert_eq!(parse_duration("4:30").unwrap(), 270);
/// assert!(parse_duration("4:3").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<u32> {
    let trimmed = input.trim();

    let (minutes, seconds) = trimmed
        .split_once(':')
        .ok_or_else(|| CoreError::invalid_duration(input, "expected M:SS"))?;

    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_duration(
            input,
            "minutes must be one or more digits",
        ));
    }

    if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_duration(
            input,
            "seconds must be two digits",
        ));
    }

    let minutes: u32 = minutes
        .parse()
        .map_err(|_| CoreError::invalid_duration(input, "minutes out of range"))?;
    let seconds: u32 = seconds
        .parse()
        .map_err(|_| CoreError::invalid_duration(input, "seconds out of range"))?;

    if seconds >= 60 {
        return Err(CoreError::invalid_duration(
            input,
            "seconds must be below 60",
        ));
    }

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| CoreError::invalid_duration(input, "duration overflows"))
}

/// Format whole seconds as `M:SS`
pub fn format_duration(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Format a fractional position in seconds as `M:SS`
///
/// Rounds down. Negative and non-finite values render as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs <= 0.0 {
        return format_duration(0);
    }

    let floored = secs.floor().min(f64::from(u32::MAX));
    format_duration(floored as u32)
}
