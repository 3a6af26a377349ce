//! Display formatting for event timestamps.
//!
//! The fetch service reports event start times as naive UTC strings such as
//! `2021-06-15T15:04:00`. The UI shows them in US Eastern standard time as
//! `Tuesday Jun 15, 2021 10:04 AM`. The zone is a fixed UTC-5 offset; daylight
//! saving time is never applied.

use crate::domain::error::{EventSearchError, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};

/// Pattern of timestamps received from the fetch service.
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Pattern used for display: weekday, month, day, year, 12-hour time.
const DISPLAY_FORMAT: &str = "%A %b %-d, %Y %-I:%M %p";

/// Offset of "EST" west of UTC, in seconds.
const EASTERN_OFFSET_SECS: i32 = 5 * 3600;

fn eastern() -> FixedOffset {
    FixedOffset::west_opt(EASTERN_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parses a service timestamp as UTC and converts it to Eastern standard time.
///
/// # Errors
///
/// Returns [`EventSearchError::DateParse`] if `input` does not match
/// `yyyy-MM-ddTHH:mm:ss` exactly (trailing characters are rejected).
///
/// # Examples
///
/// ```
/// use eventsearch::domain::date::parse_event_date;
///
/// let local = parse_event_date("2021-06-15T15:04:00")?;
/// assert_eq!(local.to_rfc3339(), "2021-06-15T10:04:00-05:00");
/// # Ok::<(), eventsearch::EventSearchError>(())
/// ```
pub fn parse_event_date(input: &str) -> Result<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(input, INPUT_FORMAT).map_err(|source| {
        EventSearchError::DateParse {
            input: input.to_string(),
            source,
        }
    })?;

    Ok(naive.and_utc().with_timezone(&eastern()))
}

/// Formats a service timestamp for display.
///
/// Returns an empty string when the input cannot be parsed; the failure is
/// reported at error level instead of aborting.
///
/// # Examples
///
/// ```
/// use eventsearch::format_date;
///
/// assert_eq!(format_date("2021-06-15T15:04:00"), "Tuesday Jun 15, 2021 10:04 AM");
/// assert_eq!(format_date("not-a-date"), "");
/// ```
#[must_use]
pub fn format_date(input: &str) -> String {
    match parse_event_date(input) {
        Ok(local) => local.format(DISPLAY_FORMAT).to_string(),
        Err(e) => {
            tracing::error!(error = %e, "no date from string");
            String::new()
        }
    }
}
