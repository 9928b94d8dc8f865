//! Civil-hour labels and timestamp → local hour conversion.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

/// Number of hour buckets in a histogram.
pub const HOURS_PER_DAY: usize = 24;

/// Bucket labels in hour order, `"12am"` through `"11pm"`.
pub const HOUR_LABELS: [&str; HOURS_PER_DAY] = [
    "12am", "1am", "2am", "3am", "4am", "5am", "6am", "7am", "8am", "9am", "10am", "11am", "12pm",
    "1pm", "2pm", "3pm", "4pm", "5pm", "6pm", "7pm", "8pm", "9pm", "10pm", "11pm",
];

/// Formats a 24-hour clock hour as a 12-hour label with no leading zero.
///
/// # Example
///
/// ```rust
/// use chatstats::core::hours::hour_label;
///
/// assert_eq!(hour_label(0), "12am");
/// assert_eq!(hour_label(12), "12pm");
/// assert_eq!(hour_label(13), "1pm");
/// ```
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "am" } else { "pm" };
    let clock = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{clock}{suffix}")
}

/// Local hour (0..=23) of an epoch-millisecond timestamp in `tz`.
///
/// Returns `None` for timestamps outside chrono's representable range.
pub fn local_hour(timestamp_ms: i64, tz: Tz) -> Option<usize> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|utc| utc.with_timezone(&tz).hour() as usize)
}
