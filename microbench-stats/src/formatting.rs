//! Duration Formatting
//!
//! Renders durations as `H:MM:SS.ffffff`: hours unpadded, minutes and seconds
//! zero-padded to two digits, then six fractional digits (microseconds).

use std::time::Duration;

const MICROS_PER_SECOND: u128 = 1_000_000;
const MICROS_PER_MINUTE: u128 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: u128 = 60 * MICROS_PER_MINUTE;

/// Format a duration for human display, truncated to whole microseconds.
///
/// ```
/// use std::time::Duration;
/// use microbench_stats::format_duration;
///
/// assert_eq!(format_duration(Duration::from_micros(10_250)), "0:00:00.010250");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();

    let hours = micros / MICROS_PER_HOUR;
    let minutes = (micros % MICROS_PER_HOUR) / MICROS_PER_MINUTE;
    let seconds = (micros % MICROS_PER_MINUTE) / MICROS_PER_SECOND;
    let fraction = micros % MICROS_PER_SECOND;

    format!("{hours}:{minutes:02}:{seconds:02}.{fraction:06}")
}

/// Shorthand for [`format_duration`] on a microsecond count.
pub fn format_micros(micros: u64) -> String {
    format_duration(Duration::from_micros(micros))
}
