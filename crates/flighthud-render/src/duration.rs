//! Compact duration text from a calendar breakdown.

use crate::clock::Clock;

/// Formats a duration breakdown coarsest-to-finest, skipping zero tiers:
///
/// - years > 0: `"{years+1}y, {days+1}d, HH:MM:SS"`
/// - days > 0: `"{days+1}d, HH:MM:SS"`
/// - otherwise: `"HH:MM:SS"`
///
/// The clock stays zero-padded to two digits; years and days are not
/// padded. Durations (a span of time, not a date) carry the source
/// system's `+1` display offset on both years and days. This is distinct
/// from the one-based day-of-year used when displaying a calendar *date*;
/// do not unify the two.
///
/// # Example
///
/// ```rust
/// use flighthud_render::{format_duration, Clock};
///
/// let span = Clock { second: 3, minute: 2, hour: 1, day: 0, year: 0 };
/// assert_eq!(format_duration(span), "01:02:03");
/// ```
pub fn format_duration(span: Clock) -> String {
    let clock = format!("{:02}:{:02}:{:02}", span.hour, span.minute, span.second);
    if span.year > 0 {
        format!("{}y, {}d, {}", span.year + 1, span.day + 1, clock)
    } else if span.day > 0 {
        format!("{}d, {}", span.day + 1, clock)
    } else {
        clock
    }
}
