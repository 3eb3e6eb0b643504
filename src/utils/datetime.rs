//! Display-string formatting for clock pairs
//!
//! These functions turn cached offset/DST values into the strings shown to
//! the user. Their output is a compatibility surface: other front-ends parse
//! and snapshot these exact shapes, so keep them stable.

use chrono::{LocalResult, TimeZone, Utc};

use crate::constants::{CLOCK_PLACEHOLDER, DIFF_PLACEHOLDER};

/// 12-hour clock with date, e.g. "18 Nov 2025, 06:01:32 PM"
pub const CLOCK_FORMAT: &str = "%d %b %Y, %I:%M:%S %p";

/// Format a zone's local wall clock from a UTC instant and its cached
/// offset. `None` (no cache row) renders the `--` placeholder.
///
/// The local time is `utc_ms + offset_minutes * 60_000`, rendered with UTC
/// arithmetic so the result depends only on the cached offset, never on the
/// process's own time zone.
pub fn format_clock(utc_ms: i64, offset_minutes: Option<i32>) -> String {
    let Some(offset) = offset_minutes else {
        return CLOCK_PLACEHOLDER.to_string();
    };

    let shifted = utc_ms + i64::from(offset) * 60_000;
    match Utc.timestamp_millis_opt(shifted) {
        LocalResult::Single(dt) => dt.format(CLOCK_FORMAT).to_string(),
        _ => CLOCK_PLACEHOLDER.to_string(),
    }
}

/// Format the offset difference `to - from` as "Time difference: +H:MM hrs".
/// Zero is signed `+`. Either side missing renders "Time difference: ?".
pub fn difference_text(from_offset: Option<i32>, to_offset: Option<i32>) -> String {
    let (Some(from), Some(to)) = (from_offset, to_offset) else {
        return DIFF_PLACEHOLDER.to_string();
    };

    // Cached offsets already fold DST in, so a plain subtraction is the
    // full story.
    let diff = to - from;
    let sign = if diff >= 0 { '+' } else { '-' };
    let abs = diff.unsigned_abs();
    format!("Time difference: {sign}{}:{:02} hrs", abs / 60, abs % 60)
}

/// Format the DST status line for both sides, e.g.
/// "From DST: active (+1:00 hrs) | To DST: inactive".
pub fn dst_text(from_dst: Option<bool>, to_dst: Option<bool>) -> String {
    format!("{} | {}", dst_side("From", from_dst), dst_side("To", to_dst))
}

fn dst_side(label: &str, dst_active: Option<bool>) -> String {
    match dst_active {
        // The "(+1:00 hrs)" annotation is a fixed label, not the zone's
        // actual DST delta.
        Some(true) => format!("{label} DST: active (+1:00 hrs)"),
        Some(false) => format!("{label} DST: inactive"),
        None => format!("{label} DST: ?"),
    }
}
