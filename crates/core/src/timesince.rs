//! Humanized "time since" strings for wallpost timestamps.
//!
//! Produces the coarse, single-unit wording the frontend shows next to
//! a post ("3 hours ago"). Anything under a minute reads "just now";
//! future timestamps (clock skew) are treated the same way.

use crate::types::Timestamp;

/// Render the age of `created` relative to `now` as a human string.
pub fn timesince(created: Timestamp, now: Timestamp) -> String {
    let secs = (now - created).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let (amount, unit) = if secs < 3600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3600, "hour")
    } else if secs < 2_592_000 {
        (secs / 86_400, "day")
    } else if secs < 31_536_000 {
        (secs / 2_592_000, "month")
    } else {
        (secs / 31_536_000, "year")
    };

    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}
