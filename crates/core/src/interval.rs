//! Half-open interval arithmetic.
//!
//! Every overlap decision in the engine goes through [`overlaps`] so the
//! comparison rule lives in exactly one place: two intervals `[a, b)` and
//! `[c, d)` conflict unless `b <= c` or `d <= a`. Back-to-back lessons
//! (one ending exactly when the next starts) never conflict.

use chrono::{DateTime, Duration, Utc};

/// Returns true when `[a_start, a_end)` and `[b_start, b_end)` overlap.
pub fn overlaps(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Fractional hours from `now` until `moment`; negative when `moment` has
/// already passed.
pub fn hours_until(now: DateTime<Utc>, moment: DateTime<Utc>) -> f64 {
    let seconds = (moment - now).num_seconds();
    seconds as f64 / 3600.0
}

/// End of an interval that starts at `start` and runs for `duration_minutes`.
pub fn end_of(start: DateTime<Utc>, duration_minutes: u32) -> DateTime<Utc> {
    start + Duration::minutes(i64::from(duration_minutes))
}
