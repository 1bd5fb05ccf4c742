//! # Pricing
//!
//! Per-lesson price, batch totals, and cancellation fees. All amounts are
//! products of an hourly rate and a fraction of an hour plus a flat fee,
//! so the arithmetic stays exact for the usual 30/60/90/120-minute
//! durations.

use chrono::{DateTime, Utc};

use crate::interval;
use crate::models::instructor::DEFAULT_BOOKING_FEE;

/// Cancellations strictly inside this window incur a fee.
pub const CANCELLATION_WINDOW_HOURS: f64 = 6.0;

/// Fraction of the lesson price charged for a late cancellation.
pub const LATE_CANCELLATION_RATE: f64 = 0.5;

/// Price of one lesson: `hourly_rate * duration/60 + booking_fee`, the fee
/// defaulting per instructor when unset.
pub fn lesson_price(hourly_rate: f64, booking_fee: Option<f64>, duration_minutes: u32) -> f64 {
    hourly_rate * (f64::from(duration_minutes) / 60.0) + booking_fee.unwrap_or(DEFAULT_BOOKING_FEE)
}

/// Total for a batch of `lesson_count` lessons of one shared duration.
pub fn batch_total(
    hourly_rate: f64,
    booking_fee: Option<f64>,
    duration_minutes: u32,
    lesson_count: usize,
) -> f64 {
    lesson_price(hourly_rate, booking_fee, duration_minutes) * lesson_count as f64
}

/// Fee owed for cancelling a lesson scheduled at `scheduled_time`.
///
/// Half the lesson price (rate portion only, no booking fee) when the
/// lesson starts strictly less than six hours from `now`; zero otherwise.
/// Exactly six hours out resolves to no fee.
pub fn cancellation_fee(
    hourly_rate: f64,
    duration_minutes: u32,
    scheduled_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let hours_until = interval::hours_until(now, scheduled_time);
    if hours_until < CANCELLATION_WINDOW_HOURS {
        hourly_rate * (f64::from(duration_minutes) / 60.0) * LATE_CANCELLATION_RATE
    } else {
        0.0
    }
}
