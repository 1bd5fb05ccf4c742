//! # Availability Computation
//!
//! Turns an instructor's recurring weekly schedule, declared time-off, and
//! existing confirmed bookings into the list of fixed-duration candidate
//! slots for a single date.
//!
//! The computation is deliberately strict about its inputs: callers fetch
//! schedule entries, time-off periods, and bookings up front and pass them
//! in as values. A failed fetch upstream means no slot list at all, never
//! a partial one.
//!
//! ## Slot generation rules
//!
//! 1. A date inside any time-off period (inclusive on both ends) yields no
//!    slots, regardless of the weekly schedule.
//! 2. A weekday without a schedule entry yields no slots.
//! 3. The `[start_time, end_time)` window is partitioned into consecutive
//!    non-overlapping slots of exactly the requested duration; a trailing
//!    remainder shorter than the duration is dropped.
//! 4. A slot is `is_booked` when it overlaps (half-open rule) any confirmed
//!    booking of the instructor.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{
    booking::{Booking, BookingStatus},
    schedule::{TimeOffPeriod, WeeklyScheduleEntry},
    slot::TimeSlot,
};

/// Generates the candidate slots for `date`.
///
/// `bookings` should be the instructor's bookings; only confirmed ones mark
/// slots as booked. When `include_booked` is false, booked slots are
/// filtered out of the result.
pub fn day_slots(
    entries: &[WeeklyScheduleEntry],
    time_off: &[TimeOffPeriod],
    bookings: &[Booking],
    date: NaiveDate,
    duration_minutes: u32,
    include_booked: bool,
) -> Vec<TimeSlot> {
    if duration_minutes == 0 {
        return Vec::new();
    }

    // Whole day off: no slots, whatever the weekly template says.
    if time_off.iter().any(|period| period.contains(date)) {
        return Vec::new();
    }

    let Some(entry) = entries.iter().find(|e| e.day_of_week == date.weekday()) else {
        return Vec::new();
    };

    let window_start = date.and_time(entry.start_time).and_utc();
    let window_end = date.and_time(entry.end_time).and_utc();
    let step = Duration::minutes(i64::from(duration_minutes));

    let confirmed: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .collect();

    let mut slots = Vec::new();
    let mut start = window_start;
    // Trailing remainder shorter than the duration is dropped.
    while start + step <= window_end {
        let end = start + step;
        let is_booked = confirmed.iter().any(|b| b.overlaps(start, end));
        if include_booked || !is_booked {
            slots.push(TimeSlot {
                start_time: start,
                end_time: end,
                duration_minutes,
                is_booked,
            });
        }
        start = end;
    }

    slots
}

/// Slots for every date in `[start_date, end_date]`, in date order.
/// Dates that yield no slots are omitted.
pub fn range_slots(
    entries: &[WeeklyScheduleEntry],
    time_off: &[TimeOffPeriod],
    bookings: &[Booking],
    start_date: NaiveDate,
    end_date: NaiveDate,
    duration_minutes: u32,
    include_booked: bool,
) -> Vec<(NaiveDate, Vec<TimeSlot>)> {
    let mut days = Vec::new();
    let mut date = start_date;
    while date <= end_date {
        let slots = day_slots(
            entries,
            time_off,
            bookings,
            date,
            duration_minutes,
            include_booked,
        );
        if !slots.is_empty() {
            days.push((date, slots));
        }
        date += Duration::days(1);
    }
    days
}
