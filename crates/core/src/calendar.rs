//! # Calendar Annotation
//!
//! Precomputes, for a date horizon, which dates have no working hours, are
//! on time-off, or are fully booked, so a calendar view can paint
//! affordances without issuing a slot query per tapped date. Pure derived
//! data; carries no write semantics.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::availability;
use crate::models::{
    booking::Booking,
    schedule::{TimeOffPeriod, WeeklyScheduleEntry},
};

/// Default and maximum annotation horizon, in days from the start date.
pub const DEFAULT_HORIZON_DAYS: u32 = 90;
pub const MAX_HORIZON_DAYS: u32 = 90;

/// Mutually exclusive day classification, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// No weekly schedule entry for this weekday.
    NoSchedule,
    /// Inside an instructor time-off period.
    TimeOff,
    /// Slots exist for this date and every one of them is booked.
    FullyBooked,
    /// At least one slot is open.
    Open,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAnnotation {
    pub date: NaiveDate,
    pub status: DayStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCalendarResponse {
    pub instructor_id: uuid::Uuid,
    pub days: Vec<DayAnnotation>,
}

/// Classifies each date in `[start_date, start_date + horizon_days)`
/// exactly once. `horizon_days` is clamped to [`MAX_HORIZON_DAYS`].
pub fn annotate(
    entries: &[WeeklyScheduleEntry],
    time_off: &[TimeOffPeriod],
    bookings: &[Booking],
    start_date: NaiveDate,
    horizon_days: u32,
    duration_minutes: u32,
) -> Vec<DayAnnotation> {
    let horizon = horizon_days.min(MAX_HORIZON_DAYS);
    (0..horizon)
        .map(|offset| {
            let date = start_date + Duration::days(i64::from(offset));
            DayAnnotation {
                date,
                status: classify_date(entries, time_off, bookings, date, duration_minutes),
            }
        })
        .collect()
}

fn classify_date(
    entries: &[WeeklyScheduleEntry],
    time_off: &[TimeOffPeriod],
    bookings: &[Booking],
    date: NaiveDate,
    duration_minutes: u32,
) -> DayStatus {
    if !entries.iter().any(|e| e.day_of_week == date.weekday()) {
        return DayStatus::NoSchedule;
    }
    if time_off.iter().any(|period| period.contains(date)) {
        return DayStatus::TimeOff;
    }
    let slots = availability::day_slots(entries, time_off, bookings, date, duration_minutes, true);
    if !slots.is_empty() && slots.iter().all(|s| s.is_booked) {
        return DayStatus::FullyBooked;
    }
    DayStatus::Open
}
