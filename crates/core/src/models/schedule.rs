use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recurring working window for one weekday of an instructor's week.
///
/// Owned by the instructor; the engine only reads these. Slot generation
/// treats the window as half-open `[start_time, end_time)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyScheduleEntry {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub day_of_week: Weekday,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Instructor-declared absence. Both endpoints are inclusive: any date
/// inside the range is wholly unavailable regardless of the weekly schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffPeriod {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TimeOffPeriod {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetInstructorScheduleResponse {
    pub instructor_id: Uuid,
    pub entries: Vec<WeeklyScheduleEntry>,
    pub time_off: Vec<TimeOffPeriod>,
}
