use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use lessonbook_core::models::{
    booking::{Booking, BookingStatus},
    instructor::Instructor,
    schedule::{TimeOffPeriod, WeeklyScheduleEntry},
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInstructor {
    pub id: Uuid,
    pub name: String,
    pub hourly_rate: f64,
    pub booking_fee: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<DbInstructor> for Instructor {
    fn from(row: DbInstructor) -> Self {
        Instructor {
            id: row.id,
            name: row.name,
            hourly_rate: row.hourly_rate,
            booking_fee: row.booking_fee,
            created_at: row.created_at,
        }
    }
}

/// `day_of_week` is stored as days from Monday (0 = Mon .. 6 = Sun).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbScheduleEntry {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub day_of_week: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

pub fn weekday_to_db(day: Weekday) -> i16 {
    day.num_days_from_monday() as i16
}

pub fn weekday_from_db(day: i16) -> Weekday {
    match day.rem_euclid(7) {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

impl From<DbScheduleEntry> for WeeklyScheduleEntry {
    fn from(row: DbScheduleEntry) -> Self {
        WeeklyScheduleEntry {
            id: row.id,
            instructor_id: row.instructor_id,
            day_of_week: weekday_from_db(row.day_of_week),
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeOffPeriod {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<DbTimeOffPeriod> for TimeOffPeriod {
    fn from(row: DbTimeOffPeriod) -> Self {
        TimeOffPeriod {
            id: row.id,
            instructor_id: row.instructor_id,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub student_id: Uuid,
    pub scheduled_time: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: String,
    pub pickup_address: String,
    pub notes: Option<String>,
    pub cancellation_fee: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<DbBooking> for Booking {
    fn from(row: DbBooking) -> Self {
        Booking {
            id: row.id,
            instructor_id: row.instructor_id,
            student_id: row.student_id,
            scheduled_time: row.scheduled_time,
            duration_minutes: row.duration_minutes.max(0) as u32,
            // Unknown statuses are treated as cancelled so they never
            // occupy a slot by accident.
            status: BookingStatus::parse(&row.status).unwrap_or(BookingStatus::Cancelled),
            pickup_address: row.pickup_address,
            notes: row.notes,
            cancellation_fee: row.cancellation_fee,
            created_at: row.created_at,
        }
    }
}
