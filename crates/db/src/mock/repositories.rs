use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use lessonbook_core::models::booking::BookingRequest;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbInstructor, DbScheduleEntry, DbTimeOffPeriod};
use crate::repositories::booking::BatchCreateOutcome;

// Mock repositories for testing
mock! {
    pub InstructorRepo {
        pub async fn create_instructor(
            &self,
            name: &'static str,
            hourly_rate: f64,
            booking_fee: Option<f64>,
        ) -> eyre::Result<DbInstructor>;

        pub async fn get_instructor_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbInstructor>>;
    }
}

mock! {
    pub ScheduleRepo {
        pub async fn create_schedule_entry(
            &self,
            instructor_id: Uuid,
            day_of_week: i16,
            start_time: NaiveTime,
            end_time: NaiveTime,
        ) -> eyre::Result<DbScheduleEntry>;

        pub async fn get_schedule_entries_by_instructor(
            &self,
            instructor_id: Uuid,
        ) -> eyre::Result<Vec<DbScheduleEntry>>;

        pub async fn create_time_off_period(
            &self,
            instructor_id: Uuid,
            start_date: NaiveDate,
            end_date: NaiveDate,
        ) -> eyre::Result<DbTimeOffPeriod>;

        pub async fn get_time_off_by_instructor(
            &self,
            instructor_id: Uuid,
        ) -> eyre::Result<Vec<DbTimeOffPeriod>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn create_bookings_atomic(
            &self,
            student_id: Uuid,
            requests: Vec<BookingRequest>,
        ) -> eyre::Result<BatchCreateOutcome>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_active_bookings_by_student(
            &self,
            student_id: Uuid,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn get_confirmed_bookings_for_instructor(
            &self,
            instructor_id: Uuid,
            range_start: DateTime<Utc>,
            range_end: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn cancel_booking(
            &self,
            id: Uuid,
            cancellation_fee: f64,
        ) -> eyre::Result<Option<DbBooking>>;
    }
}
