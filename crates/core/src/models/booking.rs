use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Rescheduled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Rescheduled => "rescheduled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "cancelled" => Some(BookingStatus::Cancelled),
            "rescheduled" => Some(BookingStatus::Rescheduled),
            _ => None,
        }
    }
}

/// A committed lesson reservation. Status transitions are the only
/// mutations; the occupied interval is
/// `[scheduled_time, scheduled_time + duration_minutes)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub student_id: Uuid,
    pub scheduled_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: BookingStatus,
    pub pickup_address: String,
    pub notes: Option<String>,
    pub cancellation_fee: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn end_time(&self) -> DateTime<Utc> {
        interval::end_of(self.scheduled_time, self.duration_minutes)
    }

    /// Active bookings are the ones that occupy time: not cancelled or
    /// rescheduled, and not already over.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !matches!(
            self.status,
            BookingStatus::Cancelled | BookingStatus::Rescheduled
        ) && self.end_time() > now
    }

    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        interval::overlaps(self.scheduled_time, self.end_time(), start, end)
    }
}

/// One lesson in an atomic bulk-create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub instructor_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub pickup_address: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingBatchRequest {
    pub student_id: Uuid,
    pub selections: Vec<BookingRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedLessonResponse {
    pub id: Uuid,
    pub instructor_id: Uuid,
    pub scheduled_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: BookingStatus,
    pub pickup_address: String,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingBatchResponse {
    pub bookings: Vec<BookedLessonResponse>,
    pub total_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetStudentBookingsResponse {
    pub student_id: Uuid,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingResponse {
    pub id: Uuid,
    pub status: BookingStatus,
    pub cancellation_fee: f64,
}
