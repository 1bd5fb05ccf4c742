use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conflict::SlotStatus;

/// A derived candidate lesson interval of fixed duration.
///
/// Slots are generated fresh per query and never persisted. `is_booked`
/// reflects the instructor's confirmed bookings at generation time only;
/// the atomic commit re-validates server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: u32,
    pub is_booked: bool,
}

impl TimeSlot {
    /// True when this slot's interval overlaps `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        crate::interval::overlaps(self.start_time, self.end_time, start, end)
    }
}

/// A slot plus its selectability classification. `status` is only present
/// when the caller identified the student whose bookings were checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedSlot {
    #[serde(flatten)]
    pub slot: TimeSlot,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SlotStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<AnnotatedSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSlotsResponse {
    pub instructor_id: Uuid,
    pub duration_minutes: u32,
    pub days: Vec<DaySlotsResponse>,
}
