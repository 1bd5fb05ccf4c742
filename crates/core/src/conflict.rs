//! # Conflict Classification
//!
//! Classifies a candidate slot against the student's own active bookings
//! across all instructors. Exactly one status applies per slot; the
//! priority order is past, then the student's own same-instructor booking,
//! then booked-by-another-student, then a different-instructor overlap,
//! then free.
//!
//! A same-instructor conflict outranks `BookedByOther` on purpose: the
//! overlapping booking is the student's own, so the slot is shown with a
//! "cancel your existing lesson first" detail instead of being silently
//! disabled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{booking::Booking, slot::TimeSlot};

/// Mutually exclusive selectability status of one candidate slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotStatus {
    /// Selectable.
    Free,
    /// The student already holds an overlapping lesson with this instructor.
    SameInstructorConflict {
        booking_id: Uuid,
        scheduled_time: DateTime<Utc>,
    },
    /// The student has an overlapping lesson with another instructor.
    DifferentInstructorConflict {
        instructor_id: Uuid,
        scheduled_time: DateTime<Utc>,
    },
    /// Another student holds this slot.
    BookedByOther,
    /// The slot's start time is not in the future.
    Past,
}

impl SlotStatus {
    pub fn is_selectable(&self) -> bool {
        matches!(self, SlotStatus::Free)
    }

    /// Instructor/time-specific detail for conflict remediation messages.
    pub fn detail(&self) -> Option<String> {
        match self {
            SlotStatus::SameInstructorConflict { scheduled_time, .. } => Some(format!(
                "You already have a lesson with this instructor at {}. Cancel it first to rebook this time.",
                scheduled_time.format("%Y-%m-%d %H:%M")
            )),
            SlotStatus::DifferentInstructorConflict {
                instructor_id,
                scheduled_time,
            } => Some(format!(
                "You have a lesson with another instructor ({}) at {}.",
                instructor_id,
                scheduled_time.format("%Y-%m-%d %H:%M")
            )),
            SlotStatus::BookedByOther => Some("This time is already booked.".to_string()),
            SlotStatus::Past => Some("This time has already passed.".to_string()),
            SlotStatus::Free => None,
        }
    }
}

/// Classifies `slot` (offered by `instructor_id`) against the student's
/// bookings. `student_bookings` may span any number of instructors; only
/// ones active at `now` are considered.
pub fn classify(
    slot: &TimeSlot,
    instructor_id: Uuid,
    student_bookings: &[Booking],
    now: DateTime<Utc>,
) -> SlotStatus {
    if slot.start_time <= now {
        return SlotStatus::Past;
    }

    // First overlapping active booking decides same- vs different-instructor.
    let own_conflict = student_bookings
        .iter()
        .filter(|b| b.is_active(now))
        .find(|b| slot.overlaps(b.scheduled_time, b.end_time()));

    if let Some(booking) = own_conflict {
        if booking.instructor_id == instructor_id {
            return SlotStatus::SameInstructorConflict {
                booking_id: booking.id,
                scheduled_time: booking.scheduled_time,
            };
        }
        if slot.is_booked {
            return SlotStatus::BookedByOther;
        }
        return SlotStatus::DifferentInstructorConflict {
            instructor_id: booking.instructor_id,
            scheduled_time: booking.scheduled_time,
        };
    }

    if slot.is_booked {
        return SlotStatus::BookedByOther;
    }

    SlotStatus::Free
}
