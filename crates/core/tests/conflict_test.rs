use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use lessonbook_core::conflict::{classify, SlotStatus};
use lessonbook_core::models::{
    booking::{Booking, BookingStatus},
    slot::TimeSlot,
};

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, hour, min, 0).unwrap()
}

fn slot(start: DateTime<Utc>, duration: u32, is_booked: bool) -> TimeSlot {
    TimeSlot {
        start_time: start,
        end_time: start + chrono::Duration::minutes(i64::from(duration)),
        duration_minutes: duration,
        is_booked,
    }
}

fn booking(instructor_id: Uuid, scheduled_time: DateTime<Utc>, duration: u32) -> Booking {
    Booking {
        id: Uuid::new_v4(),
        instructor_id,
        student_id: Uuid::new_v4(),
        scheduled_time,
        duration_minutes: duration,
        status: BookingStatus::Confirmed,
        pickup_address: "12 High Street".to_string(),
        notes: None,
        cancellation_fee: None,
        created_at: at(0, 0),
    }
}

#[test]
fn free_slot_with_no_bookings() {
    let instructor = Uuid::new_v4();
    let status = classify(&slot(at(9, 0), 60, false), instructor, &[], at(6, 0));
    assert_eq!(status, SlotStatus::Free);
    assert!(status.is_selectable());
    assert_eq!(status.detail(), None);
}

#[test]
fn overlap_with_other_instructor_is_different_instructor_conflict() {
    // Existing booking with instructor Y 09:00-10:00; candidate with X 09:30-10:30.
    let x = Uuid::new_v4();
    let y = Uuid::new_v4();
    let existing = booking(y, at(9, 0), 60);

    let status = classify(&slot(at(9, 30), 60, false), x, &[existing.clone()], at(6, 0));

    assert_eq!(
        status,
        SlotStatus::DifferentInstructorConflict {
            instructor_id: y,
            scheduled_time: existing.scheduled_time,
        }
    );
    assert!(status.detail().unwrap().contains("another instructor"));
}

#[test]
fn own_booking_with_same_instructor_is_same_instructor_conflict() {
    // Candidate 09:00-10:00 with X; the student already holds 09:00-10:00 with X.
    let x = Uuid::new_v4();
    let existing = booking(x, at(9, 0), 60);

    let status = classify(&slot(at(9, 0), 60, true), x, &[existing.clone()], at(6, 0));

    assert_eq!(
        status,
        SlotStatus::SameInstructorConflict {
            booking_id: existing.id,
            scheduled_time: existing.scheduled_time,
        }
    );
    assert!(status.detail().unwrap().contains("Cancel it first"));
}

#[test]
fn slot_booked_by_another_student_is_booked_by_other() {
    let x = Uuid::new_v4();
    let status = classify(&slot(at(9, 0), 60, true), x, &[], at(6, 0));
    assert_eq!(status, SlotStatus::BookedByOther);
}

#[test]
fn booked_by_other_outranks_different_instructor_conflict() {
    let x = Uuid::new_v4();
    let y = Uuid::new_v4();
    let existing = booking(y, at(9, 0), 60);

    let status = classify(&slot(at(9, 0), 60, true), x, &[existing], at(6, 0));

    assert_eq!(status, SlotStatus::BookedByOther);
}

#[test]
fn past_slot_outranks_everything() {
    let x = Uuid::new_v4();
    let existing = booking(x, at(9, 0), 60);

    let status = classify(&slot(at(9, 0), 60, true), x, &[existing], at(12, 0));

    assert_eq!(status, SlotStatus::Past);
}

#[test]
fn slot_starting_exactly_now_is_past() {
    let x = Uuid::new_v4();
    let status = classify(&slot(at(9, 0), 60, false), x, &[], at(9, 0));
    assert_eq!(status, SlotStatus::Past);
}

#[test]
fn cancelled_bookings_do_not_conflict() {
    let x = Uuid::new_v4();
    let mut existing = booking(x, at(9, 0), 60);
    existing.status = BookingStatus::Cancelled;

    let status = classify(&slot(at(9, 0), 60, false), x, &[existing], at(6, 0));

    assert_eq!(status, SlotStatus::Free);
}

#[test]
fn back_to_back_with_own_booking_is_free() {
    let x = Uuid::new_v4();
    let existing = booking(x, at(9, 0), 60);

    let status = classify(&slot(at(10, 0), 60, false), x, &[existing], at(6, 0));

    assert_eq!(status, SlotStatus::Free);
}
