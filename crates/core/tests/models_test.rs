use chrono::{NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use pretty_assertions::assert_eq;
use serde_json::{from_str, to_string};
use uuid::Uuid;

use lessonbook_core::models::{
    booking::{Booking, BookingStatus},
    instructor::Instructor,
    schedule::{TimeOffPeriod, WeeklyScheduleEntry},
    slot::TimeSlot,
};

#[test]
fn test_weekly_schedule_entry_serialization() {
    let entry = WeeklyScheduleEntry {
        id: Uuid::new_v4(),
        instructor_id: Uuid::new_v4(),
        day_of_week: Weekday::Mon,
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    };

    let json = to_string(&entry).expect("Failed to serialize schedule entry");
    let deserialized: WeeklyScheduleEntry =
        from_str(&json).expect("Failed to deserialize schedule entry");

    assert_eq!(deserialized.id, entry.id);
    assert_eq!(deserialized.day_of_week, entry.day_of_week);
    assert_eq!(deserialized.start_time, entry.start_time);
    assert_eq!(deserialized.end_time, entry.end_time);
}

#[test]
fn test_time_off_period_contains_inclusive_endpoints() {
    let period = TimeOffPeriod {
        id: Uuid::new_v4(),
        instructor_id: Uuid::new_v4(),
        start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 6).unwrap(),
    };

    assert!(period.contains(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    assert!(period.contains(NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()));
    assert!(period.contains(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()));
    assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()));
    assert!(!period.contains(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
}

#[test]
fn test_time_slot_serialization() {
    let start = Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap();
    let slot = TimeSlot {
        start_time: start,
        end_time: start + chrono::Duration::hours(1),
        duration_minutes: 60,
        is_booked: false,
    };

    let json = to_string(&slot).expect("Failed to serialize time slot");
    let deserialized: TimeSlot = from_str(&json).expect("Failed to deserialize time slot");

    assert_eq!(deserialized, slot);
}

#[test]
fn test_booking_status_round_trip() {
    for status in [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Rescheduled,
    ] {
        assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(BookingStatus::parse("unknown"), None);
}

#[test]
fn test_booking_active_states() {
    let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
    let mut booking = Booking {
        id: Uuid::new_v4(),
        instructor_id: Uuid::new_v4(),
        student_id: Uuid::new_v4(),
        scheduled_time: Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap(),
        duration_minutes: 60,
        status: BookingStatus::Confirmed,
        pickup_address: "12 High Street".to_string(),
        notes: None,
        cancellation_fee: None,
        created_at: now,
    };

    assert!(booking.is_active(now));
    assert_eq!(
        booking.end_time(),
        Utc.with_ymd_and_hms(2025, 6, 2, 15, 0, 0).unwrap()
    );

    booking.status = BookingStatus::Cancelled;
    assert!(!booking.is_active(now));

    booking.status = BookingStatus::Confirmed;
    booking.scheduled_time = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
    // Ended before now.
    assert!(!booking.is_active(now));
}

#[test]
fn test_instructor_booking_fee_default() {
    let mut instructor = Instructor {
        id: Uuid::new_v4(),
        name: "Dana Levi".to_string(),
        hourly_rate: 300.0,
        booking_fee: None,
        created_at: Utc::now(),
    };

    assert_eq!(instructor.booking_fee(), 20.0);

    instructor.booking_fee = Some(35.0);
    assert_eq!(instructor.booking_fee(), 35.0);
}
