use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use lessonbook_core::calendar::{annotate, DayStatus, MAX_HORIZON_DAYS};
use lessonbook_core::models::{
    booking::{Booking, BookingStatus},
    schedule::{TimeOffPeriod, WeeklyScheduleEntry},
};

fn entry(instructor_id: Uuid, day: Weekday, start: &str, end: &str) -> WeeklyScheduleEntry {
    WeeklyScheduleEntry {
        id: Uuid::new_v4(),
        instructor_id,
        day_of_week: day,
        start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
        end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
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
        created_at: Utc::now(),
    }
}

// 2025-06-02 is a Monday.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

#[test]
fn classifies_one_week_with_all_four_statuses() {
    let instructor = Uuid::new_v4();
    // Works Mondays and Tuesdays only.
    let entries = vec![
        entry(instructor, Weekday::Mon, "09:00", "11:00"),
        entry(instructor, Weekday::Tue, "09:00", "11:00"),
    ];
    // Off on the Tuesday.
    let off = vec![TimeOffPeriod {
        id: Uuid::new_v4(),
        instructor_id: instructor,
        start_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
    }];
    // Both Monday slots taken.
    let bookings = vec![
        booking(
            instructor,
            Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
            60,
        ),
        booking(
            instructor,
            Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap(),
            60,
        ),
    ];

    let days = annotate(&entries, &off, &bookings, monday(), 9, 60);

    assert_eq!(days.len(), 9);
    assert_eq!(days[0].status, DayStatus::FullyBooked); // Mon
    assert_eq!(days[1].status, DayStatus::TimeOff); // Tue (off)
    assert_eq!(days[2].status, DayStatus::NoSchedule); // Wed
    assert_eq!(days[7].status, DayStatus::Open); // next Mon
    assert_eq!(days[8].status, DayStatus::Open); // next Tue
}

#[test]
fn no_schedule_outranks_time_off() {
    let instructor = Uuid::new_v4();
    let entries = vec![entry(instructor, Weekday::Tue, "09:00", "11:00")];
    // Time-off covering a Monday the instructor never works anyway.
    let off = vec![TimeOffPeriod {
        id: Uuid::new_v4(),
        instructor_id: instructor,
        start_date: monday(),
        end_date: monday(),
    }];

    let days = annotate(&entries, &off, &[], monday(), 1, 60);

    assert_eq!(days[0].status, DayStatus::NoSchedule);
}

#[test]
fn partially_booked_day_is_open() {
    let instructor = Uuid::new_v4();
    let entries = vec![entry(instructor, Weekday::Mon, "09:00", "11:00")];
    let bookings = vec![booking(
        instructor,
        Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
        60,
    )];

    let days = annotate(&entries, &[], &bookings, monday(), 1, 60);

    assert_eq!(days[0].status, DayStatus::Open);
}

#[test]
fn every_booked_slot_marks_date_fully_booked() {
    let instructor = Uuid::new_v4();
    let entries = vec![entry(instructor, Weekday::Mon, "09:00", "10:00")];
    let bookings = vec![booking(
        instructor,
        Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap(),
        60,
    )];

    let days = annotate(&entries, &[], &bookings, monday(), 1, 60);

    assert_eq!(days[0].status, DayStatus::FullyBooked);
}

#[test]
fn horizon_is_clamped_to_maximum() {
    let instructor = Uuid::new_v4();
    let entries = vec![entry(instructor, Weekday::Mon, "09:00", "11:00")];

    let days = annotate(&entries, &[], &[], monday(), 365, 60);

    assert_eq!(days.len(), MAX_HORIZON_DAYS as usize);
}
