//! # Booking Batch
//!
//! Explicit accumulator for a student's in-progress slot selections with
//! one instructor. The batch is a plain value the caller owns and passes
//! around; nothing here touches the network or a database. Commit
//! validation runs locally, and [`BookingBatch::to_requests`] produces the
//! payload for the atomic bulk-create operation. On a failed commit the
//! caller simply keeps the batch and retries or edits it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::{booking::BookingRequest, slot::TimeSlot};
use crate::pricing;

/// One selected slot awaiting commit. Not persisted until the batch
/// submission succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedBooking {
    pub date: NaiveDate,
    pub slot: TimeSlot,
    pub pickup_address: String,
}

/// A student's pending selections with a single instructor.
///
/// All selections share one lesson duration; selecting a slot of a
/// different duration is rejected so the caller re-selects after a
/// duration change instead of silently mixing prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingBatch {
    pub instructor_id: Uuid,
    selections: Vec<SelectedBooking>,
}

impl BookingBatch {
    pub fn new(instructor_id: Uuid) -> Self {
        Self {
            instructor_id,
            selections: Vec::new(),
        }
    }

    pub fn selections(&self) -> &[SelectedBooking] {
        &self.selections
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Duration shared by every selection, when any exist.
    pub fn duration_minutes(&self) -> Option<u32> {
        self.selections.first().map(|s| s.slot.duration_minutes)
    }

    /// Adds a selection. Rejects a duration differing from the batch's
    /// established one and exact duplicates of an existing selection.
    pub fn add(&mut self, selection: SelectedBooking) -> BookingResult<()> {
        if let Some(duration) = self.duration_minutes() {
            if selection.slot.duration_minutes != duration {
                return Err(BookingError::Validation(format!(
                    "Lesson duration changed from {} to {} minutes. Please re-select your slots.",
                    duration, selection.slot.duration_minutes
                )));
            }
        }
        if self.contains(&selection.slot) {
            return Err(BookingError::Validation(
                "This slot is already selected".to_string(),
            ));
        }
        self.selections.push(selection);
        Ok(())
    }

    /// Removes the selection for `slot`, returning whether one was present.
    pub fn remove(&mut self, slot: &TimeSlot) -> bool {
        let before = self.selections.len();
        self.selections
            .retain(|s| s.slot.start_time != slot.start_time);
        self.selections.len() != before
    }

    /// Adds the selection, or removes it if the same slot is already in the
    /// batch. Returns true when the slot ends up selected.
    pub fn toggle(&mut self, selection: SelectedBooking) -> BookingResult<bool> {
        if self.remove(&selection.slot) {
            return Ok(false);
        }
        self.add(selection)?;
        Ok(true)
    }

    /// Drops every selection, e.g. after the requested duration changes.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.selections
            .iter()
            .any(|s| s.slot.start_time == slot.start_time)
    }

    /// Running total for the current selections.
    pub fn total_price(&self, hourly_rate: f64, booking_fee: Option<f64>) -> f64 {
        match self.duration_minutes() {
            Some(duration) => {
                pricing::batch_total(hourly_rate, booking_fee, duration, self.selections.len())
            }
            None => 0.0,
        }
    }

    /// Local pre-submit validation. Failures here never reach the network.
    pub fn validate_for_commit(&self) -> BookingResult<()> {
        if self.selections.is_empty() {
            return Err(BookingError::Validation(
                "No slot selected. Select at least one lesson time.".to_string(),
            ));
        }
        if self
            .selections
            .iter()
            .any(|s| s.pickup_address.trim().is_empty())
        {
            return Err(BookingError::Validation(
                "Pickup address is required for every selected lesson".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the payload for the atomic bulk-create operation. Validates
    /// first so an invalid batch can never produce a request.
    pub fn to_requests(&self, notes: Option<&str>) -> BookingResult<Vec<BookingRequest>> {
        self.validate_for_commit()?;
        Ok(self
            .selections
            .iter()
            .map(|s| BookingRequest {
                instructor_id: self.instructor_id,
                start_time: s.slot.start_time,
                duration_minutes: s.slot.duration_minutes,
                pickup_address: s.pickup_address.clone(),
                notes: notes.map(str::to_string),
            })
            .collect())
    }
}
