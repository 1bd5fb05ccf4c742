//! # Lessonbook Core
//!
//! Domain models and the booking engine for the Lessonbook lesson-scheduling
//! service. Everything in this crate is pure: availability computation,
//! conflict classification, pricing, batch accumulation, and calendar
//! annotation all take their inputs (schedule entries, time-off periods,
//! existing bookings, and the current time) as plain values, so every
//! decision the engine makes is deterministic and testable without a
//! database or a clock.

/// Availability computation: weekly windows into fixed-duration slots
pub mod availability;
/// Selection accumulator for atomic batch commits
pub mod batch;
/// Calendar-wide day classification over a date horizon
pub mod calendar;
/// Candidate slot classification against a student's bookings
pub mod conflict;
/// Error taxonomy shared across all crates
pub mod errors;
/// Half-open interval arithmetic used by every overlap check
pub mod interval;
/// Domain model types
pub mod models;
/// Lesson, batch, and cancellation pricing
pub mod pricing;
