pub mod booking;
pub mod instructor;
pub mod schedule;
pub mod slot;
