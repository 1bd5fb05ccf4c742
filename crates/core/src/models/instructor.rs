use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat per-instructor fee added to every lesson when the instructor has
/// not set one of their own.
pub const DEFAULT_BOOKING_FEE: f64 = 20.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    pub id: Uuid,
    pub name: String,
    pub hourly_rate: f64,
    pub booking_fee: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Instructor {
    pub fn booking_fee(&self) -> f64 {
        self.booking_fee.unwrap_or(DEFAULT_BOOKING_FEE)
    }
}
