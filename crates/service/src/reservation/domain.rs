use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Stored reservation as seen by callers.
pub type Reservation = models::reservation::Model;

/// Create/update payload.
///
/// Every field is optional at the type level: create requires all of them,
/// update applies only those present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationInput {
    pub class_id: Option<i32>,
    pub professor_id: Option<i32>,
    pub room: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    /// `HH:MM`
    pub start_time: Option<String>,
    /// `HH:MM`
    pub end_time: Option<String>,
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a wall-clock time written as exactly `HH:MM`.
///
/// Seconds and single-digit hours are rejected; `24:00` is not a valid time.
pub fn parse_clock(raw: &str) -> Option<NaiveTime> {
    let b = raw.as_bytes();
    let shaped = b.len() == 5
        && b[2] == b':'
        && [0, 1, 3, 4].iter().all(|&i| b[i].is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}
