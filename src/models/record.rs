use super::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One attendance entry per (employee, calendar date).
///
/// Clock times stay as "HH:MM" strings: a malformed value stored by an older
/// snapshot must degrade to zero hours in the calculators, not break
/// deserialization of the whole collection. Dates are typed so month
/// filtering never relies on string comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate, // serialized "YYYY-MM-DD"
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    pub ot_hours: f64, // multiples of 0.5
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

impl AttendanceRecord {
    /// Record ids derive from (employee, date); uniqueness follows from the
    /// one-record-per-day invariant.
    pub fn make_id(user_id: &str, date: NaiveDate) -> String {
        format!("REC-{}-{}", user_id, date.format("%Y-%m-%d"))
    }

    /// Constructor for the clock-in path.
    pub fn open(user_id: &str, date: NaiveDate, time: &str, note: Option<String>) -> Self {
        Self {
            id: Self::make_id(user_id, date),
            user_id: user_id.to_string(),
            date,
            clock_in: Some(time.to_string()),
            clock_out: None,
            ot_hours: 0.0,
            status: AttendanceStatus::Present,
            note,
        }
    }

    /// Constructor for the batch-mark path: status only, no clock data.
    pub fn marked(user_id: &str, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id: Self::make_id(user_id, date),
            user_id: user_id.to_string(),
            date,
            clock_in: None,
            clock_out: None,
            ot_hours: 0.0,
            status,
            note: None,
        }
    }

    /// A record is open until its clock-out lands.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}
