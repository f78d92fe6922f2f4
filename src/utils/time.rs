//! Time utilities: parsing HH:MM, duration computations, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Strict variant for CLI input: a bad value is a user error, unlike the
/// lenient parsing inside the calculators. Requires the zero-padded form,
/// since stored times are compared lexicographically.
pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    if t.len() != 5 {
        return Err(AppError::InvalidTime(t.to_string()));
    }
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

pub fn now_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
