//! Attendance record store: clock-in, clock-out and administrator batch
//! marking over the in-memory collection.
//!
//! Invariant: at most one record per (employee, calendar date). All three
//! entry points enforce it.

use crate::core::calculator::overtime_hours;
use crate::models::record::AttendanceRecord;
use crate::models::settings::WorkPolicy;
use crate::models::status::AttendanceStatus;
use chrono::NaiveDate;

/// Outcome of a clock-in attempt. "Already done" is observable, not a
/// swallowed no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockInOutcome {
    Recorded(AttendanceRecord),
    /// A record for (employee, date) already exists; nothing was changed.
    AlreadyClockedIn,
}

/// Outcome of a clock-out attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ClockOutOutcome {
    Recorded(AttendanceRecord),
    /// No record with a pending clock-out exists for (employee, date).
    NoOpenSession,
}

/// Counts of records touched by one batch mark.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub created: usize,
    pub updated: usize,
}

pub fn find<'a>(
    records: &'a [AttendanceRecord],
    user_id: &str,
    date: NaiveDate,
) -> Option<&'a AttendanceRecord> {
    records.iter().find(|r| r.user_id == user_id && r.date == date)
}

/// Create the day's record with a pending clock-out.
pub fn clock_in(
    records: &mut Vec<AttendanceRecord>,
    user_id: &str,
    date: NaiveDate,
    time: &str,
    note: Option<String>,
) -> ClockInOutcome {
    if find(records, user_id, date).is_some() {
        return ClockInOutcome::AlreadyClockedIn;
    }

    let rec = AttendanceRecord::open(user_id, date, time, note);
    records.push(rec.clone());
    ClockInOutcome::Recorded(rec)
}

/// Close the day's open record: set the clock-out, compute overtime, merge
/// the note. The status set at clock-in is left untouched.
pub fn clock_out(
    records: &mut [AttendanceRecord],
    user_id: &str,
    date: NaiveDate,
    time: &str,
    note: Option<String>,
    policy: &WorkPolicy,
) -> ClockOutOutcome {
    let Some(rec) = records
        .iter_mut()
        .find(|r| r.user_id == user_id && r.date == date && r.is_open())
    else {
        return ClockOutOutcome::NoOpenSession;
    };

    rec.clock_out = Some(time.to_string());
    rec.ot_hours = overtime_hours(time, policy);
    if note.is_some() {
        rec.note = note;
    }

    ClockOutOutcome::Recorded(rec.clone())
}

/// Administrator path: set one status for many employees on one date,
/// independent of the clock-in/out flow. Overtime is never computed here.
///
/// For an employee who already has a record that day only the status is
/// overwritten; clock times, overtime and note are preserved.
pub fn batch_mark(
    records: &mut Vec<AttendanceRecord>,
    date: NaiveDate,
    status: AttendanceStatus,
    user_ids: &[String],
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for uid in user_ids {
        match records
            .iter_mut()
            .find(|r| &r.user_id == uid && r.date == date)
        {
            Some(existing) => {
                existing.status = status;
                summary.updated += 1;
            }
            None => {
                records.push(AttendanceRecord::marked(uid, date, status));
                summary.created += 1;
            }
        }
    }

    summary
}
