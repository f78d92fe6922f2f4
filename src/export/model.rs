use crate::models::record::AttendanceRecord;
use crate::models::summary::MonthlySummary;
use crate::models::user::User;
use serde::Serialize;

/// Flat per-day row handed to the exporters.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub date: String,
    pub clock_in: String,
    pub clock_out: String,
    pub ot_hours: f64,
    pub status: String,
    pub note: String,
}

impl RecordExport {
    pub fn from_record(rec: &AttendanceRecord, users: &[User]) -> Self {
        let name = users
            .iter()
            .find(|u| u.id == rec.user_id)
            .map(|u| u.name.clone())
            .unwrap_or_default();

        Self {
            id: rec.id.clone(),
            user_id: rec.user_id.clone(),
            name,
            date: rec.date.format("%Y-%m-%d").to_string(),
            clock_in: rec.clock_in.clone().unwrap_or_default(),
            clock_out: rec.clock_out.clone().unwrap_or_default(),
            ot_hours: rec.ot_hours,
            status: rec.status.as_str().to_string(),
            note: rec.note.clone().unwrap_or_default(),
        }
    }
}

/// Headers for the raw-record sheet.
pub(crate) fn record_headers() -> Vec<&'static str> {
    vec![
        "id",
        "user_id",
        "name",
        "date",
        "clock_in",
        "clock_out",
        "ot_hours",
        "status",
        "note",
    ]
}

pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.clone(),
        r.user_id.clone(),
        r.name.clone(),
        r.date.clone(),
        r.clock_in.clone(),
        r.clock_out.clone(),
        r.ot_hours.to_string(),
        r.status.clone(),
        r.note.clone(),
    ]
}

/// Headers for the aggregated monthly sheet.
pub(crate) fn summary_headers() -> Vec<&'static str> {
    vec![
        "user_id",
        "name",
        "department",
        "present",
        "late",
        "ot_total",
        "rate",
    ]
}

pub(crate) fn summary_to_row(s: &MonthlySummary) -> Vec<String> {
    vec![
        s.user_id.clone(),
        s.name.clone(),
        s.department.clone(),
        s.present.to_string(),
        s.late.to_string(),
        s.ot_total.to_string(),
        s.rate.to_string(),
    ]
}
