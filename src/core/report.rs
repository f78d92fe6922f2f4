//! Monthly aggregation of attendance records.

use crate::models::record::AttendanceRecord;
use crate::models::summary::MonthlySummary;
use crate::models::user::User;
use crate::utils::date::Month;

/// Per-employee statistics for one calendar month.
///
/// Output order follows the `users` slice; no sorting happens here, callers
/// re-order for presentation if they need to.
pub fn aggregate_month(
    records: &[AttendanceRecord],
    users: &[User],
    month: &Month,
    default_clock_in: &str,
) -> Vec<MonthlySummary> {
    let in_month: Vec<&AttendanceRecord> =
        records.iter().filter(|r| month.contains(r.date)).collect();

    users
        .iter()
        .map(|u| {
            let mine: Vec<&&AttendanceRecord> =
                in_month.iter().filter(|r| r.user_id == u.id).collect();

            let present = mine.iter().filter(|r| r.clock_in.is_some()).count() as u32;
            // Zero-padded 24h times compare correctly as plain strings.
            let late = mine
                .iter()
                .filter(|r| r.clock_in.as_deref().is_some_and(|t| t > default_clock_in))
                .count() as u32;
            let ot_total: f64 = mine.iter().map(|r| r.ot_hours).sum();

            MonthlySummary {
                user_id: u.id.clone(),
                name: u.name.clone(),
                department: u.department.clone(),
                present,
                late,
                ot_total,
                rate: if present > 0 { 100 } else { 0 },
            }
        })
        .collect()
}
