use serde::Serialize;

/// One aggregated row per employee for a reporting month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub user_id: String,
    pub name: String,
    pub department: String,
    pub present: u32,
    pub late: u32,
    pub ot_total: f64,
    /// Presence flag, not presence over working days: 100 as soon as the
    /// month has any clocked day, 0 otherwise.
    pub rate: u8,
}
