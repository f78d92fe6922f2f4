use serde::{Deserialize, Serialize};

/// Per-day attendance status. "Present" is the only value the clock-in path
/// assigns; the others arrive through administrator batch marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    #[serde(rename = "Half-day")]
    HalfDay,
    Absent,
    Late,
    Leave,
    Weekend,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::HalfDay => "Half-day",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::Weekend => "Weekend",
        }
    }

    /// Helper: convert input code from CLI (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "present" => Some(AttendanceStatus::Present),
            "half-day" | "halfday" => Some(AttendanceStatus::HalfDay),
            "absent" => Some(AttendanceStatus::Absent),
            "late" => Some(AttendanceStatus::Late),
            "leave" => Some(AttendanceStatus::Leave),
            "weekend" => Some(AttendanceStatus::Weekend),
            _ => None,
        }
    }

    /// One-character cell mark for the timeline grid.
    pub fn mark(&self) -> char {
        match self {
            AttendanceStatus::Present => 'P',
            AttendanceStatus::HalfDay => 'H',
            AttendanceStatus::Absent => 'A',
            AttendanceStatus::Late => 'L',
            AttendanceStatus::Leave => 'V',
            AttendanceStatus::Weekend => 'W',
        }
    }
}
