use chrono::{NaiveDate, NaiveTime, Timelike};

/// Interpret a cell string as a date or a time-of-day, returning the Excel
/// serial value plus the number format to apply. Anything else stays text.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(d)));
    }

    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M") {
        let seconds = t.num_seconds_from_midnight() as f64;
        return Some(("hh:mm", seconds / 86400.0));
    }

    None
}

// Excel day serials count from 1899-12-30 (the Lotus leap-year quirk).
fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (d - excel_epoch).num_days() as f64
}
