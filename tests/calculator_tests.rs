use chrono::NaiveTime;
use punchcard::core::calculator::{overtime_hours, worked_hours};
use punchcard::models::settings::{AppSettings, WorkPolicy};

fn policy() -> WorkPolicy {
    AppSettings::default().policy()
}

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[test]
fn overtime_is_zero_at_or_before_cutoff() {
    let p = policy();
    assert_eq!(overtime_hours("17:00", &p), 0.0);
    assert_eq!(overtime_hours("16:59", &p), 0.0);
    assert_eq!(overtime_hours("08:00", &p), 0.0);
    assert_eq!(overtime_hours("00:00", &p), 0.0);
}

#[test]
fn overtime_rounds_to_nearest_half_hour() {
    let p = policy();
    assert_eq!(overtime_hours("18:00", &p), 1.0);
    assert_eq!(overtime_hours("17:40", &p), 0.5);
    assert_eq!(overtime_hours("17:50", &p), 1.0);
    assert_eq!(overtime_hours("17:10", &p), 0.0);
    assert_eq!(overtime_hours("19:15", &p), 2.5);
}

#[test]
fn overtime_is_a_multiple_of_half_hours() {
    let p = policy();
    for minutes in 0..180 {
        let out = format!("{:02}:{:02}", 17 + minutes / 60, minutes % 60);
        let ot = overtime_hours(&out, &p);
        assert!(ot >= 0.0, "negative overtime for {out}");
        assert_eq!((ot * 2.0).fract(), 0.0, "not a half-hour multiple: {out} -> {ot}");
    }
}

#[test]
fn overtime_malformed_input_is_zero() {
    let p = policy();
    assert_eq!(overtime_hours("", &p), 0.0);
    assert_eq!(overtime_hours("banana", &p), 0.0);
    assert_eq!(overtime_hours("25:99", &p), 0.0);
    assert_eq!(overtime_hours("17h30", &p), 0.0);
}

#[test]
fn overtime_honors_a_custom_cutoff() {
    let p = WorkPolicy {
        cutoff: t("18:00"),
        lunch_start: t("11:45"),
        lunch_end: t("13:15"),
    };
    assert_eq!(overtime_hours("18:00", &p), 0.0);
    assert_eq!(overtime_hours("18:30", &p), 0.5);
}

#[test]
fn worked_is_zero_when_out_not_after_in() {
    let p = policy();
    assert_eq!(worked_hours("09:00", "09:00", &p), 0.0);
    assert_eq!(worked_hours("17:00", "09:00", &p), 0.0);
}

#[test]
fn worked_full_day_subtracts_lunch_overlap() {
    let p = policy();
    // 9 raw hours minus the 1.5h lunch window
    assert_eq!(worked_hours("08:00", "17:00", &p), 7.5);
}

#[test]
fn worked_entirely_inside_lunch_is_zero() {
    let p = policy();
    assert_eq!(worked_hours("12:00", "13:00", &p), 0.0);
}

#[test]
fn worked_partial_lunch_overlap() {
    let p = policy();
    // 13:00 to 17:00 overlaps the last 15 lunch minutes
    assert_eq!(worked_hours("13:00", "17:00", &p), 3.75);
    // afternoon only, no overlap at all
    assert_eq!(worked_hours("13:15", "17:15", &p), 4.0);
}

#[test]
fn worked_malformed_input_is_zero() {
    let p = policy();
    assert_eq!(worked_hours("", "17:00", &p), 0.0);
    assert_eq!(worked_hours("08:00", "nope", &p), 0.0);
}

#[test]
fn settings_policy_degrades_malformed_times_to_defaults() {
    let mut settings = AppSettings::default();
    settings.default_clock_out = "not-a-time".to_string();
    let p = settings.policy();
    assert_eq!(p.cutoff, t("17:00"));
    assert_eq!(p.lunch_start, t("11:45"));
    assert_eq!(p.lunch_end, t("13:15"));
}
