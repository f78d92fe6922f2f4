use crate::models::settings::WorkPolicy;
use crate::utils::time::parse_time;

/// Overtime past the end-of-day cutoff, in hours rounded to the nearest
/// half hour. No premium rate: one hour past cutoff is one hour of overtime.
///
/// A malformed clock-out is treated as no overtime, never as an error.
pub fn overtime_hours(clock_out: &str, policy: &WorkPolicy) -> f64 {
    let Some(out) = parse_time(clock_out) else {
        return 0.0;
    };
    if out <= policy.cutoff {
        return 0.0;
    }

    let past_minutes = (out - policy.cutoff).num_minutes() as f64;
    (past_minutes / 30.0).round() / 2.0
}
