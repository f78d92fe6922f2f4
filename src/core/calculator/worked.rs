use crate::models::settings::WorkPolicy;
use crate::utils::time::{minutes_between, parse_time};

/// Net worked hours between clock-in and clock-out, minus the part of the
/// lunch window the interval overlaps.
///
/// Clock-out at or before clock-in yields 0; overnight shifts are out of
/// scope. Malformed times on either side also yield 0.
pub fn worked_hours(clock_in: &str, clock_out: &str, policy: &WorkPolicy) -> f64 {
    let (Some(start), Some(end)) = (parse_time(clock_in), parse_time(clock_out)) else {
        return 0.0;
    };

    let total = minutes_between(start, end);
    if total <= 0 {
        return 0.0;
    }

    let overlap_start = start.max(policy.lunch_start);
    let overlap_end = end.min(policy.lunch_end);

    let mut worked = total;
    if overlap_end > overlap_start {
        worked -= minutes_between(overlap_start, overlap_end);
    }

    worked.max(0) as f64 / 60.0
}
