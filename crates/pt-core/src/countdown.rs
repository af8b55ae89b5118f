//! Time remaining until the next prayer.

use chrono::{NaiveTime, TimeDelta};

/// Time from `now` until `next`, both times of day.
///
/// A `next` earlier than `now` belongs to the following day, so a full day
/// is added before subtracting.
pub fn until(next: NaiveTime, now: NaiveTime) -> TimeDelta {
    let delta = next - now;
    if next < now {
        delta + TimeDelta::days(1)
    } else {
        delta
    }
}

/// Renders a countdown such as `"1 Hour 30 Minutes"` or `"3 Minutes"`.
///
/// Hours are only shown when non-zero; minutes are always shown alongside
/// them. Anything under a minute reads `"less than a minute"`.
pub fn format_countdown(delta: TimeDelta) -> String {
    let hours = delta.num_hours();
    let minutes = delta.num_minutes() % 60;

    if hours == 0 && minutes == 0 {
        return "less than a minute".to_string();
    }

    if hours > 0 {
        format!(
            "{hours} Hour{} {minutes} Minute{}",
            plural(hours),
            plural(minutes)
        )
    } else {
        format!("{minutes} Minute{}", plural(minutes))
    }
}

const fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
