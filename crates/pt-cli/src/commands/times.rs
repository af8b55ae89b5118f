//! Times command for listing the day's prayer schedule.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDateTime;
use pt_core::Schedule;

use crate::{Config, cache};

pub fn run<W: Write>(writer: &mut W, config: &Config, now: NaiveDateTime, json: bool) -> Result<()> {
    let response = cache::load_or_fetch(config, now.date())?;
    let schedule = Schedule::build(response.timings());

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&schedule)?)?;
        return Ok(());
    }

    writeln!(writer, "Prayer times for {}", response.readable_date())?;
    render(writer, &schedule, &now)
}

/// Writes one line per prayer, marking the current one with `*`.
fn render<W: Write>(writer: &mut W, schedule: &Schedule, now: &NaiveDateTime) -> Result<()> {
    let Ok(position) = schedule.locate(now) else {
        writeln!(writer, "No prayer times available.")?;
        return Ok(());
    };

    for (index, prayer) in schedule.iter().enumerate() {
        let marker = if index == position.current_index() { '*' } else { ' ' };
        writeln!(writer, "{marker} {:<8} {}", prayer.name, prayer.time.format("%H:%M"))?;
    }
    Ok(())
}
