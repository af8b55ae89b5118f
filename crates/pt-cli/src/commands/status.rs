//! Status command for showing the current prayer and the next one.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDateTime, NaiveTime};
use pt_core::{HijriDate, Position, Schedule, format_countdown, time_of_day, until};

use crate::{Config, cache};

/// Clock format for the next prayer, e.g. `4:15 AM`.
const CLOCK_FORMAT: &str = "%-I:%M %p";

pub fn run<W: Write>(writer: &mut W, config: &Config, now: NaiveDateTime, short: bool) -> Result<()> {
    let response = cache::load_or_fetch(config, now.date())?;
    let schedule = Schedule::build(response.timings());
    let position = schedule.locate(&now)?;
    tracing::debug!(
        current = %position.current().name,
        next = %position.next().name,
        "located prayer"
    );

    render(writer, &position, time_of_day(&now), &response.hijri_date(), short)
}

fn render<W: Write>(
    writer: &mut W,
    position: &Position<'_>,
    now: NaiveTime,
    hijri: &HijriDate,
    short: bool,
) -> Result<()> {
    let next = position.next();
    let countdown = format_countdown(until(next.time, now));

    if short {
        writeln!(writer, "{} in {countdown}", next.name)?;
        return Ok(());
    }

    writeln!(writer, "{} Time", position.current().name)?;
    writeln!(
        writer,
        "{} in {countdown} at {}",
        next.name,
        next.time.format(CLOCK_FORMAT)
    )?;
    writeln!(writer, "{hijri}")?;
    writeln!(writer)?;
    Ok(())
}
