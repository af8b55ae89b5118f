//! Building the day's prayer schedule and locating the current prayer in it.
//!
//! A [`Schedule`] is built once per invocation from the raw `name -> time`
//! mapping returned by the timings source. Building is best-effort: names
//! outside [`PrayerName`] are dropped and unparsable times are skipped, so the
//! result may be empty. The locator operations reject an empty schedule with
//! [`ScheduleError::Empty`] instead of indexing into it.
//!
//! Times are location-naive times of day. The reference moment is always
//! passed in by the caller and reduced to hour and minute, so every operation
//! here is a pure function of its inputs.

use std::collections::HashSet;

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::Serialize;
use thiserror::Error;

use crate::prayer::{Prayer, PrayerName};

/// Format of the leading time token in a raw timing value.
const TIME_FORMAT: &str = "%H:%M";

/// Errors from locating a prayer in a schedule.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// No valid prayer survived filtering and parsing.
    #[error("no prayer times available")]
    Empty,
}

/// A raw timing value whose leading token is not a 24-hour `HH:MM` time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid time {raw:?}, expected HH:MM")]
pub struct TimeParseError {
    raw: String,
    #[source]
    source: chrono::ParseError,
}

/// Parses the leading whitespace-delimited token of `raw` as `HH:MM`.
///
/// Trailing annotations such as a timezone suffix (`"04:15 (BST)"`) are
/// ignored.
pub fn parse_time(raw: &str) -> Result<NaiveTime, TimeParseError> {
    let token = raw.split_whitespace().next().unwrap_or_default();
    NaiveTime::parse_from_str(token, TIME_FORMAT).map_err(|source| TimeParseError {
        raw: raw.to_string(),
        source,
    })
}

/// Reduces a reference moment to its hour and minute.
///
/// Seconds and sub-seconds are dropped so a moment compares equal to a
/// prayer time for the whole of that minute.
pub fn time_of_day<T: Timelike>(now: &T) -> NaiveTime {
    NaiveTime::MIN + TimeDelta::minutes(i64::from(now.hour() * 60 + now.minute()))
}

/// The day's prayers, sorted ascending by time of day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    prayers: Vec<Prayer>,
}

impl Schedule {
    /// Builds a schedule from raw `name -> time` pairs.
    ///
    /// Unknown names are ignored. Entries whose time does not parse are
    /// logged and skipped. If a name appears more than once, the first entry
    /// with a valid time wins. The result is sorted by time regardless of
    /// input order, with ties broken by the canonical daily order.
    pub fn build<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut prayers = Vec::new();

        for (name, value) in raw {
            let (name, value) = (name.as_ref(), value.as_ref());
            let Ok(prayer_name) = name.parse::<PrayerName>() else {
                tracing::trace!(name, "ignoring unrecognised timing");
                continue;
            };

            let time = match parse_time(value) {
                Ok(time) => time,
                Err(e) => {
                    tracing::warn!(prayer = %prayer_name, raw = value, error = %e, "skipping malformed prayer time");
                    continue;
                }
            };

            if !seen.insert(prayer_name) {
                tracing::warn!(prayer = %prayer_name, raw = value, "skipping duplicate prayer time");
                continue;
            }

            prayers.push(Prayer::new(prayer_name, time));
        }

        Self::from_prayers(prayers)
    }

    /// Creates a schedule from already-typed prayers, sorting them by time.
    pub fn from_prayers(mut prayers: Vec<Prayer>) -> Self {
        prayers.sort_by_key(|prayer| (prayer.time, prayer.name));
        Self { prayers }
    }

    pub fn as_slice(&self) -> &[Prayer] {
        &self.prayers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Prayer> {
        self.prayers.iter()
    }

    pub fn len(&self) -> usize {
        self.prayers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prayers.is_empty()
    }

    /// Finds the current and next prayer at `now`.
    ///
    /// The current prayer is the latest one at or before `now`. Before the
    /// first prayer of the day it is the last prayer, carried over from the
    /// previous evening. The next prayer follows the current one and wraps
    /// to the first prayer after the last.
    pub fn locate<T: Timelike>(&self, now: &T) -> Result<Position<'_>, ScheduleError> {
        let last = self.prayers.len().checked_sub(1).ok_or(ScheduleError::Empty)?;
        let now = time_of_day(now);

        let passed = self.prayers.partition_point(|prayer| prayer.time <= now);
        let current = passed.checked_sub(1).unwrap_or(last);
        let next = if current == last { 0 } else { current + 1 };

        Ok(Position {
            prayers: &self.prayers,
            current,
            next,
        })
    }

    /// Returns the current prayer at `now`. See [`Schedule::locate`].
    pub fn current<T: Timelike>(&self, now: &T) -> Result<&Prayer, ScheduleError> {
        self.locate(now).map(|position| position.current())
    }

    /// Returns the prayer following `current`, wrapping to the first.
    ///
    /// `current` is matched by value. If it is not part of the schedule the
    /// first prayer is returned.
    pub fn next_after(&self, current: &Prayer) -> Result<&Prayer, ScheduleError> {
        let first = self.prayers.first().ok_or(ScheduleError::Empty)?;
        let Some(index) = self.prayers.iter().position(|prayer| prayer == current) else {
            tracing::debug!(prayer = %current.name, time = %current.time, "prayer not in schedule, wrapping to first");
            return Ok(first);
        };
        Ok(self.prayers.get(index + 1).unwrap_or(first))
    }
}

/// The current and next prayer within a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position<'a> {
    prayers: &'a [Prayer],
    current: usize,
    next: usize,
}

impl<'a> Position<'a> {
    pub fn current(&self) -> &'a Prayer {
        &self.prayers[self.current]
    }

    pub fn next(&self) -> &'a Prayer {
        &self.prayers[self.next]
    }

    pub const fn current_index(&self) -> usize {
        self.current
    }

    pub const fn next_index(&self) -> usize {
        self.next
    }

    /// Whether the next prayer falls on the following day.
    pub const fn wraps(&self) -> bool {
        self.next <= self.current
    }
}
