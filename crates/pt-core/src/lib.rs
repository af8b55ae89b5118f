//! Core domain logic for the prayer time tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Schedule building: turning raw `name -> time` timings into an ordered day
//! - Location: finding the current and next prayer for a moment of the day
//! - Countdown: time until the next prayer, across midnight
//! - Hijri display: rendering the Hijri date reported alongside the timings

pub mod countdown;
pub mod hijri;
pub mod prayer;
pub mod schedule;

pub use countdown::{format_countdown, until};
pub use hijri::HijriDate;
pub use prayer::{Prayer, PrayerName, UnknownPrayer};
pub use schedule::{Position, Schedule, ScheduleError, TimeParseError, parse_time, time_of_day};
