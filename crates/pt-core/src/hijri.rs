//! Hijri date display.
//!
//! The date parts come straight from the timings source; nothing here does
//! calendar arithmetic.

use std::fmt;

/// Appends the English ordinal suffix to a day of the month.
pub fn ordinal(day: &str) -> String {
    let suffix = match day {
        "1" | "21" | "31" => "st",
        "2" | "22" => "nd",
        "3" | "23" => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// A Hijri calendar date as reported by the timings source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} A.H.",
            ordinal(&self.day),
            self.month,
            self.year
        )
    }
}
