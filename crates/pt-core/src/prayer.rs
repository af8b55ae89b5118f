//! Prayer names and timed prayer entries.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The recognised daily prayers, in their canonical daily order.
///
/// Sunrise is not a prayer but marks the end of the Fajr window, so it is
/// tracked alongside the five prayers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All recognised names in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }
}

impl fmt::Display for PrayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PrayerName {
    type Err = UnknownPrayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fajr" => Ok(Self::Fajr),
            "Sunrise" => Ok(Self::Sunrise),
            "Dhuhr" => Ok(Self::Dhuhr),
            "Asr" => Ok(Self::Asr),
            "Maghrib" => Ok(Self::Maghrib),
            "Isha" => Ok(Self::Isha),
            _ => Err(UnknownPrayer(s.to_string())),
        }
    }
}

impl Serialize for PrayerName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PrayerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for names outside the recognised set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPrayer(String);

impl fmt::Display for UnknownPrayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown prayer: {}", self.0)
    }
}

impl std::error::Error for UnknownPrayer {}

/// A prayer recurring daily at a fixed time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prayer {
    pub name: PrayerName,
    pub time: NaiveTime,
}

impl Prayer {
    pub const fn new(name: PrayerName, time: NaiveTime) -> Self {
        Self { name, time }
    }
}
