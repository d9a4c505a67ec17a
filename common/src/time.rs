use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Formats accepted from a `datetime-local` input, with and without seconds.
const FORM_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Format used for the `min` attribute of a `datetime-local` input.
const FORM_MIN_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// How availability times are shown on a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    /// "1:30 PM"
    #[default]
    TwelveHour,
    /// "13:30"
    TwentyFourHour,
}

impl TimeFormat {
    pub fn format(self, at: NaiveDateTime) -> String {
        match self {
            TimeFormat::TwelveHour => {
                let (pm, hour) = at.hour12();
                let ampm = if pm { "PM" } else { "AM" };
                format!("{hour}:{:02} {ampm}", at.minute())
            }
            TimeFormat::TwentyFourHour => format!("{:02}:{:02}", at.hour(), at.minute()),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::TwelveHour => write!(f, "12h"),
            TimeFormat::TwentyFourHour => write!(f, "24h"),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "12h" | "12" => Ok(TimeFormat::TwelveHour),
            "24h" | "24" => Ok(TimeFormat::TwentyFourHour),
            other => Err(format!("unknown time format {other:?}, expected 12h or 24h")),
        }
    }
}

/// Parse the value of a `datetime-local` input.
pub fn parse_form_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    FORM_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Earliest value the "available from" picker should offer.
pub fn min_available_from(now: NaiveDateTime) -> String {
    now.format(FORM_MIN_FORMAT).to_string()
}

/// Earliest value the "available to" picker should offer: "now", or the
/// chosen start if that is later.
pub fn min_available_to(now: NaiveDateTime, available_from: &str) -> String {
    match parse_form_timestamp(available_from) {
        Some(from) if from > now => from.format(FORM_MIN_FORMAT).to_string(),
        _ => min_available_from(now),
    }
}

/// Source of "now" for picker bounds.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the viewer's local time zone.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

#[cfg(feature = "std")]
impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
