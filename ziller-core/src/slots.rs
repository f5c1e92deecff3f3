//! Bookable appointment times.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("\"{0}\" is not a time of day in HH:MM form")]
    Malformed(String),
    #[error("{hours:02}:{minutes:02} is outside the day")]
    OutOfRange { hours: u16, minutes: u16 },
}

/// A bookable time of day, rendered as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    minutes: u16,
}

impl TimeSlot {
    /// Build a slot from hours and minutes.
    ///
    /// # Errors
    ///
    /// Returns [`SlotError::OutOfRange`] for hours above 23 or minutes above 59.
    pub const fn from_hm(hours: u16, minutes: u16) -> Result<Self, SlotError> {
        if hours > 23 || minutes > 59 {
            return Err(SlotError::OutOfRange { hours, minutes });
        }
        Ok(Self {
            minutes: hours * 60 + minutes,
        })
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes_of_day(self) -> u16 {
        self.minutes
    }

    #[must_use]
    pub const fn hours(self) -> u16 {
        self.minutes / 60
    }

    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.minutes % 60
    }

    /// Parse an optional select value; the empty placeholder option reads as `None`.
    #[must_use]
    pub fn parse_optional(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse().ok()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for TimeSlot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SlotError::Malformed(s.to_string());
        let (hours, minutes) = s.trim().split_once(':').ok_or_else(malformed)?;
        if minutes.len() != 2 || hours.is_empty() || hours.len() > 2 {
            return Err(malformed());
        }
        if !hours.chars().chain(minutes.chars()).all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }
        let hours = hours.parse::<u16>().map_err(|_| malformed())?;
        let minutes = minutes.parse::<u16>().map_err(|_| malformed())?;
        Self::from_hm(hours, minutes)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Opening hours for bookings: first slot, last slot (inclusive) and spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSchedule {
    pub first: TimeSlot,
    pub last: TimeSlot,
    #[serde(default = "SlotSchedule::default_step")]
    pub step_minutes: u16,
}

impl SlotSchedule {
    const fn default_step() -> u16 {
        30
    }

    const fn hm(hours: u16, minutes: u16) -> TimeSlot {
        TimeSlot {
            minutes: hours * 60 + minutes,
        }
    }

    /// Monday to Thursday: 08:00 to 16:00.
    #[must_use]
    pub const fn monday_to_thursday() -> Self {
        Self {
            first: Self::hm(8, 0),
            last: Self::hm(16, 0),
            step_minutes: Self::default_step(),
        }
    }

    /// Friday: 08:00 to 13:30.
    #[must_use]
    pub const fn friday() -> Self {
        Self {
            first: Self::hm(8, 0),
            last: Self::hm(13, 30),
            step_minutes: Self::default_step(),
        }
    }

    /// All slots from `first` to `last`, ascending. Empty when the step is zero.
    #[must_use]
    pub fn slots(&self) -> Vec<TimeSlot> {
        if self.step_minutes == 0 {
            return Vec::new();
        }
        (self.first.minutes..=self.last.minutes)
            .step_by(usize::from(self.step_minutes))
            .map(|minutes| TimeSlot { minutes })
            .collect()
    }

    /// Whether `time` lies within the opening window, bounds included.
    #[must_use]
    pub fn covers(&self, time: TimeSlot) -> bool {
        (self.first..=self.last).contains(&time)
    }
}
