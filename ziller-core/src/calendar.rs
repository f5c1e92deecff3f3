//! Calendar dates as the booking form sees them.
//!
//! A [`CalendarDate`] is a plain year/month/day value with a derived weekday.
//! It wraps [`chrono::NaiveDate`] so calendar arithmetic never has to be done
//! by hand, and adds the German formats used on the site (`10.02.2026` for the
//! date field, `Dienstag, 10. Februar 2026` for the confirmation).

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// German month names, January first.
pub const MONTH_NAMES_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// German weekday names, Sunday first (matches [`CalendarDate::day_of_week`]).
pub const WEEKDAY_NAMES_DE: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];

/// Two-letter weekday headers for the date picker, Monday first.
pub const WEEKDAY_SHORT_DE: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

/// Errors raised when building or parsing a [`CalendarDate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("cannot read \"{0}\" as a date")]
    Malformed(String),
}

/// A calendar day. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its parts.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] when the parts do not name a real
    /// day (e.g. 31 February).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }

    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Today according to the local clock.
    #[must_use]
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-based.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Day of the week with Sunday as 0 and Saturday as 6.
    #[must_use]
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    #[must_use]
    pub fn is_friday(&self) -> bool {
        self.weekday() == Weekday::Fri
    }

    /// The date `days` later, or `None` past the end of the supported range.
    #[must_use]
    pub fn add_days(&self, days: u32) -> Option<Self> {
        self.0.checked_add_days(Days::new(u64::from(days))).map(Self)
    }

    /// The date `days` earlier, or `None` before the start of the supported range.
    #[must_use]
    pub fn sub_days(&self, days: u32) -> Option<Self> {
        self.0.checked_sub_days(Days::new(u64::from(days))).map(Self)
    }

    /// Signed number of days from `self` to `other`.
    #[must_use]
    pub fn days_until(&self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// First day of the month this date falls in.
    #[must_use]
    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Number of days in this date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// German month name, e.g. `Februar`.
    #[must_use]
    pub fn month_name_de(&self) -> &'static str {
        month_name_de(self.month())
    }

    #[must_use]
    pub fn weekday_name_de(&self) -> &'static str {
        let index = usize::try_from(self.day_of_week()).unwrap_or(0);
        WEEKDAY_NAMES_DE[index % 7]
    }

    /// Short numeric German form used in the date field: `10.02.2026`.
    #[must_use]
    pub fn to_german(&self) -> String {
        format!("{:02}.{:02}.{:04}", self.day(), self.month(), self.year())
    }

    /// Long German form used in the booking confirmation:
    /// `Dienstag, 10. Februar 2026`.
    #[must_use]
    pub fn to_long_german(&self) -> String {
        format!(
            "{}, {}. {} {}",
            self.weekday_name_de(),
            self.day(),
            self.month_name_de(),
            self.year()
        )
    }

    /// "Monat Jahr" stamp shown on the legal pages, e.g. `Oktober 2026`.
    #[must_use]
    pub fn month_year_de(&self) -> String {
        format!("{} {}", self.month_name_de(), self.year())
    }

    /// Parse the numeric German form `dd.mm.yyyy`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::Malformed`] when the text is not three
    /// dot-separated numbers, and [`CalendarError::InvalidDate`] when the
    /// numbers do not form a real day.
    pub fn parse_german(text: &str) -> Result<Self, CalendarError> {
        let malformed = || CalendarError::Malformed(text.to_string());
        let mut parts = text.trim().split('.');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };
        let day = day.trim().parse::<u32>().map_err(|_| malformed())?;
        let month = month.trim().parse::<u32>().map_err(|_| malformed())?;
        let year = year.trim().parse::<i32>().map_err(|_| malformed())?;
        Self::from_ymd(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Accepts ISO `yyyy-mm-dd` as well as the German `dd.mm.yyyy`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.contains('.') {
            return Self::parse_german(trimmed);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CalendarError::Malformed(s.to_string()))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// German name of a 1-based month; out-of-range months clamp to December.
#[must_use]
pub fn month_name_de(month: u32) -> &'static str {
    let index = usize::try_from(month.clamp(1, 12) - 1).unwrap_or(0);
    MONTH_NAMES_DE[index]
}

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days in a 1-based month. Unknown months report 30.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            CalendarDate::from_ymd(2026, 2, 29),
            Err(CalendarError::InvalidDate {
                year: 2026,
                month: 2,
                day: 29
            })
        );
        assert!(CalendarDate::from_ymd(2028, 2, 29).is_ok());
        assert!(CalendarDate::from_ymd(2026, 13, 1).is_err());
    }

    #[test]
    fn day_of_week_counts_from_sunday() {
        assert_eq!(date(2026, 2, 8).day_of_week(), 0);
        assert_eq!(date(2026, 2, 10).day_of_week(), 2);
        assert_eq!(date(2026, 2, 13).day_of_week(), 5);
        assert_eq!(date(2026, 2, 14).day_of_week(), 6);
        assert!(date(2026, 2, 14).is_weekend());
        assert!(date(2026, 2, 13).is_friday());
    }

    #[test]
    fn german_formats() {
        let d = date(2026, 2, 10);
        assert_eq!(d.to_german(), "10.02.2026");
        assert_eq!(d.to_long_german(), "Dienstag, 10. Februar 2026");
        assert_eq!(d.month_year_de(), "Februar 2026");
        assert_eq!(date(2026, 3, 2).to_long_german(), "Montag, 2. März 2026");
    }

    #[test]
    fn parses_german_and_iso_forms() {
        assert_eq!(CalendarDate::parse_german("10.02.2026"), Ok(date(2026, 2, 10)));
        assert_eq!(" 1.8.2026 ".parse::<CalendarDate>(), Ok(date(2026, 8, 1)));
        assert_eq!("2026-12-25".parse::<CalendarDate>(), Ok(date(2026, 12, 25)));
        assert!(matches!(
            CalendarDate::parse_german("10.02"),
            Err(CalendarError::Malformed(_))
        ));
        assert!(matches!(
            CalendarDate::parse_german("31.02.2026"),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!("gestern".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn arithmetic_crosses_month_and_year() {
        assert_eq!(date(2026, 12, 31).add_days(1), Some(date(2027, 1, 1)));
        assert_eq!(date(2026, 3, 1).sub_days(1), Some(date(2026, 2, 28)));
        assert_eq!(date(2026, 2, 10).days_until(date(2026, 2, 13)), 3);
        assert_eq!(date(2026, 2, 13).days_until(date(2026, 2, 10)), -3);
        assert_eq!(date(2026, 2, 10).first_of_month(), date(2026, 2, 1));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 13), 30);
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(date(2026, 8, 15).to_string(), "2026-08-15");
    }
}
