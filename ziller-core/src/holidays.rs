//! Fixed public holidays on which the workshop is closed.
//!
//! Only holidays that fall on the same day every year are listed. Movable
//! feasts tied to Easter (Good Friday, Easter Monday, Ascension, Whit Monday,
//! Corpus Christi) are intentionally left out; customers booking around them
//! are handled by the shop when it confirms the request.

use crate::calendar::{CalendarDate, days_in_month};
use serde::{Deserialize, Serialize};

/// A holiday recurring on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedHoliday {
    /// Month of the year, 1-based.
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub name: String,
}

impl FixedHoliday {
    #[must_use]
    pub fn new(month: u32, day: u32, name: impl Into<String>) -> Self {
        Self {
            month,
            day,
            name: name.into(),
        }
    }

    /// Whether `date` falls on this holiday, in any year.
    #[must_use]
    pub fn matches(&self, date: CalendarDate) -> bool {
        self.month == date.month() && self.day == date.day()
    }

    /// Whether the month/day pair exists in at least one year (29 February counts).
    #[must_use]
    pub const fn is_possible(&self) -> bool {
        self.month >= 1 && self.month <= 12 && self.day >= 1 && self.day <= days_in_month(2000, self.month)
    }
}

const BAVARIAN_FIXED: [(u32, u32, &str); 8] = [
    (1, 1, "Neujahr"),
    (1, 6, "Heilige Drei Könige"),
    (5, 1, "Tag der Arbeit"),
    (8, 15, "Mariä Himmelfahrt"),
    (10, 3, "Tag der Deutschen Einheit"),
    (11, 1, "Allerheiligen"),
    (12, 25, "1. Weihnachtstag"),
    (12, 26, "2. Weihnachtstag"),
];

/// The set of fixed holidays the shop observes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet {
    entries: Vec<FixedHoliday>,
}

impl HolidaySet {
    #[must_use]
    pub const fn new(entries: Vec<FixedHoliday>) -> Self {
        Self { entries }
    }

    /// Fixed Bavarian public holidays.
    #[must_use]
    pub fn bavarian_fixed() -> Self {
        Self::new(
            BAVARIAN_FIXED
                .iter()
                .map(|&(month, day, name)| FixedHoliday::new(month, day, name))
                .collect(),
        )
    }

    /// Whether `date` is one of the fixed holidays. The year is ignored.
    #[must_use]
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.entries.iter().any(|h| h.matches(date))
    }

    /// The holiday falling on `date`, if any.
    #[must_use]
    pub fn holiday_on(&self, date: CalendarDate) -> Option<&FixedHoliday> {
        self.entries.iter().find(|h| h.matches(date))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FixedHoliday> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HolidaySet {
    fn default() -> Self {
        Self::bavarian_fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn bavarian_set_has_eight_fixed_days() {
        let set = HolidaySet::bavarian_fixed();
        assert_eq!(set.len(), 8);
        assert!(set.iter().all(FixedHoliday::is_possible));
    }

    #[test]
    fn membership_ignores_year() {
        let set = HolidaySet::default();
        for year in [1999, 2026, 2031] {
            assert!(set.contains(date(year, 1, 1)));
            assert!(set.contains(date(year, 8, 15)));
            assert!(set.contains(date(year, 12, 26)));
        }
        assert!(!set.contains(date(2026, 12, 24)));
        assert!(!set.contains(date(2026, 2, 10)));
    }

    #[test]
    fn easter_linked_days_are_not_listed() {
        let set = HolidaySet::default();
        // Good Friday and Easter Monday 2026
        assert!(!set.contains(date(2026, 4, 3)));
        assert!(!set.contains(date(2026, 4, 6)));
    }

    #[test]
    fn names_the_holiday() {
        let set = HolidaySet::default();
        let holiday = set.holiday_on(date(2026, 10, 3)).unwrap();
        assert_eq!(holiday.name, "Tag der Deutschen Einheit");
        assert!(set.holiday_on(date(2026, 10, 4)).is_none());
    }

    #[test]
    fn impossible_pairs_are_detected() {
        assert!(FixedHoliday::new(2, 29, "Schalttag").is_possible());
        assert!(!FixedHoliday::new(2, 30, "").is_possible());
        assert!(!FixedHoliday::new(0, 1, "").is_possible());
        assert!(!FixedHoliday::new(4, 31, "").is_possible());
    }
}
