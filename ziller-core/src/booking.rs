//! Constraints the booking form layers on top of the eligibility rules.
//!
//! The date picker greys out a day when it is earlier than the lead time
//! allows, when the shop is closed, or when it is a Friday while a time
//! outside the Friday hours is already selected.

use crate::calendar::CalendarDate;
use crate::eligibility::{DateExclusion, EligibilityEngine};
use crate::slots::TimeSlot;

/// Alert shown when a chosen time rules out the already chosen Friday.
pub const FRIDAY_TIME_ALERT: &str = "Die gewählte Uhrzeit ist freitags nicht verfügbar. \
Freitags sind nur Termine bis 13:30 Uhr möglich.\n\n\
Bitte wählen Sie ein anderes Datum (Mo-Do) oder eine frühere Uhrzeit.";

/// What the form must do after the time selection changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeChange {
    /// The current date still works with the new time.
    Keep,
    /// The current date is a Friday and the new time is after Friday closing;
    /// the date has to be cleared and the customer told why.
    ClearDate,
}

/// Date-picker predicate for one render of the booking form.
#[derive(Debug, Clone, Copy)]
pub struct BookingWindow<'a> {
    engine: &'a EligibilityEngine,
    earliest: CalendarDate,
    selected_time: Option<TimeSlot>,
}

impl<'a> BookingWindow<'a> {
    /// Window opening `lead_days` after `today`.
    #[must_use]
    pub fn new(engine: &'a EligibilityEngine, today: CalendarDate, lead_days: u32) -> Self {
        Self {
            engine,
            earliest: min_booking_date(today, lead_days),
            selected_time: None,
        }
    }

    /// The same window, taking the currently selected time into account.
    #[must_use]
    pub const fn with_selected_time(mut self, time: Option<TimeSlot>) -> Self {
        self.selected_time = time;
        self
    }

    #[must_use]
    pub const fn engine(&self) -> &'a EligibilityEngine {
        self.engine
    }

    /// Earliest day the picker offers.
    #[must_use]
    pub const fn earliest(&self) -> CalendarDate {
        self.earliest
    }

    /// Whether `date` is in range and the shop is open that day.
    /// The selected time is ignored.
    #[must_use]
    pub fn is_bookable_date(&self, date: CalendarDate) -> bool {
        date >= self.earliest && self.engine.is_selectable(date)
    }

    /// Whether the date picker must disable `date`.
    #[must_use]
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        if !self.is_bookable_date(date) {
            return true;
        }
        date.is_friday() && !self.engine.fits_friday(self.selected_time)
    }
}

impl DateExclusion for BookingWindow<'_> {
    fn excludes(&self, date: CalendarDate) -> bool {
        self.is_disabled(date)
    }
}

/// Earliest bookable day: `lead_days` after `today`.
#[must_use]
pub fn min_booking_date(today: CalendarDate, lead_days: u32) -> CalendarDate {
    today.add_days(lead_days).unwrap_or(today)
}

/// Decide whether the chosen date survives a new time selection.
#[must_use]
pub fn on_time_changed(
    engine: &EligibilityEngine,
    date: Option<CalendarDate>,
    time: Option<TimeSlot>,
) -> TimeChange {
    match date {
        Some(date) if date.is_friday() && !engine.fits_friday(time) => {
            log::debug!("clearing Friday {date}: time {time:?} is after Friday closing");
            TimeChange::ClearDate
        }
        _ => TimeChange::Keep,
    }
}

/// First bookable day on or after `from`, looking at most `horizon` days ahead.
#[must_use]
pub fn next_bookable_date(
    window: &BookingWindow<'_>,
    from: CalendarDate,
    horizon: u32,
) -> Option<CalendarDate> {
    (0..=horizon)
        .filter_map(|offset| from.add_days(offset))
        .find(|date| !window.is_disabled(*date))
}
