//! Appointment eligibility: which days can be booked and at what times.
//!
//! Every operation is a pure function of the engine's configuration and its
//! arguments. The engine holds no mutable state, so the date picker can call
//! it once per rendered day and the time select once per change without any
//! ordering concerns.

use crate::calendar::CalendarDate;
use crate::config::ShopConfig;
use crate::holidays::HolidaySet;
use crate::slots::{SlotSchedule, TimeSlot};
use serde::Serialize;

/// Predicate used by date pickers to grey out days.
pub trait DateExclusion {
    /// `true` means the day must be disabled.
    fn excludes(&self, date: CalendarDate) -> bool;
}

/// Eligibility of a single day, as reported to the UI and the QA tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEligibility {
    pub date: CalendarDate,
    pub selectable: bool,
    pub holiday: Option<String>,
    pub valid_slots: Vec<TimeSlot>,
}

/// Rules deciding which days and times are bookable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityEngine {
    holidays: HolidaySet,
    weekday_hours: SlotSchedule,
    friday_hours: SlotSchedule,
    weekday_slots: Vec<TimeSlot>,
    friday_slots: Vec<TimeSlot>,
}

impl EligibilityEngine {
    #[must_use]
    pub fn new(holidays: HolidaySet, weekday_hours: SlotSchedule, friday_hours: SlotSchedule) -> Self {
        Self {
            holidays,
            weekday_slots: weekday_hours.slots(),
            friday_slots: friday_hours.slots(),
            weekday_hours,
            friday_hours,
        }
    }

    #[must_use]
    pub fn from_config(config: &ShopConfig) -> Self {
        Self::new(
            config.holidays.clone(),
            config.weekday_hours,
            config.friday_hours,
        )
    }

    #[must_use]
    pub const fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    #[must_use]
    pub const fn friday_hours(&self) -> &SlotSchedule {
        &self.friday_hours
    }

    #[must_use]
    pub const fn weekday_hours(&self) -> &SlotSchedule {
        &self.weekday_hours
    }

    /// Whether `date` is a fixed holiday in any year.
    #[must_use]
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        self.holidays.contains(date)
    }

    /// Whether `date` can be booked at all: not a weekend, not a fixed holiday.
    #[must_use]
    pub fn is_selectable(&self, date: CalendarDate) -> bool {
        !date.is_weekend() && !self.is_holiday(date)
    }

    /// Times offered on `date`: the short Friday list on Fridays, the full
    /// list on every other day.
    #[must_use]
    pub fn valid_slots_for(&self, date: CalendarDate) -> &[TimeSlot] {
        if date.is_friday() {
            &self.friday_slots
        } else {
            &self.weekday_slots
        }
    }

    /// Times offered before any date has been picked.
    #[must_use]
    pub fn default_slots(&self) -> &[TimeSlot] {
        &self.weekday_slots
    }

    /// Keep `previous` if it is still offered on `date`, otherwise drop it.
    #[must_use]
    pub fn reconcile_selected_time(
        &self,
        date: CalendarDate,
        previous: Option<TimeSlot>,
    ) -> Option<TimeSlot> {
        let previous = previous?;
        if self.valid_slots_for(date).contains(&previous) {
            Some(previous)
        } else {
            log::debug!("dropping {previous} for {date}: not offered on that day");
            None
        }
    }

    /// Whether `time` fits the Friday opening window. No time at all fits.
    #[must_use]
    pub fn fits_friday(&self, time: Option<TimeSlot>) -> bool {
        time.is_none_or(|t| self.friday_hours.covers(t))
    }

    /// Full eligibility report for one day.
    #[must_use]
    pub fn evaluate(&self, date: CalendarDate) -> DayEligibility {
        let selectable = self.is_selectable(date);
        DayEligibility {
            date,
            selectable,
            holiday: self.holidays.holiday_on(date).map(|h| h.name.clone()),
            valid_slots: if selectable {
                self.valid_slots_for(date).to_vec()
            } else {
                Vec::new()
            },
        }
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::from_config(&ShopConfig::default())
    }
}

impl DateExclusion for EligibilityEngine {
    fn excludes(&self, date: CalendarDate) -> bool {
        !self.is_selectable(date)
    }
}
