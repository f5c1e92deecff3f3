//! Multi-year consistency sweeps over the booking rules.
//!
//! Each sweep walks every day of the requested years and records a failure
//! line for every day that breaks the rule it checks.

use serde::Serialize;
use std::time::{Duration, Instant};
use ziller_core::{
    BookingWindow, CalendarDate, EligibilityEngine, Greeting, TimeChange, TimeSlot, easter_sunday,
    on_time_changed, seasonal_greeting,
};

/// Stop collecting failure lines after this many per sweep.
const MAX_REPORTED_FAILURES: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct SweepResult {
    pub name: String,
    pub passed: bool,
    pub days_checked: usize,
    pub failure_count: usize,
    pub failures: Vec<String>,
    pub duration: Duration,
}

type SweepFn = fn(&EligibilityEngine, CalendarDate, &mut Vec<String>);

const SWEEPS: &[(&str, &str, SweepFn)] = &[
    (
        "selectable-days",
        "Selectable exactly on Monday to Friday outside the holiday list",
        sweep_selectable,
    ),
    (
        "slot-lists",
        "Offered times are ascending, start at the first slot and end at closing",
        sweep_slot_lists,
    ),
    (
        "time-reconcile",
        "A kept time is always offered; only late times on Fridays are dropped",
        sweep_reconcile,
    ),
    (
        "friday-conflict",
        "Choosing a late time clears a Friday and nothing else",
        sweep_friday_conflict,
    ),
    (
        "booking-window",
        "The picker never enables a past, closed or too-early day",
        sweep_booking_window,
    ),
    (
        "greetings",
        "Seasonal greetings fall inside their seasons and Easter lands on a Sunday",
        sweep_greetings,
    ),
];

/// Names and descriptions of all sweeps.
pub fn list_sweeps() -> impl Iterator<Item = (&'static str, &'static str)> {
    SWEEPS.iter().map(|(name, description, _)| (*name, *description))
}

fn days_of_years(years: std::ops::RangeInclusive<i32>) -> Vec<CalendarDate> {
    years
        .filter_map(|year| CalendarDate::from_ymd(year, 1, 1).ok())
        .flat_map(|first| {
            let year = first.year();
            std::iter::successors(Some(first), |d| d.add_days(1)).take_while(move |d| d.year() == year)
        })
        .collect()
}

fn sweep_selectable(engine: &EligibilityEngine, day: CalendarDate, failures: &mut Vec<String>) {
    let expected = !day.is_weekend() && !engine.holidays().contains(day);
    if engine.is_selectable(day) != expected {
        failures.push(format!("{day}: selectable should be {expected}"));
    }
    if engine.is_holiday(day) && engine.is_selectable(day) {
        failures.push(format!("{day}: holiday is selectable"));
    }
}

fn sweep_slot_lists(engine: &EligibilityEngine, day: CalendarDate, failures: &mut Vec<String>) {
    let slots = engine.valid_slots_for(day);
    let schedule = if day.is_friday() {
        engine.friday_hours()
    } else {
        engine.weekday_hours()
    };
    if slots.first() != Some(&schedule.first) || slots.last() != Some(&schedule.last) {
        failures.push(format!("{day}: slots do not span {}-{}", schedule.first, schedule.last));
    }
    if !slots.windows(2).all(|w| w[0] < w[1]) {
        failures.push(format!("{day}: slots are not ascending"));
    }
}

fn sweep_reconcile(engine: &EligibilityEngine, day: CalendarDate, failures: &mut Vec<String>) {
    for &time in engine.default_slots() {
        match engine.reconcile_selected_time(day, Some(time)) {
            Some(kept) if !engine.valid_slots_for(day).contains(&kept) => {
                failures.push(format!("{day}: kept {kept} which is not offered"));
            }
            None if !day.is_friday() => failures.push(format!("{day}: dropped {time} on a non-Friday")),
            _ => {}
        }
    }
    if engine.reconcile_selected_time(day, None).is_some() {
        failures.push(format!("{day}: invented a time"));
    }
}

fn sweep_friday_conflict(engine: &EligibilityEngine, day: CalendarDate, failures: &mut Vec<String>) {
    for &time in engine.default_slots() {
        let clears = on_time_changed(engine, Some(day), Some(time)) == TimeChange::ClearDate;
        let expected = day.is_friday() && !engine.friday_hours().covers(time);
        if clears != expected {
            failures.push(format!("{day} {time}: clears date should be {expected}"));
        }
    }
}

fn sweep_booking_window(engine: &EligibilityEngine, day: CalendarDate, failures: &mut Vec<String>) {
    let late = TimeSlot::from_hm(15, 0).ok();
    for (lead_days, time) in [(1, None), (1, late), (3, None)] {
        let window = BookingWindow::new(engine, day, lead_days).with_selected_time(time);
        for candidate in (0..=10).filter_map(|offset| day.add_days(offset)) {
            if window.is_disabled(candidate) {
                continue;
            }
            if day.days_until(candidate) < i64::from(lead_days) {
                failures.push(format!("{day}: enabled {candidate} inside the {lead_days}-day lead"));
            }
            if !engine.is_selectable(candidate) {
                failures.push(format!("{day}: enabled closed day {candidate}"));
            }
            if candidate.is_friday() && !engine.fits_friday(time) {
                failures.push(format!("{day}: enabled Friday {candidate} with a late time"));
            }
        }
    }
}

fn sweep_greetings(_engine: &EligibilityEngine, day: CalendarDate, failures: &mut Vec<String>) {
    let easter = easter_sunday(day.year());
    if day.month() == 1 && day.day() == 1 {
        match easter {
            Some(sunday) if sunday.day_of_week() == 0 => {}
            _ => failures.push(format!("{}: Easter Sunday is not a Sunday", day.year())),
        }
    }
    let in_easter_window = easter.is_some_and(|sunday| {
        let days = day.days_until(sunday);
        (-1..=14).contains(&days)
    });
    let ok = match seasonal_greeting(day) {
        Some(Greeting::Christmas) => day.month() == 12 && day.day() <= 26,
        Some(Greeting::NewYear) => (day.month() == 12 && day.day() >= 27) || (day.month() == 1 && day.day() == 1),
        Some(Greeting::Easter) => in_easter_window,
        None => !in_easter_window && !(day.month() == 12 || (day.month() == 1 && day.day() == 1)),
    };
    if !ok {
        failures.push(format!("{day}: unexpected greeting {:?}", seasonal_greeting(day)));
    }
}

/// Run the sweeps named in `selected` (all when it contains `all`) over `years`.
pub fn run_sweeps(
    engine: &EligibilityEngine,
    selected: &[String],
    years: std::ops::RangeInclusive<i32>,
) -> Vec<SweepResult> {
    let run_all = selected.iter().any(|s| s == "all");
    let days = days_of_years(years);
    SWEEPS
        .iter()
        .filter(|(name, _, _)| run_all || selected.iter().any(|s| s == name))
        .map(|(name, _, sweep)| {
            let started = Instant::now();
            let mut failures = Vec::new();
            for day in &days {
                sweep(engine, *day, &mut failures);
            }
            let failure_count = failures.len();
            failures.truncate(MAX_REPORTED_FAILURES);
            log::info!("sweep {name}: {failure_count} failures over {} days", days.len());
            SweepResult {
                name: (*name).to_string(),
                passed: failure_count == 0,
                days_checked: days.len(),
                failure_count,
                failures,
                duration: started.elapsed(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_pass_every_sweep() {
        let engine = EligibilityEngine::default();
        let results = run_sweeps(&engine, &["all".to_string()], 2025..=2027);
        assert_eq!(results.len(), SWEEPS.len());
        for result in &results {
            assert!(result.passed, "{}: {:?}", result.name, result.failures);
            assert_eq!(result.days_checked, 365 * 3);
        }
    }

    #[test]
    fn selects_sweeps_by_name() {
        let engine = EligibilityEngine::default();
        let results = run_sweeps(&engine, &["slot-lists".to_string(), "nope".to_string()], 2026..=2026);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "slot-lists");
    }

    #[test]
    fn leap_years_have_366_days() {
        assert_eq!(days_of_years(2028..=2028).len(), 366);
    }
}
