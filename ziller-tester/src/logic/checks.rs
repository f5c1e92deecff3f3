use serde::Serialize;
use ziller_core::{BookingWindow, CalendarDate, EligibilityEngine, TimeChange, TimeSlot, on_time_changed};

/// Everything the booking form would decide about one date and optional time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub date: CalendarDate,
    pub weekday: &'static str,
    pub selectable: bool,
    pub bookable: bool,
    pub holiday: Option<String>,
    pub valid_slots: Vec<String>,
    pub time: Option<String>,
    /// Whether the time survives picking this date.
    pub time_kept: Option<bool>,
    /// Whether picking the time afterwards would clear this date.
    pub clears_date: Option<bool>,
}

pub fn check_day(
    engine: &EligibilityEngine,
    today: CalendarDate,
    lead_days: u32,
    date: CalendarDate,
    time: Option<TimeSlot>,
) -> CheckOutcome {
    let window = BookingWindow::new(engine, today, lead_days);
    let day = engine.evaluate(date);
    log::debug!("checking {date} with time {time:?}");
    CheckOutcome {
        date,
        weekday: date.weekday_name_de(),
        selectable: day.selectable,
        bookable: window.is_bookable_date(date),
        holiday: day.holiday,
        valid_slots: engine.valid_slots_for(date).iter().map(ToString::to_string).collect(),
        time: time.map(|t| t.to_string()),
        time_kept: time.map(|t| engine.reconcile_selected_time(date, Some(t)).is_some()),
        clears_date: time.map(|t| on_time_changed(engine, Some(date), Some(t)) == TimeChange::ClearDate),
    }
}
