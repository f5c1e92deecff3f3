use serde::Serialize;
use thiserror::Error;
use ziller_core::{BookingWindow, CalendarDate, EligibilityEngine};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthError {
    #[error("expected a month as YYYY-MM, got {0:?}")]
    Malformed(String),
    #[error("{year}-{month:02} is not a calendar month")]
    OutOfRange { year: i32, month: u32 },
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(text: &str) -> Result<CalendarDate, MonthError> {
    let malformed = || MonthError::Malformed(text.to_string());
    let (year, month) = text.trim().split_once('-').ok_or_else(malformed)?;
    let year: i32 = year.parse().map_err(|_| malformed())?;
    let month: u32 = month.parse().map_err(|_| malformed())?;
    CalendarDate::from_ymd(year, month, 1).map_err(|_| MonthError::OutOfRange { year, month })
}

/// One line of the month overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRow {
    pub date: CalendarDate,
    pub weekday: &'static str,
    pub selectable: bool,
    /// Selectable and inside the booking window.
    pub bookable: bool,
    pub holiday: Option<String>,
    pub slot_count: usize,
    pub last_slot: Option<String>,
}

/// Every day of the month starting at `first`, as the booking page would treat it on `today`.
pub fn month_overview(
    engine: &EligibilityEngine,
    today: CalendarDate,
    lead_days: u32,
    first: CalendarDate,
) -> Vec<DayRow> {
    let window = BookingWindow::new(engine, today, lead_days);
    let first = first.first_of_month();
    (0..first.days_in_month())
        .filter_map(|offset| first.add_days(offset))
        .map(|date| {
            let day = engine.evaluate(date);
            DayRow {
                date,
                weekday: date.weekday_name_de(),
                selectable: day.selectable,
                bookable: window.is_bookable_date(date),
                holiday: day.holiday,
                slot_count: day.valid_slots.len(),
                last_slot: day.valid_slots.last().map(ToString::to_string),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parses_months() {
        assert_eq!(parse_month("2026-10"), Ok(date(2026, 10, 1)));
        assert_eq!(parse_month(" 2027-1 "), Ok(date(2027, 1, 1)));
        assert_eq!(
            parse_month("2026-13"),
            Err(MonthError::OutOfRange { year: 2026, month: 13 })
        );
        assert!(matches!(parse_month("Oktober"), Err(MonthError::Malformed(_))));
    }

    #[test]
    fn october_2026_overview() {
        let engine = EligibilityEngine::default();
        let rows = month_overview(&engine, date(2026, 10, 15), 1, date(2026, 10, 20));
        assert_eq!(rows.len(), 31);
        assert_eq!(rows[0].date, date(2026, 10, 1));

        let unity_day = &rows[2];
        assert!(!unity_day.selectable);
        assert!(unity_day.holiday.is_some());

        let today = &rows[14];
        assert!(today.selectable && !today.bookable);

        let friday = &rows[15];
        assert!(friday.bookable);
        assert_eq!(friday.slot_count, 12);
        assert_eq!(friday.last_slot.as_deref(), Some("13:30"));

        let monday = &rows[18];
        assert_eq!(monday.weekday, "Montag");
        assert_eq!(monday.last_slot.as_deref(), Some("16:00"));
    }
}
