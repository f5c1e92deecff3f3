//! Month grid for choosing the appointment day.
//!
//! Days the booking window rules out are rendered as disabled buttons, so the
//! customer can only ever pick a date the workshop can serve.

use crate::i18n::t;
use std::rc::Rc;
use yew::prelude::*;
use ziller_core::calendar::WEEKDAY_SHORT_DE;
use ziller_core::{BookingWindow, CalendarDate, EligibilityEngine, TimeSlot};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub engine: Rc<EligibilityEngine>,
    pub today: CalendarDate,
    pub lead_days: u32,
    #[prop_or_default]
    pub selected: Option<CalendarDate>,
    #[prop_or_default]
    pub selected_time: Option<TimeSlot>,
    pub on_select: Callback<CalendarDate>,
}

fn next_month(first: CalendarDate) -> Option<CalendarDate> {
    first.add_days(first.days_in_month())
}

fn previous_month(first: CalendarDate) -> Option<CalendarDate> {
    first.sub_days(1).map(|d| d.first_of_month())
}

#[function_component(DatePicker)]
pub fn date_picker(p: &Props) -> Html {
    let window = BookingWindow::new(&p.engine, p.today, p.lead_days).with_selected_time(p.selected_time);
    let earliest = window.earliest();
    let shown = {
        let start = p.selected.unwrap_or(earliest).first_of_month();
        use_state(move || start)
    };

    let first = *shown;
    let can_go_back = first > earliest.first_of_month();
    let on_prev = {
        let shown = shown.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prev) = previous_month(*shown) {
                shown.set(prev);
            }
        })
    };
    let on_next = {
        let shown = shown.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = next_month(*shown) {
                shown.set(next);
            }
        })
    };

    // Monday-first grid: Sunday (0) lands in the last column.
    let leading_blanks = (first.day_of_week() + 6) % 7;
    let blanks = (0..leading_blanks).map(|i| html! { <span key={format!("blank-{i}")} class="picker-blank"></span> });
    let days = (0..first.days_in_month()).filter_map(|offset| first.add_days(offset)).map(|date| {
        let disabled = window.is_disabled(date);
        let selected = p.selected == Some(date);
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_: MouseEvent| cb.emit(date))
        };
        let class = classes!(
            "picker-day",
            selected.then_some("selected"),
            (date == p.today).then_some("today"),
            disabled.then_some("disabled"),
        );
        html! {
            <button
                key={date.to_string()}
                type="button"
                {class}
                {disabled}
                {onclick}
                data-date={date.to_string()}
                aria-pressed={if selected { "true" } else { "false" }}
                aria-label={date.to_long_german()}
            >
                { date.day() }
            </button>
        }
    });

    html! {
        <div class="date-picker" role="group" aria-label={t("picker.label")}>
            <div class="picker-header">
                <button type="button" class="picker-prev" disabled={!can_go_back} onclick={on_prev} aria-label={t("picker.prev")}>
                    { "‹" }
                </button>
                <span class="picker-month" aria-live="polite">{ first.month_year_de() }</span>
                <button type="button" class="picker-next" onclick={on_next} aria-label={t("picker.next")}>
                    { "›" }
                </button>
            </div>
            <div class="picker-weekdays" aria-hidden="true">
                { for WEEKDAY_SHORT_DE.iter().map(|d| html! { <span>{ *d }</span> }) }
            </div>
            <div class="picker-grid">
                { for blanks }
                { for days }
            </div>
        </div>
    }
}
