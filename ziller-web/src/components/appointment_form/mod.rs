//! Workshop appointment request form.
//!
//! Date and time influence each other: picking a Friday drops a time after
//! Friday closing, and picking such a time clears an already chosen Friday
//! (with an alert explaining why). Everything is validated in the browser;
//! a valid request swaps the form for a confirmation panel.

mod success;

pub use success::SuccessPanel;

use crate::a11y;
use crate::components::date_picker::DatePicker;
use crate::components::field_error::FieldError;
use crate::dom;
use crate::i18n::{t, tr1};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use ziller_core::{
    AppointmentConfirmation, AppointmentRequest, BookingWindow, CalendarDate, EligibilityEngine,
    FRIDAY_TIME_ALERT, Field, FormError, TimeChange, TimeSlot, email_hint, error_for, phone_hint,
    without_field,
};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub engine: Rc<EligibilityEngine>,
    pub today: CalendarDate,
    pub lead_days: u32,
    /// Pre-filled request, e.g. when returning to the page.
    #[prop_or_default]
    pub initial: AppointmentRequest,
}

fn input_value(e: &InputEvent) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(web_sys::HtmlTextAreaElement::value)
}

#[function_component(AppointmentForm)]
pub fn appointment_form(p: &Props) -> Html {
    let request = {
        let initial = p.initial.clone();
        use_state(move || initial)
    };
    let errors = use_state(Vec::<FormError>::new);
    let confirmation = use_state(|| None::<AppointmentConfirmation>);
    let touched = use_state(|| (false, false));

    if let Some(done) = (*confirmation).clone() {
        return html! { <SuccessPanel confirmation={done} /> };
    }

    let on_date = {
        let request = request.clone();
        let errors = errors.clone();
        let engine = p.engine.clone();
        Callback::from(move |date: CalendarDate| {
            let mut next = (*request).clone();
            next.select_date(&engine, date);
            request.set(next);
            errors.set(without_field(&without_field(&errors, Field::Date), Field::Time));
        })
    };

    let on_time = {
        let request = request.clone();
        let errors = errors.clone();
        let engine = p.engine.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok()) else {
                return;
            };
            let mut next = (*request).clone();
            if next.select_time(&engine, TimeSlot::parse_optional(&select.value())) == TimeChange::ClearDate {
                dom::alert(FRIDAY_TIME_ALERT);
            }
            request.set(next);
            errors.set(without_field(&errors, Field::Time));
        })
    };

    let text_input = |field: Field, apply: fn(&mut AppointmentRequest, String)| {
        let request = request.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                let mut next = (*request).clone();
                apply(&mut next, value);
                request.set(next);
                errors.set(without_field(&errors, field));
            }
        })
    };
    let on_name = text_input(Field::Name, |r, v| r.name = v);
    let on_email = text_input(Field::Email, |r, v| r.email = v);
    let on_phone = text_input(Field::Phone, |r, v| r.phone = v);
    let on_message = text_input(Field::Message, |r, v| r.message = v);

    let on_privacy = {
        let request = request.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                let mut next = (*request).clone();
                next.privacy_accepted = input.checked();
                request.set(next);
                errors.set(without_field(&errors, Field::Privacy));
            }
        })
    };

    let on_email_blur = {
        let touched = touched.clone();
        Callback::from(move |_: FocusEvent| touched.set((true, touched.1)))
    };
    let on_phone_blur = {
        let touched = touched.clone();
        Callback::from(move |_: FocusEvent| touched.set((touched.0, true)))
    };

    let on_submit = {
        let request = request.clone();
        let errors = errors.clone();
        let confirmation = confirmation.clone();
        let engine = p.engine.clone();
        let today = p.today;
        let lead_days = p.lead_days;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let window = BookingWindow::new(&engine, today, lead_days).with_selected_time(request.time);
            match request.validate(&window) {
                Ok(done) => {
                    a11y::set_status(&t("success.title"));
                    errors.set(Vec::new());
                    confirmation.set(Some(done));
                }
                Err(found) => {
                    if let Some(first) = found.first() {
                        a11y::set_status(&first.to_string());
                    }
                    errors.set(found);
                }
            }
        })
    };

    let req = &*request;
    let err = |field: Field| error_for(&errors, field);
    let email_note = if touched.0 { email_hint(&req.email) } else { None };
    let phone_note = if touched.1 { phone_hint(&req.phone) } else { None };
    let selected_date = req.date.map(|d| d.to_german()).unwrap_or_default();
    let time_options = req.time_options(&p.engine).iter().map(|slot| {
        let value = slot.to_string();
        html! {
            <option key={value.clone()} value={value.clone()} selected={req.time == Some(*slot)}>
                { tr1("form.time_suffix", "time", &value) }
            </option>
        }
    });

    html! {
        <form id="appointment-form" class="booking-form" novalidate=true onsubmit={on_submit}>
            <div class={classes!("form-group", err(Field::Date).map(|_| "has-error"))}>
                <label for="appointment-date">{ t("form.date") }{ " *" }</label>
                <input
                    id="appointment-date"
                    type="text"
                    readonly=true
                    value={selected_date}
                    placeholder={t("form.date_placeholder")}
                    aria-describedby="date-error"
                    aria-invalid={err(Field::Date).map(|_| "true")}
                />
                <DatePicker
                    engine={p.engine.clone()}
                    today={p.today}
                    lead_days={p.lead_days}
                    selected={req.date}
                    selected_time={req.time}
                    on_select={on_date}
                />
                <FieldError id="date-error" error={err(Field::Date)} />
            </div>

            <div class={classes!("form-group", err(Field::Time).map(|_| "has-error"))}>
                <label for="appointment-time">{ t("form.time") }{ " *" }</label>
                <select id="appointment-time" onchange={on_time} aria-describedby="time-error">
                    <option value="" selected={req.time.is_none()}>{ t("form.time_placeholder") }</option>
                    { for time_options }
                </select>
                <FieldError id="time-error" error={err(Field::Time)} />
            </div>

            <div class="form-group">
                <label for="name">{ t("form.name") }{ " *" }</label>
                <input id="name" type="text" autocomplete="name" value={req.name.clone()} oninput={on_name} aria-describedby="name-error" />
                <FieldError id="name-error" error={err(Field::Name)} />
            </div>

            <div class="form-group">
                <label for="email">{ t("form.email") }{ " *" }</label>
                <input
                    id="email"
                    type="email"
                    autocomplete="email"
                    value={req.email.clone()}
                    oninput={on_email}
                    onblur={on_email_blur}
                    aria-describedby="email-error"
                />
                <FieldError id="email-error" error={err(Field::Email)} hint={email_note} />
            </div>

            <div class="form-group">
                <label for="phone">{ t("form.phone") }</label>
                <input
                    id="phone"
                    type="tel"
                    autocomplete="tel"
                    value={req.phone.clone()}
                    oninput={on_phone}
                    onblur={on_phone_blur}
                    aria-describedby="phone-error"
                />
                <FieldError id="phone-error" error={err(Field::Phone)} hint={phone_note} />
            </div>

            <div class="form-group">
                <label for="message">{ t("form.service_message") }</label>
                <textarea id="message" rows="5" value={req.message.clone()} oninput={on_message} />
            </div>

            <div class="form-group checkbox-group">
                <input id="privacy" type="checkbox" checked={req.privacy_accepted} onchange={on_privacy} aria-describedby="privacy-error" />
                <label for="privacy">{ t("form.privacy") }</label>
                <FieldError id="privacy-error" error={err(Field::Privacy)} />
            </div>

            <button type="submit" class="btn btn-primary">{ t("form.submit_appointment") }</button>
        </form>
    }
}
