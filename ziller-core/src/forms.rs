//! Contact and appointment form models.
//!
//! Both forms are validated entirely on the client. Nothing is sent anywhere;
//! a successful submission only produces the confirmation shown to the
//! customer.

use crate::booking::{BookingWindow, TimeChange, on_time_changed};
use crate::calendar::CalendarDate;
use crate::eligibility::EligibilityEngine;
use crate::slots::TimeSlot;
use crate::validation::{is_valid_email, is_valid_phone};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Date,
    Time,
    Name,
    Email,
    Phone,
    Message,
    Privacy,
}

/// A failed field check, rendered as the German inline message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Bitte wählen Sie ein Datum")]
    MissingDate,
    #[error("An diesem Tag sind leider keine Termine möglich")]
    DateUnavailable,
    #[error("Bitte wählen Sie eine Uhrzeit")]
    MissingTime,
    #[error("Diese Uhrzeit ist am gewählten Tag nicht verfügbar")]
    TimeUnavailable,
    #[error("Bitte geben Sie Ihren Namen ein")]
    MissingName,
    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein")]
    InvalidEmail,
    #[error("Bitte geben Sie eine gültige Telefonnummer ein")]
    InvalidPhone,
    #[error("Bitte geben Sie eine Nachricht ein")]
    MissingMessage,
    #[error("Bitte stimmen Sie der Datenschutzerklärung zu.")]
    PrivacyNotAccepted,
}

impl FormError {
    #[must_use]
    pub const fn field(self) -> Field {
        match self {
            Self::MissingDate | Self::DateUnavailable => Field::Date,
            Self::MissingTime | Self::TimeUnavailable => Field::Time,
            Self::MissingName => Field::Name,
            Self::InvalidEmail => Field::Email,
            Self::InvalidPhone => Field::Phone,
            Self::MissingMessage => Field::Message,
            Self::PrivacyNotAccepted => Field::Privacy,
        }
    }
}

/// The first error reported for `field`, if any.
#[must_use]
pub fn error_for(errors: &[FormError], field: Field) -> Option<FormError> {
    errors.iter().copied().find(|e| e.field() == field)
}

/// `errors` minus everything reported for `field`; used once the user edits it.
#[must_use]
pub fn without_field(errors: &[FormError], field: Field) -> Vec<FormError> {
    errors.iter().copied().filter(|e| e.field() != field).collect()
}

/// Service appointment request as filled in on the workshop page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub date: Option<CalendarDate>,
    pub time: Option<TimeSlot>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub privacy_accepted: bool,
}

impl AppointmentRequest {
    /// Pick a date and drop a time that is not offered on it.
    pub fn select_date(&mut self, engine: &EligibilityEngine, date: CalendarDate) {
        self.date = Some(date);
        self.time = engine.reconcile_selected_time(date, self.time);
    }

    /// Pick a time. Clears a Friday date that no longer works with it.
    pub fn select_time(&mut self, engine: &EligibilityEngine, time: Option<TimeSlot>) -> TimeChange {
        self.time = time;
        let change = on_time_changed(engine, self.date, time);
        if change == TimeChange::ClearDate {
            self.date = None;
        }
        change
    }

    /// Times to offer in the select for the current date.
    #[must_use]
    pub fn time_options<'e>(&self, engine: &'e EligibilityEngine) -> &'e [TimeSlot] {
        self.date
            .map_or_else(|| engine.default_slots(), |date| engine.valid_slots_for(date))
    }

    /// Check every field, reporting problems in form order.
    ///
    /// # Errors
    ///
    /// Returns all failed checks when at least one field is missing or malformed.
    pub fn validate(&self, window: &BookingWindow<'_>) -> Result<AppointmentConfirmation, Vec<FormError>> {
        let mut errors = Vec::new();
        match self.date {
            None => errors.push(FormError::MissingDate),
            Some(date) if !window.is_bookable_date(date) => errors.push(FormError::DateUnavailable),
            Some(_) => {}
        }
        match (self.date, self.time) {
            (_, None) => errors.push(FormError::MissingTime),
            (Some(date), Some(time)) if !window.engine().valid_slots_for(date).contains(&time) => {
                errors.push(FormError::TimeUnavailable);
            }
            _ => {}
        }
        if self.name.trim().is_empty() {
            errors.push(FormError::MissingName);
        }
        if self.email.trim().is_empty() || !is_valid_email(&self.email) {
            errors.push(FormError::InvalidEmail);
        }
        if !self.phone.trim().is_empty() && !is_valid_phone(&self.phone) {
            errors.push(FormError::InvalidPhone);
        }
        if !self.privacy_accepted {
            errors.push(FormError::PrivacyNotAccepted);
        }

        match (self.date, self.time) {
            (Some(date), Some(time)) if errors.is_empty() => {
                log::info!("appointment request prepared for {date} {time}");
                Ok(AppointmentConfirmation {
                    date,
                    time,
                    name: self.name.trim().to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}

/// What the customer sees after a successful booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentConfirmation {
    pub date: CalendarDate,
    pub time: TimeSlot,
    pub name: String,
}

impl AppointmentConfirmation {
    /// `Dienstag, 10. Februar 2026`
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.to_long_german()
    }

    /// `um 09:00 Uhr`
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format!("um {} Uhr", self.time)
    }
}

/// Message from the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Check the three required fields.
    ///
    /// # Errors
    ///
    /// Returns every failed check, in form order.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FormError::MissingName);
        }
        if self.email.trim().is_empty() || !is_valid_email(&self.email) {
            errors.push(FormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FormError::MissingMessage);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Notice shown under the contact form after a successful submission.
pub const CONTACT_SUCCESS: &str =
    "Vielen Dank! Ihre Nachricht wurde gesendet. Wir melden uns bald bei Ihnen.";

/// How long the contact success notice stays visible.
pub const CONTACT_SUCCESS_VISIBLE_MS: u32 = 5_000;

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn slot(text: &str) -> TimeSlot {
        text.parse().unwrap()
    }

    fn filled() -> AppointmentRequest {
        AppointmentRequest {
            date: Some(date(2026, 2, 10)),
            time: Some(slot("09:00")),
            name: "Maria Huber".into(),
            email: "maria@example.de".into(),
            phone: String::new(),
            message: "Inspektion".into(),
            privacy_accepted: true,
        }
    }

    #[test]
    fn complete_request_is_confirmed() {
        let engine = EligibilityEngine::default();
        let window = BookingWindow::new(&engine, date(2026, 2, 1), 1);
        let confirmation = filled().validate(&window).unwrap();
        assert_eq!(confirmation.formatted_date(), "Dienstag, 10. Februar 2026");
        assert_eq!(confirmation.formatted_time(), "um 09:00 Uhr");
        assert_eq!(confirmation.name, "Maria Huber");
    }

    #[test]
    fn empty_request_lists_errors_in_form_order() {
        let engine = EligibilityEngine::default();
        let window = BookingWindow::new(&engine, date(2026, 2, 1), 1);
        let errors = AppointmentRequest::default().validate(&window).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FormError::MissingDate,
                FormError::MissingTime,
                FormError::MissingName,
                FormError::InvalidEmail,
                FormError::PrivacyNotAccepted,
            ]
        );
    }

    #[test]
    fn optional_phone_is_checked_only_when_filled() {
        let engine = EligibilityEngine::default();
        let window = BookingWindow::new(&engine, date(2026, 2, 1), 1);
        let mut request = filled();
        request.phone = "12".into();
        assert_eq!(request.validate(&window).unwrap_err(), vec![FormError::InvalidPhone]);
        request.phone = "0851 / 123 45".into();
        assert!(request.validate(&window).is_ok());
    }

    #[test]
    fn closed_or_past_days_are_rejected() {
        let engine = EligibilityEngine::default();
        let window = BookingWindow::new(&engine, date(2026, 2, 10), 1);
        let mut request = filled();
        assert_eq!(request.validate(&window).unwrap_err(), vec![FormError::DateUnavailable]);
        request.date = Some(date(2026, 8, 15));
        assert_eq!(request.validate(&window).unwrap_err(), vec![FormError::DateUnavailable]);
    }

    #[test]
    fn friday_afternoon_time_is_rejected() {
        let engine = EligibilityEngine::default();
        let window = BookingWindow::new(&engine, date(2026, 2, 1), 1);
        let mut request = filled();
        request.date = Some(date(2026, 2, 13));
        request.time = Some(slot("15:00"));
        assert_eq!(request.validate(&window).unwrap_err(), vec![FormError::TimeUnavailable]);
    }

    #[test]
    fn selecting_friday_drops_late_time() {
        let engine = EligibilityEngine::default();
        let mut request = AppointmentRequest::default();
        assert_eq!(request.select_time(&engine, Some(slot("15:30"))), TimeChange::Keep);
        assert_eq!(request.time_options(&engine).len(), 17);
        request.select_date(&engine, date(2026, 2, 13));
        assert_eq!(request.time, None);
        assert_eq!(request.time_options(&engine).len(), 12);
        request.select_time(&engine, Some(slot("11:00")));
        request.select_date(&engine, date(2026, 2, 12));
        assert_eq!(request.time, Some(slot("11:00")));
    }

    #[test]
    fn late_time_clears_friday() {
        let engine = EligibilityEngine::default();
        let mut request = AppointmentRequest::default();
        request.select_date(&engine, date(2026, 2, 13));
        assert_eq!(request.select_time(&engine, Some(slot("16:00"))), TimeChange::ClearDate);
        assert_eq!(request.date, None);
        assert_eq!(request.time, Some(slot("16:00")));
    }

    #[test]
    fn contact_message_checks() {
        let errors = ContactMessage::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![FormError::MissingName, FormError::InvalidEmail, FormError::MissingMessage]
        );
        assert_eq!(error_for(&errors, Field::Email), Some(FormError::InvalidEmail));
        assert_eq!(error_for(&errors, Field::Phone), None);
        let ok = ContactMessage {
            name: "Sepp".into(),
            email: "sepp@example.de".into(),
            message: "Hallo".into(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn messages_are_german() {
        assert_eq!(FormError::MissingDate.to_string(), "Bitte wählen Sie ein Datum");
        assert_eq!(FormError::PrivacyNotAccepted.field(), Field::Privacy);
    }

    #[test]
    fn without_field_keeps_other_errors() {
        let errors = [FormError::MissingDate, FormError::MissingTime, FormError::InvalidEmail];
        assert_eq!(
            without_field(&errors, Field::Time),
            vec![FormError::MissingDate, FormError::InvalidEmail]
        );
    }
}
