//! Radsport Ziller site core
//!
//! Platform-agnostic rules behind the shop website: which days and times can
//! be booked for a workshop appointment, how the booking and contact forms are
//! checked, and the small pieces of page behaviour (navigation menu, text size,
//! seasonal greeting) that do not need a browser to be decided.

pub mod booking;
pub mod calendar;
pub mod config;
pub mod easter;
pub mod eligibility;
pub mod forms;
pub mod greeting;
pub mod holidays;
pub mod navigation;
pub mod slots;
pub mod text_size;
pub mod validation;

// Re-export commonly used types
pub use booking::{
    BookingWindow, FRIDAY_TIME_ALERT, TimeChange, min_booking_date, next_bookable_date,
    on_time_changed,
};
pub use calendar::{CalendarDate, CalendarError};
pub use config::{ConfigError, ConfigSource, ShopConfig};
pub use easter::easter_sunday;
pub use eligibility::{DateExclusion, DayEligibility, EligibilityEngine};
pub use forms::{
    AppointmentConfirmation, AppointmentRequest, CONTACT_SUCCESS, CONTACT_SUCCESS_VISIBLE_MS,
    ContactMessage, Field, FormError, error_for, without_field,
};
pub use greeting::{Greeting, seasonal_greeting};
pub use holidays::{FixedHoliday, HolidaySet};
pub use navigation::{LinkTarget, NavMenu};
pub use slots::{SlotError, SlotSchedule, TimeSlot};
pub use text_size::TextSize;
pub use validation::{email_hint, is_valid_email, is_valid_phone, phone_hint};
