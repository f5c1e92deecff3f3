//! Lenient field checks for the contact and booking forms.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Characters customers commonly type between phone digits.
const PHONE_SEPARATORS: [char; 5] = ['-', '/', '(', ')', '+'];

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 5;

/// Inline hint shown while a malformed email address is in the field.
pub const EMAIL_HINT: &str =
    "Bitte geben Sie eine gültige E-Mail-Adresse ein (z.B. name@beispiel.de)";

/// Inline hint shown while a malformed phone number is in the field.
pub const PHONE_HINT: &str =
    "Bitte geben Sie eine gültige Telefonnummer ein (mindestens 5 Ziffern)";

/// Something, an `@`, something, a dot, something; no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// At least five digits once spaces and `- / ( ) +` are removed, and nothing else.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !PHONE_SEPARATORS.contains(c))
        .collect();
    digits.len() >= MIN_PHONE_DIGITS && digits.chars().all(|c| c.is_ascii_digit())
}

/// Hint to show when the email field loses focus; empty fields get none.
#[must_use]
pub fn email_hint(value: &str) -> Option<&'static str> {
    (!value.trim().is_empty() && !is_valid_email(value)).then_some(EMAIL_HINT)
}

/// Hint to show when the optional phone field loses focus; empty fields get none.
#[must_use]
pub fn phone_hint(value: &str) -> Option<&'static str> {
    (!value.trim().is_empty() && !is_valid_phone(value)).then_some(PHONE_HINT)
}
