//! Easter Sunday for the Gregorian calendar.

use crate::calendar::CalendarDate;

/// Easter Sunday of `year` (Gauss/Meeus algorithm).
///
/// Returns `None` only for years outside the range chrono can represent.
#[must_use]
pub fn easter_sunday(year: i32) -> Option<CalendarDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = u32::try_from(n / 31).ok()?;
    let day = u32::try_from(n % 31 + 1).ok()?;
    CalendarDate::from_ymd(year, month, day).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_easter_sundays() {
        let cases = [
            (2000, 4, 23),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2027, 3, 28),
            (2038, 4, 25),
        ];
        for (year, month, day) in cases {
            let easter = easter_sunday(year).unwrap();
            assert_eq!(
                (easter.month(), easter.day()),
                (month, day),
                "Easter {year}"
            );
            assert_eq!(easter.day_of_week(), 0, "Easter {year} must be a Sunday");
        }
    }
}
