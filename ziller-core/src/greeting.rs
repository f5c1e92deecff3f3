//! Seasonal greetings shown in the banner above the page content.

use crate::calendar::CalendarDate;
use crate::easter::easter_sunday;

/// Days before Easter Sunday on which the Easter greeting starts.
const EASTER_LEAD_DAYS: u32 = 14;
/// Days after Easter Sunday on which the Easter greeting is still shown.
/// Dates are compared whole, so Easter Monday keeps the greeting all day.
const EASTER_TRAIL_DAYS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Christmas,
    NewYear,
    Easter,
}

impl Greeting {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Christmas => {
                "🎄 Frohe Weihnachten wünscht Ihnen das Team von Radsport Ziller! 🎄"
            }
            Self::NewYear => {
                "🎆 Einen guten Rutsch ins neue Jahr wünscht Ihnen das Team von Radsport Ziller! 🎆"
            }
            Self::Easter => "🐰 Frohe Ostern wünscht Ihnen das Team von Radsport Ziller! 🐰",
        }
    }
}

/// Greeting for `today`, if it falls in one of the seasons.
///
/// Christmas runs 1 to 26 December, New Year 27 December to 1 January, and
/// Easter from two weeks before Easter Sunday to the day after.
#[must_use]
pub fn seasonal_greeting(today: CalendarDate) -> Option<Greeting> {
    match (today.month(), today.day()) {
        (12, 1..=26) => return Some(Greeting::Christmas),
        (12, _) | (1, 1) => return Some(Greeting::NewYear),
        _ => {}
    }
    let easter = easter_sunday(today.year())?;
    let start = easter.sub_days(EASTER_LEAD_DAYS)?;
    let end = easter.add_days(EASTER_TRAIL_DAYS)?;
    (start..=end).contains(&today).then_some(Greeting::Easter)
}
