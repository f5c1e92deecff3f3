pub mod calendar;
pub mod checks;
pub mod reports;
pub mod sweep;

pub use calendar::{DayRow, month_overview, parse_month};
pub use checks::{CheckOutcome, check_day};
pub use sweep::{SweepResult, list_sweeps, run_sweeps};
