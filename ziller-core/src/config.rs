//! Shop configuration: closing days, opening hours and page layout constants.

use crate::holidays::HolidaySet;
use crate::slots::SlotSchedule;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised when a shop configuration is unreadable or inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shop configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{schedule} opening hours end at {last} before they start at {first}")]
    EndBeforeStart {
        schedule: &'static str,
        first: String,
        last: String,
    },
    #[error("{schedule} opening hours need a step of at least one minute")]
    ZeroStep { schedule: &'static str },
    #[error("holiday {day:02}.{month:02}. does not exist")]
    ImpossibleHoliday { month: u32, day: u32 },
}

/// Everything about the shop that the site's behaviour depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub holidays: HolidaySet,
    #[serde(default = "SlotSchedule::monday_to_thursday")]
    pub weekday_hours: SlotSchedule,
    #[serde(default = "SlotSchedule::friday")]
    pub friday_hours: SlotSchedule,
    /// Days between today and the earliest bookable date.
    #[serde(default = "ShopConfig::default_lead_days")]
    pub booking_lead_days: u32,
    /// Viewport width below which the navigation collapses into the menu button.
    #[serde(default = "ShopConfig::default_mobile_breakpoint")]
    pub mobile_breakpoint_px: u32,
    /// Height of the sticky header subtracted when scrolling to an anchor.
    #[serde(default = "ShopConfig::default_scroll_offset")]
    pub scroll_header_offset_px: u32,
}

impl ShopConfig {
    const fn default_lead_days() -> u32 {
        1
    }

    const fn default_mobile_breakpoint() -> u32 {
        768
    }

    const fn default_scroll_offset() -> u32 {
        80
    }

    /// Parse and validate a configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for unreadable input, or the first
    /// validation failure reported by [`ShopConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a valid configuration.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading shop configuration {}", path.display()))?;
        let config = Self::from_json(&text)
            .with_context(|| format!("parsing shop configuration {}", path.display()))?;
        log::debug!(
            "loaded shop configuration from {} ({} holidays)",
            path.display(),
            config.holidays.len()
        );
        Ok(config)
    }

    /// Check the opening hours and holiday list for impossible values.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_schedule("weekday", &self.weekday_hours)?;
        validate_schedule("friday", &self.friday_hours)?;
        if let Some(bad) = self.holidays.iter().find(|h| !h.is_possible()) {
            return Err(ConfigError::ImpossibleHoliday {
                month: bad.month,
                day: bad.day,
            });
        }
        Ok(())
    }
}

fn validate_schedule(schedule: &'static str, hours: &SlotSchedule) -> Result<(), ConfigError> {
    if hours.step_minutes == 0 {
        return Err(ConfigError::ZeroStep { schedule });
    }
    if hours.last < hours.first {
        return Err(ConfigError::EndBeforeStart {
            schedule,
            first: hours.first.to_string(),
            last: hours.last.to_string(),
        });
    }
    Ok(())
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            holidays: HolidaySet::bavarian_fixed(),
            weekday_hours: SlotSchedule::monday_to_thursday(),
            friday_hours: SlotSchedule::friday(),
            booking_lead_days: Self::default_lead_days(),
            mobile_breakpoint_px: Self::default_mobile_breakpoint(),
            scroll_header_offset_px: Self::default_scroll_offset(),
        }
    }
}

/// Source of the shop configuration on a given platform.
pub trait ConfigSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the shop configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or is invalid.
    fn load_shop_config(&self) -> Result<ShopConfig, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ShopConfig::from_json("{}").unwrap();
        assert_eq!(config, ShopConfig::default());
        assert_eq!(config.mobile_breakpoint_px, 768);
        assert_eq!(config.scroll_header_offset_px, 80);
        assert_eq!(config.booking_lead_days, 1);
    }

    #[test]
    fn overrides_holidays_and_hours() {
        let json = r#"{
            "holidays": [{"month": 12, "day": 24, "name": "Heiligabend"}],
            "friday_hours": {"first": "09:00", "last": "12:00", "step_minutes": 60}
        }"#;
        let config = ShopConfig::from_json(json).unwrap();
        assert_eq!(config.holidays.len(), 1);
        assert_eq!(config.friday_hours.slots().len(), 4);
        assert_eq!(config.weekday_hours, SlotSchedule::monday_to_thursday());
    }

    #[test]
    fn rejects_inverted_hours() {
        let json = r#"{"weekday_hours": {"first": "16:00", "last": "08:00"}}"#;
        let err = ShopConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::EndBeforeStart { schedule: "weekday", .. }));
        assert_eq!(
            err.to_string(),
            "weekday opening hours end at 08:00 before they start at 16:00"
        );
    }

    #[test]
    fn rejects_zero_step_and_bad_holidays() {
        let zero = r#"{"friday_hours": {"first": "08:00", "last": "13:30", "step_minutes": 0}}"#;
        assert!(matches!(
            ShopConfig::from_json(zero),
            Err(ConfigError::ZeroStep { schedule: "friday" })
        ));
        let bad = r#"{"holidays": [{"month": 2, "day": 30}]}"#;
        assert!(matches!(
            ShopConfig::from_json(bad),
            Err(ConfigError::ImpossibleHoliday { month: 2, day: 30 })
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(ShopConfig::from_json("[1,2"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn load_from_missing_path_reports_context() {
        let err = ShopConfig::load_from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("reading shop configuration"));
    }
}
