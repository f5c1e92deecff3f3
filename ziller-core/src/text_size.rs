//! Text size preference behind the accessibility button.

use serde::{Deserialize, Serialize};

/// Storage key of the persisted preference.
pub const TEXT_SIZE_STORAGE_KEY: &str = "textSize";

/// Every class the preference can put on the root element.
pub const TEXT_SIZE_CLASSES: [&str; 3] = ["text-size-normal", "text-size-large", "text-size-xlarge"];

/// Three text sizes cycled by the header button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextSize {
    #[default]
    Normal,
    Large,
    XLarge,
}

impl TextSize {
    /// Stored level: 0, 1 or 2.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Large => 1,
            Self::XLarge => 2,
        }
    }

    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Normal),
            1 => Some(Self::Large),
            2 => Some(Self::XLarge),
            _ => None,
        }
    }

    /// Read the stored flag. Missing or unreadable values fall back to normal size.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<u8>().ok())
            .and_then(Self::from_level)
            .unwrap_or_default()
    }

    /// The size after one more press of the button.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::Large,
            Self::Large => Self::XLarge,
            Self::XLarge => Self::Normal,
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        TEXT_SIZE_CLASSES[self.level() as usize]
    }

    /// Tooltip of the button, naming the current size and what a press does.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Normal => "Textgröße: Normal (klicken für Groß)",
            Self::Large => "Textgröße: Groß (klicken für Sehr Groß)",
            Self::XLarge => "Textgröße: Sehr Groß (klicken für Normal)",
        }
    }

    /// Value written back to storage.
    #[must_use]
    pub fn stored_value(self) -> String {
        self.level().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_three_sizes() {
        let sizes: Vec<TextSize> = std::iter::successors(Some(TextSize::Normal), |s| Some(s.next()))
            .take(4)
            .collect();
        assert_eq!(
            sizes,
            vec![TextSize::Normal, TextSize::Large, TextSize::XLarge, TextSize::Normal]
        );
    }

    #[test]
    fn stored_values_round_trip() {
        for size in [TextSize::Normal, TextSize::Large, TextSize::XLarge] {
            assert_eq!(TextSize::from_stored(Some(&size.stored_value())), size);
        }
    }

    #[test]
    fn garbage_falls_back_to_normal() {
        assert_eq!(TextSize::from_stored(None), TextSize::Normal);
        assert_eq!(TextSize::from_stored(Some("")), TextSize::Normal);
        assert_eq!(TextSize::from_stored(Some("7")), TextSize::Normal);
        assert_eq!(TextSize::from_stored(Some("gross")), TextSize::Normal);
        assert_eq!(TextSize::from_stored(Some(" 2 ")), TextSize::XLarge);
    }

    #[test]
    fn classes_and_titles() {
        assert_eq!(TextSize::Large.css_class(), "text-size-large");
        assert!(TextSize::XLarge.title().contains("klicken für Normal"));
    }
}
