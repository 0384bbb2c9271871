//! Keyboard layout language.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The active layout variant selecting which glyph table is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (QWERTY).
    #[default]
    En,
    /// Russian (ЙЦУКЕН).
    Ru,
}

/// Returned when a string is neither `"en"` nor `"ru"`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown language tag: {0:?}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// The tag used in storage and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    /// Returns the other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "ru" => Ok(Language::Ru),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_en() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(Language::En.toggled(), Language::Ru);
        assert_eq!(Language::Ru.toggled(), Language::En);
    }

    #[test]
    fn test_parse_accepts_storage_tags() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("ru".parse::<Language>(), Ok(Language::Ru));
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        // Tags are case-sensitive, matching what is written to storage.
        assert!("RU".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Language::Ru.to_string(), "ru");
    }
}
