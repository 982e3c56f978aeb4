//! Theme — the visual mode of the site and the rule that picks it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, StorageError, ValidationError};

/// Key under which the user's explicit choice is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the root element that styling rules select on.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query answering whether the platform prefers a dark palette.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Visual mode. Exactly two values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The literal stored in the preference key and the document attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The complement: `Light` ↔ `Dark`.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map the platform's "prefers dark" signal onto a theme.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    /// Only the exact lowercase literals are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ValidationError::InvalidTheme(other.to_string())),
        }
    }
}

/// Pick the initial theme.
///
/// A stored value wins when it is exactly `light` or `dark`. Anything else,
/// including a failed read, falls through to the platform signal. When the
/// platform cannot answer either, the result is [`Theme::Light`].
#[must_use]
pub fn resolve(
    stored: Result<Option<String>, StorageError>,
    prefers_dark: Result<bool, PlatformError>,
) -> Theme {
    let stored = match stored {
        Ok(value) => value.and_then(|raw| raw.parse::<Theme>().ok()),
        Err(_) => None,
    };
    match (stored, prefers_dark) {
        (Some(theme), _) => theme,
        (None, Ok(prefers_dark)) => Theme::from_prefers_dark(prefers_dark),
        (None, Err(_)) => Theme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(value: &str) -> Result<Option<String>, StorageError> {
        Ok(Some(value.to_string()))
    }

    #[test]
    fn should_parse_exact_literals_only() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Dark".parse::<Theme>(),
            Err(ValidationError::InvalidTheme("Dark".to_string()))
        );
        assert!(" dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn should_toggle_back_to_start() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn should_serialize_as_lowercase_literal() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn should_prefer_valid_stored_value_over_system() {
        for prefers_dark in [true, false] {
            assert_eq!(resolve(stored("light"), Ok(prefers_dark)), Theme::Light);
            assert_eq!(resolve(stored("dark"), Ok(prefers_dark)), Theme::Dark);
        }
    }

    fn fallthrough_inputs() -> Vec<Result<Option<String>, StorageError>> {
        vec![
            Ok(None),
            stored("sepia"),
            stored(""),
            Err(StorageError::Unavailable),
        ]
    }

    #[test]
    fn should_fall_back_to_system_when_stored_is_absent_or_invalid() {
        for input in fallthrough_inputs() {
            assert_eq!(resolve(input, Ok(true)), Theme::Dark);
        }
        for input in fallthrough_inputs() {
            assert_eq!(resolve(input, Ok(false)), Theme::Light);
        }
    }

    #[test]
    fn should_default_to_light_when_nothing_answers() {
        let theme = resolve(Err(StorageError::Unavailable), Err(PlatformError::Unavailable));
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn should_ignore_platform_failure_when_stored_is_valid() {
        let theme = resolve(stored("dark"), Err(PlatformError::Unavailable));
        assert_eq!(theme, Theme::Dark);
    }
}
