//! The active display language of the site.
//!
//! The widget front end exposes two display languages (English and French).
//! Arabic input is handled by script detection on the message text itself
//! (see [`crate::script`]), not by a display-language setting.

use serde::{Deserialize, Serialize};

/// Two-letter display-language code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    #[default]
    En,
    /// French.
    Fr,
}

impl Lang {
    /// The two-letter code, as the front end stores it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Whether this is the French display language.
    #[must_use]
    pub fn is_fr(self) -> bool {
        self == Self::Fr
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown language code.
#[derive(Debug, thiserror::Error)]
#[error("unknown language code: {0:?} (expected \"en\" or \"fr\")")]
pub struct ParseLangError(pub String);

impl std::str::FromStr for Lang {
    type Err = ParseLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            other => Err(ParseLangError(other.to_string())),
        }
    }
}
