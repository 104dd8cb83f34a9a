use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color scheme the page renders with.
///
/// The string form is exactly what the CSS `color-scheme` property accepts,
/// which is also what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ColorScheme {
    #[default]
    #[serde(rename = "light dark")]
    Automatic,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "dark")]
    Dark,
}

impl ColorScheme {
    /// Every scheme in the order the selector lists them.
    pub const ALL: [Self; 3] = [Self::Automatic, Self::Light, Self::Dark];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Automatic => "light dark",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Automatic => "Automatic",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme: {0:?}")]
pub struct ParseColorSchemeError(pub String);

impl FromStr for ColorScheme {
    type Err = ParseColorSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light dark" => Ok(Self::Automatic),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseColorSchemeError(other.to_string())),
        }
    }
}

impl From<ColorScheme> for String {
    fn from(value: ColorScheme) -> Self {
        value.as_str().to_string()
    }
}
