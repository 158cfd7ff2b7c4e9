//! Log levels and their message prefixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity tag for a log call.
///
/// The level picks the prefix prepended to every evaluated message and, in
/// the logger, the terminal color applied when the level changes.
/// [`Level::None`] writes its text bare and never recolors the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Warning,
    Error,
    #[default]
    Info,
    None,
}

impl Level {
    /// All levels, in declaration order.
    pub const ALL: [Level; 4] = [Level::Warning, Level::Error, Level::Info, Level::None];

    /// The fixed text prepended to evaluated messages.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Warning => "Warning: ",
            Level::Error => "Error: ",
            Level::Info => "Info: ",
            Level::None => "",
        }
    }

    /// Returns `true` for [`Level::None`].
    pub fn is_noop(self) -> bool {
        matches!(self, Level::None)
    }

    /// Lowercase name, as accepted by [`FromStr`] and serde.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Info => "info",
            Level::None => "none",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0} (expected warning, error, info or none)")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "info" => Ok(Level::Info),
            "none" => Ok(Level::None),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
