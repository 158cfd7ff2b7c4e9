//! Terminal color changes on level transitions.
//!
//! The logger calls a [`LevelSignal`] whenever a message's level differs from
//! the previous one. The default [`AnsiSignal`] switches the terminal's
//! foreground color with an SGR escape sequence, so everything printed after a
//! warning stays yellow until the next level change.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use console::Term;
use serde::{Deserialize, Serialize};
use taglog_format::Level;

/// Receives level transitions from a [`Logger`](crate::Logger).
///
/// Called at most once per transition, never for [`Level::None`].
pub trait LevelSignal {
    fn level_changed(&mut self, level: Level) -> io::Result<()>;
}

/// A signal that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSignal;

impl LevelSignal for NoSignal {
    fn level_changed(&mut self, _level: Level) -> io::Result<()> {
        Ok(())
    }
}

/// Whether [`AnsiSignal`] emits escape sequences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Emit only when stdout is a terminal that supports colors.
    #[default]
    Auto,
    /// Always emit.
    Always,
    /// Never emit.
    Never,
}

impl ColorChoice {
    /// Resolves the choice to a concrete decision.
    ///
    /// - `Auto` checks terminal capabilities and the global `console` switch
    /// - `Always` returns `true`
    /// - `Never` returns `false`
    pub fn should_use_color(&self) -> bool {
        match self {
            ColorChoice::Auto => {
                console::colors_enabled() && Term::stdout().features().colors_supported()
            }
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        })
    }
}

/// Error returned when parsing an unknown color choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color choice: {0} (expected auto, always or never)")]
pub struct ParseColorChoiceError(pub String);

impl FromStr for ColorChoice {
    type Err = ParseColorChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(ParseColorChoiceError(s.to_string())),
        }
    }
}

const RESET: &str = "\x1b[0m";

/// SGR sequence that switches the foreground color for `level`.
pub fn level_sequence(level: Level) -> Option<&'static str> {
    match level {
        Level::Warning => Some("\x1b[33m"),
        Level::Error => Some("\x1b[91m"),
        Level::Info => Some("\x1b[39m"),
        Level::None => None,
    }
}

/// Switches the terminal foreground color with ANSI escape sequences.
///
/// Resets the terminal when dropped if it ever changed the color.
pub struct AnsiSignal {
    choice: ColorChoice,
    target: Box<dyn Write + Send>,
    dirty: bool,
}

impl AnsiSignal {
    /// Writes to standard output.
    pub fn new(choice: ColorChoice) -> Self {
        Self::with_writer(choice, io::stdout())
    }

    /// Writes to an arbitrary sink.
    pub fn with_writer(choice: ColorChoice, target: impl Write + Send + 'static) -> Self {
        Self {
            choice,
            target: Box::new(target),
            dirty: false,
        }
    }

    pub fn choice(&self) -> ColorChoice {
        self.choice
    }

    /// Restores the terminal's default colors.
    pub fn reset(&mut self) -> io::Result<()> {
        if self.dirty {
            self.target.write_all(RESET.as_bytes())?;
            self.target.flush()?;
            self.dirty = false;
        }
        Ok(())
    }
}

impl Default for AnsiSignal {
    fn default() -> Self {
        Self::new(ColorChoice::default())
    }
}

impl fmt::Debug for AnsiSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnsiSignal")
            .field("choice", &self.choice)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl LevelSignal for AnsiSignal {
    fn level_changed(&mut self, level: Level) -> io::Result<()> {
        if !self.choice.should_use_color() {
            return Ok(());
        }
        if let Some(seq) = level_sequence(level) {
            self.target.write_all(seq.as_bytes())?;
            self.target.flush()?;
            self.dirty = true;
        }
        Ok(())
    }
}

impl Drop for AnsiSignal {
    fn drop(&mut self) {
        let _ = self.reset();
    }
}
