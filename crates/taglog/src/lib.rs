//! # taglog - Tagged Console Logger
//!
//! `taglog` writes level-tagged messages built from positional `{N}`
//! templates. Messages go to standard output or are appended to a file, and
//! the terminal color switches whenever the level changes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use taglog::{Level, Logger, Value};
//!
//! let mut logger = Logger::new().newline(true);
//! logger
//!     .log(Level::Warning, "Here we go: {0} {2} {1} {0}", &[
//!         Value::from("zero"),
//!         Value::from(1.0),
//!         Value::from(2),
//!     ])
//!     .unwrap();
//! // Warning: Here we go: zero 2 1.000000 zero
//! ```
//!
//! ## Levels
//!
//! | Level | Prefix | Color on change |
//! |-------|--------|-----------------|
//! | `Warning` | `Warning: ` | yellow |
//! | `Error` | `Error: ` | bright red |
//! | `Info` | `Info: ` | default |
//! | `None` | none | unchanged |
//!
//! A call with an empty argument list writes its template verbatim, without
//! prefix or placeholder processing.
//!
//! ## Configuration
//!
//! [`LoggerConfig`] loads destination, color and newline settings from YAML;
//! see the [`config`] module.
//!
//! ## The `log` Facade
//!
//! [`init`] installs a [`SharedLogger`] as the global `log` backend, so
//! `log::warn!` and friends come out tagged the same way.

pub mod config;
mod destination;
mod error;
mod logger;
pub mod macros;
mod shared;
pub mod signal;

pub use config::LoggerConfig;
pub use destination::Destination;
pub use error::{LogError, Result};
pub use logger::Logger;
pub use shared::{init, level_for, SharedLogger};
pub use signal::{AnsiSignal, ColorChoice, LevelSignal, NoSignal};

// Formatting core
pub use taglog_format::{
    evaluate, format, validate_template, FormatError, FormatOptions, Formatter, Level, Value,
};
