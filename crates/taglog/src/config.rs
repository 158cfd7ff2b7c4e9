//! Logger configuration loaded from YAML.
//!
//! Every field is optional:
//!
//! ```yaml
//! file: logs/app.log       # omit to log to the console
//! color: auto              # auto | always | never
//! newline: true            # append "\n" after each message
//! initial_level: info      # level assumed before the first call
//! max_argument_len: 256    # per-argument rendering limit in bytes
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use taglog_format::{FormatOptions, Level};

use crate::destination::Destination;
use crate::error::{LogError, Result};
use crate::signal::ColorChoice;

/// Settings used by [`Logger::from_config`](crate::Logger::from_config).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Append to this file instead of writing to the console.
    pub file: Option<PathBuf>,
    pub color: ColorChoice,
    pub newline: bool,
    pub initial_level: Level,
    pub max_argument_len: Option<usize>,
}

impl LoggerConfig {
    /// Parses configuration from YAML. Empty input yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LogError::Config {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let config = Self::from_yaml(&content)?;
        log::debug!("loaded logger config from {}", path.display());
        Ok(config)
    }

    /// The default destination this configuration describes.
    pub fn destination(&self) -> Destination {
        Destination::from(self.file.clone())
    }

    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_argument_len: self.max_argument_len,
        }
    }
}
