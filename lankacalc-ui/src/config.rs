//! Optional TOML configuration for the desktop shell.
//!
//! Every key is optional; a missing file means "use the defaults".
//!
//! ```toml
//! log_level = "info"
//! log_file = "lankacalc.log"
//! log_stdout = true
//!
//! [window]
//! width = 560.0
//! height = 820.0
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Error returned when the configuration file exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` takes precedence.
    pub log_level: String,
    /// File that log records are appended to, if any.
    pub log_file: Option<PathBuf>,
    pub log_stdout: bool,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_file: None,
            log_stdout: true,
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 820.0,
        }
    }
}

impl AppConfig {
    /// Loads the configuration at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Applies command-line overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }
}
