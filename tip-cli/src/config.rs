//! Calculator configuration.
//!
//! Settings come from three places, later ones winning:
//!
//! 1. built-in defaults ([`AppConfig::default`]),
//! 2. a TOML file (`tip-calculator.toml` in the working directory, or the
//!    path given with `--config`),
//! 3. command-line flags ([`ConfigOverrides`]).
//!
//! ```toml
//! policy = "lenient"
//! currency_symbol = "€"
//! log_level = "debug"
//! log_file = "tip-calculator.log"
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tip_core::ValidationPolicy;

/// Config file picked up from the working directory when `--config` is not
/// given.
pub const DEFAULT_CONFIG_FILE: &str = "tip-calculator.toml";

/// Errors that can occur while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// How malformed bill text is handled.
    pub policy: ValidationPolicy,
    /// Prefix for displayed amounts.
    pub currency_symbol: String,
    /// EnvFilter directive used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Append log output to this file when set.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given; otherwise loads [`DEFAULT_CONFIG_FILE`]
    /// when it exists and falls back to defaults when it does not.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        overrides: ConfigOverrides,
    ) -> Self {
        if let Some(policy) = overrides.policy {
            self.policy = policy;
        }
        if let Some(symbol) = overrides.currency_symbol {
            self.currency_symbol = symbol;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        if overrides.log_file.is_some() {
            self.log_file = overrides.log_file;
        }
        self
    }
}

/// Values supplied on the command line. `None` leaves the configured value
/// in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub policy: Option<ValidationPolicy>,
    pub currency_symbol: Option<String>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}
