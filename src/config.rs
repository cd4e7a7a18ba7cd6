//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution order:
//! 1. `--config <path>` (CLI flag)
//! 2. `~/.clipocr/config.toml` (user)
//! 3. `/etc/clipocr/config.toml` (system)
//!
//! When no file exists the built-in defaults apply. Nothing is ever written
//! back.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::pipeline::{DEFAULT_DEBOUNCE_WINDOW, SingleFlightPolicy};
use crate::{ClipocrError, Result};

/// Front-end configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Trigger handling.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Per-trigger cool-down in milliseconds (default: 1000).
    #[serde(default = "default_debounce_window_ms")]
    pub debounce_window_ms: u64,
    /// When a honored submit stops blocking further submits
    /// (default: "until-refresh").
    #[serde(default)]
    pub single_flight: SingleFlightPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debounce_window_ms: default_debounce_window_ms(),
            single_flight: SingleFlightPolicy::default(),
        }
    }
}

impl SessionConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_window_ms)
    }
}

fn default_debounce_window_ms() -> u64 {
    DEFAULT_DEBOUNCE_WINDOW.as_millis() as u64
}

/// Log output.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// An explicit path must exist. Without one, the first existing file
    /// among the user and system locations is used, falling back to
    /// defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ClipocrError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        Self::parse(&content).map_err(|e| match e {
            ClipocrError::Configuration(msg) => {
                ClipocrError::Configuration(format!("{msg} (in {path:?})"))
            }
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ClipocrError::Configuration(format!("Failed to parse config: {e}")))
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(ClipocrError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".clipocr").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        let system_config = PathBuf::from("/etc/clipocr/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.session.debounce_window_ms, 1000);
        assert_eq!(config.session.debounce_window(), Duration::from_secs(1));
        assert_eq!(config.session.single_flight, SingleFlightPolicy::UntilRefresh);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn parse_partial_config_keeps_defaults() {
        let config = Config::parse(
            r#"
            [session]
            single_flight = "until-complete"
        "#,
        )
        .unwrap();
        assert_eq!(config.session.single_flight, SingleFlightPolicy::UntilComplete);
        assert_eq!(config.session.debounce_window_ms, 1000);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
            [session]
            debounce_window_ms = 250
            single_flight = "until-refresh"

            [logging]
            filter = "clipocr=debug"
        "#,
        )
        .unwrap();
        assert_eq!(config.session.debounce_window(), Duration::from_millis(250));
        assert_eq!(config.logging.filter, "clipocr=debug");
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = Config::parse(
            r#"
            [session]
            single_flight = "never"
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn config_not_found_returns_error() {
        let result = Config::load(Some(Path::new("/nonexistent/config.toml")));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Config file not found"));
    }
}
