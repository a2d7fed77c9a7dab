//! Configuration module for `calcdemo`

use crate::demo::Scenario;
use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Compiled-in defaults, also the template for a user config file.
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultConfig.toml");

const CONFIG_FILE_NAME: &str = "config.toml";

/// Placeholder expanded to [`Config::get_calcdemo_dir`].
const DIR_VARIABLE: &str = "$CALCDEMO";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The contents are not valid TOML for [`Config`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty means console
    #[serde(default)]
    pub file: String,
}

impl LoggingConfig {
    /// Parsed level, `None` when empty or unrecognised.
    #[must_use]
    pub fn threshold(&self) -> Option<Level> {
        self.level.parse().ok()
    }

    /// Log file path, `None` when logging to the console.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.file.trim().is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.file))
        }
    }
}

/// Demo selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Scenario name (multi-module, hello, mixed)
    #[serde(default)]
    pub scenario: String,
}

impl DemoConfig {
    /// Parsed scenario, `None` when empty or unrecognised.
    #[must_use]
    pub fn scenario(&self) -> Option<Scenario> {
        self.scenario.parse().ok()
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Demo settings
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override scenario
    pub scenario: Option<String>,
}

impl Config {
    /// Get the `$CALCDEMO` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/calcdemo`
    /// - macOS: `~/Library/Application Support/calcdemo`
    /// - Windows: `%APPDATA%\calcdemo`
    #[must_use]
    pub fn get_calcdemo_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calcdemo")
    }

    /// Get the user config file path inside [`get_calcdemo_dir`].
    ///
    /// [`get_calcdemo_dir`]: Self::get_calcdemo_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_calcdemo_dir().join(CONFIG_FILE_NAME)
    }

    /// Fill empty fields from `defaults`.
    ///
    /// Returns `true` if any field changed.
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }
        if self.demo.scenario.is_empty() && !defaults.demo.scenario.is_empty() {
            self.demo.scenario.clone_from(&defaults.demo.scenario);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values. Nothing is written back
    /// to disk.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(scenario) = &overrides.scenario {
            self.demo.scenario.clone_from(scenario);
        }
    }

    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_calcdemo_dir();
            value.replace(DIR_VARIABLE, &dir.to_string_lossy())
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults (empty strings); `$CALCDEMO`
    /// in `logging.file` is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the TOML cannot be parsed or doesn't
    /// match the expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.file = Self::expand_variables(&config.logging.file);
        Ok(config)
    }

    /// Load configuration from the compiled-in defaults.
    ///
    /// # Panics
    ///
    /// Panics if the embedded default configuration is invalid; a unit test
    /// guards against that.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the user config file, or the defaults when it doesn't exist.
    ///
    /// The location comes from [`dirs::config_dir`], so on Linux it follows
    /// `XDG_CONFIG_HOME` and `HOME`. Unlike a settings store this never
    /// creates or rewrites the file.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            Ok(Self::from_defaults())
        }
    }

    /// Load a specific config file and fill its gaps from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file can't be read and
    /// [`ConfigError::Parse`] if it isn't valid.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;
        config.merge_defaults(&Self::from_defaults());
        Ok(config)
    }
}
