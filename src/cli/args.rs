//! CLI argument definitions for `calcdemo`

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use calc_demo::config::ConfigOverrides;
use calc_demo::demo::Scenario;
use calc_demo::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config overrides and to
/// `calc_demo::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI scenario argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ScenarioArg {
    /// Calculator and logger working together
    MultiModule,
    /// Hello-world output with a utility message
    Hello,
    /// Plain calculator next to free-standing helpers
    Mixed,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::MultiModule => Self::MultiModule,
            ScenarioArg::Hello => Self::Hello,
            ScenarioArg::Mixed => Self::Mixed,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "calcdemo",
    about = "Calculator and logger console demo",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Demo to run. Falls back to config, then `multi-module`.
    #[arg(value_enum, value_name = "SCENARIO")]
    pub scenario: Option<ScenarioArg>,

    /// Set the runtime log level (error|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable debug-level logging (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write logs to a file instead of the console
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, value_name = "PATH", conflicts_with = "user_config")]
    pub config: Option<PathBuf>,

    /// Read `calcdemo/config.toml` from the platform config directory
    #[arg(long)]
    pub user_config: bool,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--debug` wins over `--log-level`.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let level = if self.debug_flag {
            Some(LogLevelArg::Debug)
        } else {
            self.log_level
        };
        ConfigOverrides {
            level: level.map(|lvl| lvl.to_string()),
            file: self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            scenario: self.scenario.map(|s| Scenario::from(s).to_string()),
        }
    }
}
