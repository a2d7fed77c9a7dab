//! Library behind the `calcdemo` binary.
//! Contains the logger, the calculator, the demo scenarios and configuration.

pub mod config;
pub mod demo;
pub mod logger;
pub mod math;

pub use logger::{ConsoleLogger, Level, Logger, MemoryLogger, Silent};
pub use math::{CalcError, Calculator, Operation};

/// Returns the current version of the `calc-demo` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
