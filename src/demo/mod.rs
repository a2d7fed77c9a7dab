//! Demo scenarios run by the `calcdemo` binary.
//!
//! Each scenario prints plain result lines to an injected writer and logs
//! through an injected [`Logger`], so the binary and the tests share one path.

pub mod utils;

use crate::logger::Logger;
use crate::math::{Calculator, Operation};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Operands used by the multi-module scenario.
pub const OPERANDS: (i32, i32) = (10, 5);

/// Which demo to run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Scenario {
    /// Calculator and logger working together (the default).
    #[default]
    MultiModule,
    /// Hello-world program with a utility message and one addition.
    Hello,
    /// Plain calculator next to the free-standing helpers.
    Mixed,
}

impl Scenario {
    /// Name accepted on the command line and in the config file.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MultiModule => "multi-module",
            Self::Hello => "hello",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "multi-module" | "multi_module" | "multimodule" => Ok(Self::MultiModule),
            "hello" => Ok(Self::Hello),
            "mixed" => Ok(Self::Mixed),
            _ => Err(format!("Unknown scenario: '{s}'")),
        }
    }
}

/// Run `scenario`, printing to `out` and logging through `logger`.
///
/// # Errors
///
/// Propagates write failures from `out`. Logging failures are swallowed by
/// the logger itself.
pub fn run<W, L>(scenario: Scenario, out: &mut W, logger: &L) -> io::Result<()>
where
    W: Write + ?Sized,
    L: Logger + ?Sized,
{
    match scenario {
        Scenario::MultiModule => {
            multi_module(logger);
            Ok(())
        }
        Scenario::Hello => hello(out),
        Scenario::Mixed => mixed(out),
    }
}

/// Calculator sharing the caller's logger; every result is logged at `INFO`.
pub fn multi_module<L: Logger + ?Sized>(logger: &L) {
    logger.log("Starting multi-module application");

    let calc = Calculator::with_logger(logger);
    let (a, b) = OPERANDS;
    for op in Operation::ALL {
        let result = calc.apply(op, a, b);
        logger.log(&op.describe(a, b, result));
    }

    let sentinel = calc.divide(a, 0);
    logger.log(&Operation::Divide.describe(a, 0, sentinel));

    if let Err(err) = calc.try_divide(a, 0) {
        logger.error(&format!("try_divide({a}, 0) failed: {err}"));
    }

    logger.log("Application finished");
}

/// Hello-world output followed by a helper-based addition.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn hello<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Hello from .cc project!")?;
    utils::print_message(out, "Testing .cc file support")?;
    let result = utils::add_numbers(5, 3);
    writeln!(out, "{}", Operation::Add.describe(5, 3, result))
}

/// Welcome banner and two results from a calculator that logs nothing.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn mixed<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Mixed extensions project test!")?;
    utils::print_welcome(out)?;

    let calc = Calculator::new();
    let (a, b) = OPERANDS;
    for op in [Operation::Add, Operation::Subtract] {
        writeln!(out, "{}", op.describe(a, b, calc.apply(op, a, b)))?;
    }
    Ok(())
}
