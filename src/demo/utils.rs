//! Small helpers shared by the hello and mixed scenarios.

use std::io::{self, Write};

/// Banner printed by the mixed scenario.
pub const WELCOME: &str = "Welcome to the calc-demo console!";

/// Print `message` on its own line.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn print_message<W: Write + ?Sized>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

/// Print the [`WELCOME`] banner.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn print_welcome<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    print_message(out, WELCOME)
}

/// Plain addition, without a calculator or logger. Wraps on overflow.
#[must_use]
pub const fn add_numbers(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
