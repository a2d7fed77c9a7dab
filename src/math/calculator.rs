//! Calculator composed with an injected logger.
//!
//! Arithmetic is `i32` with two's-complement wrapping: overflow never panics,
//! in debug or release builds.

use super::{CalcError, Operation};
use crate::logger::{Logger, Silent};

/// Four-function integer calculator.
///
/// The calculator owns its logger by value. `Calculator::new()` owns a
/// [`Silent`] logger; `Calculator::with_logger` takes any [`Logger`],
/// including a reference to one the caller keeps inspecting.
#[derive(Clone, Debug, Default)]
pub struct Calculator<L = Silent> {
    logger: L,
}

impl Calculator {
    /// Calculator that logs nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { logger: Silent }
    }
}

impl<L: Logger> Calculator<L> {
    /// Calculator that emits one debug line per operation through `logger`.
    #[must_use]
    pub const fn with_logger(logger: L) -> Self {
        Self { logger }
    }

    /// The owned logger.
    #[must_use]
    pub const fn logger(&self) -> &L {
        &self.logger
    }

    /// Give the logger back, consuming the calculator.
    #[must_use]
    pub fn into_logger(self) -> L {
        self.logger
    }

    /// `a + b`, wrapping on overflow.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Add, a, b);
        a.wrapping_add(b)
    }

    /// `a - b`, wrapping on overflow.
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Subtract, a, b);
        a.wrapping_sub(b)
    }

    /// `a * b`, wrapping on overflow.
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Multiply, a, b);
        a.wrapping_mul(b)
    }

    /// `a / b` truncated toward zero.
    ///
    /// A zero divisor returns the sentinel `0` and logs nothing beyond the
    /// usual trace line. Use [`Calculator::try_divide`] to get an error instead.
    /// `i32::MIN / -1` wraps to `i32::MIN`.
    pub fn divide(&self, a: i32, b: i32) -> i32 {
        self.trace(Operation::Divide, a, b);
        if b == 0 {
            return 0;
        }
        a.wrapping_div(b)
    }

    /// `a / b` truncated toward zero, rejecting a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `b == 0`.
    pub fn try_divide(&self, a: i32, b: i32) -> Result<i32, CalcError> {
        self.trace(Operation::Divide, a, b);
        if b == 0 {
            return Err(CalcError::DivisionByZero { dividend: a });
        }
        Ok(a.wrapping_div(b))
    }

    /// Dispatch on `op`. Division uses the sentinel behaviour of [`Calculator::divide`].
    pub fn apply(&self, op: Operation, a: i32, b: i32) -> i32 {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }

    fn trace(&self, op: Operation, a: i32, b: i32) {
        self.logger.debug(&format!("{}({a}, {b})", op.name()));
    }
}
