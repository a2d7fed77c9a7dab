//! Integer arithmetic for the demo.

mod calculator;
mod operation;

pub use calculator::Calculator;
pub use operation::Operation;

use thiserror::Error;

/// Failures surfaced by the checked calculator entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The divisor was zero.
    #[error("division by zero (dividend {dividend})")]
    DivisionByZero {
        /// Left-hand operand of the rejected division.
        dividend: i32,
    },
}
