//! Core calculator building blocks
//!
//! Error kinds, numeric display formatting, and the pieces the engine is
//! assembled from: binary operations, button symbols, the pending expression
//! and the memory accumulator.

pub mod evaluator;
pub mod expression;
pub mod memory;
mod operations;
pub mod symbol;

pub use operations::{Calculator, Operation};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error kinds - closed set, every one recovered by the engine
///
/// The `Display` text is the one-line message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CalcError {
    /// Reciprocal of zero, or an evaluation producing an infinite magnitude
    #[error("ERROR: You cannot divide by 0")]
    DivisionByZero,
    /// Square root of a negative operand
    #[error("ERROR: Square root of a negative number")]
    NegativeRoot,
    /// Factorial of a negative or non-integer operand
    #[error("ERROR: Factorial of a negative number or non-integer")]
    InvalidFactorialOperand,
    /// Result is not a real number (e.g. fractional power of a negative base)
    #[error("ERROR: Result is undefined")]
    UndefinedResult,
    /// Result exceeds the representable range
    #[error("ERROR: Result is too large")]
    Overflow,
}

impl CalcError {
    /// Short stable name of the error kind, used in log fields
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::NegativeRoot => "negative_root",
            Self::InvalidFactorialOperand => "invalid_factorial_operand",
            Self::UndefinedResult => "undefined_result",
            Self::Overflow => "overflow",
        }
    }
}

/// Magnitudes at or above this are displayed in exponent form
const SCIENTIFIC_UPPER: f64 = 1e16;
/// Non-zero magnitudes below this are displayed in exponent form
const SCIENTIFIC_LOWER: f64 = 1e-4;

/// Formats a computed value for the display
///
/// Shortest decimal representation that round-trips; integral values carry
/// no decimal point (`8`, not `8.0`). Very large and very small magnitudes
/// switch to exponent form so the display stays readable.
#[must_use]
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude.is_finite()
        && magnitude != 0.0
        && !(SCIENTIFIC_LOWER..SCIENTIFIC_UPPER).contains(&magnitude)
    {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Parses a display buffer into an operand
///
/// Returns `None` for transient non-numeric buffers such as `""` or `"-"`.
/// Only digits, sign, decimal point and exponent marker are accepted, so
/// words like `inf` or `NaN` never become operands.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    if text.is_empty()
        || !text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    text.parse().ok()
}
