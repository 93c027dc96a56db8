//! Inbound button symbols
//!
//! The engine consumes a closed set of symbols. Shells may forward either
//! the enum directly or the raw symbol string of a button; both the
//! internal symbol names (`**`, `%`, `percent`) and the printed keypad
//! labels (`x^y`, `mod`, `√`) are accepted.

use std::str::FromStr;

use crate::core::Operation;

/// A single button press understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSymbol {
    /// Digit 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Clear the display (`C`)
    Clear,
    /// Delete the last character (`Del`)
    Delete,
    /// Toggle the sign (`+/-`)
    ToggleSign,
    /// Unary percent (display / 100)
    Percent,
    /// Reciprocal (`1/x`)
    Reciprocal,
    /// Square root
    SquareRoot,
    /// Factorial (`x!`)
    Factorial,
    /// Binary operator
    Operator(Operation),
    /// Evaluate the pending expression (`=`)
    Equals,
    /// Recall memory into the display and reset it (`MC`)
    MemoryRecall,
    /// Add the display to memory (`M+`)
    MemoryAdd,
    /// Subtract the display from memory (`M-`)
    MemorySubtract,
}

/// Error returned when a string names no button
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized button symbol: {0:?}")]
pub struct UnknownSymbol(pub String);

impl ButtonSymbol {
    /// Creates a digit symbol; `None` if `d` is not 0-9
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(Self::Digit(d))
    }

    /// Returns the label printed on the keypad button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".into(),
            Self::Clear => "C".into(),
            Self::Delete => "Del".into(),
            Self::ToggleSign => "+/-".into(),
            Self::Percent => "%".into(),
            Self::Reciprocal => "1/x".into(),
            Self::SquareRoot => "√".into(),
            Self::Factorial => "x!".into(),
            Self::Operator(op) => op.label().into(),
            Self::Equals => "=".into(),
            Self::MemoryRecall => "MC".into(),
            Self::MemoryAdd => "M+".into(),
            Self::MemorySubtract => "M-".into(),
        }
    }
}

impl FromStr for ButtonSymbol {
    type Err = UnknownSymbol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = match s {
            "." => Self::Decimal,
            "C" => Self::Clear,
            "Del" => Self::Delete,
            "+/-" => Self::ToggleSign,
            "percent" => Self::Percent,
            "1/x" => Self::Reciprocal,
            "sqrt" | "√" => Self::SquareRoot,
            "factorial" | "x!" => Self::Factorial,
            "=" => Self::Equals,
            "MC" => Self::MemoryRecall,
            "M+" => Self::MemoryAdd,
            "M-" => Self::MemorySubtract,
            _ => {
                if let Some(op) = Operation::from_symbol(s) {
                    Self::Operator(op)
                } else {
                    let mut chars = s.chars();
                    match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                        (Some(d), None) => Self::Digit(d as u8),
                        _ => return Err(UnknownSymbol(s.to_string())),
                    }
                }
            }
        };
        Ok(symbol)
    }
}

impl std::fmt::Display for ButtonSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
