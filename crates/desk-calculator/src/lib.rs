//! Desk Calculator
//!
//! A button-driven calculator engine with a terminal front end. Shells feed
//! button symbols into [`engine::CalculatorEngine`] one press at a time and
//! render its display string; every error comes back already recovered, as
//! a one-line message to show the user.
//!
//! # Example
//!
//! ```rust
//! use desk_calculator::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! for symbol in ["5", "+", "3", "="] {
//!     engine.handle_symbol(symbol).unwrap();
//! }
//! assert_eq!(engine.display(), "8");
//!
//! // Errors reset the display and report a message
//! let err = engine.handle_input(ButtonSymbol::Digit(0))
//!     .and_then(|()| engine.handle_input(ButtonSymbol::Reciprocal))
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "ERROR: You cannot divide by 0");
//! assert_eq!(engine.display(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod engine;
pub mod legend;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::evaluator::{AstNode, Evaluator, Token};
    pub use crate::core::expression::PendingExpression;
    pub use crate::core::memory::MemoryAccumulator;
    pub use crate::core::symbol::{ButtonSymbol, UnknownSymbol};
    pub use crate::core::{
        format_number, parse_operand, CalcError, CalcResult, Calculator, Operation,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::engine::{CalculatorEngine, EngineSnapshot};
    pub use crate::legend::{LegendEntry, HELP_LEGEND};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
