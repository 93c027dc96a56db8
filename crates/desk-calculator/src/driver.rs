//! Calculator drivers
//!
//! The same press-by-press scenarios run against the bare engine and against
//! the terminal app, so both front ends are held to identical behavior.

use crate::core::symbol::ButtonSymbol;
use crate::core::{CalcError, CalcResult};
use crate::engine::CalculatorEngine;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, symbol: ButtonSymbol) -> CalcResult<()>;

    /// Returns the current display text
    fn display(&self) -> String;

    /// Returns to a fresh session
    fn clear(&mut self);

    /// Returns every error message surfaced so far, oldest first
    fn notifications(&self) -> Vec<String>;

    /// Presses buttons by raw symbol, skipping unknown ones; returns the errors
    fn press_symbols(&mut self, symbols: &[&str]) -> Vec<CalcError> {
        symbols
            .iter()
            .filter_map(|s| s.parse::<ButtonSymbol>().ok())
            .filter_map(|symbol| self.press(symbol).err())
            .collect()
    }
}

/// Driver over a bare engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    engine: CalculatorEngine,
    notifications: Vec<String>,
}

impl EngineDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, symbol: ButtonSymbol) -> CalcResult<()> {
        let result = self.engine.handle_input(symbol);
        if let Err(err) = &result {
            self.notifications.push(err.to_string());
        }
        result
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn clear(&mut self) {
        self.engine.reset();
        self.notifications.clear();
    }

    fn notifications(&self) -> Vec<String> {
        self.notifications.clone()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{ButtonSymbol, CalcResult, CalculatorDriver};
    use crate::tui::CalculatorApp;

    /// Driver going through the terminal app
    ///
    /// Each press first acknowledges any open error modal, like a user would.
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, symbol: ButtonSymbol) -> CalcResult<()> {
            self.app.dismiss_error();
            self.app.press(symbol)
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn clear(&mut self) {
            self.app.reset();
        }

        fn notifications(&self) -> Vec<String> {
            self.app.notifications().to_vec()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared scenarios =====
// These run against ANY CalculatorDriver implementation

/// Verifies digit entry, decimal point and leading-zero replacement
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_symbols(&["0", "0", "1", "2"]);
    assert_eq!(driver.display(), "12");

    driver.press_symbols(&[".", "5", "."]);
    assert_eq!(driver.display(), "12.5");

    driver.press_symbols(&["Del", "Del", "Del"]);
    assert_eq!(driver.display(), "1");

    driver.press_symbols(&["C"]);
    assert_eq!(driver.display(), "0");
}

/// Verifies chained binary operators and equals
pub fn verify_chained_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_symbols(&["5", "+", "3", "="]);
    assert_eq!(driver.display(), "8");

    // A digit after equals starts a new entry
    driver.press_symbols(&["2", "+", "3", "*", "4", "="]);
    assert_eq!(driver.display(), "14");

    driver.press_symbols(&["="]);
    assert_eq!(driver.display(), "14");

    driver.press_symbols(&["2", "x^y", "1", "0", "-", "2", "4", "="]);
    assert_eq!(driver.display(), "1000");
}

/// Verifies the unary keys
pub fn verify_unary_functions<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_symbols(&["9", "percent"]);
    assert_eq!(driver.display(), "0.09");

    driver.press_symbols(&["C", "1", "6", "√"]);
    assert_eq!(driver.display(), "4");

    driver.press_symbols(&["1/x"]);
    assert_eq!(driver.display(), "0.25");

    driver.press_symbols(&["C", "7", "x!"]);
    assert_eq!(driver.display(), "5040");

    driver.press_symbols(&["+/-"]);
    assert_eq!(driver.display(), "-5040");
}

/// Verifies the memory accumulator round trip
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_symbols(&["2", "M+", "C", "3", "M+", "C", "1", "M-", "MC"]);
    assert_eq!(driver.display(), "4");

    // Memory was consumed by the recall
    driver.press_symbols(&["MC"]);
    assert_eq!(driver.display(), "0");
}

/// Verifies that every error is reported and recovered from
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    let errors = driver.press_symbols(&["5", "/", "0", "="]);
    assert_eq!(errors, vec![CalcError::DivisionByZero]);
    assert_eq!(driver.display(), "0");

    let errors = driver.press_symbols(&["C", "4", "+/-", "sqrt"]);
    assert_eq!(errors, vec![CalcError::NegativeRoot]);
    assert_eq!(driver.display(), "0");

    let errors = driver.press_symbols(&["3", ".", "5", "factorial"]);
    assert_eq!(errors, vec![CalcError::InvalidFactorialOperand]);
    assert_eq!(driver.display(), "0");

    // The calculator keeps working afterwards
    driver.press_symbols(&["6", "*", "7", "="]);
    assert_eq!(driver.display(), "42");

    assert_eq!(
        driver.notifications(),
        vec![
            CalcError::DivisionByZero.to_string(),
            CalcError::NegativeRoot.to_string(),
            CalcError::InvalidFactorialOperand.to_string(),
        ]
    );
}

/// Runs every shared scenario in turn
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_chained_arithmetic(driver);
    verify_unary_functions(driver);
    verify_memory(driver);
    verify_error_recovery(driver);
}
