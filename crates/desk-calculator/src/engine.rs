//! Calculator engine: the state machine behind the keypad
//!
//! Owns the display buffer, the pending expression, the memory accumulator
//! and the equals flag. Shells forward one [`ButtonSymbol`] per press and
//! render [`CalculatorEngine::display`]. Every error is recovered before it
//! is returned: the display is already reset to `"0"` and the `Err` only
//! carries the message to show.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::evaluator::Evaluator;
use crate::core::expression::PendingExpression;
use crate::core::memory::MemoryAccumulator;
use crate::core::symbol::ButtonSymbol;
use crate::core::{format_number, parse_operand, CalcError, CalcResult, Calculator, Operation};

/// Text of a cleared display
pub const ZERO: &str = "0";

/// Point-in-time view of the engine, for shells and logs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    /// Display buffer
    pub display: String,
    /// Pending expression rendered as text (`5+3*`)
    pub pending: String,
    /// Memory accumulator rendered as text (`0.0+2+3`)
    pub memory: String,
    /// Whether the next digit starts a fresh entry
    pub equals_pressed: bool,
}

/// The expression/state engine for one calculator session
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    display: String,
    pending: PendingExpression,
    memory: MemoryAccumulator,
    equals_pressed: bool,
    evaluator: Evaluator,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine showing `"0"` with empty expression and memory
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: ZERO.to_string(),
            pending: PendingExpression::new(),
            memory: MemoryAccumulator::new(),
            equals_pressed: false,
            evaluator: Evaluator::new(),
        }
    }

    /// Returns the text the shell should render
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending expression
    #[must_use]
    pub fn pending_expression(&self) -> &PendingExpression {
        &self.pending
    }

    /// Returns the memory accumulator
    #[must_use]
    pub fn memory(&self) -> &MemoryAccumulator {
        &self.memory
    }

    /// Returns true right after a successful `=` or memory recall
    #[must_use]
    pub fn equals_pressed(&self) -> bool {
        self.equals_pressed
    }

    /// Captures the current state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display.clone(),
            pending: self.pending.render(),
            memory: self.memory.render(),
            equals_pressed: self.equals_pressed,
        }
    }

    /// Starts a new session
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Applies one button press
    ///
    /// On `Err` the engine has already recovered; the error is only a
    /// notification for the user.
    pub fn handle_input(&mut self, symbol: ButtonSymbol) -> CalcResult<()> {
        debug!(%symbol, display = %self.display, "button press");

        let outcome = match symbol {
            ButtonSymbol::Digit(d) if d > 9 => {
                debug!(digit = d, "ignoring out-of-range digit");
                Ok(())
            }
            ButtonSymbol::Digit(d) => {
                self.push_digit(d);
                Ok(())
            }
            ButtonSymbol::Decimal => {
                self.push_decimal();
                Ok(())
            }
            ButtonSymbol::Clear => {
                self.display = ZERO.to_string();
                Ok(())
            }
            ButtonSymbol::Delete => {
                self.delete_last();
                Ok(())
            }
            ButtonSymbol::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            ButtonSymbol::Percent => self.apply_unary(Calculator::percent),
            ButtonSymbol::Reciprocal => self.apply_unary(Calculator::reciprocal),
            ButtonSymbol::SquareRoot => self.apply_unary(Calculator::square_root),
            ButtonSymbol::Factorial => self.factorial(),
            ButtonSymbol::Operator(op) => self.push_operator(op),
            ButtonSymbol::Equals => self.equals(),
            ButtonSymbol::MemoryRecall => self.memory_recall(),
            ButtonSymbol::MemoryAdd => self.remember(MemoryAccumulator::add),
            ButtonSymbol::MemorySubtract => self.remember(MemoryAccumulator::subtract),
        };

        if let Err(err) = &outcome {
            warn!(kind = err.kind(), %symbol, "{err}");
        }
        outcome
    }

    /// Parses and applies a raw symbol string; unknown symbols are ignored
    pub fn handle_symbol(&mut self, symbol: &str) -> CalcResult<()> {
        match symbol.parse::<ButtonSymbol>() {
            Ok(symbol) => self.handle_input(symbol),
            Err(err) => {
                debug!(%err, "ignoring input");
                Ok(())
            }
        }
    }

    /// Applies a sequence of presses, collecting every surfaced error
    pub fn press_all<I>(&mut self, symbols: I) -> Vec<CalcError>
    where
        I: IntoIterator<Item = ButtonSymbol>,
    {
        symbols
            .into_iter()
            .filter_map(|symbol| self.handle_input(symbol).err())
            .collect()
    }

    fn push_digit(&mut self, d: u8) {
        if self.equals_pressed {
            self.display.clear();
            self.equals_pressed = false;
        }
        if self.display == "0" || self.display == "-0" {
            self.display.pop();
        }
        self.display.push(char::from(b'0' + d));
    }

    fn push_decimal(&mut self) {
        if self.equals_pressed {
            self.display = "0.".to_string();
            self.equals_pressed = false;
        } else if !self.display.contains(['.', 'e', 'E']) {
            self.display.push('.');
        }
    }

    fn delete_last(&mut self) {
        self.display.pop();
        // Never leave a dangling exponent marker behind
        let kept = self
            .display
            .strip_suffix("e-")
            .or_else(|| self.display.strip_suffix('e'))
            .map(str::len);
        if let Some(len) = kept {
            self.display.truncate(len);
        }
        if self.display.is_empty() {
            self.display = ZERO.to_string();
        }
        self.equals_pressed = false;
    }

    fn toggle_sign(&mut self) {
        if self.display.starts_with('-') {
            self.display.remove(0);
        } else {
            self.display.insert(0, '-');
        }
    }

    /// Reads the entry as an operand
    ///
    /// `None` for transient entries. An entry too long for `f64` is an
    /// infinite magnitude and comes back as an error.
    fn entry(&self) -> Option<CalcResult<f64>> {
        parse_operand(&self.display).map(Calculator::check_result)
    }

    fn apply_unary(&mut self, f: fn(f64) -> CalcResult<f64>) -> CalcResult<()> {
        let Some(entry) = self.entry() else {
            return Ok(());
        };
        match entry.and_then(f) {
            Ok(result) => {
                self.display = format_number(result);
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    fn factorial(&mut self) -> CalcResult<()> {
        let (negative, digits) = match self.display.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.display.as_str()),
        };
        if digits.is_empty() {
            return Ok(());
        }
        if !digits.chars().all(|c| c.is_ascii_digit())
            || (negative && digits.chars().any(|c| c != '0'))
        {
            return self.fail(CalcError::InvalidFactorialOperand);
        }

        let result = digits
            .parse::<u32>()
            .map_err(|_| CalcError::Overflow)
            .and_then(Calculator::factorial);
        match result {
            Ok(value) => {
                self.display = value.to_string();
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    fn push_operator(&mut self, op: Operation) -> CalcResult<()> {
        if self.display.is_empty() {
            if self.pending.is_empty() {
                // A bare leading minus starts a negative first operand
                if op == Operation::Subtract {
                    self.pending.begin_negative();
                }
            } else {
                self.pending.replace_last_operator(op);
            }
            return Ok(());
        }

        let operand = match self.entry() {
            Some(Ok(operand)) => operand,
            Some(Err(err)) => return self.fail(err),
            None => {
                debug!(display = %self.display, "operator ignored on non-numeric entry");
                return Ok(());
            }
        };
        self.pending.push(operand, op);
        self.display.clear();
        Ok(())
    }

    fn equals(&mut self) -> CalcResult<()> {
        if self.display.is_empty() {
            return Ok(());
        }
        let Some(entry) = self.entry() else {
            debug!(display = %self.display, "equals ignored on non-numeric entry");
            return Ok(());
        };

        let result =
            entry.and_then(|operand| self.evaluator.evaluate_pending(&self.pending, operand));
        self.pending.clear();
        match result {
            Ok(value) => {
                self.display = format_number(value);
                self.equals_pressed = true;
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    fn remember(&mut self, store: fn(&mut MemoryAccumulator, f64)) -> CalcResult<()> {
        match self.entry() {
            Some(Ok(value)) => {
                store(&mut self.memory, value);
                Ok(())
            }
            Some(Err(err)) => self.fail(err),
            None => Ok(()),
        }
    }

    fn memory_recall(&mut self) -> CalcResult<()> {
        match self.memory.recall() {
            Ok(total) => {
                self.display = format_number(total);
                self.equals_pressed = true;
                Ok(())
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: CalcError) -> CalcResult<()> {
        self.display = ZERO.to_string();
        Err(err)
    }
}
