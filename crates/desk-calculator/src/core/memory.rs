//! Memory accumulator behind the `MC`, `M+` and `M-` buttons
//!
//! Additions and subtractions are recorded as signed terms and only summed
//! when the memory is recalled.

use crate::core::{format_number, CalcResult, Calculator};

/// Lazily evaluated running sum, seeded at zero
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryAccumulator {
    terms: Vec<f64>,
}

impl MemoryAccumulator {
    /// Text of an empty accumulator
    pub const SEED: &'static str = "0.0";

    /// Creates an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `+value`
    pub fn add(&mut self, value: f64) {
        self.terms.push(value);
    }

    /// Records `-value`
    pub fn subtract(&mut self, value: f64) {
        self.terms.push(-value);
    }

    /// Returns true if nothing has been recorded since the last recall
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the signed terms recorded so far
    #[must_use]
    pub fn terms(&self) -> &[f64] {
        &self.terms
    }

    /// Sums the recorded terms without consuming them
    pub fn total(&self) -> CalcResult<f64> {
        Calculator::sum(&self.terms)
    }

    /// Sums the recorded terms and resets the accumulator to zero
    ///
    /// On error the accumulator is left untouched.
    pub fn recall(&mut self) -> CalcResult<f64> {
        let total = self.total()?;
        self.terms.clear();
        Ok(total)
    }

    /// Renders the running expression (`0.0+2-3`)
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from(Self::SEED);
        for &term in &self.terms {
            if term.is_sign_negative() {
                out.push('-');
            } else {
                out.push('+');
            }
            out.push_str(&format_number(term.abs()));
        }
        out
    }
}

impl std::fmt::Display for MemoryAccumulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
