//! Pending expression built by successive operator presses
//!
//! Kept as committed `(operand, operator)` terms rather than text, so the
//! only thing that ever evaluates it is the arithmetic evaluator.

use crate::core::{format_number, Operation};

/// A committed operand together with the operator pressed after it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Operand value taken from the display buffer
    pub operand: f64,
    /// Operator that follows the operand
    pub op: Operation,
}

/// Accumulated `operand <op> operand <op> ...` chain awaiting `=`
///
/// Invariant: always ends in an operator (or is empty); the only place two
/// operators may meet is a single leading minus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingExpression {
    negate_first: bool,
    terms: Vec<Term>,
}

impl PendingExpression {
    /// Creates an empty expression
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing has been committed, not even a leading minus
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.negate_first && self.terms.is_empty()
    }

    /// Returns true if the first operand is negated by a leading minus
    #[must_use]
    pub fn starts_negative(&self) -> bool {
        self.negate_first
    }

    /// Returns the committed terms (oldest first)
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the operator the expression currently ends in
    #[must_use]
    pub fn last_operator(&self) -> Option<Operation> {
        self.terms.last().map(|t| t.op)
    }

    /// Marks the first operand as negative; only valid on an empty expression
    ///
    /// Returns false (and changes nothing) if anything was already committed.
    pub fn begin_negative(&mut self) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.negate_first = true;
        true
    }

    /// Commits an operand followed by an operator
    pub fn push(&mut self, operand: f64, op: Operation) {
        self.terms.push(Term { operand, op });
    }

    /// Swaps the trailing operator, keeping the no-double-operator invariant
    ///
    /// Returns false if there is no committed term to amend.
    pub fn replace_last_operator(&mut self, op: Operation) -> bool {
        match self.terms.last_mut() {
            Some(term) => {
                term.op = op;
                true
            }
            None => false,
        }
    }

    /// Discards everything
    pub fn clear(&mut self) {
        self.negate_first = false;
        self.terms.clear();
    }

    /// Renders the expression as it would read on a paper tape (`-5+3*`)
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.negate_first {
            out.push('-');
        }
        for term in &self.terms {
            out.push_str(&format_number(term.operand));
            out.push_str(term.op.symbol());
        }
        out
    }
}

impl std::fmt::Display for PendingExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
