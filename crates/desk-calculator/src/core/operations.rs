//! Arithmetic for the keypad operations
//!
//! Binary operators carry their own precedence so the evaluator can honour
//! standard ordering. Unary keypad functions (percent, reciprocal, square
//! root, factorial) live here too so every numeric edge case is in one place.

use crate::core::{CalcError, CalcResult};

/// Binary operator accepted into a pending expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%)
    Modulo,
    /// Power (**)
    Power,
}

impl Operation {
    /// All binary operations, in keypad order
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Power,
    ];

    /// Returns the operator symbol as written in a pending expression
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Power => "**",
        }
    }

    /// Returns the label printed on the keypad button
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Modulo => "mod",
            Self::Power => "x^y",
            _ => self.symbol(),
        }
    }

    /// Looks an operator up by its expression symbol or keypad label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            "%" | "mod" => Some(Self::Modulo),
            "**" | "^" | "x^y" => Some(Self::Power),
            _ => None,
        }
    }

    /// Returns the precedence level for operator ordering (higher = evaluated first)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulo => 2,
            Self::Power => 3,
        }
    }

    /// Returns true if this operation is left-associative
    #[must_use]
    pub const fn is_left_associative(&self) -> bool {
        !matches!(self, Self::Power)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Stateless arithmetic used by the engine and the evaluator
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Largest n whose factorial fits in a `u128`
    pub const MAX_FACTORIAL: u32 = 34;

    /// Performs an operation on two operands
    pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::check_result(a + b),
            Operation::Subtract => Self::check_result(a - b),
            Operation::Multiply => Self::check_result(a * b),
            Operation::Divide => Self::divide(a, b),
            Operation::Modulo => Self::modulo(a, b),
            Operation::Power => Self::power(a, b),
        }
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_result(a / b)
    }

    /// Floored modulo: the result takes the sign of the divisor
    pub fn modulo(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        let remainder = a % b;
        let result = if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
            remainder + b
        } else {
            remainder
        };
        Self::check_result(result)
    }

    /// Power: a ** b
    pub fn power(a: f64, b: f64) -> CalcResult<f64> {
        Self::check_result(a.powf(b))
    }

    /// Percent: a / 100
    pub fn percent(a: f64) -> CalcResult<f64> {
        Self::check_result(a / 100.0)
    }

    /// Reciprocal: a ** -1
    pub fn reciprocal(a: f64) -> CalcResult<f64> {
        Self::power(a, -1.0)
    }

    /// Principal square root
    pub fn square_root(a: f64) -> CalcResult<f64> {
        if a < 0.0 {
            return Err(CalcError::NegativeRoot);
        }
        Self::check_result(a.sqrt())
    }

    /// Exact integer factorial
    pub fn factorial(n: u32) -> CalcResult<u128> {
        (1..=u128::from(n)).try_fold(1u128, |acc, k| acc.checked_mul(k).ok_or(CalcError::Overflow))
    }

    /// Sum of a memory accumulator's terms, starting from zero
    pub fn sum(terms: &[f64]) -> CalcResult<f64> {
        let total: f64 = terms.iter().fold(0.0, |acc, term| acc + term);
        if total.is_infinite() {
            return Err(CalcError::Overflow);
        }
        Self::check_result(total)
    }

    /// Maps non-finite results onto error kinds
    ///
    /// Any infinite magnitude is reported as a division by zero.
    pub fn check_result(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::UndefinedResult)
        } else if result.is_infinite() {
            Err(CalcError::DivisionByZero)
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operation enum tests ---

    #[test]
    fn test_operation_symbols() {
        let symbols: Vec<_> = Operation::ALL.iter().map(Operation::symbol).collect();
        assert_eq!(symbols, vec!["+", "-", "*", "/", "%", "**"]);
    }

    #[test]
    fn test_operation_labels() {
        assert_eq!(Operation::Modulo.label(), "mod");
        assert_eq!(Operation::Power.label(), "x^y");
        assert_eq!(Operation::Add.label(), "+");
    }

    #[test]
    fn test_operation_from_symbol_round_trips() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operation::from_symbol(op.label()), Some(op));
        }
    }

    #[test]
    fn test_operation_from_symbol_unknown() {
        assert_eq!(Operation::from_symbol("sqrt"), None);
        assert_eq!(Operation::from_symbol(""), None);
    }

    #[test]
    fn test_operation_precedence() {
        assert_eq!(Operation::Add.precedence(), 1);
        assert_eq!(Operation::Subtract.precedence(), 1);
        assert_eq!(Operation::Multiply.precedence(), 2);
        assert_eq!(Operation::Divide.precedence(), 2);
        assert_eq!(Operation::Modulo.precedence(), 2);
        assert_eq!(Operation::Power.precedence(), 3);
    }

    #[test]
    fn test_operation_associativity() {
        assert!(Operation::Add.is_left_associative());
        assert!(Operation::Modulo.is_left_associative());
        assert!(!Operation::Power.is_left_associative());
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Power.to_string(), "**");
    }

    // --- Binary arithmetic tests ---

    #[test]
    fn test_calculate_basic() {
        assert_eq!(Calculator::calculate(5.0, 3.0, Operation::Add), Ok(8.0));
        assert_eq!(Calculator::calculate(5.0, 3.0, Operation::Subtract), Ok(2.0));
        assert_eq!(Calculator::calculate(4.0, 3.0, Operation::Multiply), Ok(12.0));
        assert_eq!(Calculator::calculate(12.0, 4.0, Operation::Divide), Ok(3.0));
        assert_eq!(Calculator::calculate(7.0, 3.0, Operation::Modulo), Ok(1.0));
        assert_eq!(Calculator::calculate(2.0, 3.0, Operation::Power), Ok(8.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Calculator::divide(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Calculator::divide(0.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(Calculator::modulo(10.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_modulo_sign_follows_divisor() {
        assert_eq!(Calculator::modulo(-7.0, 3.0), Ok(2.0));
        assert_eq!(Calculator::modulo(7.0, -3.0), Ok(-2.0));
        assert_eq!(Calculator::modulo(-7.0, -3.0), Ok(-1.0));
        assert_eq!(Calculator::modulo(7.5, 2.0), Ok(1.5));
    }

    #[test]
    fn test_power_zero_to_negative_is_division_by_zero() {
        assert_eq!(Calculator::power(0.0, -1.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_power_overflow_reports_infinite_magnitude() {
        assert_eq!(Calculator::power(10.0, 1000.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_power_negative_base_fractional_exp() {
        assert_eq!(Calculator::power(-8.0, 0.5), Err(CalcError::UndefinedResult));
    }

    #[test]
    fn test_multiply_overflow_is_infinite() {
        assert_eq!(
            Calculator::calculate(1e308, 10.0, Operation::Multiply),
            Err(CalcError::DivisionByZero)
        );
    }

    // --- Unary function tests ---

    #[test]
    fn test_percent() {
        assert_eq!(Calculator::percent(9.0), Ok(0.09));
        assert_eq!(Calculator::percent(200.0), Ok(2.0));
        assert_eq!(Calculator::percent(-50.0), Ok(-0.5));
    }

    #[test]
    fn test_reciprocal() {
        assert_eq!(Calculator::reciprocal(4.0), Ok(0.25));
        assert_eq!(Calculator::reciprocal(-2.0), Ok(-0.5));
    }

    #[test]
    fn test_check_result_classifies_non_finite() {
        assert_eq!(Calculator::check_result(2.5), Ok(2.5));
        assert_eq!(Calculator::check_result(f64::INFINITY), Err(CalcError::DivisionByZero));
        assert_eq!(Calculator::check_result(f64::NAN), Err(CalcError::UndefinedResult));
    }

    #[test]
    fn test_reciprocal_of_zero() {
        assert_eq!(Calculator::reciprocal(0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Calculator::reciprocal(-0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(Calculator::square_root(16.0), Ok(4.0));
        assert_eq!(Calculator::square_root(0.0), Ok(0.0));
    }

    #[test]
    fn test_square_root_negative() {
        assert_eq!(Calculator::square_root(-4.0), Err(CalcError::NegativeRoot));
    }

    #[test]
    fn test_factorial_small() {
        assert_eq!(Calculator::factorial(0), Ok(1));
        assert_eq!(Calculator::factorial(1), Ok(1));
        assert_eq!(Calculator::factorial(7), Ok(5040));
        assert_eq!(Calculator::factorial(20), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_limit() {
        assert!(Calculator::factorial(Calculator::MAX_FACTORIAL).is_ok());
        assert_eq!(
            Calculator::factorial(Calculator::MAX_FACTORIAL + 1),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_sum_terms() {
        assert_eq!(Calculator::sum(&[]), Ok(0.0));
        assert_eq!(Calculator::sum(&[2.0, 3.0]), Ok(5.0));
        assert_eq!(Calculator::sum(&[2.0, -3.0]), Ok(-1.0));
    }

    #[test]
    fn test_sum_overflow() {
        assert_eq!(Calculator::sum(&[f64::MAX, f64::MAX]), Err(CalcError::Overflow));
    }

    // --- Property-based tests ---

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            let r1 = Calculator::calculate(a, b, Operation::Add);
            let r2 = Calculator::calculate(b, a, Operation::Add);
            prop_assert_eq!(r1, r2);
        }

        #[test]
        fn prop_modulo_bounded_by_divisor(a in -1e6f64..1e6f64, b in 1.0f64..1e3f64) {
            let r = Calculator::modulo(a, b).unwrap();
            prop_assert!(r >= 0.0 && r <= b);
        }

        #[test]
        fn prop_square_root_inverts_square(a in 0.0f64..1e6f64) {
            let root = Calculator::square_root(a * a).unwrap();
            prop_assert!((root - a).abs() < 1e-6);
        }

        #[test]
        fn prop_factorial_recurrence(n in 1u32..=Calculator::MAX_FACTORIAL) {
            let prev = Calculator::factorial(n - 1).unwrap();
            prop_assert_eq!(Calculator::factorial(n).unwrap(), prev * u128::from(n));
        }
    }
}
