//! Property-based tests for the calculator engine
//!
//! Random button sequences must never break the engine's state invariants.

#![allow(clippy::unwrap_used)]

use desk_calculator::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

/// Any button the engine understands
fn symbol_strategy() -> impl Strategy<Value = ButtonSymbol> {
    prop_oneof![
        4 => digit_strategy().prop_map(ButtonSymbol::Digit),
        1 => Just(ButtonSymbol::Decimal),
        1 => Just(ButtonSymbol::Clear),
        1 => Just(ButtonSymbol::Delete),
        1 => Just(ButtonSymbol::ToggleSign),
        1 => Just(ButtonSymbol::Percent),
        1 => Just(ButtonSymbol::Reciprocal),
        1 => Just(ButtonSymbol::SquareRoot),
        1 => Just(ButtonSymbol::Factorial),
        3 => operator_strategy().prop_map(ButtonSymbol::Operator),
        2 => Just(ButtonSymbol::Equals),
        1 => Just(ButtonSymbol::MemoryRecall),
        1 => Just(ButtonSymbol::MemoryAdd),
        1 => Just(ButtonSymbol::MemorySubtract),
    ]
}

fn sequence_strategy() -> impl Strategy<Value = Vec<ButtonSymbol>> {
    prop::collection::vec(symbol_strategy(), 0..40)
}

/// Display is a number, or one of the transient entry states
fn is_valid_display(display: &str) -> bool {
    display.is_empty()
        || parse_operand(display).is_some()
        || display.trim_start_matches('-').trim_end_matches('.').is_empty()
}

fn engine_after(symbols: &[ButtonSymbol]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    engine.press_all(symbols.iter().copied());
    engine
}

// ===== Digit entry =====

proptest! {
    /// Digits typed into a fresh engine concatenate
    #[test]
    fn prop_digits_concatenate(
        first in 1u8..=9u8,
        rest in prop::collection::vec(digit_strategy(), 0..12),
    ) {
        let mut engine = CalculatorEngine::new();
        let mut expected = first.to_string();
        engine.handle_input(ButtonSymbol::Digit(first)).unwrap();
        for d in rest {
            engine.handle_input(ButtonSymbol::Digit(d)).unwrap();
            expected.push(char::from(b'0' + d));
        }
        prop_assert_eq!(engine.display(), expected);
    }

    /// A digit right after equals replaces the result
    #[test]
    fn prop_digit_after_equals_starts_fresh(seq in sequence_strategy(), d in digit_strategy()) {
        let mut engine = engine_after(&seq);
        engine.handle_input(ButtonSymbol::Equals).ok();
        if engine.equals_pressed() {
            engine.handle_input(ButtonSymbol::Digit(d)).unwrap();
            prop_assert_eq!(engine.display(), d.to_string());
        }
    }
}

// ===== State invariants =====

proptest! {
    /// Clear always yields "0"
    #[test]
    fn prop_clear_yields_zero(seq in sequence_strategy()) {
        let mut engine = engine_after(&seq);
        engine.handle_input(ButtonSymbol::Clear).unwrap();
        prop_assert_eq!(engine.display(), "0");
    }

    /// A second equals leaves the display unchanged
    #[test]
    fn prop_equals_twice_is_stable(seq in sequence_strategy()) {
        let mut engine = engine_after(&seq);
        engine.handle_input(ButtonSymbol::Equals).ok();
        let first = engine.display().to_string();
        engine.handle_input(ButtonSymbol::Equals).ok();
        prop_assert_eq!(engine.display(), first);
    }

    /// Pending expression is empty, a lone leading minus, or ends in an operator
    #[test]
    fn prop_pending_expression_shape(seq in sequence_strategy()) {
        let engine = engine_after(&seq);
        let pending = engine.pending_expression();
        prop_assert_eq!(pending.terms().is_empty(), pending.last_operator().is_none());

        let rendered = pending.render();
        prop_assert!(
            rendered.is_empty()
                || rendered == "-"
                || rendered.ends_with(['+', '-', '*', '/', '%']),
            "unexpected pending expression {:?}", rendered
        );
    }

    /// The display never holds anything but a number or an entry in progress
    #[test]
    fn prop_display_always_valid(seq in sequence_strategy()) {
        let mut engine = CalculatorEngine::new();
        for symbol in seq {
            engine.handle_input(symbol).ok();
            prop_assert!(is_valid_display(engine.display()), "display {:?}", engine.display());
        }
    }

    /// Every reported error leaves "0" on the display
    #[test]
    fn prop_errors_reset_display(seq in sequence_strategy()) {
        let mut engine = CalculatorEngine::new();
        for symbol in seq {
            if engine.handle_input(symbol).is_err() {
                prop_assert_eq!(engine.display(), "0");
            }
        }
    }

    /// Equals always consumes the pending expression when it evaluates
    #[test]
    fn prop_equals_clears_pending(seq in sequence_strategy(), d in 1u8..=9u8) {
        let mut engine = engine_after(&seq);
        engine.handle_input(ButtonSymbol::Clear).unwrap();
        engine.handle_input(ButtonSymbol::Digit(d)).unwrap();
        engine.handle_input(ButtonSymbol::Equals).ok();
        prop_assert!(engine.pending_expression().is_empty());
    }
}

// ===== Memory =====

proptest! {
    /// Recall leaves the accumulator seeded at zero
    #[test]
    fn prop_recall_empties_memory(seq in sequence_strategy()) {
        let mut engine = engine_after(&seq);
        if engine.handle_input(ButtonSymbol::MemoryRecall).is_ok() {
            prop_assert!(engine.memory().is_empty());
            prop_assert_eq!(engine.memory().render(), "0.0");
            prop_assert!(engine.equals_pressed());
        }
    }

    /// Memory recall returns the signed sum of what was stored
    #[test]
    fn prop_memory_sums_entries(values in prop::collection::vec((1u8..=9u8, any::<bool>()), 1..8)) {
        let mut engine = CalculatorEngine::new();
        let mut expected = 0.0;
        for (d, add) in values {
            engine.handle_input(ButtonSymbol::Clear).unwrap();
            engine.handle_input(ButtonSymbol::Digit(d)).unwrap();
            if add {
                engine.handle_input(ButtonSymbol::MemoryAdd).unwrap();
                expected += f64::from(d);
            } else {
                engine.handle_input(ButtonSymbol::MemorySubtract).unwrap();
                expected -= f64::from(d);
            }
        }
        engine.handle_input(ButtonSymbol::MemoryRecall).unwrap();
        prop_assert_eq!(engine.display(), format_number(expected));
    }
}

// ===== Symbols =====

proptest! {
    /// Unknown symbol strings never change state
    #[test]
    fn prop_unknown_symbols_ignored(seq in sequence_strategy(), junk in "[a-z]{4,10}") {
        prop_assume!(junk.parse::<ButtonSymbol>().is_err());
        let mut engine = engine_after(&seq);
        let before = engine.snapshot();
        prop_assert!(engine.handle_symbol(&junk).is_ok());
        prop_assert_eq!(engine.snapshot(), before);
    }
}
