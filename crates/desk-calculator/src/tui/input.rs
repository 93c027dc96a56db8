//! Keyboard input handling
//!
//! Maps crossterm key events onto calculator actions so the whole keypad is
//! reachable without a mouse.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::symbol::ButtonSymbol;
use crate::core::Operation;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a symbol to the engine
    Press(ButtonSymbol),
    /// Show or hide the help legend
    ToggleHelp,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Press(ButtonSymbol::Clear),
                _ => KeyAction::None,
            };
        }

        // Alt with + or - drives the memory accumulator
        if modifiers.contains(KeyModifiers::ALT) {
            return match code {
                KeyCode::Char('+' | '=') => KeyAction::Press(ButtonSymbol::MemoryAdd),
                KeyCode::Char('-') => KeyAction::Press(ButtonSymbol::MemorySubtract),
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::map_char(c),
            KeyCode::Enter => KeyAction::Press(ButtonSymbol::Equals),
            KeyCode::Backspace => KeyAction::Press(ButtonSymbol::Delete),
            KeyCode::Esc | KeyCode::Delete => KeyAction::Press(ButtonSymbol::Clear),
            KeyCode::F(1) => KeyAction::ToggleHelp,
            _ => KeyAction::None,
        }
    }

    fn map_char(c: char) -> KeyAction {
        if let Some(d) = c.to_digit(10) {
            return KeyAction::Press(ButtonSymbol::Digit(d as u8));
        }

        let symbol = match c {
            '.' | ',' => ButtonSymbol::Decimal,
            '+' => ButtonSymbol::Operator(Operation::Add),
            '-' => ButtonSymbol::Operator(Operation::Subtract),
            '*' | 'x' => ButtonSymbol::Operator(Operation::Multiply),
            '/' => ButtonSymbol::Operator(Operation::Divide),
            '%' => ButtonSymbol::Operator(Operation::Modulo),
            '^' => ButtonSymbol::Operator(Operation::Power),
            '=' => ButtonSymbol::Equals,
            'c' | 'C' => ButtonSymbol::Clear,
            'n' => ButtonSymbol::ToggleSign,
            'p' => ButtonSymbol::Percent,
            'r' => ButtonSymbol::SquareRoot,
            '!' => ButtonSymbol::Factorial,
            'i' => ButtonSymbol::Reciprocal,
            'm' => ButtonSymbol::MemoryRecall,
            '?' => return KeyAction::ToggleHelp,
            'q' => return KeyAction::Quit,
            _ => return KeyAction::None,
        };
        KeyAction::Press(symbol)
    }
}

/// Key bindings shown in the footer
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Enter", "="),
    ("Bksp", "Del"),
    ("Esc", "C"),
    ("n", "+/-"),
    ("p", "%"),
    ("r", "√"),
    ("!", "x!"),
    ("i", "1/x"),
    ("%", "mod"),
    ("^", "x^y"),
    ("m", "MC"),
    ("Alt +/-", "M+/M-"),
    ("?", "Help"),
    ("q", "OFF"),
];
