//! Terminal application state
//!
//! Wraps the engine with what only the terminal shell needs: the keypad
//! highlight, the error modal, help visibility and the quit flag.

use ratatui::layout::Rect;
use tracing::{debug, info};

use super::input::KeyAction;
use super::keypad::{Keypad, KeypadAction};
use crate::core::symbol::ButtonSymbol;
use crate::core::{CalcError, CalcResult};
use crate::engine::CalculatorEngine;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    /// Error awaiting acknowledgement; blocks input while set
    error: Option<CalcError>,
    /// Every error message shown so far, oldest first
    notifications: Vec<String>,
    help_visible: bool,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: CalculatorEngine::new(),
            keypad: Keypad::new(),
            error: None,
            notifications: Vec::new(),
            help_visible: false,
            should_quit: false,
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad with its current highlight
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the engine's display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Returns the error currently shown in the modal
    #[must_use]
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Returns every error message shown so far
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// Returns whether the help legend is shown
    #[must_use]
    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        info!("calculator closed");
        self.should_quit = true;
    }

    /// Shows or hides the help legend
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Closes the error modal
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Forwards a symbol to the engine, opening the modal on error
    pub fn press(&mut self, symbol: ButtonSymbol) -> CalcResult<()> {
        self.keypad.highlight(KeypadAction::Press(symbol));
        let result = self.engine.handle_input(symbol);
        if let Err(err) = result {
            self.notifications.push(err.to_string());
            self.error = Some(err);
        }
        result
    }

    /// Handles a keyboard action
    ///
    /// While the error modal is open the key only dismisses it.
    pub fn handle_key(&mut self, action: KeyAction) {
        if action == KeyAction::None {
            return;
        }
        if self.error.is_some() {
            self.dismiss_error();
            return;
        }
        match action {
            KeyAction::Press(symbol) => {
                // Failures are surfaced through the modal
                let _ = self.press(symbol);
            }
            KeyAction::ToggleHelp => self.toggle_help(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a keypad button action
    pub fn handle_keypad(&mut self, action: KeypadAction) {
        if self.error.is_some() {
            self.dismiss_error();
            return;
        }
        match action {
            KeypadAction::Press(symbol) => {
                let _ = self.press(symbol);
            }
            KeypadAction::Off => self.quit(),
            KeypadAction::Help => {
                self.keypad.highlight(action);
                self.toggle_help();
            }
        }
    }

    /// Handles a left click at terminal position (x, y)
    ///
    /// `keypad_area` is where the keypad was last drawn. Clicks outside any
    /// button are ignored unless they dismiss the error modal.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) {
        let action = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.action);

        match action {
            Some(action) => self.handle_keypad(action),
            None if self.error.is_some() => self.dismiss_error(),
            None => debug!(x, y, "click outside keypad"),
        }
    }

    /// Starts a fresh session; the quit flag is left as is
    pub fn reset(&mut self) {
        self.engine.reset();
        self.keypad.release_all();
        self.error = None;
        self.notifications.clear();
        self.help_visible = false;
    }
}
