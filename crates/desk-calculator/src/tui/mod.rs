//! Terminal front-end for the calculator engine

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction, HELP_SHORTCUTS};
pub use keypad::{Keypad, KeypadAction, KeypadButton, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI};
