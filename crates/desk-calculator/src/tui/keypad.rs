//! Clickable keypad grid
//!
//! Six columns in the desktop calculator's arrangement, with the `0` key
//! spanning two columns and a full-width Help bar underneath:
//!
//! ```text
//! [OFF] [ C ] [+/-] [ % ] [Del] [ / ]
//! [x^y] [MC ] [ 7 ] [ 8 ] [ 9 ] [ * ]
//! [ √ ] [M+ ] [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [mod] [M- ] [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [x! ] [1/x] [    0    ] [ . ] [ = ]
//! [              Help             ]
//! ```

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::symbol::ButtonSymbol;
use crate::core::Operation;

/// What a keypad button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Forward a symbol to the engine
    Press(ButtonSymbol),
    /// Close the calculator
    Off,
    /// Show or hide the help legend
    Help,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Label printed on the button
    pub label: String,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: KeypadAction,
    /// Grid row
    pub row: usize,
    /// First grid column covered
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let label = match action {
            KeypadAction::Press(symbol) => symbol.label(),
            KeypadAction::Off => "OFF".to_string(),
            KeypadAction::Help => "Help".to_string(),
        };
        Self {
            label,
            pressed: false,
            action,
            row,
            col,
            span: 1,
        }
    }

    /// Creates a button forwarding `symbol`
    #[must_use]
    pub fn symbol(symbol: ButtonSymbol, row: usize, col: usize) -> Self {
        Self::new(KeypadAction::Press(symbol), row, col)
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Returns true if the button covers grid cell (row, col)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// The keypad layout
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard desk calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use ButtonSymbol as S;

        let op = |op: Operation| S::Operator(op);
        let digit = |d: u8| S::Digit(d);

        #[rustfmt::skip]
        let grid: [[Option<ButtonSymbol>; 6]; 5] = [
            [None, Some(S::Clear), Some(S::ToggleSign), Some(S::Percent), Some(S::Delete), Some(op(Operation::Divide))],
            [Some(op(Operation::Power)), Some(S::MemoryRecall), Some(digit(7)), Some(digit(8)), Some(digit(9)), Some(op(Operation::Multiply))],
            [Some(S::SquareRoot), Some(S::MemoryAdd), Some(digit(4)), Some(digit(5)), Some(digit(6)), Some(op(Operation::Subtract))],
            [Some(op(Operation::Modulo)), Some(S::MemorySubtract), Some(digit(1)), Some(digit(2)), Some(digit(3)), Some(op(Operation::Add))],
            [Some(S::Factorial), Some(S::Reciprocal), Some(digit(0)), None, Some(S::Decimal), Some(S::Equals)],
        ];

        let mut buttons = vec![KeypadButton::new(KeypadAction::Off, 0, 0)];
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(symbol) = cell {
                    let button = KeypadButton::symbol(*symbol, row, col);
                    // The 0 key also covers the empty cell to its right
                    let button = if *symbol == S::Digit(0) {
                        button.spanning(2)
                    } else {
                        button
                    };
                    buttons.push(button);
                }
            }
        }
        buttons.push(KeypadButton::new(KeypadAction::Help, 5, 0).spanning(6));

        Self {
            buttons,
            cols: 6,
            rows: 6,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Finds the index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds a button by the action it performs
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button performing `action`, releasing the others
    pub fn highlight(&mut self, action: KeypadAction) {
        self.release_all();
        if let Some(btn) = self.buttons.iter_mut().find(|b| b.action == action) {
            btn.set_pressed(true);
        }
    }

    /// Returns the highlighted button, if any
    #[must_use]
    pub fn highlighted(&self) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position inside the bordered keypad area to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Border takes one cell on each side
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let (btn_width, btn_height) = self.cell_size(area);
        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = ((rel_x - 1) / btn_width) as usize;
        let row = ((rel_y - 1) / btn_height) as usize;
        self.index_at(row, col)
    }

    fn cell_size(&self, area: Rect) -> (u16, u16) {
        (
            area.width.saturating_sub(2) / self.cols as u16,
            area.height.saturating_sub(2) / self.rows as u16,
        )
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn style_for(button: &KeypadButton) -> Style {
        if button.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match button.action {
            KeypadAction::Press(ButtonSymbol::Digit(_) | ButtonSymbol::Decimal) => {
                Style::default().fg(Color::White)
            }
            KeypadAction::Press(ButtonSymbol::Operator(_)) => Style::default().fg(Color::Yellow),
            KeypadAction::Press(ButtonSymbol::Equals) => Style::default().fg(Color::Green),
            KeypadAction::Press(
                ButtonSymbol::MemoryRecall | ButtonSymbol::MemoryAdd | ButtonSymbol::MemorySubtract,
            ) => Style::default().fg(Color::Magenta),
            KeypadAction::Press(ButtonSymbol::Clear | ButtonSymbol::Delete) | KeypadAction::Off => {
                Style::default().fg(Color::Red)
            }
            KeypadAction::Press(_) | KeypadAction::Help => Style::default().fg(Color::Cyan),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        let (btn_width, btn_height) = self.keypad.cell_size(area);
        if btn_width < 3 || btn_height == 0 {
            return;
        }

        for btn in self.keypad.buttons() {
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height;
            let width = btn_width * btn.span as u16;

            let label = format!("[{}]", btn.label);
            let label_width = label.chars().count() as u16;
            let label_x = x + width.saturating_sub(label_width) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(
                    label_x,
                    label_y,
                    &Span::styled(label, Self::style_for(btn)),
                    width,
                );
            }
        }
    }
}
