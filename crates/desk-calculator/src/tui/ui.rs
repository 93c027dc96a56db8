//! Terminal rendering
//!
//! Layout, top to bottom: display, pending expression and memory line,
//! keypad, shortcut footer. The help legend and the error modal are drawn
//! as centered popups over the keypad.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Row, Table, Widget, Wrap},
    Frame,
};

use super::app::CalculatorApp;
use super::input::HELP_SHORTCUTS;
use super::keypad::KeypadWidget;
use crate::legend::{HELP_LEGEND, LEGEND_HEADER};

/// Title drawn on the outer border
pub const TITLE: &str = " Desk Calculator ";

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Where the keypad lands for a given frame area
///
/// Mouse hit-testing uses this so clicks line up with what was drawn.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split(area)[2]
}

fn split(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Length(1), // Pending expression + memory
            Constraint::Min(8),    // Keypad
            Constraint::Length(1), // Shortcuts
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Returns a rectangle of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        paragraph.render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let mut spans = vec![Span::styled(
            engine.pending_expression().render(),
            Style::default().fg(Color::Gray),
        )];
        // Memory indicator only once something has been stored
        if !engine.memory().is_empty() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("M: {}", engine.memory()),
                Style::default().fg(Color::Magenta),
            ));
        }
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(area, buf);
    }

    fn render_shortcuts(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(HELP_SHORTCUTS.len() * 2);
        for (key, action) in HELP_SHORTCUTS {
            spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
            spans.push(Span::styled(
                format!(":{action} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 44, HELP_LEGEND.len() as u16 + 3);
        Clear.render(popup, buf);

        let rows = HELP_LEGEND.iter().map(|entry| {
            Row::new(vec![
                Span::styled(entry.button, Style::default().fg(Color::Yellow)),
                Span::raw(entry.description),
            ])
        });
        let header = Row::new(vec![LEGEND_HEADER.button, LEGEND_HEADER.description])
            .style(Style::default().add_modifier(Modifier::BOLD));

        Table::new(rows, [Constraint::Length(8), Constraint::Min(20)])
            .header(header)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(popup, buf);
    }

    fn render_error(&self, message: &str, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 60, 5);
        Clear.render(popup, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(message, Style::default().fg(Color::Red))),
            Line::from(Span::styled(
                "press any key",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .render(popup, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let [display, status, keypad, shortcuts] = split(area);
        self.render_display(display, buf);
        self.render_status(status, buf);
        KeypadWidget::new(self.app.keypad()).render(keypad, buf);
        self.render_shortcuts(shortcuts, buf);

        if self.app.help_visible() {
            self.render_help(area, buf);
        }
        if let Some(err) = self.app.error() {
            self.render_error(&err.to_string(), area, buf);
        }
    }
}
