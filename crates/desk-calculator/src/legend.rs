//! Help legend: what every keypad button does

use serde::Serialize;

/// One row of the help legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Button label as printed on the keypad
    pub button: &'static str,
    /// Action performed when pressed
    pub description: &'static str,
}

impl LegendEntry {
    const fn new(button: &'static str, description: &'static str) -> Self {
        Self {
            button,
            description,
        }
    }
}

/// Column headers of the legend table
pub const LEGEND_HEADER: LegendEntry = LegendEntry::new("Button", "Action performed");

/// Legend rows in keypad-reading order
pub const HELP_LEGEND: &[LegendEntry] = &[
    LegendEntry::new("OFF", "Close calculator"),
    LegendEntry::new("C", "Clear"),
    LegendEntry::new("Del", "Delete the last character"),
    LegendEntry::new("[0-9]", "Number input"),
    LegendEntry::new(".", "Input the decimal point"),
    LegendEntry::new("+", "Addition"),
    LegendEntry::new("-", "Subtraction"),
    LegendEntry::new("*", "Multiplication"),
    LegendEntry::new("/", "Division"),
    LegendEntry::new("=", "Perform calculation"),
    LegendEntry::new("+/-", "Change the sign"),
    LegendEntry::new("%", "Calculate the percentage"),
    LegendEntry::new("x^y", "Raise to power"),
    LegendEntry::new("x!", "Factorial"),
    LegendEntry::new("1/x", "Reciprocal"),
    LegendEntry::new("mod", "Modulo"),
    LegendEntry::new("√", "Square root"),
    LegendEntry::new("MC", "Memory clear"),
    LegendEntry::new("M+", "Add to memory"),
    LegendEntry::new("M-", "Subtract from memory"),
];

/// Serializes the legend as a JSON array of `{button, description}` objects
pub fn to_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(HELP_LEGEND)
}

/// Renders the legend as an aligned plain-text table
#[must_use]
pub fn to_table() -> String {
    let width = std::iter::once(&LEGEND_HEADER)
        .chain(HELP_LEGEND)
        .map(|entry| entry.button.chars().count())
        .max()
        .unwrap_or(0);

    std::iter::once(&LEGEND_HEADER)
        .chain(HELP_LEGEND)
        .map(|entry| {
            let pad = width - entry.button.chars().count();
            format!("{}{}  {}\n", entry.button, " ".repeat(pad), entry.description)
        })
        .collect()
}
