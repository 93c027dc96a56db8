//! `desk-calc`: desk calculator in the terminal
//!
//! Run with: cargo run --bin desk-calc

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use desk_calculator::legend;
use desk_calculator::tui::{keypad_area, render, CalculatorApp, InputHandler};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Desk calculator with memory, powers, roots and factorials
#[derive(Debug, Parser)]
#[command(name = "desk-calc", version, about)]
struct Cli {
    /// Print the button legend and exit
    #[arg(long)]
    legend: bool,

    /// Print the legend as JSON
    #[arg(long, requires = "legend")]
    json: bool,

    /// Write logs to this file (the terminal belongs to the UI)
    #[arg(long, value_name = "PATH", env = "DESK_CALC_LOG")]
    log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.legend {
        if cli.json {
            println!("{}", legend::to_json()?);
        } else {
            print!("{}", legend::to_table());
        }
        return Ok(());
    }

    if let Some(path) = &cli.log_file {
        init_logging(path, cli.verbose)?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Sends tracing output to `path`; `RUST_LOG` overrides the default level
fn init_logging(path: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| err.to_string())?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::new();
    let input_handler = InputHandler::new();
    let mut keypad = Rect::default();

    info!("calculator started");

    loop {
        terminal.draw(|frame| {
            keypad = keypad_area(frame.area());
            render(&app, frame);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(input_handler.handle_key(key));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(keypad, mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
