//! gapr - demonstration echo REPL for the gap-line editing kernel
//!
//! Reads keys, edits a line with readline-style bindings, and echoes
//! submissions into a bounded, soft-wrapped scrollback pane.
//!
//! Usage:
//!   gapr                    # default prompt, persistent history
//!   gapr --prompt "$ "      # custom prompt
//!   gapr --no-history       # skip the on-disk history file

mod app;
mod keys;
mod ui;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "gapr")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Echo REPL with gap-buffer line editing", long_about = None)]
struct Args {
    /// Prompt string
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Maximum number of scrollback lines kept in memory
    #[arg(long, default_value_t = 1000)]
    scrollback: usize,

    /// Don't load or save the history file
    #[arg(long)]
    no_history: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {e}"))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Failed to enter alternate screen: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Failed to create terminal: {e}"))?;

    let mut app = App::new(&args.prompt, args.scrollback, !args.no_history);
    let result = run_app(&mut terminal, &mut app);

    // Restore the terminal no matter how the loop ended.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(|e| format!("Application error: {e}"))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Save history before exiting.
    app.save_history();

    Ok(())
}
