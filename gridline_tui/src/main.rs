//! Terminal UI for gridline.

#![warn(missing_docs)]

mod app;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use gridline::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;

/// Gridline - n-in-a-row with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "gridline_tui")]
#[command(about = "Play n-in-a-row in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Board side length
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    size: u16,

    /// Consecutive marks required to win
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u16).range(1..))]
    run_length: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file; the alternate screen owns stdout.
    let log_file = std::fs::File::create("gridline_tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(size = cli.size, run_length = cli.run_length, "Starting gridline TUI");

    let config = GameConfig::new(usize::from(cli.size), usize::from(cli.run_length));
    let mut terminal = ratatui::init();
    let res = run_app(&mut terminal, App::new(config));
    ratatui::restore();
    res
}

/// Draw-then-wait loop. Every state change happens synchronously in
/// the key handler, one event at a time.
fn run_app(terminal: &mut ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
