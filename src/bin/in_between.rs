use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use in_between::session::SessionConfig;
use in_between::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::path::PathBuf;
use std::time::Duration;

/// Odds tracker for In Between played with a physical deck.
#[derive(Parser, Debug)]
#[command(name = "in-between", version, about)]
struct Args {
    /// Comma-separated player names, in turn order
    #[arg(long, value_delimiter = ',', default_values_t = [String::from("Player 1"), String::from("Player 2")])]
    players: Vec<String>,

    /// Ante each player pays into the pot per round
    #[arg(long, default_value_t = 1)]
    ante: u64,

    /// UI refresh interval in milliseconds
    #[arg(long, default_value_t = 250)]
    tick_ms: u64,

    /// Write a session log to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level for --log-file
    #[arg(long, default_value_t = log::LevelFilter::Info)]
    log_level: log::LevelFilter,
}

/// The terminal belongs to the TUI, so logs only go to a file.
fn init_logging(args: &Args) -> io::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = std::fs::File::create(path)?;
    simplelog::WriteLogger::init(args.log_level, config, file)
        .map_err(io::Error::other)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if !io::stdout().is_terminal() {
        println!(
            "in-between TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            in_between::VERSION
        );
        return Ok(());
    }
    init_logging(&args)?;
    log::info!("in-between {} starting", in_between::VERSION);

    let config = SessionConfig::new(args.players.clone(), args.ante);
    let mut app = AppState::with_config(config);
    let tick_rate = Duration::from_millis(args.tick_ms.max(10));
    let mut terminal = setup_terminal()?;

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    log::info!("exiting, final pot {}", app.session.pot());
    res
}
