use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_GRID_COUNT, FRAME_POLL_MS, GridSize, MAX_GRID_COUNT, MIN_GRID_COUNT, THEME_CLASSIC,
};
use grid_snake::game::GameStatus;
use grid_snake::input::InputHandler;
use grid_snake::logging::{default_log_path, init_logger};
use grid_snake::renderer;
use grid_snake::scheduler::TickScheduler;
use grid_snake::score::{HighScoreStore, JsonFileStore, MemoryStore};
use grid_snake::session::Session;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per side of the square board.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_COUNT,
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_GRID_COUNT)..=i64::from(MAX_GRID_COUNT)),
    )]
    grid: u16,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file (defaults to the platform data directory).
    #[arg(long = "scores-file", value_name = "PATH")]
    scores_file: Option<PathBuf>,

    /// Keep the high score in memory only.
    #[arg(long = "no-persist", conflicts_with = "scores_file")]
    no_persist: bool,

    /// Log file (defaults to the platform data directory).
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_logger(&log_path) {
        eprintln!("Logging disabled: {error}");
    }
    info!("starting with {cli:?}");

    install_panic_hook();

    let bounds = GridSize::square(cli.grid);
    if cli.no_persist {
        run(new_session(bounds, MemoryStore::default(), cli.seed))
    } else {
        let store = cli
            .scores_file
            .map_or_else(JsonFileStore::at_default_path, JsonFileStore::new);
        info!("high score file: {}", store.path().display());
        run(new_session(bounds, store, cli.seed))
    }
}

fn new_session<S: HighScoreStore>(bounds: GridSize, store: S, seed: Option<u64>) -> Session<S> {
    match seed {
        Some(seed) => Session::new_with_seed(bounds, store, seed),
        None => Session::new(bounds, store),
    }
}

fn run<S: HighScoreStore>(mut session: Session<S>) -> io::Result<()> {
    let mut terminal_session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut scheduler = TickScheduler::new();

    loop {
        let snapshot = session.snapshot();
        terminal_session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, &THEME_CLASSIC))?;

        if let Some(game_input) = input.poll_input(Duration::from_millis(FRAME_POLL_MS))? {
            if !session.apply_input(game_input) {
                break;
            }
        }

        if session.state().status == GameStatus::Running && !scheduler.is_armed() {
            scheduler.arm(Instant::now());
        }

        // Re-read every frame: eating food may have shortened the interval.
        let interval = session.state().current_speed_interval();
        if scheduler.poll(Instant::now(), interval) {
            session.advance();
        }

        if session.state().status != GameStatus::Running && scheduler.is_armed() {
            scheduler.stop();
        }
    }

    if let Err(error) = terminal_session.terminal_mut().show_cursor() {
        warn!("could not restore cursor: {error}");
    }
    info!("quit");
    Ok(())
}
