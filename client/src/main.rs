mod config;
mod input;
mod runner;

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::logger::{self, LogLevel};
use common::log;
use common::tictactoe::{FirstPlayerMode, TicTacToeGameState, TicTacToeSettings};

use config::get_config_manager;
use runner::{run_game, GameEnd};

/// Boards above this size make the full-depth search noticeably slow.
const CLASSIC_CELL_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::Human => FirstPlayerMode::Human,
            FirstPlayerArg::Computer => FirstPlayerMode::Computer,
            FirstPlayerArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    columns: Option<usize>,
    /// Marks in a row needed to win
    #[arg(long)]
    win_length: Option<usize>,
    /// Who plays X and moves first
    #[arg(long, value_enum)]
    first_player: Option<FirstPlayerArg>,
    #[arg(long)]
    max_depth: Option<usize>,
    /// Config file; defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
    #[arg(long)]
    use_log_prefix: bool,
    #[arg(long)]
    verbose: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut TicTacToeSettings) {
        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
        if let Some(win_length) = self.win_length {
            settings.win_length = win_length;
        }
        if let Some(first_player) = self.first_player {
            settings.first_player = first_player.into();
        }
        if let Some(max_depth) = self.max_depth {
            settings.max_search_depth = max_depth;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;
    args.apply_overrides(&mut config.tictactoe);
    config.log.use_prefix |= args.use_log_prefix;
    config.log.debug |= args.verbose;
    config.validate()?;

    let prefix = config.log.use_prefix.then(|| "Client".to_string());
    let level = if config.log.debug { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!(
            "Saved settings to {}",
            config_manager.content_provider().path().display()
        );
    }

    let settings = &config.tictactoe;
    log!(
        "Starting {}x{} game, {} in a row wins",
        settings.rows,
        settings.columns,
        settings.win_length
    );
    if settings.cell_count() > CLASSIC_CELL_COUNT {
        log!(
            "Board has {} cells; the computer searches every continuation and may take very long",
            settings.cell_count()
        );
    }

    let mut state = TicTacToeGameState::new(settings, &mut rand::rng())?;
    let engine = settings.create_engine();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = run_game(&mut state, &engine, &mut stdin.lock(), &mut stdout.lock())?;

    match end {
        GameEnd::Finished(outcome) => {
            let winner = match outcome.winner() {
                Some(mark) if mark == state.human_mark() => "human",
                Some(_) => "computer",
                None => "no one",
            };
            log!(
                "Game over after {} moves: {} ({} won)",
                state.move_count(),
                outcome,
                winner
            );
        }
        GameEnd::Quit => log!("Game abandoned after {} moves", state.move_count()),
    }

    Ok(())
}
