//! Hangman - CLI
//!
//! Terminal hangman with a line-oriented console mode, a full-screen TUI mode
//! and an autoplay benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{run_benchmark, run_console},
    config::{SessionConfig, WordSource},
    core::Game,
    drawings::DrawingSet,
    output::print_bench_result,
    solver::StrategyType,
    wordlists::WordList,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word file (default: a .txt file from the current directory, else the built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Drawing file with blank-line separated stages (default: built-in gallows)
    #[arg(short = 'd', long, global = true)]
    drawings: Option<PathBuf>,

    /// Seed for the random word and letter choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Console mode (default)
    Play,

    /// Full-screen terminal interface
    Tui,

    /// Let the computer play many games and report statistics
    Bench {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,

        /// Strategy: frequency (default) or alphabet
        #[arg(short, long, default_value = "frequency")]
        strategy: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let word_source = match cli.words {
        Some(path) => WordSource::Path(path),
        None => WordSource::Discover(
            std::env::current_dir().context("cannot determine the current directory")?,
        ),
    };
    let config = SessionConfig {
        word_source,
        drawings: cli.drawings,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Tui => run_tui_command(&config),
        Commands::Bench { count, strategy } => run_bench_command(&config, count, &strategy),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn load_session_data(config: &SessionConfig) -> Result<(WordList, DrawingSet)> {
    let words = config
        .load_words(&mut io::stdin().lock(), &mut io::stdout().lock())
        .context("cannot load the word list")?;
    let drawings = config
        .load_drawings()
        .context("cannot load the drawings")?;
    Ok((words, drawings))
}

fn run_play_command(config: &SessionConfig) -> Result<()> {
    let (words, drawings) = load_session_data(config)?;

    let mut rng = config.rng();
    let mut game = Game::new(words.choose(&mut rng).clone(), &mut rng);
    tracing::debug!(
        origin = %words.origin().display(),
        letters = game.secret().len(),
        "session started"
    );

    run_console(
        &mut game,
        &drawings,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}

fn run_tui_command(config: &SessionConfig) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let (words, drawings) = load_session_data(config)?;
    let app = App::new(&words, &drawings, config.rng());
    run_tui(app)
}

fn run_bench_command(config: &SessionConfig, count: usize, strategy_name: &str) -> Result<()> {
    let (words, _) = load_session_data(config)?;
    let seed = config.seed.unwrap_or_else(rand::random);

    println!(
        "Playing {count} games with the {strategy_name} strategy ({} words, seed {seed})...",
        words.len()
    );

    let strategy = StrategyType::from_name(strategy_name);
    let result = run_benchmark(&strategy, &words, count, seed, true);
    print_bench_result(&result);
    Ok(())
}
