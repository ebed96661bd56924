//! Autoplay benchmark
//!
//! Lets a strategy play many sessions and collects win/loss statistics.

use crate::core::{Game, GameStatus, MAX_ERRORS};
use crate::solver::Strategy;
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchResult {
    pub games: usize,
    pub won: usize,
    pub total_errors: usize,
    /// Games per final error count, index 0..=`MAX_ERRORS`
    pub error_distribution: [usize; MAX_ERRORS + 1],
    pub duration: Duration,
}

impl BenchResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }

    #[must_use]
    pub fn average_errors(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_errors as f64 / self.games as f64
        }
    }
}

/// Play `game` with `strategy` until it ends
///
/// Stops early if the strategy runs out of ideas or proposes a guess that does
/// not consume a turn.
pub fn play_game<S: Strategy>(strategy: &S, words: &WordList, mut game: Game) -> Game {
    while !game.is_over() {
        let Some(guess) = strategy.next_guess(&game, words.words()) else {
            break;
        };
        if !game.guess(&guess).consumes_turn() {
            tracing::warn!(%guess, "strategy proposed a guess that does not consume a turn");
            break;
        }
    }
    game
}

/// Play `count` sessions with secret words drawn from `seed`
///
/// Sessions are set up sequentially so a given seed always produces the same
/// games, then played in parallel.
pub fn run_benchmark<S: Strategy>(
    strategy: &S,
    words: &WordList,
    count: usize,
    seed: u64,
    show_progress: bool,
) -> BenchResult {
    let start = Instant::now();
    let mut rng = StdRng::seed_from_u64(seed);

    let games: Vec<Game> = (0..count)
        .map(|_| Game::new(words.choose(&mut rng).clone(), &mut rng))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let finished: Vec<Game> = games
        .into_par_iter()
        .map(|game| {
            let game = play_game(strategy, words, game);
            pb.inc(1);
            game
        })
        .collect();

    pb.finish_and_clear();

    let mut result = BenchResult {
        games: finished.len(),
        won: 0,
        total_errors: 0,
        error_distribution: [0; MAX_ERRORS + 1],
        duration: Duration::ZERO,
    };

    for game in &finished {
        if game.status() == GameStatus::Won {
            result.won += 1;
        }
        result.total_errors += game.errors();
        result.error_distribution[game.errors().min(MAX_ERRORS)] += 1;
    }

    result.duration = start.elapsed();
    tracing::info!(
        games = result.games,
        won = result.won,
        elapsed_ms = result.duration.as_millis() as u64,
        "benchmark finished"
    );
    result
}
