//! Display functions for the console game and command results

use super::formatters::{format_used_letters, lives_bar, outcome_message};
use crate::commands::BenchResult;
use crate::core::{Game, GameStatus, GuessOutcome, MAX_ERRORS};
use crate::drawings::DrawingSet;
use colored::Colorize;
use std::io::{self, Write};

/// Draw the gallows, the revealed word and the letters tried so far
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_board<W: Write>(out: &mut W, game: &Game, drawings: &DrawingSet) -> io::Result<()> {
    writeln!(out, "{}", drawings.stage(game.errors()))?;
    writeln!(out)?;
    writeln!(out, "Word to guess: {}", game.revealed())?;
    writeln!(out, "Used letters: {}", format_used_letters(game))?;
    writeln!(
        out,
        "Remaining errors: {} [{}]",
        game.remaining_errors(),
        lives_bar(game)
    )
}

/// Print the message for a guess outcome
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_outcome<W: Write>(out: &mut W, outcome: GuessOutcome) -> io::Result<()> {
    let message = outcome_message(outcome);
    if message.is_empty() {
        return Ok(());
    }

    let styled = match outcome {
        GuessOutcome::CorrectLetter => message.green(),
        GuessOutcome::WrongLetter | GuessOutcome::WrongWord => message.red(),
        _ => message.yellow(),
    };
    writeln!(out, "{styled}")
}

/// Print the victory or defeat banner
///
/// Prints nothing while the game is still running.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn render_result<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    match game.status() {
        GameStatus::Won => writeln!(
            out,
            "{}",
            format!("Congratulations! You found the word: {}", game.secret())
                .green()
                .bold()
        ),
        GameStatus::Lost => writeln!(
            out,
            "{}",
            format!("You lost! The word was: {}", game.secret())
                .red()
                .bold()
        ),
        GameStatus::Playing => Ok(()),
    }
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTOPLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {}",
        format!("{} ({:.1}%)", result.won, result.win_rate() * 100.0)
            .green()
            .bold()
    );
    println!(
        "   Lost:             {}",
        format!("{}", result.games - result.won).red()
    );
    println!(
        "   Average errors:   {}",
        format!("{:.2}", result.average_errors()).bright_yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Errors per game:".bright_cyan().bold());
    for (errors, &count) in result.error_distribution.iter().enumerate() {
        let pct = if result.games == 0 {
            0.0
        } else {
            (count as f64 / result.games as f64) * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        let label = if errors == MAX_ERRORS {
            format!("{errors} (lost)")
        } else {
            errors.to_string()
        };
        println!("   {label:>8}: {bar} {count:5} ({pct:5.1}%)");
    }
}
