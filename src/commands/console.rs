//! Console game loop
//!
//! Line-oriented play: prompt, evaluate, redraw, until the word is found or the
//! gallows is complete.

use crate::core::{Game, GameStatus};
use crate::drawings::DrawingSet;
use crate::error::Result;
use crate::output::{render_board, render_outcome, render_result};
use std::io::{self, BufRead, Write};

/// Moves the cursor home and clears the screen
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Prompt printed before every guess
pub const PROMPT: &str = "Enter a letter or the whole word: ";

/// Read one line from `input`, replacing invalid UTF-8 with U+FFFD
///
/// Returns `None` at end of input. `buf` is reused between calls.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn read_line_lossy<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Play `game` to the end on the given console handles
///
/// Returns the final status. `GameStatus::Playing` means the input ended before
/// the game did.
///
/// # Errors
///
/// Returns `HangmanError::Io` if the console cannot be read or written.
///
/// # Examples
/// ```
/// use hangman::commands::run_console;
/// use hangman::core::{Game, GameStatus, SecretWord};
/// use hangman::drawings::DrawingSet;
/// use std::io::Cursor;
///
/// let mut game = Game::with_revealed(SecretWord::new("chat").unwrap(), &[2]);
/// let mut input = Cursor::new(b"c\nchat\n".to_vec());
/// let mut output: Vec<u8> = Vec::new();
///
/// let status = run_console(&mut game, &DrawingSet::builtin(), &mut input, &mut output).unwrap();
/// assert_eq!(status, GameStatus::Won);
/// ```
pub fn run_console<R: BufRead, W: Write>(
    game: &mut Game,
    drawings: &DrawingSet,
    input: &mut R,
    output: &mut W,
) -> Result<GameStatus> {
    write!(output, "{CLEAR_SCREEN}")?;
    render_board(output, game, drawings)?;

    let mut buf = Vec::new();
    while !game.is_over() {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = read_line_lossy(input, &mut buf)? else {
            writeln!(output)?;
            tracing::info!("input closed before the end of the game");
            return Ok(game.status());
        };

        let outcome = game.guess(&line);
        tracing::debug!(?outcome, errors = game.errors(), "guess evaluated");

        if outcome.consumes_turn() {
            write!(output, "{CLEAR_SCREEN}")?;
            render_outcome(output, outcome)?;
            render_board(output, game, drawings)?;
        } else {
            render_outcome(output, outcome)?;
        }
    }

    write!(output, "{CLEAR_SCREEN}")?;
    render_board(output, game, drawings)?;
    render_result(output, game)?;
    output.flush()?;

    tracing::info!(status = ?game.status(), errors = game.errors(), "game over");
    Ok(game.status())
}
