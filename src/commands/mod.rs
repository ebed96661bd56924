//! Command implementations

pub mod bench;
pub mod console;

pub use bench::{BenchResult, play_game, run_benchmark};
pub use console::{CLEAR_SCREEN, PROMPT, run_console};
