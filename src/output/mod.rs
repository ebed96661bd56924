//! Terminal output formatting
//!
//! Display utilities for the console game and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_bench_result, render_board, render_outcome, render_result};
