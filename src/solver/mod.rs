//! Automatic players
//!
//! Letter-picking strategies used by the autoplay benchmark.

pub mod frequency;
pub mod strategy;

pub use frequency::{FrequencyStrategy, candidates};
pub use strategy::{AlphabetStrategy, Strategy, StrategyType};
