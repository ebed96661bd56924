//! Built-in gallows
//!
//! Seven stages, one per error count from 0 to 6.

/// Stages used when no drawing file is available
pub const STAGES: [&str; 7] = [
    r"  ______
  |    |
  |
  |
  |
  |___",
    r"  ______
  |    |
  |    O
  |
  |
  |___",
    r"  ______
  |    |
  |    O
  |    |
  |
  |___",
    r"  ______
  |    |
  |    O
  |   /|
  |
  |___",
    r"  ______
  |    |
  |    O
  |   /|\
  |
  |___",
    r"  ______
  |    |
  |    O
  |   /|\
  |   /
  |___",
    r"  ______
  |    |
  |    O
  |   /|\
  |   / \
  |___",
];
