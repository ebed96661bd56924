//! Revealed buffer
//!
//! The partially uncovered word shown to the player. One slot per character of
//! the secret word; a slot is either hidden or holds the original character.

use std::fmt;

/// Symbol printed for a hidden slot
pub const PLACEHOLDER: char = '_';

/// Display buffer mixing placeholders and revealed characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedBuffer {
    slots: Vec<Option<char>>,
}

impl RevealedBuffer {
    /// Create a buffer of `len` hidden slots
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Reveal `ch` at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    pub fn reveal(&mut self, position: usize, ch: char) {
        self.slots[position] = Some(ch);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// Whether the slot at `position` is uncovered
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, position: usize) -> bool {
        self.slots.get(position).is_some_and(Option::is_some)
    }

    /// Number of uncovered slots
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// True when no placeholder is left
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Characters as displayed, placeholders included
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().map(|slot| slot.unwrap_or(PLACEHOLDER))
    }
}

impl fmt::Display for RevealedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_starts_hidden() {
        let buffer = RevealedBuffer::new(4);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.revealed_count(), 0);
        assert!(!buffer.is_complete());
        assert_eq!(buffer.to_string(), "____");
    }

    #[test]
    fn buffer_reveal() {
        let mut buffer = RevealedBuffer::new(4);
        buffer.reveal(2, 'a');
        assert_eq!(buffer.to_string(), "__a_");
        assert!(buffer.is_revealed(2));
        assert!(!buffer.is_revealed(0));
        assert!(!buffer.is_revealed(10));
        assert_eq!(buffer.revealed_count(), 1);
    }

    #[test]
    fn buffer_reveal_twice_is_idempotent() {
        let mut buffer = RevealedBuffer::new(2);
        buffer.reveal(0, 'o');
        buffer.reveal(0, 'o');
        assert_eq!(buffer.revealed_count(), 1);
    }

    #[test]
    fn buffer_complete() {
        let mut buffer = RevealedBuffer::new(2);
        buffer.reveal(0, 'o');
        buffer.reveal(1, 'k');
        assert!(buffer.is_complete());
        assert_eq!(buffer.to_string(), "ok");
    }
}
