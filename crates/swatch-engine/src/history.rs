//! Palette history: the "previous palettes" drawer.
//!
//! Before each regeneration the current palette is pushed here. Entries are
//! kept most-recent-first, capped at a fixed capacity; pushing past the cap
//! evicts from the tail (the oldest entry). Any entry can be restored by
//! index.
//!
//! Entries are immutable snapshots. The only mutations are [`push`] and
//! [`clear`].
//!
//! [`push`]: PaletteHistory::push
//! [`clear`]: PaletteHistory::clear

use std::collections::{VecDeque, vec_deque};

use log::trace;

use crate::error::{EngineError, Result};
use crate::palette::Palette;

/// Number of palettes kept when the caller has no preference.
pub const DEFAULT_CAPACITY: usize = 10;

/// Bounded, most-recent-first palette history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteHistory {
    entries: VecDeque<Palette>,
    capacity: usize,
}

impl PaletteHistory {
    /// Create an empty history holding at most `capacity` palettes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a palette as the most recent entry, evicting the oldest
    /// entries beyond capacity.
    pub fn push(&mut self, palette: Palette) {
        self.entries.push_front(palette);
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_back() {
                trace!(
                    "history full ({}), evicted palette from {}",
                    self.capacity,
                    evicted.created_at()
                );
            }
        }
    }

    /// The palette at `index` (0 is the most recent).
    ///
    /// # Errors
    ///
    /// [`EngineError::IndexOutOfRange`] if `index >= len()`, for example an
    /// index captured before the history was cleared.
    pub fn restore(&self, index: usize) -> Result<Palette> {
        self.entries
            .get(index)
            .cloned()
            .ok_or(EngineError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The most recently pushed palette.
    #[must_use]
    pub fn latest(&self) -> Option<&Palette> {
        self.entries.front()
    }

    /// Entries from most recent to oldest.
    pub fn iter(&self) -> vec_deque::Iter<'_, Palette> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<'a> IntoIterator for &'a PaletteHistory {
    type Item = &'a Palette;
    type IntoIter = vec_deque::Iter<'a, Palette>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Default for PaletteHistory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
