use std::time::Duration;

use crate::library::Track;

/// One history record: the track that was left and how long it had played.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub track: Track,
    pub elapsed: Duration,
}

/// Where the engine is in its play order, plus the append-only history.
///
/// `slot` indexes the play order; `current` is a library position. They agree
/// (`order[slot] == current`) except while a user jump is being played.
#[derive(Debug, Clone, Default)]
pub struct PlaybackCursor {
    slot: usize,
    current: usize,
    history: Vec<HistoryEntry>,
}

impl PlaybackCursor {
    pub(crate) fn new(current: usize) -> Self {
        Self {
            slot: 0,
            current,
            history: Vec::new(),
        }
    }

    /// Position in the play order.
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Library position of the track being played.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub(crate) fn record(&mut self, track: Track, elapsed: Duration) {
        self.history.push(HistoryEntry { track, elapsed });
    }

    pub(crate) fn move_to(&mut self, slot: usize, current: usize) {
        self.slot = slot;
        self.current = current;
    }

    pub(crate) fn detour_to(&mut self, current: usize) {
        self.current = current;
    }
}
