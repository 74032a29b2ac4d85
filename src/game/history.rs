use std::collections::HashMap;

use crate::board::Move;

/// One applied move and the key of the position it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub mv: Move,
    pub key: u64,
}

/// Append-only record of the moves played in a game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<LogEntry>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        MoveLog::default()
    }

    pub(crate) fn push(&mut self, mv: Move, key: u64) {
        self.entries.push(LogEntry { mv, key });
    }

    /// A new log holding the first `len` entries.
    pub(crate) fn truncated(&self, len: usize) -> MoveLog {
        MoveLog {
            entries: self.entries.iter().take(len).copied().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Moves in the order they were played.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.entries.iter().map(|e| e.mv)
    }
}

/// Occurrence count per position key.
#[derive(Clone, Debug, Default)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable::default()
    }

    pub(crate) fn get(&self, key: u64) -> u32 {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    fn set(&mut self, key: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&key);
        } else {
            self.counts.insert(key, count);
        }
    }

    pub(crate) fn increment(&mut self, key: u64) -> u32 {
        let next = self.get(key).saturating_add(1);
        self.set(key, next);
        next
    }

    pub(crate) fn decrement(&mut self, key: u64) -> u32 {
        let next = self.get(key).saturating_sub(1);
        self.set(key, next);
        next
    }
}
