//! High-score table - the top ten scores in descending order
//!
//! The table itself is pure data. Reading and writing the score file is the
//! application's job.

use arrayvec::ArrayVec;

use crate::types::HIGH_SCORE_CAPACITY;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScores {
    entries: ArrayVec<u32, HIGH_SCORE_CAPACITY>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from any sequence of scores.
    ///
    /// The input need not be sorted; the best ten are kept.
    pub fn from_scores(scores: impl IntoIterator<Item = u32>) -> Self {
        let mut table = Self::new();
        for score in scores {
            table.insert(score);
        }
        table
    }

    /// Would `score` enter the table?
    ///
    /// Ties with the lowest entry qualify.
    pub fn qualifies(&self, score: u32) -> bool {
        match self.entries.last() {
            Some(&lowest) if self.entries.is_full() => score >= lowest,
            _ => true,
        }
    }

    /// Insert `score` if it qualifies. Returns true when the table changed.
    ///
    /// Equal scores keep insertion order: the newcomer goes after them.
    pub fn insert(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        if self.entries.is_full() {
            self.entries.pop();
        }
        let pos = self
            .entries
            .iter()
            .position(|&existing| existing < score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, score);
        true
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<u32> {
        self.entries.first().copied()
    }
}
