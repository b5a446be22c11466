//! Per-session counters.

use serde::{Deserialize, Serialize};

/// Score and clock counters for one session.
///
/// Invariant: `matched_pairs <= total_pairs`. The session is won exactly
/// when the two are equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Pairs on the board.
    pub total_pairs: u32,

    /// Pairs found so far.
    pub matched_pairs: u32,

    /// Completed two-card selections, matched or not.
    pub attempts: u32,

    /// Seconds counted by the timer.
    pub elapsed_seconds: u32,
}

impl SessionState {
    /// Fresh counters for a board of `total_pairs` pairs.
    #[must_use]
    pub fn new(total_pairs: u32) -> Self {
        Self {
            total_pairs,
            ..Self::default()
        }
    }

    /// Count one two-card selection.
    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    /// Count one found pair.
    pub fn record_match(&mut self) {
        assert!(
            self.matched_pairs < self.total_pairs,
            "Matched more pairs than the board holds"
        );
        self.matched_pairs += 1;
    }

    /// Count one elapsed second.
    pub fn tick(&mut self) {
        self.elapsed_seconds += 1;
    }

    /// Pairs still face-down.
    #[must_use]
    pub fn remaining_pairs(&self) -> u32 {
        self.total_pairs - self.matched_pairs
    }

    /// Check if every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }
}
