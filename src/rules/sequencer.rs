//! Flip sequencing: the two-card reveal state machine.
//!
//! ## States
//!
//! ```text
//!            activate               activate (2nd)
//!   Idle ─────────────▶ OneRevealed ─────────────▶ Evaluating
//!    ▲                                              │      │
//!    │                 match                        │      │ mismatch
//!    ├──────────────────────────────────────────────┘      ▼
//!    │            penalty task fires                  PenaltyDelay
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! Input is locked in `Evaluating` and `PenaltyDelay`. `Evaluating` is
//! resolved synchronously inside [`FlipSequencer::activate`], so callers
//! only ever observe it through [`FlipSequencer::is_locked`] while a
//! penalty is pending.
//!
//! The sequencer does not schedule anything itself. On a mismatch the
//! caller schedules the penalty task and hands the handle back through
//! [`FlipSequencer::begin_penalty`]; only that handle can resolve it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::evaluator::evaluate;
use crate::cards::{Board, CardId};
use crate::core::TaskHandle;
use crate::session::SessionState;

/// Where the sequencer is in a two-card cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipPhase {
    /// No unresolved card is face-up.
    #[default]
    Idle,
    /// One card is face-up, waiting for the second.
    OneRevealed,
    /// Two cards are face-up and being compared.
    Evaluating,
    /// Two mismatched cards are face-up until the penalty task fires.
    PenaltyDelay,
}

impl FlipPhase {
    /// Check if activations are discarded in this phase.
    #[must_use]
    pub const fn is_locked(self) -> bool {
        matches!(self, FlipPhase::Evaluating | FlipPhase::PenaltyDelay)
    }
}

/// Why an activation was discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No session is running.
    NoSession,
    /// The session is already won.
    SessionWon,
    /// A pair is being evaluated or a penalty is pending.
    Locked,
    /// The card ID is not on the board.
    UnknownCard,
    /// The card is the one already selected.
    AlreadySelected,
    /// The card belongs to a found pair.
    AlreadyMatched,
    /// The card is already face-up.
    AlreadyRevealed,
}

/// Result of one activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a cycle turned face-up.
    Revealed(CardId),
    /// Second card completed a pair. Both cards are now matched.
    Matched { first: CardId, second: CardId },
    /// Second card did not match. Both stay face-up until the penalty.
    Mismatched { first: CardId, second: CardId },
}

impl FlipOutcome {
    /// Check if the activation was discarded.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlipOutcome::Ignored(_))
    }

    /// Check if the activation completed an attempt.
    #[must_use]
    pub fn completes_attempt(&self) -> bool {
        matches!(self, FlipOutcome::Matched { .. } | FlipOutcome::Mismatched { .. })
    }
}

/// Two-card reveal state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlipSequencer {
    phase: FlipPhase,
    /// First and (optionally) second selected card, in order.
    selected: SmallVec<[CardId; 2]>,
    penalty: Option<TaskHandle>,
}

impl FlipSequencer {
    /// Create an idle sequencer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FlipPhase {
        self.phase
    }

    /// First card of the current cycle.
    #[must_use]
    pub fn first_selected(&self) -> Option<CardId> {
        self.selected.first().copied()
    }

    /// Second card of the current cycle.
    #[must_use]
    pub fn second_selected(&self) -> Option<CardId> {
        self.selected.get(1).copied()
    }

    /// Check if activations are currently discarded.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Handle of the outstanding penalty task, if any.
    #[must_use]
    pub fn pending_penalty(&self) -> Option<TaskHandle> {
        self.penalty
    }

    /// Handle one card activation.
    ///
    /// Invalid activations (locked board, unknown, matched or face-up card)
    /// change nothing and return [`FlipOutcome::Ignored`]. A second-card
    /// activation always counts one attempt in `stats`; a match also
    /// counts a found pair.
    pub fn activate(&mut self, board: &mut Board, stats: &mut SessionState, card: CardId) -> FlipOutcome {
        if self.is_locked() {
            return FlipOutcome::Ignored(IgnoreReason::Locked);
        }
        if self.first_selected() == Some(card) {
            return FlipOutcome::Ignored(IgnoreReason::AlreadySelected);
        }
        let Some(instance) = board.get_mut(card) else {
            return FlipOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if instance.matched {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }
        if instance.revealed {
            return FlipOutcome::Ignored(IgnoreReason::AlreadyRevealed);
        }

        instance.reveal();
        self.selected.push(card);

        match self.phase {
            FlipPhase::Idle => {
                self.phase = FlipPhase::OneRevealed;
                FlipOutcome::Revealed(card)
            }
            FlipPhase::OneRevealed => {
                stats.record_attempt();
                self.phase = FlipPhase::Evaluating;
                self.resolve_pair(board, stats)
            }
            FlipPhase::Evaluating | FlipPhase::PenaltyDelay => {
                unreachable!("locked phases return before revealing")
            }
        }
    }

    fn resolve_pair(&mut self, board: &mut Board, stats: &mut SessionState) -> FlipOutcome {
        debug_assert_eq!(self.phase, FlipPhase::Evaluating);
        let (first, second) = (self.selected[0], self.selected[1]);

        let is_match = match (board.get(first), board.get(second)) {
            (Some(a), Some(b)) => evaluate(a, b),
            _ => false,
        };

        if is_match {
            for id in [first, second] {
                if let Some(card) = board.get_mut(id) {
                    card.mark_matched();
                }
            }
            stats.record_match();
            self.clear();
            FlipOutcome::Matched { first, second }
        } else {
            self.phase = FlipPhase::PenaltyDelay;
            FlipOutcome::Mismatched { first, second }
        }
    }

    /// Attach the scheduled penalty task to the pending mismatch.
    ///
    /// Panics if no mismatch is pending.
    pub fn begin_penalty(&mut self, handle: TaskHandle) {
        assert_eq!(
            self.phase,
            FlipPhase::PenaltyDelay,
            "Penalty scheduled without a pending mismatch"
        );
        self.penalty = Some(handle);
    }

    /// Resolve the pending mismatch when its penalty task fires.
    ///
    /// Hides both cards, unlocks and returns to `Idle`. A handle that does
    /// not belong to the pending penalty is stale and changes nothing.
    pub fn resolve_penalty(&mut self, board: &mut Board, handle: TaskHandle) -> Option<(CardId, CardId)> {
        if self.phase != FlipPhase::PenaltyDelay || self.penalty != Some(handle) {
            return None;
        }

        let (first, second) = (self.selected[0], self.selected[1]);
        for id in [first, second] {
            if let Some(card) = board.get_mut(id) {
                card.hide();
            }
        }
        self.clear();
        Some((first, second))
    }

    /// Drop all selections and return to `Idle`.
    ///
    /// Returns the pending penalty handle so the caller can cancel it.
    pub fn reset(&mut self) -> Option<TaskHandle> {
        let penalty = self.penalty;
        self.clear();
        penalty
    }

    fn clear(&mut self) {
        self.phase = FlipPhase::Idle;
        self.selected.clear();
        self.penalty = None;
    }
}
