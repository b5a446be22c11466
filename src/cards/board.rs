//! Board building and card lookup.
//!
//! A board is built once per session:
//!
//! 1. Take the first `pair_count` entries of [`CATALOG`]
//! 2. Duplicate them so every identity appears twice
//! 3. Shuffle
//! 4. Materialize face-down [`CardInstance`]s, numbered in board order
//!
//! Card order never changes afterwards.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::definition::{CharacterDefinition, CATALOG};
use super::instance::{CardId, CardInstance};
use crate::core::{Difficulty, GameRng};

/// Build a shuffled board for a difficulty level.
///
/// Panics if the level asks for more pairs than the catalog holds. The
/// closed [`Difficulty`] enum makes that unreachable.
#[must_use]
pub fn build_board(level: Difficulty, rng: &mut GameRng) -> Vec<CardInstance> {
    let pair_count = level.pair_count();
    assert!(
        pair_count <= CATALOG.len(),
        "Difficulty {level} needs {pair_count} pairs but catalog holds {}",
        CATALOG.len()
    );

    let selected = &CATALOG[..pair_count];
    let mut deck: Vec<&CharacterDefinition> = selected.iter().chain(selected.iter()).collect();
    rng.shuffle(&mut deck);

    deck.into_iter()
        .enumerate()
        .map(|(i, character)| CardInstance::new(CardId::new(i as u32), character))
        .collect()
}

/// The cards of one session, in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    difficulty: Difficulty,
    cards: Vec<CardInstance>,
}

impl Board {
    /// Build and shuffle a new board.
    #[must_use]
    pub fn new(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        Self {
            difficulty,
            cards: build_board(difficulty, rng),
        }
    }

    /// Difficulty this board was built for.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// All cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[CardInstance] {
        &self.cards
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardInstance> {
        self.cards.get(id.index())
    }

    /// Get a mutable card.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut CardInstance> {
        self.cards.get_mut(id.index())
    }

    /// IDs of every card carrying an identity.
    #[must_use]
    pub fn positions_of(&self, identity: &str) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| c.identity == identity)
            .map(|c| c.id)
            .collect()
    }

    /// The other card sharing this card's identity.
    #[must_use]
    pub fn partner_of(&self, id: CardId) -> Option<CardId> {
        let identity = &self.get(id)?.identity;
        self.cards
            .iter()
            .find(|c| c.id != id && &c.identity == identity)
            .map(|c| c.id)
    }

    /// Count cards per identity.
    #[must_use]
    pub fn identity_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.identity.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Check that every identity appears exactly twice.
    #[must_use]
    pub fn has_exact_pairs(&self) -> bool {
        self.cards.len() % 2 == 0 && self.identity_counts().values().all(|&n| n == 2)
    }

    /// Number of matched cards.
    #[must_use]
    pub fn matched_cards(&self) -> usize {
        self.cards.iter().filter(|c| c.matched).count()
    }

    /// Check if every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}
