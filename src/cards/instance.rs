//! Card instances - runtime card state.
//!
//! `CardInstance` is one physical card on the board. Two instances share
//! an identity per pair. Only `revealed` and `matched` change after the
//! board is built.

use serde::{Deserialize, Serialize};

use super::definition::CharacterDefinition;

/// Unique identifier for a card on the current board.
///
/// This is the card's position in board order, assigned once at build
/// time. It replaces any host-side element handle as the card's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Board index this ID refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this instance.
    pub id: CardId,

    /// Identity shared with exactly one other card.
    pub identity: String,

    /// Styling key for the card face.
    pub visual_key: String,

    /// Is the card face-up?
    pub revealed: bool,

    /// Has the card been paired? Matched cards stay face-up.
    pub matched: bool,
}

impl CardInstance {
    /// Create a face-down, unmatched card from a catalog entry.
    #[must_use]
    pub fn new(id: CardId, character: &CharacterDefinition) -> Self {
        Self {
            id,
            identity: character.identity.to_string(),
            visual_key: character.visual_key.to_string(),
            revealed: false,
            matched: false,
        }
    }

    /// Can this card be flipped by the player?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.revealed && !self.matched
    }

    /// Turn the card face-up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Turn the card face-down. Matched cards stay face-up.
    pub fn hide(&mut self) {
        if !self.matched {
            self.revealed = false;
        }
    }

    /// Lock the card as part of a found pair.
    pub fn mark_matched(&mut self) {
        self.revealed = true;
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CATALOG;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.index(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_new_is_face_down() {
        let card = CardInstance::new(CardId::new(0), &CATALOG[1]);

        assert_eq!(card.identity, "Zoro");
        assert_eq!(card.visual_key, "zoro");
        assert!(!card.revealed);
        assert!(!card.matched);
        assert!(card.is_selectable());
    }

    #[test]
    fn test_reveal_and_hide() {
        let mut card = CardInstance::new(CardId::new(0), &CATALOG[0]);

        card.reveal();
        assert!(card.revealed);
        assert!(!card.is_selectable());

        card.hide();
        assert!(!card.revealed);
        assert!(card.is_selectable());
    }

    #[test]
    fn test_matched_stays_revealed() {
        let mut card = CardInstance::new(CardId::new(0), &CATALOG[0]);

        card.mark_matched();
        card.hide();

        assert!(card.revealed);
        assert!(card.matched);
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_card_instance_serialization() {
        let mut card = CardInstance::new(CardId::new(3), &CATALOG[2]);
        card.reveal();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
