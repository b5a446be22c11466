//! Character definitions - the static catalog of card faces.
//!
//! A `CharacterDefinition` pairs an identity (what is compared when two
//! cards are flipped) with a visual key (what the host uses to pick the
//! card face artwork). The catalog is fixed and ordered; boards always
//! take a prefix of it.

use serde::Serialize;

/// One unique character/image pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CharacterDefinition {
    /// Identity compared when evaluating a pair.
    pub identity: &'static str,

    /// Styling key for the card face (host-defined meaning).
    pub visual_key: &'static str,
}

impl CharacterDefinition {
    /// Create a new definition.
    #[must_use]
    pub const fn new(identity: &'static str, visual_key: &'static str) -> Self {
        Self { identity, visual_key }
    }
}

/// The fixed character catalog, in selection order.
pub const CATALOG: [CharacterDefinition; 10] = [
    CharacterDefinition::new("Luffy", "luffy"),
    CharacterDefinition::new("Zoro", "zoro"),
    CharacterDefinition::new("Nami", "nami"),
    CharacterDefinition::new("Usopp", "usopp"),
    CharacterDefinition::new("Sanji", "sanji"),
    CharacterDefinition::new("Chopper", "chopper"),
    CharacterDefinition::new("Robin", "robin"),
    CharacterDefinition::new("Franky", "franky"),
    CharacterDefinition::new("Brook", "brook"),
    CharacterDefinition::new("Jimbe", "jimbe"),
];

/// Look up a catalog entry by identity.
#[must_use]
pub fn find_character(identity: &str) -> Option<&'static CharacterDefinition> {
    CATALOG.iter().find(|c| c.identity == identity)
}
