//! Card system: catalog, instances and the board.
//!
//! ## Key Types
//!
//! - `CharacterDefinition`: Static identity/visual pairing from `CATALOG`
//! - `CardId`: Position of a card on the current board
//! - `CardInstance`: One physical card with its revealed/matched flags
//! - `Board`: The shuffled cards of one session

pub mod board;
pub mod definition;
pub mod instance;

pub use board::{build_board, Board};
pub use definition::{find_character, CharacterDefinition, CATALOG};
pub use instance::{CardId, CardInstance};
