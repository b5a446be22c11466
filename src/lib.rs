//! # pairs-engine
//!
//! Game engine for a memory-matching "pairs" game: pick a difficulty, get a
//! shuffled board of face-down cards, flip two at a time until every pair
//! is found.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine never draws. It reports every
//!    visible change through the `Renderer` trait and takes input as
//!    `CardId` activations.
//!
//! 2. **Explicit Time**: Delays and ticks are tasks on a virtual clock
//!    that the host advances. Every task has a cancellation handle, so a
//!    reset can never leave a stale callback behind.
//!
//! 3. **Owned Sessions**: All state lives in a `SessionController`. Any
//!    number of controllers can run side by side.
//!
//! ## Modules
//!
//! - `core`: RNG and shuffle, configuration, scheduling, time formatting, errors
//! - `cards`: Character catalog, card instances, board building
//! - `rules`: Pair evaluation and the flip sequencer state machine
//! - `session`: Counters, timer, renderer boundary and the controller

pub mod cards;
pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    format_time, shuffle, Difficulty, EngineConfig, EngineError, GameRng, Result, Scheduler,
    TaskHandle, TaskKind,
};

pub use crate::cards::{build_board, Board, CardId, CardInstance, CharacterDefinition, CATALOG};

pub use crate::rules::{evaluate, FlipOutcome, FlipPhase, FlipSequencer, IgnoreReason};

pub use crate::session::{
    NullRenderer, RecordingRenderer, RenderEvent, Renderer, SessionController, SessionPhase,
    SessionSnapshot, SessionState, Timer, WinSummary,
};
