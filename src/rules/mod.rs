//! Game rules: pair evaluation and flip sequencing.
//!
//! The rules never touch the clock or the renderer. They mutate a
//! [`Board`](crate::cards::Board) and a
//! [`SessionState`](crate::session::SessionState) and report what happened;
//! the session controller turns outcomes into scheduled tasks and render
//! calls.

pub mod evaluator;
pub mod sequencer;

pub use evaluator::evaluate;
pub use sequencer::{FlipOutcome, FlipPhase, FlipSequencer, IgnoreReason};
