//! Engine error types.

use thiserror::Error;

/// Recoverable errors surfaced by the engine.
///
/// Invalid card activations are not errors; they are reported as
/// [`FlipOutcome::Ignored`](crate::rules::FlipOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A difficulty command name that is not `easy`, `medium` or `hard`.
    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    /// An engine configuration value is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig {
        /// Offending field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
