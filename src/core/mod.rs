//! Core engine building blocks: RNG, configuration, scheduling, errors.
//!
//! Nothing here knows about cards or sessions; the rest of the crate is
//! built on top of these types.

pub mod config;
pub mod error;
pub mod rng;
pub mod schedule;
pub mod time;

pub use config::{Difficulty, EngineConfig};
pub use error::{EngineError, Result};
pub use rng::{shuffle, GameRng};
pub use schedule::{FiredTask, Scheduler, TaskHandle, TaskKind};
pub use time::format_time;
