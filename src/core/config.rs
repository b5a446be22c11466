//! Engine configuration types.
//!
//! - `Difficulty`: The closed set of board sizes a player can pick
//! - `EngineConfig`: Timing constants and the optional RNG seed
//!
//! Both are serializable so a host can ship them as JSON.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};
use crate::cards::CATALOG;

/// Difficulty level. Each level maps to a fixed number of pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 4 pairs, 8 cards.
    #[default]
    Easy,
    /// 6 pairs, 12 cards.
    Medium,
    /// 9 pairs, 18 cards.
    Hard,
}

impl Difficulty {
    /// Every level, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of distinct pairs on the board.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 6,
            Difficulty::Hard => 9,
        }
    }

    /// Number of cards on the board (two per pair).
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.pair_count() * 2
    }

    /// Board layout as `(columns, rows)`.
    #[must_use]
    pub const fn grid_dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (4, 2),
            Difficulty::Medium => (4, 3),
            Difficulty::Hard => (6, 3),
        }
    }

    /// Command name used by the difficulty menu.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long a mismatched pair stays face-up before hiding again.
    pub penalty_delay_ms: u64,

    /// Period of the elapsed-time tick. Each tick adds one second.
    pub tick_interval_ms: u64,

    /// Board shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            penalty_delay_ms: 1500,
            tick_interval_ms: 1000,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Set the mismatch penalty delay.
    #[must_use]
    pub fn with_penalty_delay_ms(mut self, ms: u64) -> Self {
        self.penalty_delay_ms = ms;
        self
    }

    /// Set the timer tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Fix the shuffle seed for reproducible boards.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mismatch penalty delay as a `Duration`.
    #[must_use]
    pub fn penalty_delay(&self) -> Duration {
        Duration::from_millis(self.penalty_delay_ms)
    }

    /// Tick interval as a `Duration`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that every value is usable.
    ///
    /// Also confirms the catalog covers the largest difficulty.
    pub fn validate(&self) -> Result<()> {
        if self.penalty_delay_ms == 0 {
            return Err(EngineError::InvalidConfig {
                field: "penalty_delay_ms",
                reason: "must be greater than zero".into(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(EngineError::InvalidConfig {
                field: "tick_interval_ms",
                reason: "must be greater than zero".into(),
            });
        }
        let largest = Difficulty::ALL.iter().map(|d| d.pair_count()).max().unwrap_or(0);
        if largest > CATALOG.len() {
            return Err(EngineError::InvalidConfig {
                field: "difficulty",
                reason: format!("{largest} pairs requested but catalog holds {}", CATALOG.len()),
            });
        }
        Ok(())
    }
}
