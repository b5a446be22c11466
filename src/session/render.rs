//! Presentation boundary.
//!
//! The engine drives the host through [`Renderer`]. Every callback is
//! invoked synchronously right after the state change it reports. All
//! methods default to no-ops so a host only implements what it draws.
//!
//! [`RecordingRenderer`] captures callbacks as [`RenderEvent`]s, which is
//! what the tests use and what batch-oriented hosts can drain each frame.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardInstance};
use crate::core::{format_time, Difficulty};

/// Final numbers shown on the win screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinSummary {
    /// Level that was played.
    pub difficulty: Difficulty,
    /// Pairs on the board.
    pub total_pairs: u32,
    /// Seconds on the clock when the last pair was found.
    pub elapsed_seconds: u32,
    /// Attempts taken.
    pub attempts: u32,
}

impl WinSummary {
    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_time(self.elapsed_seconds)
    }
}

/// Host-side drawing callbacks.
pub trait Renderer {
    /// Redraw the whole board after it was built.
    fn render_board(&mut self, _difficulty: Difficulty, _cards: &[CardInstance]) {}

    /// A card turned face-up.
    fn render_card_revealed(&mut self, _card: CardId) {}

    /// A card turned face-down.
    fn render_card_hidden(&mut self, _card: CardId) {}

    /// A card became part of a found pair.
    fn render_card_matched(&mut self, _card: CardId) {}

    /// The attempt counter changed.
    fn render_attempts(&mut self, _count: u32) {}

    /// The clock changed. `formatted` is `MM:SS`.
    fn render_timer(&mut self, _formatted: &str) {}

    /// Every pair was found.
    fn render_win(&mut self, _summary: &WinSummary) {}

    /// Show the difficulty picker.
    fn render_difficulty_menu(&mut self) {}

    /// The session was torn down; go back to the picker.
    fn render_reset_to_menu(&mut self) {}
}

/// Renderer that draws nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// One recorded render callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEvent {
    Board {
        difficulty: Difficulty,
        cards: Vec<CardInstance>,
    },
    CardRevealed(CardId),
    CardHidden(CardId),
    CardMatched(CardId),
    Attempts(u32),
    Timer(String),
    Win(WinSummary),
    DifficultyMenu,
    ResetToMenu,
}

/// Renderer that records every callback in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the recorder empty.
    pub fn take_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&RenderEvent> {
        self.events.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render_board(&mut self, difficulty: Difficulty, cards: &[CardInstance]) {
        self.events.push(RenderEvent::Board {
            difficulty,
            cards: cards.to_vec(),
        });
    }

    fn render_card_revealed(&mut self, card: CardId) {
        self.events.push(RenderEvent::CardRevealed(card));
    }

    fn render_card_hidden(&mut self, card: CardId) {
        self.events.push(RenderEvent::CardHidden(card));
    }

    fn render_card_matched(&mut self, card: CardId) {
        self.events.push(RenderEvent::CardMatched(card));
    }

    fn render_attempts(&mut self, count: u32) {
        self.events.push(RenderEvent::Attempts(count));
    }

    fn render_timer(&mut self, formatted: &str) {
        self.events.push(RenderEvent::Timer(formatted.to_string()));
    }

    fn render_win(&mut self, summary: &WinSummary) {
        self.events.push(RenderEvent::Win(*summary));
    }

    fn render_difficulty_menu(&mut self) {
        self.events.push(RenderEvent::DifficultyMenu);
    }

    fn render_reset_to_menu(&mut self) {
        self.events.push(RenderEvent::ResetToMenu);
    }
}
