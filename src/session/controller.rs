//! Session controller: owns one game from difficulty pick to win or reset.
//!
//! The controller composes the board, counters, flip sequencer, timer and
//! scheduler, and reports every visible change to its [`Renderer`].
//!
//! ## Event sources
//!
//! - [`SessionController::start_session`] / [`SessionController::reset_session`]:
//!   menu commands
//! - [`SessionController::activate`]: one card selection
//! - [`SessionController::advance`]: the host's clock; fires timer ticks
//!   and mismatch penalties that came due
//!
//! All three run to completion before returning. Starting or resetting a
//! session cancels every outstanding task, so nothing from an old board
//! can fire against a new one.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use pairs_engine::core::{Difficulty, EngineConfig};
//! use pairs_engine::rules::FlipOutcome;
//! use pairs_engine::session::{RecordingRenderer, SessionController, SessionPhase};
//!
//! let config = EngineConfig::default().with_seed(42);
//! let mut game = SessionController::new(config, RecordingRenderer::new()).unwrap();
//! game.start_session(Difficulty::Easy);
//!
//! // Flip every pair using the board's own layout.
//! while let Some(first) = game.board().unwrap().cards().iter().find(|c| !c.matched).map(|c| c.id) {
//!     let second = game.board().unwrap().partner_of(first).unwrap();
//!     game.activate(first);
//!     assert!(matches!(game.activate(second), FlipOutcome::Matched { .. }));
//!     game.advance(Duration::from_secs(1));
//! }
//!
//! assert_eq!(game.phase(), SessionPhase::Won);
//! assert_eq!(game.stats().unwrap().attempts, 4);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace};

use super::render::{Renderer, WinSummary};
use super::state::SessionState;
use super::timer::Timer;
use crate::cards::{Board, CardId, CardInstance};
use crate::core::{format_time, Difficulty, EngineConfig, FiredTask, GameRng, Result, Scheduler, TaskKind};
use crate::rules::{FlipOutcome, FlipPhase, FlipSequencer, IgnoreReason};

/// Lifecycle of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No board; waiting for a difficulty pick.
    #[default]
    Menu,
    /// A board is in play.
    Playing,
    /// Every pair was found. Frozen until reset or a new session.
    Won,
}

/// Everything a host needs to mirror the engine in one read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Controller lifecycle phase.
    pub phase: SessionPhase,
    /// Level of the current board.
    pub difficulty: Option<Difficulty>,
    /// Cards in display order. Empty in the menu.
    pub cards: Vec<CardInstance>,
    /// Counters of the current board.
    pub stats: Option<SessionState>,
    /// Flip sequencer phase.
    pub flip_phase: FlipPhase,
    /// Whether activations are currently discarded.
    pub input_locked: bool,
    /// Elapsed time as `MM:SS`.
    pub time: String,
}

/// Board and counters of the running session. Replaced wholesale on start.
#[derive(Clone, Debug)]
struct ActiveSession {
    board: Board,
    stats: SessionState,
}

/// Orchestrates one session at a time for a single player.
pub struct SessionController<R: Renderer> {
    config: EngineConfig,
    rng: GameRng,
    scheduler: Scheduler,
    timer: Timer,
    sequencer: FlipSequencer,
    active: Option<ActiveSession>,
    phase: SessionPhase,
    renderer: R,
}

impl<R: Renderer> SessionController<R> {
    /// Create a controller sitting at the difficulty menu.
    ///
    /// Fails if `config` does not validate.
    pub fn new(config: EngineConfig, mut renderer: R) -> Result<Self> {
        config.validate()?;
        let rng = GameRng::from_seed_or_entropy(config.seed);
        debug!(seed = rng.seed(), "Creating session controller");

        renderer.render_difficulty_menu();

        Ok(Self {
            timer: Timer::new(config.tick_interval()),
            config,
            rng,
            scheduler: Scheduler::new(),
            sequencer: FlipSequencer::new(),
            active: None,
            phase: SessionPhase::Menu,
            renderer,
        })
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Check if the current session is won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == SessionPhase::Won
    }

    /// Level of the current board.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.active.as_ref().map(|s| s.board.difficulty())
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.active.as_ref().map(|s| &s.board)
    }

    /// Counters of the current board.
    #[must_use]
    pub fn stats(&self) -> Option<&SessionState> {
        self.active.as_ref().map(|s| &s.stats)
    }

    /// Flip sequencer.
    #[must_use]
    pub fn sequencer(&self) -> &FlipSequencer {
        &self.sequencer
    }

    /// Check if the timer is ticking.
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Number of outstanding scheduled tasks.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Virtual time since the controller was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer (e.g. to drain recorded events).
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consume the controller, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Win-screen numbers, once the session is won.
    #[must_use]
    pub fn win_summary(&self) -> Option<WinSummary> {
        if !self.is_won() {
            return None;
        }
        self.active.as_ref().map(|s| WinSummary {
            difficulty: s.board.difficulty(),
            total_pairs: s.stats.total_pairs,
            elapsed_seconds: s.stats.elapsed_seconds,
            attempts: s.stats.attempts,
        })
    }

    /// Capture the full visible state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let stats = self.stats().copied();
        SessionSnapshot {
            phase: self.phase,
            difficulty: self.difficulty(),
            cards: self.board().map(|b| b.cards().to_vec()).unwrap_or_default(),
            stats,
            flip_phase: self.sequencer.phase(),
            input_locked: self.sequencer.is_locked(),
            time: format_time(stats.map_or(0, |s| s.elapsed_seconds)),
        }
    }

    // === Commands ===

    /// Start a fresh session, discarding any previous one.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, level: Difficulty) {
        self.cancel_outstanding();

        let board = Board::new(level, &mut self.rng);
        let stats = SessionState::new(level.pair_count() as u32);
        self.timer.start(&mut self.scheduler);
        self.phase = SessionPhase::Playing;

        info!(%level, cards = board.len(), "Session started");

        self.renderer.render_board(level, board.cards());
        self.renderer.render_attempts(stats.attempts);
        self.renderer.render_timer(&format_time(stats.elapsed_seconds));

        self.active = Some(ActiveSession { board, stats });
    }

    /// Tear down the session and return to the difficulty menu.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) {
        self.cancel_outstanding();
        self.active = None;
        self.phase = SessionPhase::Menu;

        info!("Session reset");
        self.renderer.render_reset_to_menu();
    }

    /// Handle one card selection.
    #[instrument(level = "debug", skip(self))]
    pub fn activate(&mut self, card: CardId) -> FlipOutcome {
        let outcome = match (self.phase, self.active.as_mut()) {
            (SessionPhase::Won, _) => FlipOutcome::Ignored(IgnoreReason::SessionWon),
            (SessionPhase::Playing, Some(session)) => {
                self.sequencer.activate(&mut session.board, &mut session.stats, card)
            }
            _ => FlipOutcome::Ignored(IgnoreReason::NoSession),
        };

        match outcome {
            FlipOutcome::Ignored(reason) => {
                trace!(%card, ?reason, "Activation ignored");
            }
            FlipOutcome::Revealed(id) => {
                self.renderer.render_card_revealed(id);
            }
            FlipOutcome::Matched { first, second } => {
                self.renderer.render_card_revealed(second);
                self.render_attempts();
                self.renderer.render_card_matched(first);
                self.renderer.render_card_matched(second);
                debug!(%first, %second, "Pair matched");

                if self.stats().is_some_and(SessionState::is_won) {
                    self.finish();
                }
            }
            FlipOutcome::Mismatched { first, second } => {
                self.renderer.render_card_revealed(second);
                self.render_attempts();

                let handle = self
                    .scheduler
                    .schedule_once(self.config.penalty_delay(), TaskKind::PenaltyReset);
                self.sequencer.begin_penalty(handle);
                debug!(%first, %second, %handle, "Pair mismatched");
            }
        }

        outcome
    }

    /// Advance the clock, firing every task that comes due.
    ///
    /// Tasks fire in due order; a task cancelled by an earlier one in the
    /// same call does not fire.
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.dispatch(task);
        }
        self.scheduler.settle(until);
    }

    // === Internals ===

    fn dispatch(&mut self, task: FiredTask) {
        match task.kind {
            TaskKind::TimerTick => {
                if !self.timer.accepts(task.handle) || self.phase != SessionPhase::Playing {
                    trace!(handle = %task.handle, "Stale timer tick");
                    return;
                }
                let Some(session) = self.active.as_mut() else {
                    return;
                };
                session.stats.tick();
                let elapsed = session.stats.elapsed_seconds;
                trace!(elapsed, "Tick");
                self.renderer.render_timer(&format_time(elapsed));
            }
            TaskKind::PenaltyReset => {
                let Some(session) = self.active.as_mut() else {
                    return;
                };
                match self.sequencer.resolve_penalty(&mut session.board, task.handle) {
                    Some((first, second)) => {
                        debug!(%first, %second, "Mismatched pair hidden");
                        self.renderer.render_card_hidden(first);
                        self.renderer.render_card_hidden(second);
                    }
                    None => trace!(handle = %task.handle, "Stale penalty"),
                }
            }
        }
    }

    fn render_attempts(&mut self) {
        if let Some(stats) = self.active.as_ref().map(|s| s.stats) {
            self.renderer.render_attempts(stats.attempts);
        }
    }

    fn finish(&mut self) {
        self.timer.stop(&mut self.scheduler);
        self.phase = SessionPhase::Won;

        if let Some(summary) = self.win_summary() {
            info!(
                level = %summary.difficulty,
                attempts = summary.attempts,
                time = %summary.formatted_time(),
                "Session won"
            );
            self.renderer.render_win(&summary);
        }
    }

    /// Stop the timer and cancel any in-flight penalty.
    fn cancel_outstanding(&mut self) {
        self.timer.stop(&mut self.scheduler);
        if let Some(handle) = self.sequencer.reset() {
            self.scheduler.cancel(handle);
        }
        debug_assert_eq!(self.scheduler.pending(), 0);
    }
}
