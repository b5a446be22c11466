//! Session controller integration tests.
//!
//! These tests drive full sessions through the public controller API:
//! matching, mismatch penalties, timing, winning and resetting.

use std::time::Duration;

use pairs_engine::cards::{Board, CardId};
use pairs_engine::core::{Difficulty, EngineConfig};
use pairs_engine::rules::{FlipOutcome, FlipPhase, IgnoreReason};
use pairs_engine::session::{
    RecordingRenderer, RenderEvent, SessionController, SessionPhase, WinSummary,
};

const PENALTY: Duration = Duration::from_millis(1500);

fn start(level: Difficulty) -> SessionController<RecordingRenderer> {
    let config = EngineConfig::default().with_seed(42);
    let mut game = SessionController::new(config, RecordingRenderer::new()).unwrap();
    game.start_session(level);
    game.renderer_mut().take_events();
    game
}

fn board(game: &SessionController<RecordingRenderer>) -> &Board {
    game.board().expect("session running")
}

/// First face-down, unmatched card and its partner.
fn next_pair(game: &SessionController<RecordingRenderer>) -> (CardId, CardId) {
    let board = board(game);
    let first = board.cards().iter().find(|c| !c.matched).unwrap().id;
    (first, board.partner_of(first).unwrap())
}

/// Two unmatched cards with different identities.
fn wrong_pair(game: &SessionController<RecordingRenderer>) -> (CardId, CardId) {
    let (first, partner) = next_pair(game);
    let other = board(game)
        .cards()
        .iter()
        .find(|c| !c.matched && c.id != first && c.id != partner)
        .unwrap()
        .id;
    (first, other)
}

// =============================================================================
// End-to-end
// =============================================================================

/// Test the full EASY scenario: four clean matches win with four attempts.
#[test]
fn test_easy_end_to_end() {
    let mut game = start(Difficulty::Easy);

    let b = board(&game);
    assert_eq!(b.len(), 8);
    assert_eq!(b.identity_counts().len(), 4);

    let first = CardId::new(0);
    let partner = b.partner_of(first).unwrap();

    assert_eq!(game.activate(first), FlipOutcome::Revealed(first));
    assert_eq!(game.sequencer().phase(), FlipPhase::OneRevealed);

    assert_eq!(
        game.activate(partner),
        FlipOutcome::Matched { first, second: partner }
    );
    let stats = game.stats().unwrap();
    assert_eq!(stats.matched_pairs, 1);
    assert_eq!(stats.attempts, 1);
    assert!(board(&game).get(first).unwrap().matched);
    assert!(board(&game).get(partner).unwrap().matched);

    for _ in 0..3 {
        assert_eq!(game.phase(), SessionPhase::Playing);
        let (a, b) = next_pair(&game);
        game.activate(a);
        game.activate(b);
    }

    let stats = game.stats().unwrap();
    assert_eq!(stats.matched_pairs, 4);
    assert_eq!(stats.total_pairs, 4);
    assert_eq!(stats.attempts, 4);
    assert_eq!(game.phase(), SessionPhase::Won);
    assert!(!game.timer_running());

    assert_eq!(
        game.renderer().last(),
        Some(&RenderEvent::Win(WinSummary {
            difficulty: Difficulty::Easy,
            total_pairs: 4,
            elapsed_seconds: 0,
            attempts: 4,
        }))
    );
}

/// Test the render sequence of a match.
#[test]
fn test_match_render_events() {
    let mut game = start(Difficulty::Medium);
    let (a, b) = next_pair(&game);

    game.activate(a);
    game.activate(b);

    assert_eq!(
        game.renderer_mut().take_events(),
        vec![
            RenderEvent::CardRevealed(a),
            RenderEvent::CardRevealed(b),
            RenderEvent::Attempts(1),
            RenderEvent::CardMatched(a),
            RenderEvent::CardMatched(b),
        ]
    );
}

// =============================================================================
// Mismatch penalty
// =============================================================================

/// Test that a mismatch hides both cards after the delay, and not before.
#[test]
fn test_mismatch_penalty_timing() {
    let mut game = start(Difficulty::Easy);
    let (a, b) = wrong_pair(&game);

    game.activate(a);
    assert_eq!(game.activate(b), FlipOutcome::Mismatched { first: a, second: b });

    let stats = game.stats().unwrap();
    assert_eq!(stats.attempts, 1);
    assert_eq!(stats.matched_pairs, 0);
    assert!(game.sequencer().is_locked());

    game.advance(PENALTY - Duration::from_millis(1));
    assert!(board(&game).get(a).unwrap().revealed);
    assert!(board(&game).get(b).unwrap().revealed);
    assert_eq!(game.sequencer().phase(), FlipPhase::PenaltyDelay);

    game.advance(Duration::from_millis(1));
    assert!(!board(&game).get(a).unwrap().revealed);
    assert!(!board(&game).get(b).unwrap().revealed);
    assert_eq!(game.sequencer().phase(), FlipPhase::Idle);
    assert!(!game.sequencer().is_locked());
    assert_eq!(game.sequencer().first_selected(), None);

    let events = game.renderer_mut().take_events();
    assert!(events.ends_with(&[RenderEvent::CardHidden(a), RenderEvent::CardHidden(b)]));
}

/// Test that a third card during the penalty changes nothing.
#[test]
fn test_third_activation_while_locked() {
    let mut game = start(Difficulty::Easy);
    let (a, b) = wrong_pair(&game);
    game.activate(a);
    game.activate(b);

    let third = board(&game)
        .cards()
        .iter()
        .find(|c| c.id != a && c.id != b)
        .unwrap()
        .id;

    assert_eq!(game.activate(third), FlipOutcome::Ignored(IgnoreReason::Locked));
    assert_eq!(game.sequencer().first_selected(), Some(a));
    assert_eq!(game.sequencer().second_selected(), Some(b));
    assert!(!board(&game).get(third).unwrap().revealed);
    assert_eq!(game.stats().unwrap().attempts, 1);

    // Once unlocked, the same card can be flipped.
    game.advance(PENALTY);
    assert_eq!(game.activate(third), FlipOutcome::Revealed(third));
}

/// Test a configurable penalty delay.
#[test]
fn test_custom_penalty_delay() {
    let config = EngineConfig::default().with_seed(3).with_penalty_delay_ms(200);
    let mut game = SessionController::new(config, RecordingRenderer::new()).unwrap();
    game.start_session(Difficulty::Easy);
    let (a, b) = wrong_pair(&game);

    game.activate(a);
    game.activate(b);
    game.advance(Duration::from_millis(200));

    assert_eq!(game.sequencer().phase(), FlipPhase::Idle);
}

/// Test that attempts count once per second card, hit or miss.
#[test]
fn test_attempts_count_every_pair_of_flips() {
    let mut game = start(Difficulty::Hard);

    for expected in 1..=3 {
        let (a, b) = wrong_pair(&game);
        game.activate(a);
        game.activate(b);
        assert_eq!(game.stats().unwrap().attempts, expected);
        game.advance(PENALTY);
    }

    let (a, b) = next_pair(&game);
    game.activate(a);
    game.activate(b);
    assert_eq!(game.stats().unwrap().attempts, 4);
    assert_eq!(game.stats().unwrap().matched_pairs, 1);
}

// =============================================================================
// Timer
// =============================================================================

/// Test that each tick adds exactly one second and renders the clock.
#[test]
fn test_timer_ticks() {
    let mut game = start(Difficulty::Easy);

    game.advance(Duration::from_millis(999));
    assert_eq!(game.stats().unwrap().elapsed_seconds, 0);

    game.advance(Duration::from_millis(1));
    assert_eq!(game.stats().unwrap().elapsed_seconds, 1);

    game.advance(Duration::from_secs(64));
    assert_eq!(game.stats().unwrap().elapsed_seconds, 65);
    assert_eq!(game.renderer().last(), Some(&RenderEvent::Timer("01:05".into())));
}

/// Test that winning stops the clock for good.
#[test]
fn test_win_stops_timer() {
    let mut game = start(Difficulty::Easy);
    game.advance(Duration::from_secs(7));

    while game.phase() == SessionPhase::Playing {
        let (a, b) = next_pair(&game);
        game.activate(a);
        game.activate(b);
    }

    game.renderer_mut().take_events();
    game.advance(Duration::from_secs(30));

    assert_eq!(game.stats().unwrap().elapsed_seconds, 7);
    assert!(game.renderer().events().is_empty());
    assert_eq!(game.pending_tasks(), 0);
    assert_eq!(game.win_summary().unwrap().formatted_time(), "00:07");
}

/// Test that a won session ignores further input.
#[test]
fn test_won_session_is_frozen() {
    let mut game = start(Difficulty::Easy);
    while game.phase() == SessionPhase::Playing {
        let (a, b) = next_pair(&game);
        game.activate(a);
        game.activate(b);
    }

    assert_eq!(
        game.activate(CardId::new(0)),
        FlipOutcome::Ignored(IgnoreReason::SessionWon)
    );
}

// =============================================================================
// Start / reset
// =============================================================================

/// Test that starting a new session replaces the old one and its timer.
#[test]
fn test_restart_replaces_session() {
    let mut game = start(Difficulty::Easy);
    game.advance(Duration::from_secs(5));
    let (a, b) = next_pair(&game);
    game.activate(a);
    game.activate(b);

    game.start_session(Difficulty::Hard);

    let stats = game.stats().unwrap();
    assert_eq!(stats.total_pairs, 9);
    assert_eq!(stats.attempts, 0);
    assert_eq!(stats.matched_pairs, 0);
    assert_eq!(stats.elapsed_seconds, 0);
    assert_eq!(board(&game).len(), 18);
    assert_eq!(game.pending_tasks(), 1);

    // Only one timer ticks.
    game.advance(Duration::from_secs(3));
    assert_eq!(game.stats().unwrap().elapsed_seconds, 3);
}

/// Test that a reset mid-penalty cancels the pending hide.
#[test]
fn test_reset_cancels_penalty() {
    let mut game = start(Difficulty::Easy);
    let (a, b) = wrong_pair(&game);
    game.activate(a);
    game.activate(b);

    game.reset_session();

    assert_eq!(game.phase(), SessionPhase::Menu);
    assert!(game.board().is_none());
    assert!(game.stats().is_none());
    assert!(!game.timer_running());
    assert_eq!(game.pending_tasks(), 0);
    assert_eq!(game.sequencer().phase(), FlipPhase::Idle);
    assert_eq!(game.renderer().last(), Some(&RenderEvent::ResetToMenu));

    game.renderer_mut().take_events();
    game.advance(Duration::from_secs(10));
    assert!(game.renderer().events().is_empty());
}

/// Test that restarting mid-penalty does not touch the new board.
#[test]
fn test_restart_mid_penalty_leaves_new_board_alone() {
    let mut game = start(Difficulty::Easy);
    let (a, b) = wrong_pair(&game);
    game.activate(a);
    game.activate(b);

    game.start_session(Difficulty::Easy);
    let first = CardId::new(0);
    game.activate(first);

    game.advance(PENALTY);

    assert!(board(&game).get(first).unwrap().revealed);
    assert_eq!(game.sequencer().phase(), FlipPhase::OneRevealed);
}

/// Test independent controllers do not share state.
#[test]
fn test_controllers_are_independent() {
    let mut one = start(Difficulty::Easy);
    let mut two = start(Difficulty::Easy);

    let (a, b) = next_pair(&one);
    one.activate(a);
    one.activate(b);
    two.advance(Duration::from_secs(2));

    assert_eq!(one.stats().unwrap().matched_pairs, 1);
    assert_eq!(two.stats().unwrap().matched_pairs, 0);
    assert_eq!(one.stats().unwrap().elapsed_seconds, 0);
    assert_eq!(two.stats().unwrap().elapsed_seconds, 2);
}
