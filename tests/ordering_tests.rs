//! Number ordering sessions played end to end.

use driveplay::core::{Player, PlayerId, SessionConfig};
use driveplay::games::ordering::{NumberOrderingEngine, OrderingEvent, OrderingPhase, OrderingState, PRESET_THEMES};
use driveplay::session::SessionEngine;

fn step(engine: &NumberOrderingEngine, state: &OrderingState, event: OrderingEvent) -> OrderingState {
    engine.transition(state, event).unwrap()
}

/// Play a full round, placing players by seat, and return the final state
/// plus the numbers seen during the reveal.
fn play_round(engine: &NumberOrderingEngine, players: usize) -> (OrderingState, Vec<u8>) {
    let roster = Player::roster((0..players).map(|i| format!("P{i}")));
    let mut state = engine.new_session(&roster).unwrap();
    state = step(engine, &state, OrderingEvent::SelectPreset(2));
    assert_eq!(state.theme(), Some(PRESET_THEMES[2]));
    state = step(engine, &state, OrderingEvent::Start);

    let mut numbers = Vec::new();
    while let Some((_, number)) = state.current_reveal() {
        numbers.push(number);
        state = step(engine, &state, OrderingEvent::AdvanceReveal);
    }
    assert_eq!(state.phase(), OrderingPhase::Hints);

    for player in PlayerId::all(players) {
        let text = format!("clue {}", player.index());
        state = step(engine, &state, OrderingEvent::SubmitHint { player, text });
    }
    for player in PlayerId::all(players) {
        state = step(engine, &state, OrderingEvent::AddToOrder(player));
    }
    state = step(engine, &state, OrderingEvent::SubmitOrder);
    (state, numbers)
}

/// Numbers are distinct and within range for every roster size.
#[test]
fn test_full_round_for_each_roster_size() {
    for players in 3..=6 {
        let engine = NumberOrderingEngine::new(SessionConfig::default().with_seed(players as u64));
        let (state, numbers) = play_round(&engine, players);

        assert_eq!(numbers.len(), players);
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), players);
        assert!(numbers.iter().all(|n| (1..=100).contains(n)));

        let outcome = state.outcome().unwrap();
        let truth: Vec<u8> = outcome.truth.iter().map(|e| e.number).collect();
        assert_eq!(truth, sorted);
        assert_eq!(outcome.guess.len(), players);
    }
}

/// Submitting a short order is rejected without changing anything.
#[test]
fn test_short_order_is_rejected() {
    let engine = NumberOrderingEngine::new(SessionConfig::default().with_seed(4));
    let roster = Player::roster(["a", "b", "c"]);
    let mut state = engine.new_session(&roster).unwrap();
    state = step(&engine, &state, OrderingEvent::SelectTheme("Weight".into()));
    state = step(&engine, &state, OrderingEvent::Start);
    for _ in 0..3 {
        state = step(&engine, &state, OrderingEvent::AdvanceReveal);
    }
    for (i, text) in ["feather", "brick", "car"].iter().enumerate() {
        state = step(
            &engine,
            &state,
            OrderingEvent::SubmitHint {
                player: PlayerId::new(i as u8),
                text: text.to_string(),
            },
        );
    }
    state = step(&engine, &state, OrderingEvent::AddToOrder(PlayerId::new(1)));

    let err = engine.transition(&state, OrderingEvent::SubmitOrder).unwrap_err();
    assert_eq!(err.code(), "incomplete_order");
    assert_eq!(state.phase(), OrderingPhase::Order);
    assert_eq!(state.order(), &[PlayerId::new(1)]);
}

/// Restarting after a result starts a clean round with fresh numbers.
#[test]
fn test_restart_after_result() {
    let engine = NumberOrderingEngine::new(SessionConfig::default().with_seed(10));
    let (state, _) = play_round(&engine, 4);
    let state = step(&engine, &state, OrderingEvent::Restart);

    assert_eq!(state.phase(), OrderingPhase::Setup);
    assert!(state.outcome().is_none());
    assert!(state.order().is_empty());
    assert_eq!(state.awaiting_hints().count(), 4);
}
