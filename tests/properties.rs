//! Property tests over random criteria, seeds and rosters.

use driveplay::catalog::{Cognition, Mood, Style};
use driveplay::core::{Player, PlayerId, SessionConfig};
use driveplay::games::ordering::{NumberOrderingEngine, OrderingEvent};
use driveplay::games::roles::{Role, RoleDeductionEngine};
use driveplay::games::topic::{TopicEvent, TopicRotationEngine};
use driveplay::recommend::{RecommendationCriteria, RecommendationEngine, ScoredGame};
use driveplay::session::SessionEngine;
use proptest::prelude::*;

fn mood() -> impl Strategy<Value = Mood> {
    prop::sample::select(Mood::ALL.to_vec())
}

fn style() -> impl Strategy<Value = Style> {
    prop::sample::select(Style::ALL.to_vec())
}

fn cognition() -> impl Strategy<Value = Cognition> {
    prop::sample::select(Cognition::ALL.to_vec())
}

fn criteria() -> impl Strategy<Value = RecommendationCriteria> {
    (0usize..10, mood(), style(), cognition())
        .prop_map(|(players, mood, style, cognition)| RecommendationCriteria::new(players, mood, style, cognition))
}

fn roster(players: usize) -> Vec<Player> {
    Player::roster((0..players).map(|i| format!("P{i}")))
}

proptest! {
    /// At most three picks, all from the catalog, scores non-increasing.
    #[test]
    fn prop_recommendations_are_bounded_and_sorted(criteria in criteria()) {
        let engine = RecommendationEngine::builtin();
        let result = engine.recommend_detailed(&criteria);

        prop_assert!(result.picks.len() <= 3);
        for pick in &result.picks {
            prop_assert!(engine.catalog().iter().any(|g| g.id == pick.descriptor.id));
        }
        for pair in result.picks.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// A perfect match always ranks first.
    #[test]
    fn prop_perfect_match_ranks_first(criteria in criteria()) {
        let engine = RecommendationEngine::builtin();
        let perfect = engine
            .catalog()
            .iter()
            .position(|g| ScoredGame::score(g, &criteria).reasons.len() == 4);

        if let Some(index) = perfect {
            let games = engine.recommend(&criteria);
            prop_assert_eq!(games[0].id, engine.catalog()[index].id);
        }
    }

    /// Somebody can play: the result is never empty.
    #[test]
    fn prop_playable_groups_get_recommendations(criteria in criteria()) {
        let engine = RecommendationEngine::builtin();
        let playable = engine.catalog().iter().any(|g| g.accepts(criteria.player_count));
        prop_assert_eq!(!engine.recommend(&criteria).is_empty(), playable);
    }

    /// Secret numbers are distinct and in range.
    #[test]
    fn prop_numbers_are_distinct(seed in any::<u64>(), players in 3usize..=6) {
        let engine = NumberOrderingEngine::new(SessionConfig::default().with_seed(seed));
        let mut state = engine.new_session(&roster(players)).unwrap();
        state = engine.transition(&state, OrderingEvent::SelectPreset(0)).unwrap();
        state = engine.transition(&state, OrderingEvent::Start).unwrap();

        let mut numbers = Vec::new();
        while let Some((_, number)) = state.current_reveal() {
            prop_assert!((1..=100).contains(&number));
            prop_assert!(!numbers.contains(&number));
            numbers.push(number);
            state = engine.transition(&state, OrderingEvent::AdvanceReveal).unwrap();
        }
        prop_assert_eq!(numbers.len(), players);
    }

    /// Exactly one master and one insider; the answer index is in range.
    #[test]
    fn prop_roles_are_dealt_correctly(seed in any::<u64>(), players in 4usize..=6) {
        let engine = RoleDeductionEngine::new(SessionConfig::default().with_seed(seed));
        let state = engine.new_session(&roster(players)).unwrap();

        let count = |role| PlayerId::all(players).filter(|p| state.role(*p) == Some(role)).count();
        prop_assert_eq!(count(Role::Master), 1);
        prop_assert_eq!(count(Role::Insider), 1);
        prop_assert_eq!(count(Role::Citizen), players - 2);
        prop_assert!((1..=6).contains(&state.answer_index()));
        prop_assert_eq!(state.answer(), state.candidates()[usize::from(state.answer_index()) - 1].as_str());
    }

    /// Drawing never repeats a topic still in the history.
    #[test]
    fn prop_next_avoids_history(seed in any::<u64>(), draws in 1usize..60) {
        let engine = TopicRotationEngine::new(SessionConfig::default().with_seed(seed));
        let mut state = engine.new_session();
        for _ in 0..draws {
            let before = state.history().clone();
            state = engine.transition(&state, TopicEvent::Next).unwrap();
            let drawn = state.current_topic().unwrap().to_string();
            prop_assert!(!before.contains(&drawn));
        }
    }
}
