//! Topic rotation engine.
//!
//! Draws conversation topics at random without repeating anything in the
//! recent history. When every topic in the pool is in the history, the
//! history is cleared and the draw starts over.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::topics::BUILTIN_TOPICS;
use crate::core::{GameRng, SessionConfig, ValidationError};
use crate::session::SessionEngine;
use crate::store::keys;

/// Persisted topic session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TopicState {
    current_topic: Option<String>,
    /// Most recent first.
    history: Vector<String>,
    /// In the order they were marked. Never holds duplicates.
    favorites: Vector<String>,
    custom_topics: Vector<String>,
    rng: GameRng,
}

impl TopicState {
    #[must_use]
    pub fn current_topic(&self) -> Option<&str> {
        self.current_topic.as_deref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<String> {
        &self.history
    }

    #[must_use]
    pub fn favorites(&self) -> &Vector<String> {
        &self.favorites
    }

    #[must_use]
    pub fn custom_topics(&self) -> &Vector<String> {
        &self.custom_topics
    }

    #[must_use]
    pub fn is_favorite(&self) -> bool {
        self.current_topic
            .as_ref()
            .is_some_and(|topic| self.favorites.contains(topic))
    }

    /// Whether `Previous` would change anything.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TopicEvent {
    /// Draw a new topic.
    Next,
    /// Bring back the previous topic. Repeated calls alternate between the
    /// two most recent topics; this is a one-step undo, not a stack.
    Previous,
    ToggleFavorite,
    AddCustomTopic(String),
}

/// Engine for the topic rotation game.
#[derive(Clone, Debug)]
pub struct TopicRotationEngine {
    config: SessionConfig,
    topics: &'static [&'static str],
}

impl TopicRotationEngine {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            topics: BUILTIN_TOPICS,
        }
    }

    /// Replace the bundled topic list.
    pub fn with_topics(mut self, topics: &'static [&'static str]) -> Self {
        self.topics = topics;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Fresh session with a first topic already drawn.
    ///
    /// With an empty pool the session starts without a current topic; custom
    /// topics can still be added.
    pub fn new_session(&self) -> TopicState {
        let mut state = TopicState {
            current_topic: None,
            history: Vector::new(),
            favorites: Vector::new(),
            custom_topics: Vector::new(),
            rng: GameRng::from_seed_or_entropy(self.config.seed),
        };
        if self.draw(&mut state).is_err() {
            tracing::debug!("topic pool is empty, starting without a topic");
        }
        state
    }

    /// Every drawable topic: bundled first, then custom ones.
    pub fn pool<'a>(&'a self, state: &'a TopicState) -> impl Iterator<Item = &'a str> + 'a {
        self.topics
            .iter()
            .copied()
            .chain(state.custom_topics.iter().map(String::as_str))
    }

    fn draw(&self, state: &mut TopicState) -> Result<(), ValidationError> {
        let pool: Vec<&str> = self
            .topics
            .iter()
            .copied()
            .chain(state.custom_topics.iter().map(String::as_str))
            .collect();
        if pool.is_empty() {
            return Err(ValidationError::NoTopics);
        }

        let available: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|topic| !state.history.iter().any(|seen| seen == topic))
            .collect();

        let topic = if available.is_empty() {
            tracing::debug!(pool = pool.len(), "topic pool exhausted, clearing history");
            state.history.clear();
            state.rng.choose(&pool)
        } else {
            state.rng.choose(&available)
        }
        .map(|topic| topic.to_string())
        .ok_or(ValidationError::NoTopics)?;

        state.history.push_front(topic.clone());
        let limit = self.config.topic_history_limit.max(1);
        if state.history.len() > limit {
            state.history.truncate(limit);
        }
        state.current_topic = Some(topic);
        Ok(())
    }

    fn previous(state: &mut TopicState) {
        if state.history.len() <= 1 {
            return;
        }
        let topic = state.history[1].clone();
        state.history.retain(|seen| *seen != topic);
        state.history.push_front(topic.clone());
        state.current_topic = Some(topic);
    }

    fn toggle_favorite(state: &mut TopicState) -> Result<(), ValidationError> {
        let topic = state.current_topic.clone().ok_or(ValidationError::NoCurrentTopic)?;
        match state.favorites.index_of(&topic) {
            Some(index) => {
                state.favorites.remove(index);
            }
            None => state.favorites.push_back(topic),
        }
        Ok(())
    }

    fn add_custom_topic(state: &mut TopicState, text: &str) -> Result<(), ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }
        state.custom_topics.push_back(text.to_string());
        Ok(())
    }
}

impl SessionEngine for TopicRotationEngine {
    type State = TopicState;
    type Event = TopicEvent;

    const STORAGE_KEY: &'static str = keys::TOPIC_ROTATION;

    fn apply(&self, state: &mut TopicState, event: TopicEvent) -> Result<(), ValidationError> {
        match event {
            TopicEvent::Next => self.draw(state),
            TopicEvent::Previous => {
                Self::previous(state);
                Ok(())
            }
            TopicEvent::ToggleFavorite => Self::toggle_favorite(state),
            TopicEvent::AddCustomTopic(text) => Self::add_custom_topic(state, &text),
        }
    }

    fn phase_name(&self, _state: &TopicState) -> &'static str {
        "rotation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE: &[&str] = &["alpha", "beta", "gamma"];

    fn engine() -> TopicRotationEngine {
        TopicRotationEngine::new(SessionConfig::default().with_seed(11))
    }

    fn apply(engine: &TopicRotationEngine, state: &TopicState, event: TopicEvent) -> TopicState {
        engine.transition(state, event).unwrap()
    }

    #[test]
    fn test_new_session_draws_a_topic() {
        let state = engine().new_session();
        let topic = state.current_topic().unwrap();
        assert!(BUILTIN_TOPICS.contains(&topic));
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_next_with_default_config_grows_history() {
        let engine = TopicRotationEngine::new(SessionConfig::default().with_seed(1));
        let state = engine.new_session();
        let state = apply(&engine, &state, TopicEvent::Next);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history().front().map(String::as_str), state.current_topic());
    }

    #[test]
    fn test_next_avoids_history() {
        let engine = engine().with_topics(THREE);
        let mut state = engine.new_session();
        state = apply(&engine, &state, TopicEvent::Next);
        state = apply(&engine, &state, TopicEvent::Next);

        let mut seen: Vec<_> = state.history().iter().cloned().collect();
        seen.sort();
        assert_eq!(seen, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_exhaustion_resets_history() {
        let engine = engine().with_topics(THREE);
        let mut state = engine.new_session();
        for _ in 0..3 {
            state = apply(&engine, &state, TopicEvent::Next);
        }
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history()[0], state.current_topic().unwrap());
    }

    #[test]
    fn test_history_is_capped() {
        let engine = TopicRotationEngine::new(SessionConfig::default().with_seed(5).with_topic_history_limit(4));
        let mut state = engine.new_session();
        for _ in 0..10 {
            state = apply(&engine, &state, TopicEvent::Next);
        }
        assert_eq!(state.history().len(), 4);
    }

    #[test]
    fn test_previous_cycles_between_two() {
        let engine = engine();
        let mut state = engine.new_session();
        state = apply(&engine, &state, TopicEvent::Next);
        state = apply(&engine, &state, TopicEvent::Next);
        let newest = state.history()[0].clone();
        let before = state.history()[1].clone();

        state = apply(&engine, &state, TopicEvent::Previous);
        assert_eq!(state.current_topic(), Some(before.as_str()));
        assert_eq!(state.history().len(), 3);

        state = apply(&engine, &state, TopicEvent::Previous);
        assert_eq!(state.current_topic(), Some(newest.as_str()));
    }

    #[test]
    fn test_previous_without_history_is_noop() {
        let engine = engine();
        let state = engine.new_session();
        assert!(!state.can_go_back());
        let after = apply(&engine, &state, TopicEvent::Previous);
        assert_eq!(after.current_topic(), state.current_topic());
    }

    #[test]
    fn test_toggle_favorite() {
        let engine = engine();
        let mut state = engine.new_session();
        state = apply(&engine, &state, TopicEvent::ToggleFavorite);
        assert!(state.is_favorite());
        assert_eq!(state.favorites().len(), 1);

        state = apply(&engine, &state, TopicEvent::ToggleFavorite);
        assert!(!state.is_favorite());
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn test_pool_includes_custom_topics() {
        let engine = engine().with_topics(THREE);
        let state = apply(&engine, &engine.new_session(), TopicEvent::AddCustomTopic("delta".into()));
        let pool: Vec<_> = engine.pool(&state).collect();
        assert_eq!(pool, vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn test_empty_pool() {
        let engine = engine().with_topics(&[]);
        let state = engine.new_session();
        assert_eq!(state.current_topic(), None);
        assert_eq!(engine.transition(&state, TopicEvent::Next).unwrap_err(), ValidationError::NoTopics);
        assert_eq!(
            engine.transition(&state, TopicEvent::ToggleFavorite).unwrap_err(),
            ValidationError::NoCurrentTopic
        );

        let state = apply(&engine, &state, TopicEvent::AddCustomTopic("  road trip  ".into()));
        let state = apply(&engine, &state, TopicEvent::Next);
        assert_eq!(state.current_topic(), Some("road trip"));
    }

    #[test]
    fn test_custom_topics_allow_duplicates_but_not_blank() {
        let engine = engine();
        let mut state = engine.new_session();
        state = apply(&engine, &state, TopicEvent::AddCustomTopic("dogs".into()));
        state = apply(&engine, &state, TopicEvent::AddCustomTopic("dogs".into()));
        assert_eq!(state.custom_topics().len(), 2);

        assert_eq!(
            engine.transition(&state, TopicEvent::AddCustomTopic("   ".into())).unwrap_err(),
            ValidationError::EmptyTopic
        );
    }
}
