//! Session configuration.
//!
//! Engines take a `SessionConfig` at construction. The defaults match the
//! table-top rules of the bundled games; tests and house rules override
//! individual fields through the `with_*` builders.

use serde::{Deserialize, Serialize};

/// Configuration shared by the session engines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Smallest roster accepted by the session context.
    pub min_players: usize,

    /// Largest roster accepted by the session context.
    pub max_players: usize,

    /// How many recent topics the topic rotation remembers.
    pub topic_history_limit: usize,

    /// Lowest secret number in the ordering game (inclusive).
    pub number_min: u8,

    /// Highest secret number in the ordering game (inclusive).
    pub number_max: u8,

    /// Length of the question phase in the role game.
    pub question_seconds: u32,

    /// Fixed RNG seed. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 6,
            topic_history_limit: 10,
            number_min: 1,
            number_max: 100,
            question_seconds: 180,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Use a fixed seed so secret draws are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_question_seconds(mut self, seconds: u32) -> Self {
        self.question_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_topic_history_limit(mut self, limit: usize) -> Self {
        self.topic_history_limit = limit;
        self
    }

    #[must_use]
    pub fn with_number_range(mut self, min: u8, max: u8) -> Self {
        self.number_min = min;
        self.number_max = max;
        self
    }

    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Number of distinct values the ordering game can deal.
    #[must_use]
    pub fn number_span(&self) -> usize {
        if self.number_max < self.number_min {
            0
        } else {
            usize::from(self.number_max - self.number_min) + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 6);
        assert_eq!(config.topic_history_limit, 10);
        assert_eq!(config.question_seconds, 180);
        assert_eq!(config.number_span(), 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SessionConfig::default()
            .with_seed(123)
            .with_question_seconds(60)
            .with_number_range(1, 10);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.question_seconds, 60);
        assert_eq!(config.number_span(), 10);
    }

    #[test]
    fn test_inverted_range_has_no_span() {
        let config = SessionConfig::default().with_number_range(10, 1);
        assert_eq!(config.number_span(), 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"question_seconds": 90}"#).unwrap();
        assert_eq!(config.question_seconds, 90);
        assert_eq!(config.max_players, 6);
    }
}
