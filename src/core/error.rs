//! Validation errors returned by every engine operation.
//!
//! There is no fatal error class in the engines: a rejected operation leaves
//! the session exactly as it was and reports why. `code()` gives the
//! presentation layer a stable identifier to map to localized text.

use thiserror::Error;

use super::PlayerId;
use crate::catalog::GameId;

/// Reason an operation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The operation is not valid in the session's current phase.
    #[error("{operation} is not allowed during the {phase} phase")]
    WrongPhase {
        operation: &'static str,
        phase: &'static str,
    },

    #[error("{0} is not seated in this session")]
    UnknownPlayer(PlayerId),

    #[error("no bundled game has id {}", .0.raw())]
    UnknownGame(GameId),

    #[error("{count} players is outside the supported range {min}-{max}")]
    PlayerCountOutOfRange { count: usize, min: usize, max: usize },

    #[error("a theme must be chosen before starting")]
    EmptyTheme,

    #[error("there is no preset theme #{0}")]
    UnknownPreset(usize),

    #[error("hint must not be empty")]
    EmptyHint,

    /// Hints are unique across the whole table, not per player.
    #[error("hint \"{hint}\" was already given by another player")]
    DuplicateHint { hint: String },

    #[error("order lists {actual} of {expected} players")]
    IncompleteOrder { expected: usize, actual: usize },

    #[error("{actual} of {expected} players have voted")]
    IncompleteVotes { expected: usize, actual: usize },

    #[error("{voter} cannot vote for {target}")]
    InvalidVoteTarget { voter: PlayerId, target: PlayerId },

    #[error("no topics are available")]
    NoTopics,

    #[error("no topic has been drawn yet")]
    NoCurrentTopic,

    #[error("topic text must not be empty")]
    EmptyTopic,

    #[error("word pool has {available} distinct words, {required} are needed")]
    WordPoolTooSmall { available: usize, required: usize },

    #[error("number range holds {span} values, {players} players need distinct numbers")]
    NumberRangeTooSmall { span: usize, players: usize },

    #[error("\"{0}\" is not a 6-character room code")]
    InvalidRoomCode(String),

    #[error("no countdown is running")]
    NoActiveTimer,
}

impl ValidationError {
    /// Stable, machine-readable reason code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::WrongPhase { .. } => "wrong_phase",
            Self::UnknownPlayer(_) => "unknown_player",
            Self::UnknownGame(_) => "unknown_game",
            Self::PlayerCountOutOfRange { .. } => "player_count_out_of_range",
            Self::EmptyTheme => "empty_theme",
            Self::UnknownPreset(_) => "unknown_preset",
            Self::EmptyHint => "empty_hint",
            Self::DuplicateHint { .. } => "duplicate_hint",
            Self::IncompleteOrder { .. } => "incomplete_order",
            Self::IncompleteVotes { .. } => "incomplete_votes",
            Self::InvalidVoteTarget { .. } => "invalid_vote_target",
            Self::NoTopics => "no_topics",
            Self::NoCurrentTopic => "no_current_topic",
            Self::EmptyTopic => "empty_topic",
            Self::WordPoolTooSmall { .. } => "word_pool_too_small",
            Self::NumberRangeTooSmall { .. } => "number_range_too_small",
            Self::InvalidRoomCode(_) => "invalid_room_code",
            Self::NoActiveTimer => "no_active_timer",
        }
    }

    pub(crate) fn wrong_phase(operation: &'static str, phase: &'static str) -> Self {
        Self::WrongPhase { operation, phase }
    }

    /// Check a roster size against inclusive bounds.
    pub(crate) fn check_player_count(count: usize, min: usize, max: usize) -> Result<(), Self> {
        if (min..=max).contains(&count) {
            Ok(())
        } else {
            Err(Self::PlayerCountOutOfRange { count, min, max })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = ValidationError::wrong_phase("submit_votes", "discuss");
        assert_eq!(err.to_string(), "submit_votes is not allowed during the discuss phase");

        let err = ValidationError::InvalidVoteTarget {
            voter: PlayerId::new(0),
            target: PlayerId::new(2),
        };
        assert_eq!(err.to_string(), "player-1 cannot vote for player-3");
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ValidationError::EmptyHint.code(), "empty_hint");
        assert_eq!(
            ValidationError::IncompleteOrder { expected: 4, actual: 3 }.code(),
            "incomplete_order"
        );
    }

    #[test]
    fn test_check_player_count() {
        assert!(ValidationError::check_player_count(4, 2, 6).is_ok());
        assert_eq!(
            ValidationError::check_player_count(7, 2, 6),
            Err(ValidationError::PlayerCountOutOfRange { count: 7, min: 2, max: 6 })
        );
    }
}
