//! Game recommendation.
//!
//! `RecommendationEngine` scores a catalog against the group's criteria and
//! returns up to three games. It is independent of the session engines.

pub mod engine;

pub use engine::{
    MatchReason, Recommendation, RecommendationCriteria, RecommendationEngine, Relaxation,
    ScoredGame, Strategy, MAX_RECOMMENDATIONS,
};
