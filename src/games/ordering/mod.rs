//! Number ordering ("Ito").
//!
//! A cooperative game: everyone holds a secret number and the group tries to
//! line up in ascending order using only theme-flavored hints.

mod engine;
mod themes;

pub use engine::{
    NumberOrderingEngine, OrderingEvent, OrderingOutcome, OrderingPhase, OrderingState, OutcomeEntry,
};
pub use themes::PRESET_THEMES;
