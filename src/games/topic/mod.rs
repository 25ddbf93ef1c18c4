//! Topic rotation ("Talk Dice").
//!
//! One shared device shows a conversation topic; anyone can draw the next
//! one, step back once, mark favorites or add their own topics.

mod engine;
mod topics;

pub use engine::{TopicEvent, TopicRotationEngine, TopicState};
pub use topics::BUILTIN_TOPICS;
