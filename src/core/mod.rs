//! Core types shared by every engine: players, RNG, configuration, errors.
//!
//! Nothing in here knows about a particular game. Engines build on these
//! and keep their own phase types in `games`.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::SessionConfig;
pub use error::ValidationError;
