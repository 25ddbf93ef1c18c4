//! Persistence boundary.
//!
//! Engines never touch storage. The session driver serializes each engine's
//! whole state as one JSON value under that engine's key after every
//! accepted transition.

pub mod adapter;
pub mod codec;

pub use adapter::{MemoryStore, PersistenceAdapter};
pub use codec::{load, save, StoreError};

/// Storage keys, one per persisted value.
pub mod keys {
    pub const CONTEXT: &str = "driveplay.context";
    pub const TOPIC_ROTATION: &str = "driveplay.topic_rotation";
    pub const NUMBER_ORDERING: &str = "driveplay.number_ordering";
    pub const ROLE_DEDUCTION: &str = "driveplay.role_deduction";
}
