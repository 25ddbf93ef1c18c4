//! Game catalog: static, read-only descriptors of the playable games.
//!
//! - `GameDescriptor`: player range, moods, style, cognition
//! - `builtin()`: the bundled catalog, in tie-break order

pub mod descriptor;
pub mod builtin;

pub use descriptor::{Cognition, GameDescriptor, GameId, Mood, Style};
pub use builtin::{builtin, find, playable};
