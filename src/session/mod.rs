//! Session plumbing shared by all game engines.
//!
//! - [`SessionEngine`]: the pure transition contract each game implements
//! - [`Session`]: driver that persists state and keeps the host timer in sync
//! - [`Countdown`] / [`Scheduler`]: timed phases without wall clocks
//! - [`SessionContext`]: roster, current game and room code

pub mod context;
pub mod driver;
pub mod engine;
pub mod room;
pub mod timer;

pub use context::SessionContext;
pub use driver::Session;
pub use engine::SessionEngine;
pub use room::RoomCode;
pub use timer::{Countdown, ManualScheduler, NoopScheduler, Scheduler, SchedulerCall};
