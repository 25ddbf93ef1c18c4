//! # driveplay
//!
//! Session engines for in-person party games played around one shared or
//! passed-around device.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Each game is a `SessionEngine`: state value in,
//!    event in, new state or a `ValidationError` out. No I/O, no clocks.
//!
//! 2. **Atomic Transitions**: A rejected event leaves the state exactly as
//!    it was. Transitions run on a copy; `im` collections keep copies cheap.
//!
//! 3. **Phases as Types**: Every game's phases are a tagged enum. Data that
//!    only exists in one phase (a countdown, the votes) lives in that variant.
//!
//! 4. **Injected Capabilities**: Persistence (`PersistenceAdapter`) and
//!    wall-clock timers (`Scheduler`) are supplied by the host.
//!
//! ## Modules
//!
//! - `core`: Players, per-player maps, RNG, configuration, errors
//! - `catalog`: Game descriptors and the bundled catalog
//! - `recommend`: Preference scoring with relaxation fallback
//! - `session`: Engine trait, countdowns, session driver, app context
//! - `store`: Persistence port and JSON codec
//! - `games`: Topic rotation, number ordering, role deduction
//!
//! ## Example
//!
//! ```
//! use driveplay::{Cognition, Mood, RecommendationCriteria, RecommendationEngine, Style};
//!
//! let engine = RecommendationEngine::builtin();
//! let picks = engine.recommend(&RecommendationCriteria::new(4, Mood::Party, Style::Competitive, Cognition::High));
//! assert_eq!(picks[0].name, "Insider");
//! ```

pub mod catalog;
pub mod core;
pub mod games;
pub mod recommend;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Player, PlayerId, PlayerMap, SessionConfig, ValidationError};

pub use crate::catalog::{Cognition, GameDescriptor, GameId, Mood, Style};

pub use crate::recommend::{
    MatchReason, Recommendation, RecommendationCriteria, RecommendationEngine, Relaxation, ScoredGame, Strategy,
};

pub use crate::session::{
    Countdown, ManualScheduler, NoopScheduler, RoomCode, Scheduler, Session, SessionContext, SessionEngine,
};

pub use crate::store::{MemoryStore, PersistenceAdapter, StoreError};

pub use crate::games::ordering::{NumberOrderingEngine, OrderingEvent, OrderingPhase, OrderingState};
pub use crate::games::roles::{Role, RoleDeductionEngine, RoleEvent, RolePhase, RoleState, Team};
pub use crate::games::topic::{TopicEvent, TopicRotationEngine, TopicState};
