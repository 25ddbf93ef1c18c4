//! Role deduction ("Insider").
//!
//! Hidden roles, a guessing round against the clock, and a vote to unmask
//! the player who knew the answer all along.

mod engine;
mod tally;
mod words;

pub use engine::{
    Role, RoleCard, RoleDeductionEngine, RoleEvent, RoleOutcome, RolePhase, RoleState, Team, CANDIDATE_COUNT,
};
pub use tally::{tally, VoteCount};
pub use words::BUILTIN_WORDS;
