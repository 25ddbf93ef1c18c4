//! Session engine trait.
//!
//! Each game implements `SessionEngine` to define:
//! - Its persisted state (a value, never shared)
//! - The events that move it between phases
//! - The countdown, if the current phase is timed
//!
//! Engines are pure: no I/O, no clocks, no shared globals. The driver in
//! [`super::driver`] handles persistence and scheduling around them.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::timer::Countdown;
use crate::core::ValidationError;

/// Engine for one game's sessions.
///
/// ## Implementation Notes
///
/// - `apply` may leave `state` half-updated when it returns an error;
///   callers go through `transition`, which discards the scratch copy.
/// - Secret draws come from the RNG stored in the state, so a resumed
///   session continues the same random sequence.
pub trait SessionEngine {
    /// Whole session state, persisted after every accepted event.
    type State: Clone + Serialize + DeserializeOwned;

    /// User actions and timer ticks.
    type Event;

    /// Key the driver persists this engine's state under.
    const STORAGE_KEY: &'static str;

    /// Apply an event in place.
    fn apply(&self, state: &mut Self::State, event: Self::Event) -> Result<(), ValidationError>;

    /// Name of the current phase, for logs and error messages.
    fn phase_name(&self, state: &Self::State) -> &'static str;

    /// Countdown of the current phase, if it is timed.
    fn countdown(&self, _state: &Self::State) -> Option<Countdown> {
        None
    }

    // === Convenience Methods ===

    /// Apply an event to a copy of `state`, returning the new state.
    ///
    /// On rejection the input state is untouched.
    fn transition(&self, state: &Self::State, event: Self::Event) -> Result<Self::State, ValidationError> {
        let mut next = state.clone();
        self.apply(&mut next, event)?;
        Ok(next)
    }
}
