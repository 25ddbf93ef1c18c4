//! Session driver: one engine, its state, a store and a scheduler.
//!
//! Presentation code talks to a `Session`: it dispatches user actions and
//! timer ticks, renders the returned state, and discards the session when
//! the group restarts or leaves the game.

use super::engine::SessionEngine;
use super::timer::{Countdown, Scheduler};
use crate::core::ValidationError;
use crate::store::{load, save, PersistenceAdapter};

/// A live session.
///
/// ## Example
///
/// ```
/// use driveplay::core::SessionConfig;
/// use driveplay::games::topic::{TopicEvent, TopicRotationEngine};
/// use driveplay::session::{NoopScheduler, Session, SessionEngine};
/// use driveplay::store::MemoryStore;
///
/// let engine = TopicRotationEngine::new(SessionConfig::default().with_seed(1));
/// let mut session = Session::resume(engine, MemoryStore::new(), NoopScheduler, |e| Ok(e.new_session()))
///     .unwrap();
///
/// session.dispatch(TopicEvent::Next).unwrap();
/// assert_eq!(session.state().history().len(), 2);
/// assert!(session.store().contains(TopicRotationEngine::STORAGE_KEY));
/// ```
pub struct Session<E, P, S>
where
    E: SessionEngine,
    P: PersistenceAdapter,
    S: Scheduler,
{
    engine: E,
    state: E::State,
    store: P,
    scheduler: S,
}

impl<E, P, S> Session<E, P, S>
where
    E: SessionEngine,
    P: PersistenceAdapter,
    S: Scheduler,
{
    /// Start a session from a freshly built state, persisting it at once.
    pub fn start(engine: E, state: E::State, store: P, scheduler: S) -> Self {
        let mut session = Self {
            engine,
            state,
            store,
            scheduler,
        };
        session.persist();
        session.sync_timer(None);
        tracing::info!(
            key = E::STORAGE_KEY,
            phase = session.engine.phase_name(&session.state),
            "session started"
        );
        session
    }

    /// Resume the persisted session, or build a fresh one with `fresh` when
    /// nothing usable is stored.
    ///
    /// A running countdown restarts on the host with its remaining seconds.
    pub fn resume<F>(engine: E, store: P, scheduler: S, fresh: F) -> Result<Self, ValidationError>
    where
        F: FnOnce(&E) -> Result<E::State, ValidationError>,
    {
        let state = match load::<_, E::State>(&store, E::STORAGE_KEY) {
            Ok(Some(state)) => {
                tracing::debug!(key = E::STORAGE_KEY, "resuming persisted session");
                state
            }
            Ok(None) => fresh(&engine)?,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session state");
                fresh(&engine)?
            }
        };
        Ok(Self::start(engine, state, store, scheduler))
    }

    /// Apply a user action or tick.
    ///
    /// On success the new state is persisted and the host timer is brought
    /// in line with the phase countdown. On rejection nothing changes.
    pub fn dispatch(&mut self, event: E::Event) -> Result<&E::State, ValidationError> {
        let next = match self.engine.transition(&self.state, event) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(
                    code = err.code(),
                    phase = self.engine.phase_name(&self.state),
                    "event rejected: {}",
                    err
                );
                return Err(err);
            }
        };

        let previous = self.engine.countdown(&self.state);
        let from = self.engine.phase_name(&self.state);
        self.state = next;
        self.sync_timer(previous);
        self.persist();

        let to = self.engine.phase_name(&self.state);
        if from != to {
            tracing::debug!(key = E::STORAGE_KEY, from, to, "phase changed");
        }
        Ok(&self.state)
    }

    /// Tear down: cancel the timer and hand back the last state. The
    /// persisted copy stays so the session can be resumed.
    pub fn close(mut self) -> E::State {
        if self.engine.countdown(&self.state).is_some() {
            self.scheduler.cancel();
        }
        self.state
    }

    /// Tear down and forget the session entirely.
    pub fn discard(mut self) {
        if self.engine.countdown(&self.state).is_some() {
            self.scheduler.cancel();
        }
        self.store.delete(E::STORAGE_KEY);
        tracing::info!(key = E::STORAGE_KEY, "session discarded");
    }

    pub fn state(&self) -> &E::State {
        &self.state
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn sync_timer(&mut self, previous: Option<Countdown>) {
        match (previous, self.engine.countdown(&self.state)) {
            (prev, Some(next)) if prev.map(|p| p.run) != Some(next.run) => {
                self.scheduler.start(next.remaining);
            }
            (Some(_), None) => self.scheduler.cancel(),
            _ => {}
        }
    }

    fn persist(&mut self) {
        if let Err(err) = save(&mut self.store, E::STORAGE_KEY, &self.state) {
            tracing::error!(error = %err, "failed to persist session state");
        }
    }
}
