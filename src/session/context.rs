//! Session context: the app-level state shared by every screen.
//!
//! Holds the roster, the game currently being played, the last
//! recommendation request and the optional room code. The presentation
//! layer owns one context and passes it where needed; engines never read it
//! directly, they are built from its roster.

use serde::{Deserialize, Serialize};

use super::room::RoomCode;
use crate::catalog::{self, GameDescriptor, GameId};
use crate::core::{GameRng, Player, SessionConfig, ValidationError};
use crate::recommend::RecommendationCriteria;
use crate::store::{keys, load, save, PersistenceAdapter, StoreError};

/// Storage keys of the per-game sessions.
const GAME_KEYS: [&str; 3] = [keys::TOPIC_ROTATION, keys::NUMBER_ORDERING, keys::ROLE_DEDUCTION];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    players: Vec<Player>,
    current_game: Option<GameId>,
    last_recommendation: Option<RecommendationCriteria>,
    room: Option<RoomCode>,
}

impl SessionContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the persisted context, or start empty.
    ///
    /// Unreadable data is dropped with a warning rather than blocking the app.
    pub fn load<P: PersistenceAdapter + ?Sized>(store: &P) -> Self {
        match load(store, keys::CONTEXT) {
            Ok(Some(context)) => context,
            Ok(None) => Self::default(),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable session context");
                Self::default()
            }
        }
    }

    pub fn save<P: PersistenceAdapter + ?Sized>(&self, store: &mut P) -> Result<(), StoreError> {
        save(store, keys::CONTEXT, self)
    }

    /// Seat a new roster. Blank names become `Player N`.
    ///
    /// Changing the roster invalidates the current game.
    pub fn set_players<I, S>(&mut self, names: I, config: &SessionConfig) -> Result<&[Player], ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let roster = Player::roster(names);
        ValidationError::check_player_count(roster.len(), config.min_players, config.max_players)?;
        tracing::info!(players = roster.len(), "roster set");
        self.players = roster;
        self.current_game = None;
        Ok(&self.players)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Pick a bundled game for the current roster.
    pub fn select_game(&mut self, id: GameId) -> Result<&'static GameDescriptor, ValidationError> {
        let descriptor = catalog::find(id).ok_or(ValidationError::UnknownGame(id))?;
        ValidationError::check_player_count(
            self.players.len(),
            descriptor.min_players,
            descriptor.max_players,
        )?;
        self.current_game = Some(id);
        Ok(descriptor)
    }

    #[must_use]
    pub fn current_game(&self) -> Option<GameId> {
        self.current_game
    }

    pub fn remember_criteria(&mut self, criteria: RecommendationCriteria) {
        self.last_recommendation = Some(criteria);
    }

    #[must_use]
    pub fn last_recommendation(&self) -> Option<&RecommendationCriteria> {
        self.last_recommendation.as_ref()
    }

    // === Room ===

    /// Generate a room code and switch to multi-device mode.
    pub fn create_room(&mut self, rng: &mut GameRng) -> &RoomCode {
        self.room.insert(RoomCode::generate(rng))
    }

    /// Join a room by typed code.
    pub fn join_room(&mut self, input: &str) -> Result<&RoomCode, ValidationError> {
        let code = RoomCode::parse(input)?;
        Ok(self.room.insert(code))
    }

    pub fn leave_room(&mut self) {
        self.room = None;
    }

    #[must_use]
    pub fn room(&self) -> Option<&RoomCode> {
        self.room.as_ref()
    }

    #[must_use]
    pub fn is_multi_device(&self) -> bool {
        self.room.is_some()
    }

    // === Reset ===

    /// Leave the current game and forget every persisted game session.
    pub fn reset_game_state<P: PersistenceAdapter + ?Sized>(&mut self, store: &mut P) {
        self.current_game = None;
        for key in GAME_KEYS {
            store.delete(key);
        }
    }

    /// Forget everything, including the roster and the stored context.
    pub fn reset_all<P: PersistenceAdapter + ?Sized>(&mut self, store: &mut P) {
        self.reset_game_state(store);
        *self = Self::default();
        store.delete(keys::CONTEXT);
        tracing::info!("session context reset");
    }
}
