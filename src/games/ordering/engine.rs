//! Number ordering engine.
//!
//! ## Flow
//!
//! ```text
//! Setup -> Numbers -> Hints -> Order -> Result
//! ```
//!
//! Every player gets a secret number, distinct across the table. Numbers are
//! revealed privately one player at a time, each player describes theirs with
//! a hint in terms of the theme, and the group arranges everyone in what they
//! believe is ascending order. The result shows the guess next to the truth;
//! judging it is left to the players. `Restart` goes back to `Setup` from any
//! phase, keeping the roster.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::themes::PRESET_THEMES;
use crate::catalog::GameId;
use crate::core::{GameRng, Player, PlayerId, PlayerMap, SessionConfig, ValidationError};
use crate::games::seat;
use crate::session::SessionEngine;
use crate::store::keys;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum OrderingPhase {
    Setup,
    /// `revealing` is the player currently looking at their number.
    Numbers { revealing: PlayerId },
    Hints,
    Order,
    Result,
}

impl OrderingPhase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Numbers { .. } => "numbers",
            Self::Hints => "hints",
            Self::Order => "order",
            Self::Result => "result",
        }
    }
}

/// Persisted ordering session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderingState {
    phase: OrderingPhase,
    players: Vector<Player>,
    theme: Option<String>,
    /// Drawn on `Start`; secret until the result.
    numbers: Option<PlayerMap<u8>>,
    hints: PlayerMap<Option<String>>,
    order: SmallVec<[PlayerId; 8]>,
    rng: GameRng,
}

impl OrderingState {
    #[must_use]
    pub fn phase(&self) -> OrderingPhase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    #[must_use]
    pub fn hint(&self, player: PlayerId) -> Option<&str> {
        if !self.hints.contains(player) {
            return None;
        }
        self.hints[player].as_deref()
    }

    /// Players who have not submitted a hint yet, in seat order.
    pub fn awaiting_hints(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.hints
            .iter()
            .filter(|(_, hint)| hint.is_none())
            .map(|(player, _)| player)
    }

    /// The group's guess so far, lowest first.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Players not yet placed in the order, in seat order.
    pub fn unplaced(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all(self.player_count()).filter(move |player| !self.order.contains(player))
    }

    /// The player and number being shown privately during `Numbers`.
    #[must_use]
    pub fn current_reveal(&self) -> Option<(PlayerId, u8)> {
        match (self.phase, &self.numbers) {
            (OrderingPhase::Numbers { revealing }, Some(numbers)) => Some((revealing, numbers[revealing])),
            _ => None,
        }
    }

    /// The guessed order next to the true one. Only available in `Result`.
    #[must_use]
    pub fn outcome(&self) -> Option<OrderingOutcome> {
        if self.phase != OrderingPhase::Result {
            return None;
        }
        let numbers = self.numbers.as_ref()?;
        let entry = |player: PlayerId| OutcomeEntry {
            player,
            number: numbers[player],
            hint: self.hints[player].clone().unwrap_or_default(),
        };

        let guess = self.order.iter().copied().map(entry).collect();
        let mut truth: Vec<OutcomeEntry> = PlayerId::all(self.player_count()).map(entry).collect();
        truth.sort_by_key(|e| e.number);
        Some(OrderingOutcome { guess, truth })
    }
}

/// One line of the result screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeEntry {
    pub player: PlayerId,
    pub number: u8,
    pub hint: String,
}

/// Guess and truth, both lowest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingOutcome {
    pub guess: Vec<OutcomeEntry>,
    pub truth: Vec<OutcomeEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderingEvent {
    /// Free-text theme; surrounding whitespace is dropped.
    SelectTheme(String),
    /// Index into [`PRESET_THEMES`].
    SelectPreset(usize),
    Start,
    AdvanceReveal,
    SubmitHint { player: PlayerId, text: String },
    AddToOrder(PlayerId),
    RemoveFromOrder(PlayerId),
    MoveUp(PlayerId),
    MoveDown(PlayerId),
    SubmitOrder,
    Restart,
}

/// Engine for the number ordering game.
#[derive(Clone, Debug)]
pub struct NumberOrderingEngine {
    config: SessionConfig,
}

impl NumberOrderingEngine {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Fresh session in `Setup` for `players`.
    pub fn new_session(&self, players: &[Player]) -> Result<OrderingState, ValidationError> {
        let players = seat(players, GameId::ITO)?;
        self.check_number_range(players.len())?;

        let count = players.len();
        Ok(OrderingState {
            phase: OrderingPhase::Setup,
            players,
            theme: None,
            numbers: None,
            hints: PlayerMap::with_default(count),
            order: SmallVec::new(),
            rng: GameRng::from_seed_or_entropy(self.config.seed),
        })
    }

    /// The configured range must hold a distinct number for every player.
    fn check_number_range(&self, players: usize) -> Result<(), ValidationError> {
        let span = self.config.number_span();
        if span < players {
            return Err(ValidationError::NumberRangeTooSmall { span, players });
        }
        Ok(())
    }

    /// Draw one distinct number per player by rejection sampling.
    fn draw_numbers(&self, rng: &mut GameRng, player_count: usize) -> PlayerMap<u8> {
        let (min, max) = (self.config.number_min, self.config.number_max);
        let mut used = FxHashSet::default();
        PlayerMap::new(player_count, |_| loop {
            let n = rng.gen_range(min..=max);
            if used.insert(n) {
                break n;
            }
        })
    }

    fn submit_hint(state: &mut OrderingState, player: PlayerId, text: &str) -> Result<(), ValidationError> {
        if !state.hints.contains(player) {
            return Err(ValidationError::UnknownPlayer(player));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyHint);
        }
        let taken = state
            .hints
            .iter()
            .any(|(other, hint)| other != player && hint.as_deref() == Some(text));
        if taken {
            return Err(ValidationError::DuplicateHint { hint: text.to_string() });
        }

        state.hints[player] = Some(text.to_string());
        if state.hints.values().all(Option::is_some) {
            state.phase = OrderingPhase::Order;
        }
        Ok(())
    }

    fn edit_order(state: &mut OrderingState, event: OrderingEvent) -> Result<(), ValidationError> {
        let player = match event {
            OrderingEvent::AddToOrder(p)
            | OrderingEvent::RemoveFromOrder(p)
            | OrderingEvent::MoveUp(p)
            | OrderingEvent::MoveDown(p) => p,
            _ => return Ok(()),
        };
        if !state.hints.contains(player) {
            return Err(ValidationError::UnknownPlayer(player));
        }

        let position = state.order.iter().position(|&p| p == player);
        match (event, position) {
            (OrderingEvent::AddToOrder(_), None) => state.order.push(player),
            (OrderingEvent::RemoveFromOrder(_), Some(i)) => {
                state.order.remove(i);
            }
            (OrderingEvent::MoveUp(_), Some(i)) if i > 0 => state.order.swap(i, i - 1),
            (OrderingEvent::MoveDown(_), Some(i)) if i + 1 < state.order.len() => state.order.swap(i, i + 1),
            _ => {}
        }
        Ok(())
    }

    fn restart(state: &mut OrderingState) {
        let count = state.player_count();
        state.phase = OrderingPhase::Setup;
        state.theme = None;
        state.numbers = None;
        state.hints = PlayerMap::with_default(count);
        state.order.clear();
    }
}

impl SessionEngine for NumberOrderingEngine {
    type State = OrderingState;
    type Event = OrderingEvent;

    const STORAGE_KEY: &'static str = keys::NUMBER_ORDERING;

    fn apply(&self, state: &mut OrderingState, event: OrderingEvent) -> Result<(), ValidationError> {
        let phase = state.phase;
        match (phase, event) {
            (_, OrderingEvent::Restart) => {
                Self::restart(state);
                Ok(())
            }

            (OrderingPhase::Setup, OrderingEvent::SelectTheme(text)) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(ValidationError::EmptyTheme);
                }
                state.theme = Some(text.to_string());
                Ok(())
            }
            (OrderingPhase::Setup, OrderingEvent::SelectPreset(index)) => {
                let theme = PRESET_THEMES.get(index).ok_or(ValidationError::UnknownPreset(index))?;
                state.theme = Some((*theme).to_string());
                Ok(())
            }
            (OrderingPhase::Setup, OrderingEvent::Start) => {
                if state.theme.is_none() {
                    return Err(ValidationError::EmptyTheme);
                }
                let count = state.player_count();
                self.check_number_range(count)?;
                state.numbers = Some(self.draw_numbers(&mut state.rng, count));
                state.phase = OrderingPhase::Numbers {
                    revealing: PlayerId::new(0),
                };
                tracing::debug!(players = count, "numbers dealt");
                Ok(())
            }

            (OrderingPhase::Numbers { revealing }, OrderingEvent::AdvanceReveal) => {
                let next = revealing.index() + 1;
                state.phase = if next < state.player_count() {
                    OrderingPhase::Numbers {
                        revealing: PlayerId::new(next as u8),
                    }
                } else {
                    OrderingPhase::Hints
                };
                Ok(())
            }

            (OrderingPhase::Hints, OrderingEvent::SubmitHint { player, text }) => {
                Self::submit_hint(state, player, &text)
            }

            (
                OrderingPhase::Order,
                event @ (OrderingEvent::AddToOrder(_)
                | OrderingEvent::RemoveFromOrder(_)
                | OrderingEvent::MoveUp(_)
                | OrderingEvent::MoveDown(_)),
            ) => Self::edit_order(state, event),
            (OrderingPhase::Order, OrderingEvent::SubmitOrder) => {
                let expected = state.player_count();
                if state.order.len() != expected {
                    return Err(ValidationError::IncompleteOrder {
                        expected,
                        actual: state.order.len(),
                    });
                }
                state.phase = OrderingPhase::Result;
                Ok(())
            }

            (phase, event) => Err(ValidationError::wrong_phase(event.operation(), phase.name())),
        }
    }

    fn phase_name(&self, state: &OrderingState) -> &'static str {
        state.phase.name()
    }
}

impl OrderingEvent {
    fn operation(&self) -> &'static str {
        match self {
            Self::SelectTheme(_) => "select_theme",
            Self::SelectPreset(_) => "select_preset",
            Self::Start => "start",
            Self::AdvanceReveal => "advance_reveal",
            Self::SubmitHint { .. } => "submit_hint",
            Self::AddToOrder(_) => "add_to_order",
            Self::RemoveFromOrder(_) => "remove_from_order",
            Self::MoveUp(_) => "move_up",
            Self::MoveDown(_) => "move_down",
            Self::SubmitOrder => "submit_order",
            Self::Restart => "restart",
        }
    }
}
