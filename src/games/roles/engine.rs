//! Role deduction engine.
//!
//! ## Flow
//!
//! ```text
//! Assign -> Question -> Discuss -> Accuse -> Result
//! ```
//!
//! One player is the MASTER and knows the answer word, one is the INSIDER
//! and secretly knows it too, everyone else is a CITIZEN. The table asks the
//! MASTER yes/no questions until someone finds the word or time runs out.
//! Whatever was left of the question time becomes the discussion time, then
//! everyone votes on who they think the INSIDER is.
//!
//! ## Timers
//!
//! `Question` and `Discuss` carry a [`Countdown`] that moves on `Tick`. When
//! the question timer expires nobody found the word, so there is no time left
//! to discuss and the session goes straight to `Accuse`.

use std::fmt;

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::tally::{tally, VoteCount};
use super::words::BUILTIN_WORDS;
use crate::catalog::GameId;
use crate::core::{GameRng, Player, PlayerId, PlayerMap, SessionConfig, ValidationError};
use crate::games::seat;
use crate::session::{Countdown, SessionEngine};
use crate::store::keys;

/// Number of candidate words dealt per round.
pub const CANDIDATE_COUNT: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Master,
    Insider,
    Citizen,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Master => "Master",
            Self::Insider => "Insider",
            Self::Citizen => "Citizen",
        })
    }
}

/// Winning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Citizens,
    Insider,
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Citizens => "Citizens",
            Self::Insider => "Insider",
        })
    }
}

/// Result of the vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOutcome {
    pub accused: PlayerId,
    pub winner: Team,
    /// Highest first, lower seat first on equal counts.
    pub tally: Vec<VoteCount>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RolePhase {
    /// Private role reveal, one seat at a time.
    Assign { revealing: PlayerId },
    Question { countdown: Countdown },
    Discuss { countdown: Countdown },
    Accuse { votes: PlayerMap<Option<PlayerId>> },
    Result {
        votes: PlayerMap<Option<PlayerId>>,
        outcome: RoleOutcome,
    },
}

impl RolePhase {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Assign { .. } => "assign",
            Self::Question { .. } => "question",
            Self::Discuss { .. } => "discuss",
            Self::Accuse { .. } => "accuse",
            Self::Result { .. } => "result",
        }
    }
}

/// What one player sees on their private reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleCard {
    pub player: PlayerId,
    pub role: Role,
    /// Shown to the MASTER and the INSIDER.
    pub answer: Option<String>,
    /// Shown to the MASTER only.
    pub candidates: Option<Vec<String>>,
}

/// Persisted role session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoleState {
    phase: RolePhase,
    players: Vector<Player>,
    roles: PlayerMap<Role>,
    candidates: SmallVec<[String; CANDIDATE_COUNT]>,
    /// 1-based position of the answer in `candidates`.
    answer_index: u8,
    question_seconds: u32,
    discuss_seconds: u32,
    timer_runs: u32,
    rng: GameRng,
}

impl RoleState {
    #[must_use]
    pub fn phase(&self) -> &RolePhase {
        &self.phase
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
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    #[must_use]
    pub fn answer_index(&self) -> u8 {
        self.answer_index
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        self.candidates
            .get(usize::from(self.answer_index).saturating_sub(1))
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn question_seconds(&self) -> u32 {
        self.question_seconds
    }

    /// Discussion length, set when the question phase ends.
    #[must_use]
    pub fn discuss_seconds(&self) -> u32 {
        self.discuss_seconds
    }

    /// A player's role, or `None` for an unseated id.
    #[must_use]
    pub fn role(&self, player: PlayerId) -> Option<Role> {
        self.roles.contains(player).then(|| self.roles[player])
    }

    /// Seat holding `role`. For `Citizen` this is the first citizen.
    #[must_use]
    pub fn holder(&self, role: Role) -> Option<PlayerId> {
        self.roles.iter().find(|(_, r)| **r == role).map(|(player, _)| player)
    }

    /// The private reveal for `player`.
    pub fn card_for(&self, player: PlayerId) -> Result<RoleCard, ValidationError> {
        let role = self.role(player).ok_or(ValidationError::UnknownPlayer(player))?;
        let answer = matches!(role, Role::Master | Role::Insider).then(|| self.answer().to_string());
        let candidates = (role == Role::Master).then(|| self.candidates.to_vec());
        Ok(RoleCard {
            player,
            role,
            answer,
            candidates,
        })
    }

    /// Card of the player currently revealing, during `Assign`.
    #[must_use]
    pub fn current_card(&self) -> Option<RoleCard> {
        match self.phase {
            RolePhase::Assign { revealing } => self.card_for(revealing).ok(),
            _ => None,
        }
    }

    /// Vote recorded for `voter` during `Accuse` or `Result`.
    #[must_use]
    pub fn vote(&self, voter: PlayerId) -> Option<PlayerId> {
        match &self.phase {
            RolePhase::Accuse { votes } | RolePhase::Result { votes, .. } if votes.contains(voter) => votes[voter],
            _ => None,
        }
    }

    /// Players `voter` may accuse: anyone but themselves and the MASTER.
    pub fn eligible_targets(&self, voter: PlayerId) -> impl Iterator<Item = PlayerId> + '_ {
        self.roles
            .iter()
            .filter(move |(target, role)| *target != voter && **role != Role::Master)
            .map(|(target, _)| target)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&RoleOutcome> {
        match &self.phase {
            RolePhase::Result { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleEvent {
    AdvanceReveal,
    /// Seconds elapsed since the last tick.
    Tick(u32),
    CorrectAnswerFound,
    ProceedToVote,
    CastVote { voter: PlayerId, target: PlayerId },
    SubmitVotes,
    /// Deal new roles and words to the same roster.
    Restart,
}

impl RoleEvent {
    fn operation(&self) -> &'static str {
        match self {
            Self::AdvanceReveal => "advance_reveal",
            Self::Tick(_) => "tick",
            Self::CorrectAnswerFound => "correct_answer_found",
            Self::ProceedToVote => "proceed_to_vote",
            Self::CastVote { .. } => "cast_vote",
            Self::SubmitVotes => "submit_votes",
            Self::Restart => "restart",
        }
    }
}

/// Engine for the role deduction game.
#[derive(Clone, Debug)]
pub struct RoleDeductionEngine {
    config: SessionConfig,
    words: &'static [&'static str],
}

impl RoleDeductionEngine {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            words: BUILTIN_WORDS,
        }
    }

    /// Replace the bundled word pool.
    pub fn with_words(mut self, words: &'static [&'static str]) -> Self {
        self.words = words;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Fresh session with roles and words dealt, starting the reveal.
    pub fn new_session(&self, players: &[Player]) -> Result<RoleState, ValidationError> {
        let players = seat(players, GameId::INSIDER)?;
        let distinct: FxHashSet<&str> = self.words.iter().copied().collect();
        if distinct.len() < CANDIDATE_COUNT {
            return Err(ValidationError::WordPoolTooSmall {
                available: distinct.len(),
                required: CANDIDATE_COUNT,
            });
        }

        let count = players.len();
        let mut state = RoleState {
            phase: RolePhase::Assign {
                revealing: PlayerId::new(0),
            },
            players,
            roles: PlayerMap::with_value(count, Role::Citizen),
            candidates: SmallVec::new(),
            answer_index: 1,
            question_seconds: self.config.question_seconds,
            discuss_seconds: 0,
            timer_runs: 0,
            rng: GameRng::from_seed_or_entropy(self.config.seed),
        };
        self.deal(&mut state)?;
        Ok(state)
    }

    /// Shuffle roles and draw candidate words plus the answer.
    fn deal(&self, state: &mut RoleState) -> Result<(), ValidationError> {
        let count = state.player_count();
        let mut seats: Vec<PlayerId> = PlayerId::all(count).collect();
        state.rng.shuffle(&mut seats);

        let mut roles = PlayerMap::with_value(count, Role::Citizen);
        roles[seats[0]] = Role::Master;
        roles[seats[1]] = Role::Insider;

        // Distinct text, not just distinct positions.
        let mut pool: Vec<&str> = Vec::with_capacity(self.words.len());
        for word in self.words {
            if !pool.contains(word) {
                pool.push(*word);
            }
        }
        let mut words_rng = state.rng.for_context("words");
        let candidates = words_rng
            .sample_distinct(&pool, CANDIDATE_COUNT)
            .ok_or(ValidationError::WordPoolTooSmall {
                available: pool.len(),
                required: CANDIDATE_COUNT,
            })?
            .into_iter()
            .map(|word| word.to_string())
            .collect();

        state.roles = roles;
        state.candidates = candidates;
        state.answer_index = state.rng.gen_range(1..=CANDIDATE_COUNT as u8);
        state.discuss_seconds = 0;
        state.phase = RolePhase::Assign {
            revealing: PlayerId::new(0),
        };
        tracing::debug!(players = count, "roles dealt");
        Ok(())
    }

    fn start_countdown(state: &mut RoleState, seconds: u32) -> Countdown {
        state.timer_runs += 1;
        Countdown::start(state.timer_runs, seconds)
    }

    /// Leave the question phase with `remaining` seconds for discussion.
    fn enter_discuss(state: &mut RoleState, remaining: u32) {
        state.discuss_seconds = remaining;
        state.phase = if remaining == 0 {
            Self::accuse(state)
        } else {
            RolePhase::Discuss {
                countdown: Self::start_countdown(state, remaining),
            }
        };
    }

    fn accuse(state: &RoleState) -> RolePhase {
        RolePhase::Accuse {
            votes: PlayerMap::with_default(state.player_count()),
        }
    }

    fn cast_vote(state: &mut RoleState, voter: PlayerId, target: PlayerId) -> Result<(), ValidationError> {
        let target_role = state.role(target).ok_or(ValidationError::UnknownPlayer(target))?;
        if state.role(voter).is_none() {
            return Err(ValidationError::UnknownPlayer(voter));
        }
        if voter == target || target_role == Role::Master {
            return Err(ValidationError::InvalidVoteTarget { voter, target });
        }
        if let RolePhase::Accuse { votes } = &mut state.phase {
            votes[voter] = Some(target);
        }
        Ok(())
    }

    fn submit_votes(state: &mut RoleState, votes: PlayerMap<Option<PlayerId>>) -> Result<(), ValidationError> {
        let expected = state.player_count();
        let actual = votes.values().filter(|v| v.is_some()).count();
        if actual < expected {
            return Err(ValidationError::IncompleteVotes { expected, actual });
        }

        let tally = tally(&votes);
        let accused = tally
            .first()
            .map(|count| count.target)
            .ok_or(ValidationError::IncompleteVotes { expected, actual })?;
        let winner = if state.roles[accused] == Role::Insider {
            Team::Citizens
        } else {
            Team::Insider
        };

        state.phase = RolePhase::Result {
            votes,
            outcome: RoleOutcome { accused, winner, tally },
        };
        Ok(())
    }
}

impl SessionEngine for RoleDeductionEngine {
    type State = RoleState;
    type Event = RoleEvent;

    const STORAGE_KEY: &'static str = keys::ROLE_DEDUCTION;

    fn apply(&self, state: &mut RoleState, event: RoleEvent) -> Result<(), ValidationError> {
        match (state.phase.clone(), event) {
            (_, RoleEvent::Restart) => self.deal(state),

            (RolePhase::Assign { revealing }, RoleEvent::AdvanceReveal) => {
                let next = revealing.index() + 1;
                if next < state.player_count() {
                    state.phase = RolePhase::Assign {
                        revealing: PlayerId::new(next as u8),
                    };
                } else if state.question_seconds == 0 {
                    Self::enter_discuss(state, 0);
                } else {
                    let seconds = state.question_seconds;
                    state.phase = RolePhase::Question {
                        countdown: Self::start_countdown(state, seconds),
                    };
                }
                Ok(())
            }

            (RolePhase::Question { mut countdown }, RoleEvent::Tick(elapsed)) => {
                if countdown.tick(elapsed) {
                    Self::enter_discuss(state, 0);
                } else {
                    state.phase = RolePhase::Question { countdown };
                }
                Ok(())
            }
            (RolePhase::Question { countdown }, RoleEvent::CorrectAnswerFound) => {
                Self::enter_discuss(state, countdown.remaining);
                Ok(())
            }

            (RolePhase::Discuss { mut countdown }, RoleEvent::Tick(elapsed)) => {
                state.phase = if countdown.tick(elapsed) {
                    Self::accuse(state)
                } else {
                    RolePhase::Discuss { countdown }
                };
                Ok(())
            }
            (RolePhase::Discuss { .. }, RoleEvent::ProceedToVote) => {
                state.phase = Self::accuse(state);
                Ok(())
            }

            (RolePhase::Accuse { .. }, RoleEvent::CastVote { voter, target }) => {
                Self::cast_vote(state, voter, target)
            }
            (RolePhase::Accuse { votes }, RoleEvent::SubmitVotes) => Self::submit_votes(state, votes),

            (_, RoleEvent::Tick(_)) => Err(ValidationError::NoActiveTimer),
            (phase, event) => Err(ValidationError::wrong_phase(event.operation(), phase.name())),
        }
    }

    fn phase_name(&self, state: &RoleState) -> &'static str {
        state.phase.name()
    }

    fn countdown(&self, state: &RoleState) -> Option<Countdown> {
        match state.phase {
            RolePhase::Question { countdown } | RolePhase::Discuss { countdown } => Some(countdown),
            _ => None,
        }
    }
}
