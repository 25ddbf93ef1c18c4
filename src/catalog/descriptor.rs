//! Game descriptors - static catalog data.
//!
//! A `GameDescriptor` holds the properties the recommender scores against:
//! supported player range, moods, play style and cognitive load.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Identifier for a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u16);

impl GameId {
    /// Topic rotation ("Talk Dice").
    pub const TALK_DICE: GameId = GameId(0);
    /// Number ordering ("Ito").
    pub const ITO: GameId = GameId(1);
    /// Role deduction ("Insider").
    pub const INSIDER: GameId = GameId(2);

    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Atmosphere a group is looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Relax,
    Party,
    Serious,
}

impl Mood {
    /// All moods, in relaxation priority order.
    pub const ALL: [Mood; 3] = [Mood::Relax, Mood::Party, Mood::Serious];
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Mood::Relax => "Relaxed",
            Mood::Party => "Party",
            Mood::Serious => "Serious",
        })
    }
}

/// Whether players work together or against each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Coop,
    Competitive,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Coop, Style::Competitive];
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Style::Coop => "Cooperative",
            Style::Competitive => "Competitive",
        })
    }
}

/// How much thinking a game asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cognition {
    Low,
    Medium,
    High,
}

impl Cognition {
    pub const ALL: [Cognition; 3] = [Cognition::Low, Cognition::Medium, Cognition::High];
}

impl std::fmt::Display for Cognition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Cognition::Low => "Light",
            Cognition::Medium => "Moderate",
            Cognition::High => "Heavy",
        })
    }
}

/// Static description of a playable game.
///
/// ## Example
///
/// ```
/// use driveplay::catalog::{Cognition, GameDescriptor, GameId, Mood, Style};
///
/// let game = GameDescriptor::new(GameId::new(7), "Charades", 3, 8)
///     .with_moods(&[Mood::Party])
///     .with_style(Style::Competitive)
///     .with_cognition(Cognition::Low);
///
/// assert!(game.accepts(5));
/// assert!(!game.accepts(2));
/// assert!(game.has_mood(Mood::Party));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDescriptor {
    pub id: GameId,
    pub name: String,
    pub min_players: usize,
    pub max_players: usize,
    /// Moods this game suits. A game may suit several.
    pub moods: SmallVec<[Mood; 3]>,
    pub style: Style,
    pub cognition: Cognition,
    /// Free-form play length shown to the group (e.g. "10-15 min").
    pub estimated_time: String,
}

impl GameDescriptor {
    /// Create a descriptor with no moods, cooperative, low cognition.
    pub fn new(id: GameId, name: impl Into<String>, min_players: usize, max_players: usize) -> Self {
        Self {
            id,
            name: name.into(),
            min_players,
            max_players,
            moods: SmallVec::new(),
            style: Style::Coop,
            cognition: Cognition::Low,
            estimated_time: String::new(),
        }
    }

    #[must_use]
    pub fn with_moods(mut self, moods: &[Mood]) -> Self {
        self.moods = SmallVec::from_slice(moods);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_cognition(mut self, cognition: Cognition) -> Self {
        self.cognition = cognition;
        self
    }

    #[must_use]
    pub fn with_estimated_time(mut self, estimate: impl Into<String>) -> Self {
        self.estimated_time = estimate.into();
        self
    }

    /// Whether `player_count` lies within the supported range (inclusive).
    #[must_use]
    pub fn accepts(&self, player_count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&player_count)
    }

    #[must_use]
    pub fn has_mood(&self, mood: Mood) -> bool {
        self.moods.contains(&mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_is_inclusive() {
        let game = GameDescriptor::new(GameId::new(1), "Test", 3, 6);
        assert!(!game.accepts(2));
        assert!(game.accepts(3));
        assert!(game.accepts(6));
        assert!(!game.accepts(7));
    }

    #[test]
    fn test_builder_sets_fields() {
        let game = GameDescriptor::new(GameId::new(1), "Test", 2, 4)
            .with_moods(&[Mood::Relax, Mood::Serious])
            .with_style(Style::Competitive)
            .with_cognition(Cognition::High)
            .with_estimated_time("20 min");

        assert!(game.has_mood(Mood::Serious));
        assert!(!game.has_mood(Mood::Party));
        assert_eq!(game.style, Style::Competitive);
        assert_eq!(game.cognition, Cognition::High);
        assert_eq!(game.estimated_time, "20 min");
    }

    #[test]
    fn test_enum_serde_names() {
        assert_eq!(serde_json::to_string(&Mood::Party).unwrap(), "\"party\"");
        assert_eq!(serde_json::to_string(&Style::Coop).unwrap(), "\"coop\"");
        let cognition: Cognition = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(cognition, Cognition::Medium);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Mood::Relax.to_string(), "Relaxed");
        assert_eq!(Style::Competitive.to_string(), "Competitive");
        assert_eq!(Cognition::High.to_string(), "Heavy");
    }
}
