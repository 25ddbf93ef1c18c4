//! Catalog scoring and the relaxation search.
//!
//! Each descriptor scores against the criteria:
//!
//! | Dimension    | Weight |
//! |--------------|--------|
//! | player count | 2      |
//! | mood         | 1      |
//! | style        | 1      |
//! | cognition    | 1      |
//!
//! Ranking sorts by score, highest first, with a stable sort so equal
//! scores keep catalog order. When a ranking is not usable the engine
//! relaxes one dimension at a time (cognition, then style, then mood) and
//! finally falls back to the player-count filter.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::catalog::{self, Cognition, GameDescriptor, Mood, Style};

/// Most games returned by one recommendation.
pub const MAX_RECOMMENDATIONS: usize = 3;

const PLAYER_COUNT_WEIGHT: u32 = 2;
const PREFERENCE_WEIGHT: u32 = 1;

/// What the group asked for. Built per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    pub player_count: usize,
    pub mood: Mood,
    pub style: Style,
    pub cognition: Cognition,
}

impl RecommendationCriteria {
    pub fn new(player_count: usize, mood: Mood, style: Style, cognition: Cognition) -> Self {
        Self {
            player_count,
            mood,
            style,
            cognition,
        }
    }
}

/// A dimension the descriptor satisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchReason {
    PlayerCount,
    Mood,
    Style,
    Cognition,
}

/// A descriptor with its score against one set of criteria.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredGame<'a> {
    pub descriptor: &'a GameDescriptor,
    pub score: u32,
    pub reasons: SmallVec<[MatchReason; 4]>,
}

impl<'a> ScoredGame<'a> {
    /// Score one descriptor.
    pub fn score(descriptor: &'a GameDescriptor, criteria: &RecommendationCriteria) -> Self {
        let mut score = 0;
        let mut reasons = SmallVec::new();

        if descriptor.accepts(criteria.player_count) {
            score += PLAYER_COUNT_WEIGHT;
            reasons.push(MatchReason::PlayerCount);
        }
        if descriptor.has_mood(criteria.mood) {
            score += PREFERENCE_WEIGHT;
            reasons.push(MatchReason::Mood);
        }
        if descriptor.style == criteria.style {
            score += PREFERENCE_WEIGHT;
            reasons.push(MatchReason::Style);
        }
        if descriptor.cognition == criteria.cognition {
            score += PREFERENCE_WEIGHT;
            reasons.push(MatchReason::Cognition);
        }

        Self {
            descriptor,
            score,
            reasons,
        }
    }

    #[must_use]
    pub fn fits_players(&self) -> bool {
        self.reasons.contains(&MatchReason::PlayerCount)
    }
}

/// The single dimension changed by a relaxation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
    Cognition(Cognition),
    Style(Style),
    Mood(Mood),
}

impl Relaxation {
    fn apply(self, criteria: &RecommendationCriteria) -> RecommendationCriteria {
        let mut relaxed = *criteria;
        match self {
            Relaxation::Cognition(c) => relaxed.cognition = c,
            Relaxation::Style(s) => relaxed.style = s,
            Relaxation::Mood(m) => relaxed.mood = m,
        }
        relaxed
    }
}

/// How a recommendation was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// The criteria as given produced a usable ranking.
    Direct,
    /// One dimension had to be changed.
    ///
    /// A ranking only counts as usable when some game fits the player
    /// count, and relaxing mood, style or cognition never changes that fit.
    /// With the builtin scoring the direct ranking is therefore usable
    /// whenever a relaxed one would be, so this variant is never produced.
    Relaxed(Relaxation),
    /// Nothing ranked usefully; games were filtered by player count alone.
    PlayerCountOnly,
}

/// Ranked picks plus the strategy that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recommendation<'a> {
    pub picks: Vec<ScoredGame<'a>>,
    pub strategy: Strategy,
}

impl<'a> Recommendation<'a> {
    pub fn games(&self) -> Vec<&'a GameDescriptor> {
        self.picks.iter().map(|p| p.descriptor).collect()
    }
}

/// Ranks a catalog against criteria. Never mutates the catalog.
///
/// ## Example
///
/// ```
/// use driveplay::catalog::{Cognition, GameId, Mood, Style};
/// use driveplay::recommend::{RecommendationCriteria, RecommendationEngine};
///
/// let engine = RecommendationEngine::builtin();
/// let picks = engine.recommend(&RecommendationCriteria::new(
///     5, Mood::Party, Style::Competitive, Cognition::High,
/// ));
///
/// assert_eq!(picks[0].id, GameId::INSIDER);
/// assert!(picks.len() <= 3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RecommendationEngine<'a> {
    catalog: &'a [GameDescriptor],
}

impl RecommendationEngine<'static> {
    /// Engine over the bundled catalog.
    pub fn builtin() -> Self {
        Self::new(catalog::builtin())
    }
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(catalog: &'a [GameDescriptor]) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a [GameDescriptor] {
        self.catalog
    }

    /// Score every descriptor, highest first; ties keep catalog order.
    pub fn rank(&self, criteria: &RecommendationCriteria) -> Vec<ScoredGame<'a>> {
        let mut scored: Vec<_> = self
            .catalog
            .iter()
            .map(|d| ScoredGame::score(d, criteria))
            .collect();
        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    /// Up to three games, most relevant first.
    pub fn recommend(&self, criteria: &RecommendationCriteria) -> Vec<&'a GameDescriptor> {
        self.recommend_detailed(criteria).games()
    }

    /// Like [`recommend`](Self::recommend), with scores, match reasons and
    /// the strategy used.
    pub fn recommend_detailed(&self, criteria: &RecommendationCriteria) -> Recommendation<'a> {
        let ranking = self.rank(criteria);
        if Self::usable(&ranking) {
            return Recommendation {
                picks: top(ranking),
                strategy: Strategy::Direct,
            };
        }

        for step in relaxations(criteria) {
            let relaxed = self.rank(&step.apply(criteria));
            if Self::usable(&relaxed) {
                tracing::debug!(?step, "recommendation relaxed one dimension");
                return Recommendation {
                    picks: top(relaxed),
                    strategy: Strategy::Relaxed(step),
                };
            }
        }

        tracing::debug!(
            player_count = criteria.player_count,
            "no usable ranking, filtering by player count only"
        );
        let picks = self
            .catalog
            .iter()
            .map(|d| ScoredGame::score(d, criteria))
            .filter(ScoredGame::fits_players)
            .take(MAX_RECOMMENDATIONS)
            .collect();
        Recommendation {
            picks,
            strategy: Strategy::PlayerCountOnly,
        }
    }

    /// A ranking is worth showing when its best entry scores and at least
    /// one entry can actually be played by the group.
    fn usable(ranking: &[ScoredGame<'_>]) -> bool {
        ranking.first().is_some_and(|best| best.score > 0)
            && ranking.iter().any(ScoredGame::fits_players)
    }
}

fn top(mut ranking: Vec<ScoredGame<'_>>) -> Vec<ScoredGame<'_>> {
    ranking.truncate(MAX_RECOMMENDATIONS);
    ranking
}

/// Relaxation steps in priority order: cognition, style, mood.
fn relaxations(criteria: &RecommendationCriteria) -> impl Iterator<Item = Relaxation> {
    let cognition = criteria.cognition;
    let style = criteria.style;
    let mood = criteria.mood;

    Cognition::ALL
        .into_iter()
        .filter(move |c| *c != cognition)
        .map(Relaxation::Cognition)
        .chain(
            Style::ALL
                .into_iter()
                .filter(move |s| *s != style)
                .map(Relaxation::Style),
        )
        .chain(
            Mood::ALL
                .into_iter()
                .filter(move |m| *m != mood)
                .map(Relaxation::Mood),
        )
}
