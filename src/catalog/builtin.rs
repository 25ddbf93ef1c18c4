//! The bundled catalog: one entry per session engine.

use std::sync::OnceLock;

use super::descriptor::{Cognition, GameDescriptor, GameId, Mood, Style};

static BUILTIN: OnceLock<Vec<GameDescriptor>> = OnceLock::new();

/// The bundled games, in display order.
///
/// Order matters: the recommender breaks score ties by catalog position.
pub fn builtin() -> &'static [GameDescriptor] {
    BUILTIN.get_or_init(|| {
        vec![
            GameDescriptor::new(GameId::TALK_DICE, "Talk Dice", 2, 6)
                .with_moods(&[Mood::Relax, Mood::Party])
                .with_style(Style::Coop)
                .with_cognition(Cognition::Low)
                .with_estimated_time("5-10 min"),
            GameDescriptor::new(GameId::ITO, "Ito (Lite)", 3, 6)
                .with_moods(&[Mood::Relax, Mood::Serious])
                .with_style(Style::Coop)
                .with_cognition(Cognition::Medium)
                .with_estimated_time("10-15 min"),
            GameDescriptor::new(GameId::INSIDER, "Insider", 4, 6)
                .with_moods(&[Mood::Party, Mood::Serious])
                .with_style(Style::Competitive)
                .with_cognition(Cognition::High)
                .with_estimated_time("10-15 min"),
        ]
    })
}

/// Look up a bundled game.
pub fn find(id: GameId) -> Option<&'static GameDescriptor> {
    builtin().iter().find(|g| g.id == id)
}

/// Bundled games a roster of `player_count` can play.
pub fn playable(player_count: usize) -> impl Iterator<Item = &'static GameDescriptor> {
    builtin().iter().filter(move |g| g.accepts(player_count))
}
