//! Game session engines.
//!
//! Each game lives in its own module and implements
//! [`SessionEngine`](crate::session::SessionEngine):
//!
//! - `topic`: shared-screen topic rotation
//! - `ordering`: cooperative number ordering with hints
//! - `roles`: hidden-role deduction with timed phases

pub mod ordering;
pub mod roles;
pub mod topic;

use im::Vector;

use crate::catalog::{self, GameId};
use crate::core::{Player, ValidationError};

/// Validate a roster for `game` and take a copy for the session.
///
/// Players must be seated in order (`Player::roster` does this) so that
/// per-player maps line up with seats.
pub(crate) fn seat(players: &[Player], game: GameId) -> Result<Vector<Player>, ValidationError> {
    let descriptor = catalog::find(game).ok_or(ValidationError::UnknownGame(game))?;
    ValidationError::check_player_count(players.len(), descriptor.min_players, descriptor.max_players)?;

    if let Some((_, player)) = players
        .iter()
        .enumerate()
        .find(|(seat, player)| player.id.index() != *seat)
    {
        return Err(ValidationError::UnknownPlayer(player.id));
    }
    Ok(players.iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_seat_checks_bounds() {
        let roster = Player::roster(["a", "b", "c"]);
        assert_eq!(seat(&roster, GameId::ITO).unwrap().len(), 3);
        assert_eq!(
            seat(&roster, GameId::INSIDER).unwrap_err().code(),
            "player_count_out_of_range"
        );
    }

    #[test]
    fn test_seat_rejects_gaps() {
        let roster = vec![
            Player::new(PlayerId::new(0), "a"),
            Player::new(PlayerId::new(2), "b"),
            Player::new(PlayerId::new(1), "c"),
        ];
        assert_eq!(
            seat(&roster, GameId::ITO),
            Err(ValidationError::UnknownPlayer(PlayerId::new(2)))
        );
    }
}
