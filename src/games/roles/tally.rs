//! Vote counting.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};

/// Votes received by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCount {
    pub target: PlayerId,
    pub votes: usize,
}

/// Count votes per target.
///
/// Sorted by count, highest first; equal counts go to the lower seat first.
/// Players with no votes are left out.
///
/// ```
/// use driveplay::core::{PlayerId, PlayerMap};
/// use driveplay::games::roles::tally;
///
/// let p = PlayerId::new;
/// let votes = PlayerMap::new(4, |voter| Some(if voter.index() < 2 { p(3) } else { p(1) }));
/// let counts = tally(&votes);
///
/// // 2-2 tie: the lower seat is accused
/// assert_eq!(counts[0].target, p(1));
/// assert_eq!(counts[1].target, p(3));
/// ```
#[must_use]
pub fn tally(votes: &PlayerMap<Option<PlayerId>>) -> Vec<VoteCount> {
    let mut counts: PlayerMap<usize> = PlayerMap::with_default(votes.player_count());
    for target in votes.values().flatten() {
        if counts.contains(*target) {
            counts[*target] += 1;
        }
    }

    let mut tally: Vec<VoteCount> = counts
        .iter()
        .filter(|(_, votes)| **votes > 0)
        .map(|(target, &votes)| VoteCount { target, votes })
        .collect();
    tally.sort_by(|a, b| b.votes.cmp(&a.votes).then(a.target.cmp(&b.target)));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    fn votes(targets: &[u8]) -> PlayerMap<Option<PlayerId>> {
        PlayerMap::new(targets.len(), |voter| Some(PlayerId::new(targets[voter.index()])))
    }

    #[test]
    fn test_clear_majority() {
        let counts = tally(&votes(&[2, 2, 2, 1, 2]));
        assert_eq!(
            counts,
            vec![
                VoteCount { target: PlayerId::new(2), votes: 4 },
                VoteCount { target: PlayerId::new(1), votes: 1 },
            ]
        );
    }

    #[test]
    fn test_tie_goes_to_lowest_seat() {
        let counts = tally(&votes(&[3, 3, 1, 1]));
        assert_eq!(counts[0].target, PlayerId::new(1));
        assert_eq!(counts[0].votes, 2);
    }

    #[test]
    fn test_missing_votes_are_skipped() {
        let mut partial = votes(&[1, 0, 1, 1]);
        partial[PlayerId::new(0)] = None;
        let counts = tally(&partial);
        assert_eq!(counts.iter().map(|c| c.votes).sum::<usize>(), 3);
    }
}
