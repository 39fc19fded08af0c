//! Pool standings: win/manche aggregation with head-to-head tiebreak.

use crate::models::{GameMatch, MatchParticipant, ParticipantId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One row of a pool's standings. Derived from a match set on demand.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub participant_id: ParticipantId,
    pub name: String,
    pub wins: u32,
    /// Accumulated manches across all of this participant's scored matches.
    pub total_points: u32,
}

impl RankingEntry {
    fn from_match_participant(p: &MatchParticipant) -> Self {
        Self {
            participant_id: p.participant_id,
            name: p.name.clone(),
            wins: 0,
            total_points: 0,
        }
    }
}

/// Compute the standings for a set of matches (typically one pool's).
///
/// Every scored appearance adds the participant's manches to their total;
/// every decided match adds one win for its winner (draws add none). The
/// order is wins descending, then total points descending, then the direct
/// match between the tied pair (its winner ranks first), then participant id
/// ascending. Matches are never mutated.
pub fn compute_pool_ranking(matches: &[GameMatch]) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = Vec::new();

    for game in matches {
        for p in game.participants.iter().flatten() {
            let idx = entry_index(&mut entries, p);
            if let Some(score) = p.score {
                entries[idx].total_points += score;
            }
        }
        if let Some(winner) = game.winner() {
            let idx = entry_index(&mut entries, winner);
            entries[idx].wins += 1;
        }
    }

    sort_by_rank(&mut entries, matches);
    entries
}

/// Index of the entry for `p`, inserting a zeroed one on first appearance.
fn entry_index(entries: &mut Vec<RankingEntry>, p: &MatchParticipant) -> usize {
    match entries
        .iter()
        .position(|e| e.participant_id == p.participant_id)
    {
        Some(idx) => idx,
        None => {
            entries.push(RankingEntry::from_match_participant(p));
            entries.len() - 1
        }
    }
}

/// Stable insertion sort over the standings.
///
/// The head-to-head criterion can be cyclic across three or more tied
/// entries, so the comparator is not a total order; std's sort_by may panic
/// on such comparators, insertion sort never does.
fn sort_by_rank(entries: &mut [RankingEntry], matches: &[GameMatch]) {
    for i in 1..entries.len() {
        let mut j = i;
        while j > 0 && compare_entries(&entries[j - 1], &entries[j], matches) == Ordering::Greater {
            entries.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn compare_entries(a: &RankingEntry, b: &RankingEntry, matches: &[GameMatch]) -> Ordering {
    b.wins
        .cmp(&a.wins)
        .then_with(|| b.total_points.cmp(&a.total_points))
        .then_with(
            || match direct_match_winner(a.participant_id, b.participant_id, matches) {
                Some(id) if id == a.participant_id => Ordering::Less,
                Some(id) if id == b.participant_id => Ordering::Greater,
                // No direct match, or it was drawn: arbitrary but stable.
                _ => a.participant_id.cmp(&b.participant_id),
            },
        )
}

/// Winner of the direct match between two participants, if they played one
/// and it was decided. Scans the supplied match list; pools are small enough
/// that a per-comparison scan is fine.
fn direct_match_winner(
    a: ParticipantId,
    b: ParticipantId,
    matches: &[GameMatch],
) -> Option<ParticipantId> {
    for game in matches {
        let [Some(p1), Some(p2)] = &game.participants else {
            continue;
        };
        let is_pair = (p1.participant_id == a && p2.participant_id == b)
            || (p1.participant_id == b && p2.participant_id == a);
        if !is_pair {
            continue;
        }
        if let Some(winner) = game.winner() {
            return Some(winner.participant_id);
        }
    }
    None
}
