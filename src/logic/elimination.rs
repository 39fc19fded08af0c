//! Elimination phase: first-round pairing and final generation from
//! semi-final winners.

use crate::models::{to_match_participant, GameMatch, Participant, TournamentError};
use rand::seq::SliceRandom;

/// Pair a roster into round-1 elimination matches.
///
/// Participants are shuffled, then paired consecutively (0-1, 2-3, ...).
/// Match ids are left at 0 for the backend to assign. The roster must have
/// at least 2 participants and an even count; byes are not padded in.
pub fn generate_elimination_matches(
    participants: &[Participant],
) -> Result<Vec<GameMatch>, TournamentError> {
    if participants.len() < 2 {
        return Err(TournamentError::InsufficientParticipants);
    }
    if participants.len() % 2 != 0 {
        return Err(TournamentError::OddParticipantCount);
    }

    let mut shuffled = participants.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());

    let mut matches = Vec::new();
    for pair in shuffled.chunks_exact(2) {
        let p1 = to_match_participant(pair.first());
        let p2 = to_match_participant(pair.get(1));
        // A pair with an absent side is skipped, not an error.
        if let (Some(p1), Some(p2)) = (p1, p2) {
            matches.push(GameMatch::new(Some(p1), Some(p2), 1, None));
        }
    }
    Ok(matches)
}

/// Build the final from two semi-final matches.
///
/// Returns one round-3 match pairing the semi-final winners, or an empty list
/// if either semi-final is still undecided (unplayed or drawn) - the caller
/// retries once results are in.
pub fn generate_final_from_semi_winners(
    semi_1: &GameMatch,
    semi_2: &GameMatch,
) -> Vec<GameMatch> {
    match (semi_1.winner(), semi_2.winner()) {
        (Some(w1), Some(w2)) => {
            vec![GameMatch::new(Some(w1.advance()), Some(w2.advance()), 3, None)]
        }
        _ => Vec::new(),
    }
}
