//! Pool phase: balanced pool draw and round-robin match generation.

use crate::models::{
    to_match_participant, GameMatch, Participant, Pool, PoolId, TournamentError,
};
use rand::seq::SliceRandom;

/// Partition a roster into balanced pools, each with its full round-robin
/// schedule.
///
/// 1. Clamp the requested pool count to `1..=participants.len()` (never an
///    empty pool, never zero pools).
/// 2. Shuffle the roster so assignment does not inherit list-order seeding.
/// 3. Deal round-robin: shuffled participant `i` goes to pool `i % count`.
/// 4. Generate every pool's matches before returning.
///
/// An empty roster is rejected rather than producing a pool with nobody in it.
pub fn create_pools(
    participants: &[Participant],
    requested_pool_count: usize,
) -> Result<Vec<Pool>, TournamentError> {
    if participants.is_empty() {
        return Err(TournamentError::EmptyRoster);
    }
    let pool_count = requested_pool_count.clamp(1, participants.len());
    log::debug!(
        "creating {} pool(s) for {} participant(s)",
        pool_count,
        participants.len()
    );

    let mut shuffled = participants.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());

    let mut pools: Vec<Pool> = (0..pool_count).map(Pool::with_index).collect();
    for (idx, participant) in shuffled.into_iter().enumerate() {
        pools[idx % pool_count].participants.push(participant);
    }

    for pool in &mut pools {
        pool.matches = generate_pool_matches(&pool.participants, pool.id);
        log::debug!(
            "{}: {} participant(s), {} match(es)",
            pool.name,
            pool.participants.len(),
            pool.matches.len()
        );
    }

    Ok(pools)
}

/// Generate the full round-robin schedule for one pool: every unordered pair
/// exactly once, enumerated `(i, j)` with `i < j` so match ids are assigned
/// deterministically (1, 2, 3, ...) regardless of the random draw order.
///
/// Each match starts pending in round 1 with `tournament_id` left at 0 for
/// the caller to patch in. Pools of 0 or 1 participants yield no matches.
pub fn generate_pool_matches(participants: &[Participant], pool_id: PoolId) -> Vec<GameMatch> {
    let mut matches = Vec::new();
    let mut match_id = 1;
    for i in 0..participants.len() {
        for j in (i + 1)..participants.len() {
            let p1 = to_match_participant(participants.get(i));
            let p2 = to_match_participant(participants.get(j));
            // A pair with an absent side is skipped, not an error.
            if let (Some(p1), Some(p2)) = (p1, p2) {
                let mut game = GameMatch::new(Some(p1), Some(p2), 1, Some(pool_id));
                game.id = match_id;
                match_id += 1;
                matches.push(game);
            }
        }
    }
    matches
}
