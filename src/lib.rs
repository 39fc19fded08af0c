//! Tournament structure engine: pool draws, round-robin schedules,
//! elimination brackets, and standings.
//!
//! The engine is a pure, synchronous computation module. It takes a roster of
//! participants and produces matches, pools, and rankings; recording results,
//! persistence, and id assignment belong to the caller. Generated matches
//! carry placeholder ids (see [`GameMatch`]) that the backend overwrites.

pub mod logic;
pub mod models;

pub use logic::{
    compute_pool_ranking, create_pools, generate_elimination_matches,
    generate_final_from_semi_winners, generate_pool_matches, RankingEntry,
};
pub use models::{
    to_match_participant, GameMatch, Lineup, MatchId, MatchParticipant, MatchStatus, Member,
    Participant, ParticipantId, Pool, PoolId, TournamentError, TournamentId,
};
