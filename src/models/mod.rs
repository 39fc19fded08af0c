//! Data structures for the tournament engine: participants, matches, pools.

mod error;
mod game;
mod participant;
mod pool;

pub use error::TournamentError;
pub use game::{
    to_match_participant, GameMatch, MatchId, MatchParticipant, MatchStatus, TournamentId,
};
pub use participant::{Lineup, Member, Participant, ParticipantId};
pub use pool::{Pool, PoolId};
