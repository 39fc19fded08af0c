//! Match, MatchParticipant, and MatchStatus for pool and elimination play.

use crate::models::participant::{Participant, ParticipantId};
use crate::models::pool::PoolId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Unique identifier for a match. Newly generated matches carry a placeholder
/// (0 for elimination rounds, sequential within a pool) until persisted.
pub type MatchId = i64;

/// Unique identifier for a tournament. Always 0 on generated matches; the
/// caller patches in the real id before persistence.
pub type TournamentId = i64;

/// Lifecycle state of a match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

/// A participant as attached to one match: resolved display name plus the
/// score recorded for that match. `score == None` means not yet played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchParticipant {
    pub participant_id: ParticipantId,
    pub name: String,
    pub score: Option<u32>,
}

impl MatchParticipant {
    /// Project a roster participant into a match slot with no score yet.
    pub fn from_participant(p: &Participant) -> Self {
        Self {
            participant_id: p.id,
            name: p.display_name(),
            score: None,
        }
    }

    /// Copy of this participant with the score cleared, for seeding into a
    /// later round.
    pub fn advance(&self) -> Self {
        Self {
            participant_id: self.participant_id,
            name: self.name.clone(),
            score: None,
        }
    }
}

/// Normalize an optional roster entry into a match slot. Absence (a bye or a
/// not-yet-determined opponent) propagates rather than erroring.
pub fn to_match_participant(participant: Option<&Participant>) -> Option<MatchParticipant> {
    participant.map(MatchParticipant::from_participant)
}

/// A single match: two participant slots (either may be absent for a bye).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    /// Scheduled date, if any; set by the scheduling layer, never by the engine.
    pub match_date: Option<NaiveDate>,
    pub participants: [Option<MatchParticipant>; 2],
    pub status: MatchStatus,
    pub round: u32,
    /// Owning pool for round-robin matches; None for elimination matches.
    pub pool_id: Option<PoolId>,
}

impl GameMatch {
    /// Create a pending match with placeholder ids and no scheduled date.
    pub fn new(
        slot_1: Option<MatchParticipant>,
        slot_2: Option<MatchParticipant>,
        round: u32,
        pool_id: Option<PoolId>,
    ) -> Self {
        Self {
            id: 0,
            tournament_id: 0,
            match_date: None,
            participants: [slot_1, slot_2],
            status: MatchStatus::Pending,
            round,
            pool_id,
        }
    }

    /// Winner of this match: both slots present, both scores recorded, and
    /// one score strictly higher. Byes, unplayed matches, and draws have no
    /// winner.
    pub fn winner(&self) -> Option<&MatchParticipant> {
        let [Some(p1), Some(p2)] = &self.participants else {
            return None;
        };
        let s1 = p1.score?;
        let s2 = p2.score?;
        match s1.cmp(&s2) {
            std::cmp::Ordering::Greater => Some(p1),
            std::cmp::Ordering::Less => Some(p2),
            std::cmp::Ordering::Equal => None,
        }
    }
}
