//! Participant and Member data structures (solo players and duo teams).

use serde::{Deserialize, Serialize};

/// Unique identifier for a participant (used in matches and rankings).
pub type ParticipantId = i64;

/// One human behind a participant entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
}

impl Member {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Who plays under a participant entry: a single player or a duo team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lineup {
    Solo(Member),
    Team(Member, Member),
}

/// A tournament participant: a roster entry that competes as one unit.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub lineup: Lineup,
}

impl Participant {
    /// Create a solo participant; the entry is named after its single member.
    pub fn solo(id: ParticipantId, member: Member) -> Self {
        Self {
            id,
            name: member.name.clone(),
            lineup: Lineup::Solo(member),
        }
    }

    /// Create a duo team with its own team name.
    pub fn team(id: ParticipantId, name: impl Into<String>, first: Member, second: Member) -> Self {
        Self {
            id,
            name: name.into(),
            lineup: Lineup::Team(first, second),
        }
    }

    /// Name shown in match listings: the participant's own name for a solo,
    /// `"<team name> (<member> & <member>)"` for a team.
    pub fn display_name(&self) -> String {
        match &self.lineup {
            Lineup::Solo(_) => self.name.clone(),
            Lineup::Team(first, second) => {
                format!("{} ({} & {})", self.name, first.name, second.name)
            }
        }
    }
}
