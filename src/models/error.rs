//! Errors reported by the structure engine.

/// Errors that can occur while generating tournament structures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Pool creation was asked to partition an empty roster.
    EmptyRoster,
    /// Elimination needs at least 2 participants.
    InsufficientParticipants,
    /// Elimination does not pad byes, so the participant count must be even.
    OddParticipantCount,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyRoster => {
                write!(f, "Cannot create pools from an empty participant list")
            }
            TournamentError::InsufficientParticipants => {
                write!(f, "At least 2 participants are required for elimination")
            }
            TournamentError::OddParticipantCount => {
                write!(f, "Odd participant count is not supported in elimination without byes")
            }
        }
    }
}
