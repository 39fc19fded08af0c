//! Pool: a group of participants who all play each other once.

use crate::models::game::GameMatch;
use crate::models::participant::Participant;
use serde::{Deserialize, Serialize};

/// Unique identifier for a pool within a tournament (1-based).
pub type PoolId = i64;

/// A pool: fixed membership plus its round-robin match schedule. Membership
/// never changes after creation; a re-draw replaces the whole pool.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub name: String,
    pub participants: Vec<Participant>,
    pub matches: Vec<GameMatch>,
}

impl Pool {
    /// Create an empty pool for the given 0-based index: id is `index + 1`,
    /// name is `"Poule A"`, `"Poule B"`, ... by index.
    pub fn with_index(index: usize) -> Self {
        Self {
            id: index as PoolId + 1,
            name: format!("Poule {}", pool_letter(index)),
            participants: Vec::new(),
            matches: Vec::new(),
        }
    }
}

/// Letter for a 0-based pool index: 'A' for 0, 'B' for 1, ... Indexes past
/// 25 run off the end of the alphabet into the following code points.
fn pool_letter(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}
