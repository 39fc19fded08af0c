//! Tournament structure logic: pool draws, elimination pairing, rankings.

mod elimination;
mod pools;
mod ranking;

pub use elimination::{generate_elimination_matches, generate_final_from_semi_winners};
pub use pools::{create_pools, generate_pool_matches};
pub use ranking::{compute_pool_ranking, RankingEntry};
