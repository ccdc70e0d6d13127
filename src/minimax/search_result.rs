use crate::game::tile::Move;
use serde::Serialize;

/// Score of a searched node and the move that achieves it, if one was played there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Move>,
}

impl SearchResult {
    /// A scored node with no move attached (cutoff, terminal or pass).
    pub const fn scored(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}
