//! Depth-limited minimax with alpha-beta pruning.
//!
//! The hand passed first to [`MinimaxSearch::search`] always belongs to the
//! player about to move; hands swap places at every ply, together with the
//! `maximizing` flag. Leaves are scored with [`evaluate_state`] for the player
//! to move at that leaf.
//!
//! Difficulty changes the search in three places:
//! - depth (2, 3 or 4 plies)
//! - Easy keeps a random half of the maximizer's candidates at every node
//! - Easy never takes an alpha-beta cutoff

use crate::game::get_legal_moves::get_valid_moves;
use crate::game::hand::remove_tile;
use crate::game::layout::{simulate_move, Ends, Layout};
use crate::game::tile::{Move, Tile};
use crate::minimax::difficulty::Difficulty;
use crate::minimax::evaluation::evaluate_state;
use crate::minimax::search_result::SearchResult;
use log::debug;
use rand::{Rng, RngExt};

/// Minimax engine for one decision. Owns nothing but the difficulty, a
/// borrowed random source and a node counter.
pub struct MinimaxSearch<'r, R: Rng> {
    difficulty: Difficulty,
    rng: &'r mut R,
    nodes: u64,
}

impl<'r, R: Rng> MinimaxSearch<'r, R> {
    /// # Arguments
    /// * `difficulty` - fixed for the whole search
    /// * `rng` - only consumed by Easy's candidate sampling
    pub fn new(difficulty: Difficulty, rng: &'r mut R) -> Self {
        Self {
            difficulty,
            rng,
            nodes: 0,
        }
    }

    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    /// Searches `depth` plies below the given position.
    ///
    /// `to_act` moves next; `waiting` is the other hand. Every child is built
    /// from fresh copies of the layout and the mover's hand, so sibling
    /// branches never observe each other's moves.
    ///
    /// # Panics
    /// If the layout rejects an enumerated move or the played tile cannot be
    /// removed from the mover's copy. Either means the enumerator and the
    /// simulator disagree.
    #[allow(clippy::too_many_arguments)]
    pub fn search(
        &mut self,
        layout: &Layout,
        ends: Ends,
        to_act: &[Tile],
        waiting: &[Tile],
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 || to_act.is_empty() || waiting.is_empty() {
            return SearchResult::scored(evaluate_state(to_act, waiting, self.difficulty));
        }

        let mut candidates = get_valid_moves(to_act, ends);

        if candidates.is_empty() {
            // Pass: same layout, the other hand moves.
            let passed = self.search(layout, ends, waiting, to_act, depth - 1, alpha, beta, !maximizing);
            return SearchResult::scored(passed.score);
        }

        if maximizing && self.difficulty.samples_moves() {
            let keep = (candidates.len() / 2).max(1);
            sample_in_place(&mut candidates, keep, &mut *self.rng);
        }

        let mut best = SearchResult::scored(if maximizing { i32::MIN } else { i32::MAX });

        for mv in candidates {
            let (next_layout, next_ends) = simulate_move(layout, mv.tile, mv.side, ends)
                .unwrap_or_else(|err| panic!("enumerated move {mv} was rejected: {err}"));
            let mut remaining = to_act.to_vec();
            remove_tile(&mut remaining, &mv.tile)
                .unwrap_or_else(|err| panic!("enumerated move {mv} has no tile to play: {err}"));

            let child = self.search(
                &next_layout,
                next_ends,
                waiting,
                &remaining,
                depth - 1,
                alpha,
                beta,
                !maximizing,
            );

            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improves || best.best_move.is_none() {
                best = SearchResult {
                    score: child.score,
                    best_move: Some(mv),
                };
            }

            if maximizing {
                alpha = alpha.max(best.score);
            } else {
                beta = beta.min(best.score);
            }
            if beta <= alpha && self.difficulty.prunes() {
                break;
            }
        }

        best
    }
}

/// Keeps `amount` entries chosen uniformly without replacement, in draw order.
fn sample_in_place<T, R: Rng>(items: &mut Vec<T>, amount: usize, rng: &mut R) {
    let amount = amount.min(items.len());
    for i in 0..amount {
        let j = rng.random_range(i..items.len());
        items.swap(i, j);
    }
    items.truncate(amount);
}

/// Picks a move for the player holding `acting_hand`.
///
/// Returns `None` when either hand is empty, and when `acting_hand` has no
/// legal placement (callers check `has_valid_move` first and draw or pass).
pub fn find_best_move<R: Rng>(
    layout: &Layout,
    ends: Ends,
    acting_hand: &[Tile],
    opponent_hand: &[Tile],
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    if acting_hand.is_empty() || opponent_hand.is_empty() {
        return None;
    }

    let depth = difficulty.search_depth();
    let mut search = MinimaxSearch::new(difficulty, rng);
    let result = search.search(
        layout,
        ends,
        acting_hand,
        opponent_hand,
        depth,
        i32::MIN,
        i32::MAX,
        true,
    );

    debug!(
        "minimax {} depth={} nodes={} score={} move={:?}",
        difficulty,
        depth,
        search.nodes_visited(),
        result.score,
        result.best_move
    );

    result.best_move
}
