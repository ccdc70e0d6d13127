use crate::game::layout::Ends;
use crate::game::tile::{Move, Side, Tile};

/// Lists every legal (tile, side) placement for `hand`, in hand order.
///
/// A right-side placement is skipped when both ends show the same face, so a
/// tile fitting a lone double is only offered once. On an empty layout every
/// tile is offered on both sides.
pub fn get_valid_moves(hand: &[Tile], ends: Ends) -> Vec<Move> {
    let mut moves = Vec::with_capacity(hand.len() * 2);
    for &tile in hand {
        if ends.left().is_none() || tile.matches(ends.left()) {
            moves.push(Move::new(tile, Side::Left));
        }
        if ends.right().is_none() || (tile.matches(ends.right()) && ends.left() != ends.right()) {
            moves.push(Move::new(tile, Side::Right));
        }
    }
    moves
}
