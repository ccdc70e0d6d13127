use crate::game::get_legal_moves::get_valid_moves;
use crate::game::layout::Ends;
use crate::game::tile::{Move, Tile};
use crate::{DominoError, Result};
use serde::{Deserialize, Serialize};

/// Tiles held by one player, in the order they were dealt or drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn contains(&self, tile: &Tile) -> bool {
        self.tiles.contains(tile)
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn remove(&mut self, tile: &Tile) -> Result<Tile> {
        remove_tile(&mut self.tiles, tile)
    }

    /// True if any tile fits either end. Unset ends accept every tile.
    pub fn has_valid_move(&self, ends: Ends) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.matches(ends.left()) || tile.matches(ends.right()))
    }

    pub fn valid_moves(&self, ends: Ends) -> Vec<Move> {
        get_valid_moves(&self.tiles, ends)
    }

    pub fn pip_total(&self) -> i32 {
        self.tiles.iter().map(Tile::value).sum()
    }
}

/// Removes the first tile equal to `tile` (orientation ignored) and returns it.
pub fn remove_tile(tiles: &mut Vec<Tile>, tile: &Tile) -> Result<Tile> {
    let index = tiles
        .iter()
        .position(|held| held == tile)
        .ok_or(DominoError::TileNotInHand(*tile))?;
    Ok(tiles.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_remove_matches_either_orientation() {
        let mut hand = Hand::new(vec![Tile::new(1, 2), Tile::new(3, 4), Tile::new(5, 6)]);

        let removed = hand.remove(&Tile::new(4, 3)).unwrap();
        assert_eq!((removed.left, removed.right), (3, 4));
        assert_eq!(hand.tiles(), &[Tile::new(1, 2), Tile::new(5, 6)]);
    }

    #[test]
    fn test_remove_missing_tile_fails() {
        let mut hand = Hand::new(vec![Tile::new(1, 2)]);
        let err = hand.remove(&Tile::new(0, 0)).unwrap_err();
        assert_matches!(err, DominoError::TileNotInHand(t) if t == Tile::new(0, 0));
        assert_eq!(hand.len(), 1, "a failed removal leaves the hand untouched");
    }

    #[test]
    fn test_has_valid_move() {
        let hand = Hand::new(vec![Tile::new(1, 2), Tile::new(3, 4)]);
        assert!(hand.has_valid_move(Ends::UNSET));
        assert!(hand.has_valid_move(Ends::new(6, 4)));
        assert!(!hand.has_valid_move(Ends::new(5, 6)));
        assert!(!Hand::default().has_valid_move(Ends::UNSET));
    }

    #[test]
    fn test_add_and_pip_total() {
        let mut hand = Hand::new(vec![Tile::new(6, 6)]);
        hand.add(Tile::new(0, 3));
        assert_eq!(hand.len(), 2);
        assert!(hand.contains(&Tile::new(3, 0)));
        assert_eq!(hand.pip_total(), 15);
    }
}
