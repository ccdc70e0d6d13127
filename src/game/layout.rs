use crate::game::tile::{Move, Side, Tile};
use crate::{DominoError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The two playable faces at the extremities of the layout.
///
/// Either both ends are set or neither is (empty layout); a half-set pair
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Ends {
    left: Option<u8>,
    right: Option<u8>,
}

impl Ends {
    pub const UNSET: Ends = Ends {
        left: None,
        right: None,
    };

    pub const fn new(left: u8, right: u8) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
        }
    }

    pub fn left(&self) -> Option<u8> {
        self.left
    }

    pub fn right(&self) -> Option<u8> {
        self.right
    }

    pub fn get(&self, side: Side) -> Option<u8> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.left.is_none()
    }
}

/// Tiles placed on the table, left to right. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    tiles: VecDeque<Tile>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    pub fn tiles(&self) -> impl ExactSizeIterator<Item = &Tile> + DoubleEndedIterator {
        self.tiles.iter()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Exposed faces: the first tile's left face and the last tile's right face.
    pub fn ends(&self) -> Ends {
        match (self.tiles.front(), self.tiles.back()) {
            (Some(first), Some(last)) => Ends::new(first.left, last.right),
            _ => Ends::UNSET,
        }
    }

    /// Places a move on the authoritative layout and returns the new ends.
    pub fn apply(&mut self, mv: Move) -> Result<Ends> {
        let ends = self.ends();
        self.attach(mv.tile, mv.side, ends)?;
        Ok(self.ends())
    }

    /// Attaches `tile` to `side`, flipping it when its outer face would join.
    fn attach(&mut self, tile: Tile, side: Side, ends: Ends) -> Result<()> {
        let Some(end) = ends.get(side) else {
            self.tiles.push_back(tile);
            return Ok(());
        };

        match side {
            Side::Left => {
                let oriented = if tile.right == end { tile } else { tile.flipped() };
                if oriented.right != end {
                    return Err(DominoError::InvalidMove { tile, side, end });
                }
                self.tiles.push_front(oriented);
            }
            Side::Right => {
                let oriented = if tile.left == end { tile } else { tile.flipped() };
                if oriented.left != end {
                    return Err(DominoError::InvalidMove { tile, side, end });
                }
                self.tiles.push_back(oriented);
            }
        }
        Ok(())
    }
}

/// Plays `tile` on `side` of a copy of `layout`, returning the copy and its ends.
///
/// The input layout is never touched, so sibling search branches can share it.
pub fn simulate_move(layout: &Layout, tile: Tile, side: Side, ends: Ends) -> Result<(Layout, Ends)> {
    let mut next = layout.clone();
    next.attach(tile, side, ends)?;
    let next_ends = next.ends();
    Ok((next, next_ends))
}
