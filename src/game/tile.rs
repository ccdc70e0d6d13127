use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A domino piece. Equality ignores orientation: `[2|5] == [5|2]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tile {
    pub left: u8,
    pub right: u8,
}

impl Tile {
    pub const fn new(left: u8, right: u8) -> Self {
        Self { left, right }
    }

    /// True when `face` is unset (the opening placement) or equals either face.
    pub fn matches(&self, face: Option<u8>) -> bool {
        match face {
            None => true,
            Some(face) => self.left == face || self.right == face,
        }
    }

    /// Same tile with its faces swapped. The receiver is left untouched.
    pub fn flipped(&self) -> Tile {
        Tile::new(self.right, self.left)
    }

    pub fn value(&self) -> i32 {
        i32::from(self.left) + i32::from(self.right)
    }

    pub fn is_double(&self) -> bool {
        self.left == self.right
    }

    fn normalized(&self) -> (u8, u8) {
        (self.left.min(self.right), self.left.max(self.right))
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// End of the layout a tile is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A candidate placement: which tile, on which end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub tile: Tile,
    pub side: Side,
}

impl Move {
    pub const fn new(tile: Tile, side: Side) -> Self {
        Self { tile, side }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on the {} end", self.tile, self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_orientation() {
        for a in 0..=6 {
            for b in 0..=6 {
                assert_eq!(Tile::new(a, b), Tile::new(b, a));
            }
        }
        assert_ne!(Tile::new(1, 2), Tile::new(1, 3));
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let mut seen = HashSet::new();
        seen.insert(Tile::new(2, 5));
        assert!(seen.contains(&Tile::new(5, 2)));
    }

    #[test]
    fn test_flip_twice_restores_faces() {
        let tile = Tile::new(3, 4);
        let flipped = tile.flipped();
        assert_eq!((flipped.left, flipped.right), (4, 3));

        let back = flipped.flipped();
        assert_eq!((back.left, back.right), (3, 4));
        assert_eq!((tile.left, tile.right), (3, 4), "flip must not mutate the original");
    }

    #[test]
    fn test_matches_unset_and_faces() {
        let tile = Tile::new(2, 5);
        assert!(tile.matches(None));
        assert!(tile.matches(Some(2)));
        assert!(tile.matches(Some(5)));
        assert!(!tile.matches(Some(3)));
    }

    #[test]
    fn test_value_and_double() {
        assert_eq!(Tile::new(6, 6).value(), 12);
        assert!(Tile::new(6, 6).is_double());
        assert!(!Tile::new(0, 6).is_double());
        assert_eq!(Tile::new(0, 0).value(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tile::new(2, 5).to_string(), "[2|5]");
        assert_eq!(
            Move::new(Tile::new(1, 3), Side::Right).to_string(),
            "[1|3] on the right end"
        );
    }
}
