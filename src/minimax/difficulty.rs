use crate::DominoError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strength of the computer opponent.
///
/// Drives search depth, the evaluation weights, whether alpha-beta cutoffs
/// are taken and whether the AI's own candidate moves are sampled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn search_depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    /// Easy exhausts every candidate it kept.
    pub const fn prunes(self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    /// Easy keeps only a random half of its own candidates at each maximizing node.
    pub const fn samples_moves(self) -> bool {
        matches!(self, Difficulty::Easy)
    }

    /// Menu number shown to the player (1-3).
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = DominoError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Medium),
            3 => Ok(Difficulty::Hard),
            other => Err(DominoError::InvalidDifficulty(other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}
