use crate::game::hand::Hand;
use crate::game::tile::Tile;
use crate::{DominoError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DOTS: u8 = 6;
pub const DEFAULT_HAND_SIZE: usize = 7;
pub const PLAYER_COUNT: usize = 2;

/// Every unordered pair `(i, j)` with `0 <= i <= j <= max_dots`, in lexicographic order.
pub fn generate_domino_set(max_dots: u8) -> Vec<Tile> {
    (0..=max_dots)
        .flat_map(|i| (i..=max_dots).map(move |j| Tile::new(i, j)))
        .collect()
}

/// Number of tiles in a full set: `(n + 1)(n + 2) / 2`.
pub fn set_size(max_dots: u8) -> usize {
    let n = usize::from(max_dots);
    (n + 1) * (n + 2) / 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_dots: u8,
    pub hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_dots: DEFAULT_MAX_DOTS,
            hand_size: DEFAULT_HAND_SIZE,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(DominoError::InvalidConfig(
                "hand size must be at least 1".to_string(),
            ));
        }
        let available = set_size(self.max_dots);
        let needed = self.hand_size.checked_mul(PLAYER_COUNT).ok_or_else(|| {
            DominoError::InvalidConfig(format!("hand size {} is too large", self.hand_size))
        })?;
        if needed > available {
            return Err(DominoError::InvalidConfig(format!(
                "{} players with {} tiles each need {} tiles, but a double-{} set has {}",
                PLAYER_COUNT, self.hand_size, needed, self.max_dots, available
            )));
        }
        Ok(())
    }
}

/// A shuffled deal: one hand per player plus the remaining stock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: Vec<Hand>,
    pub stock: Vec<Tile>,
}

/// Shuffles a copy of `tiles` and cuts `players` consecutive hands of `hand_size`.
pub fn shuffle_and_deal<R: Rng>(
    tiles: &[Tile],
    players: usize,
    hand_size: usize,
    rng: &mut R,
) -> Result<Deal> {
    let invalid = || {
        DominoError::InvalidConfig(format!(
            "cannot deal {} hands of {} from {} tiles",
            players,
            hand_size,
            tiles.len()
        ))
    };
    if hand_size == 0 {
        return Err(invalid());
    }
    let dealt = players.checked_mul(hand_size).ok_or_else(invalid)?;
    if dealt > tiles.len() {
        return Err(invalid());
    }

    let mut shuffled = tiles.to_vec();
    shuffled.shuffle(rng);

    let stock = shuffled.split_off(dealt);
    let hands = shuffled
        .chunks(hand_size)
        .map(|chunk| Hand::new(chunk.to_vec()))
        .collect();

    Ok(Deal { hands, stock })
}

/// Validates `config`, builds its tile set and deals the two hands.
pub fn deal_new_game<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Deal> {
    config.validate()?;
    let tiles = generate_domino_set(config.max_dots);
    shuffle_and_deal(&tiles, PLAYER_COUNT, config.hand_size, rng)
}
