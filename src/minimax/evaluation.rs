//! Static evaluation of a position from the hands alone.
//!
//! `own` is the hand of the player the score is computed for and `opponent`
//! the other one. Pips still held count against their holder, so the score
//! grows when the opponent is stuck with more pips than `own`.

use crate::game::tile::Tile;
use crate::minimax::difficulty::Difficulty;
use std::collections::BTreeSet;

const MEDIUM_COUNT_WEIGHT: i32 = 3;
const MEDIUM_DOUBLE_BONUS: i32 = 5;

const HARD_COUNT_WEIGHT: i32 = 4;
const HARD_DOUBLE_BONUS: i32 = 8;
const HARD_HIGH_VALUE_THRESHOLD: i32 = 8;
const HARD_HIGH_VALUE_PENALTY: i32 = 2;
const HARD_DIVERSITY_WEIGHT: i32 = 3;

pub fn evaluate_state(own: &[Tile], opponent: &[Tile], difficulty: Difficulty) -> i32 {
    let own_sum = pip_sum(own);
    let opponent_sum = pip_sum(opponent);

    match difficulty {
        Difficulty::Easy => opponent_sum - own_sum,
        Difficulty::Medium => {
            let own_count = tile_count(own) * MEDIUM_COUNT_WEIGHT;
            let opponent_count = tile_count(opponent) * MEDIUM_COUNT_WEIGHT;
            let doubles_bonus = count_where(own, Tile::is_double) * MEDIUM_DOUBLE_BONUS;

            (opponent_sum + opponent_count) - (own_sum + own_count + doubles_bonus)
        }
        Difficulty::Hard => {
            let own_count = tile_count(own) * HARD_COUNT_WEIGHT;
            let opponent_count = tile_count(opponent) * HARD_COUNT_WEIGHT;
            let doubles_bonus = count_where(own, Tile::is_double) * HARD_DOUBLE_BONUS;
            let high_value_penalty =
                count_where(own, |t| t.value() > HARD_HIGH_VALUE_THRESHOLD) * HARD_HIGH_VALUE_PENALTY;
            let diversity_bonus = distinct_faces(own) * HARD_DIVERSITY_WEIGHT;

            (opponent_sum + opponent_count)
                - (own_sum + own_count + doubles_bonus - high_value_penalty + diversity_bonus)
        }
    }
}

fn pip_sum(tiles: &[Tile]) -> i32 {
    tiles.iter().map(Tile::value).sum()
}

fn tile_count(tiles: &[Tile]) -> i32 {
    tiles.len() as i32
}

fn count_where(tiles: &[Tile], predicate: impl Fn(&Tile) -> bool) -> i32 {
    tiles.iter().filter(|t| predicate(*t)).count() as i32
}

fn distinct_faces(tiles: &[Tile]) -> i32 {
    let faces: BTreeSet<u8> = tiles.iter().flat_map(|t| [t.left, t.right]).collect();
    faces.len() as i32
}
