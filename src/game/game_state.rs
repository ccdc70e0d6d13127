use crate::game::hand::Hand;
use crate::game::layout::{Ends, Layout};

/// Read-only snapshot handed to a move source when it is its turn.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub layout: &'a Layout,
    pub ends: Ends,
    pub hand: &'a Hand,
    pub opponent_hand: &'a Hand,
    pub stock_len: usize,
}
