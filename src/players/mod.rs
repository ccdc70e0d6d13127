pub mod ai;
pub mod human;

pub use ai::AiPlayer;
pub use human::HumanPlayer;

use crate::game::game_state::GameView;
use crate::game::tile::Move;
use crate::Result;

/// Anything that can choose a placement when its seat is to play.
///
/// The game loop only calls this when the hand holds at least one legal
/// move. Returning `Ok(None)` is treated as a pass.
pub trait MoveSource {
    fn decide_move(&mut self, view: &GameView<'_>) -> Result<Option<Move>>;

    /// Short label used in logs ("human", "AI (Hard)").
    fn describe(&self) -> String;
}
