use crate::game::game_state::GameView;
use crate::game::tile::Move;
use crate::minimax::algorithm::find_best_move;
use crate::minimax::difficulty::Difficulty;
use crate::players::MoveSource;
use crate::Result;
use rand::Rng;

/// Computer opponent: runs the minimax search on a snapshot of the table.
pub struct AiPlayer<R: Rng> {
    difficulty: Difficulty,
    rng: R,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(difficulty: Difficulty, rng: R) -> Self {
        Self { difficulty, rng }
    }
}

impl<R: Rng> MoveSource for AiPlayer<R> {
    fn decide_move(&mut self, view: &GameView<'_>) -> Result<Option<Move>> {
        Ok(find_best_move(
            view.layout,
            view.ends,
            view.hand.tiles(),
            view.opponent_hand.tiles(),
            self.difficulty,
            &mut self.rng,
        ))
    }

    fn describe(&self) -> String {
        format!("AI ({})", self.difficulty)
    }
}
