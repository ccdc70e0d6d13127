pub mod create_set;
pub mod domino_game;
pub mod game_state;
pub mod get_legal_moves;
pub mod hand;
pub mod layout;
pub mod tile;

pub use create_set::{deal_new_game, generate_domino_set, shuffle_and_deal, Deal, GameConfig};
pub use domino_game::{DominoGame, Outcome, Seat};
pub use game_state::GameView;
pub use get_legal_moves::get_valid_moves;
pub use hand::Hand;
pub use layout::{simulate_move, Ends, Layout};
pub use tile::{Move, Side, Tile};
