pub mod algorithm;
pub mod difficulty;
pub mod evaluation;
pub mod search_result;

pub use algorithm::{find_best_move, MinimaxSearch};
pub use difficulty::Difficulty;
pub use evaluation::evaluate_state;
pub use search_result::SearchResult;
