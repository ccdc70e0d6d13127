//! # Domino Minimax
//!
//! A two-player domino game played in the terminal against a computer
//! opponent that searches the game tree with minimax and alpha-beta pruning.
//!
//! ## Features
//!
//! - **Game Engine**: tiles, hands, the layout, legal move enumeration and the turn loop
//! - **AI Engine**: depth-limited minimax whose depth, evaluation and pruning follow the difficulty
//! - **Players**: human (terminal) and AI move sources behind one trait
//!
//! ## Usage
//!
//! ```rust
//! use domino_minimax::{find_best_move, Difficulty, Layout, Tile};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let layout = Layout::new();
//! let mut rng = StdRng::seed_from_u64(7);
//! let best = find_best_move(
//!     &layout,
//!     layout.ends(),
//!     &[Tile::new(2, 5), Tile::new(6, 6)],
//!     &[Tile::new(1, 2)],
//!     Difficulty::Medium,
//!     &mut rng,
//! );
//! assert!(best.is_some());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Minimax search engine
pub mod minimax;

/// Human and AI move sources
pub mod players;

/// Terminal rendering
pub mod display;

/// Logger bootstrap shared by the binaries
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use game::*;

pub use minimax::*;

pub use players::{AiPlayer, HumanPlayer, MoveSource};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the domino library
#[derive(Debug, thiserror::Error)]
pub enum DominoError {
    #[error("Invalid move: {tile} cannot attach to the {side} end showing {end}")]
    InvalidMove { tile: Tile, side: Side, end: u8 },

    #[error("Tile {0} is not in the hand")]
    TileNotInHand(Tile),

    #[error("Invalid difficulty level {0} (expected 1, 2 or 3)")]
    InvalidDifficulty(u8),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input closed by the user")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DominoError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
