//! Error types for the Shashki engine
//!
//! Configuration mistakes and refused moves are reported as values.
//! Out-of-range squares are contract violations and panic instead.

use thiserror::Error;

use crate::board::Square;
use crate::rules::GameStatus;

/// Invalid game or engine configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board edge is odd or outside 4..=12
    #[error("Invalid board size: {size} (must be even and between 4 and 12)")]
    BoardSize { size: usize },

    /// Pawn rows do not leave a gap between the armies
    #[error("Invalid pawn rows: {rows} (must be between 1 and {max} on a {size}x{size} board)")]
    PawnRows { rows: usize, size: usize, max: usize },

    /// Difficulty name not recognised
    #[error("Unknown difficulty: {name} (expected easy, medium or hard)")]
    UnknownDifficulty { name: String },
}

/// A move refused by the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Origin does not hold a piece of the side to move
    #[error("No piece of the side to move at {0}")]
    NotYourPiece(Square),

    /// A capture streak pins play to another piece
    #[error("Capture streak must continue from {required}")]
    StreakRestricted { required: Square },

    /// Destination is not legal for the chosen piece
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game has already been decided
    #[error("Game is over: {0:?}")]
    GameOver(GameStatus),
}
