//! Shashki (Russian draughts) AI engine
//!
//! A rules engine and minimax AI for Russian draughts:
//! - Square boards from 4x4 to 12x12, play on the dark squares
//! - Men move forward and capture in all four directions
//! - Flying kings that capture at any distance
//! - Mandatory capture; a capture streak is played by one piece in one turn
//! - Draw after 15 consecutive plies without a capture or a man move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board grid and the mutable game state
//! - [`rules`]: Capture detection, move generation, make/unmake
//! - [`eval`]: Static position evaluation
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI engine facade integrating all components
//!
//! # Quick Start
//!
//! ```
//! use shashki::{new_game, AIEngine, Difficulty, MoveOutcome};
//!
//! let mut state = new_game(8, 3).unwrap();
//! let mut engine = AIEngine::new(Difficulty::Easy);
//!
//! // White opens
//! let mv = engine.choose_move(&mut state).unwrap();
//! let outcome = state.apply_move(mv.from, mv.to).unwrap();
//! assert_eq!(outcome, MoveOutcome::TurnEnded);
//! println!("White plays {mv}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, GameState, Occupant, Side, Square};
pub use config::{Difficulty, GameConfig};
pub use engine::{new_game, AIEngine, Evaluation, MoveResult, SearchType};
pub use error::{ConfigError, MoveError};
pub use rules::{GameStatus, Move, MoveOutcome};
