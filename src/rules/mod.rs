//! Game rules for Russian draughts (shashki)
//!
//! This module implements the rule set:
//! - Capture detection for men and flying kings
//! - Legal move generation with mandatory capture and capture streaks
//! - Move application with exact undo, promotion and game-end detection

pub mod apply;
pub mod capture;
pub mod movegen;

// Re-exports for convenient access
pub use apply::{make_move, status, unmake_move, GameStatus, MoveOutcome};
pub use capture::{capture_exists, king_can_capture, man_can_capture, piece_can_capture};
pub use movegen::{can_play, generate_moves, legal_destinations, Captured, Move};
