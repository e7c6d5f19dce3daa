//! Main AI engine integrating the rules and the search
//!
//! This module provides the engine facade used by a game front end or the
//! autoplay driver. Every call borrows the game state mutably for its
//! duration and returns it unchanged.
//!
//! # Example
//!
//! ```
//! use shashki::{new_game, AIEngine, Difficulty};
//!
//! let mut state = new_game(8, 3).unwrap();
//! let mut engine = AIEngine::new(Difficulty::Easy);
//!
//! let result = engine.choose_move_with_stats(&mut state);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{GameState, Side};
use crate::config::{Difficulty, GameConfig};
use crate::error::ConfigError;
use crate::eval::Verdict;
use crate::rules::Move;
use crate::search::{SearchResult, Searcher};

pub use crate::search::SearchType;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the side to move cannot move
    pub best_move: Option<Move>,
    /// Black-positive value of the best move
    pub score: f32,
    /// How the move was decided
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: result.search_type,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Position assessment for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Black-positive search value
    pub score: f32,
    pub verdict: Verdict,
}

impl Evaluation {
    /// Score from the point of view of `side`
    #[inline]
    pub fn for_side(&self, side: Side) -> f32 {
        self.score * side.sign()
    }
}

/// Shashki AI engine.
///
/// # Example
///
/// ```
/// use shashki::{AIEngine, Difficulty, GameState};
///
/// let mut engine = AIEngine::new(Difficulty::Easy);
/// let mut state = GameState::default();
///
/// if let Some(mv) = engine.choose_move(&mut state) {
///     state.apply_move(mv.from, mv.to).unwrap();
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine searching at the depth of a difficulty tier
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_depth(difficulty.depth())
    }

    /// Create an engine with an explicit depth in plies
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            searcher: Searcher::new(depth),
        }
    }

    /// Get the best move for the side to move.
    ///
    /// Returns `None` if the side to move has no legal move, which loses
    /// the game.
    #[must_use]
    pub fn choose_move(&mut self, state: &mut GameState) -> Option<Move> {
        self.choose_move_with_stats(state).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// During a capture streak the only legal moves continue the streak,
    /// so each call returns one jump of it.
    #[must_use]
    pub fn choose_move_with_stats(&mut self, state: &mut GameState) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(state);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            side = %state.side_to_move(),
            depth = self.searcher.max_depth(),
            nodes = result.nodes,
            score = result.score,
            search_type = ?result.search_type,
            time_ms,
            "search complete"
        );
        MoveResult::from_search(result, time_ms)
    }

    /// Evaluate the position with a search from the side to move.
    ///
    /// The state is handed back exactly as it was given, counters included.
    #[must_use]
    pub fn evaluate(&mut self, state: &mut GameState) -> Evaluation {
        let score = self.searcher.evaluate_position(state);
        debug!(score, nodes = self.searcher.nodes(), "position evaluated");
        Evaluation {
            score,
            verdict: Verdict::from_score(score),
        }
    }

    /// Set the search depth in plies
    pub fn set_max_depth(&mut self, depth: u8) {
        self.searcher.set_max_depth(depth);
    }

    /// Get the current search depth
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Start a new game on a `board_size` board with `pawn_rows` rows of men
/// per side. White moves first.
///
/// # Example
///
/// ```
/// use shashki::{new_game, Side};
///
/// let state = new_game(10, 4).unwrap();
/// assert_eq!(state.pieces(Side::White), 20);
/// assert!(new_game(10, 5).is_err());
/// ```
pub fn new_game(board_size: usize, pawn_rows: usize) -> Result<GameState, ConfigError> {
    let config = GameConfig::new(board_size, pawn_rows)?;
    Ok(GameState::new(&config))
}
