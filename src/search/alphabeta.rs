//! Minimax search with alpha-beta pruning
//!
//! This module implements the search algorithm for the Shashki AI. Black is
//! the maximizing side and White the minimizing side, matching the
//! Black-positive evaluator.
//!
//! # Features
//!
//! - In-place make/unmake on the shared [`GameState`], no board copies
//! - A whole capture streak counts as a single ply
//! - Early exit at the root once a winning move is found
//!
//! # Example
//!
//! ```
//! use shashki::search::Searcher;
//! use shashki::{GameConfig, GameState};
//!
//! let mut searcher = Searcher::new(4);
//! let mut state = GameState::new(&GameConfig::default());
//!
//! let result = searcher.search(&mut state);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move}");
//! }
//! ```

use crate::board::state::MOVES_FOR_DRAW;
use crate::board::{GameState, Side};
use crate::eval::{evaluate, terminal_for, Weights};
use crate::rules::{generate_moves, make_move, unmake_move, Move};

/// How the root move was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Only one legal move existed; nothing was searched
    Forced,
    /// A root move reached the winning extreme; remaining moves were skipped
    ImmediateWin,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Black-positive value of the best move
    pub score: f32,
    /// How the move was decided
    pub search_type: SearchType,
    /// Total nodes searched
    pub nodes: u64,
}

/// Fixed-depth minimax searcher.
///
/// The searcher borrows the state mutably for the duration of one call and
/// hands it back exactly as it found it.
pub struct Searcher {
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher that looks `max_depth` plies ahead
    #[must_use]
    pub fn new(max_depth: u8) -> Self {
        Self { max_depth, nodes: 0 }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth;
    }

    /// Find the best move for the side to move.
    ///
    /// A single legal move is returned without searching. Otherwise every
    /// root move is searched, seeding the bound of the side to move with the
    /// best value found so far.
    #[must_use]
    pub fn search(&mut self, state: &mut GameState) -> SearchResult {
        self.nodes = 0;
        let side = state.side_to_move();
        let moves = generate_moves(state);

        match moves.as_slice() {
            [] => {
                return SearchResult {
                    best_move: None,
                    score: terminal_for(side.opponent()),
                    search_type: SearchType::AlphaBeta,
                    nodes: 0,
                }
            }
            [only] => {
                return SearchResult {
                    best_move: Some(*only),
                    score: evaluate(state),
                    search_type: SearchType::Forced,
                    nodes: 0,
                }
            }
            _ => {}
        }

        let maximizing = side == Side::Black;
        let target = terminal_for(side);
        let mut alpha = Weights::LOSS;
        let mut beta = Weights::WIN;
        let mut best: Option<(Move, f32)> = None;
        let mut search_type = SearchType::AlphaBeta;

        for mv in moves {
            make_move(state, mv);
            let child_depth = if state.is_mid_streak().is_some() { 0 } else { 1 };
            let value = self.minimax(state, child_depth, alpha, beta);
            unmake_move(state);

            let improves = match best {
                None => true,
                Some((_, best_value)) if maximizing => value > best_value,
                Some((_, best_value)) => value < best_value,
            };
            if improves {
                best = Some((mv, value));
            }

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }

            if value == target {
                search_type = SearchType::ImmediateWin;
                break;
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(terminal_for(side.opponent()), |(_, value)| value),
            search_type,
            nodes: self.nodes,
        }
    }

    /// Value of the current position as seen by a full-width search.
    ///
    /// The state is restored before returning.
    #[must_use]
    pub fn evaluate_position(&mut self, state: &mut GameState) -> f32 {
        self.nodes = 0;
        self.minimax(state, 0, Weights::LOSS, Weights::WIN)
    }

    /// Nodes visited by the last call
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn minimax(&mut self, state: &mut GameState, depth: u8, mut alpha: f32, mut beta: f32) -> f32 {
        self.nodes += 1;

        if state.no_progress_plies() >= MOVES_FOR_DRAW {
            return 0.0;
        }
        if depth >= self.max_depth {
            return evaluate(state);
        }

        let side = state.side_to_move();
        let moves = generate_moves(state);
        if moves.is_empty() {
            return terminal_for(side.opponent());
        }

        let maximizing = side == Side::Black;
        let mut best = terminal_for(side.opponent());

        for mv in moves {
            make_move(state, mv);
            // Streak continuations stay on the same ply
            let next = if state.is_mid_streak().is_some() { depth } else { depth + 1 };
            let value = self.minimax(state, next, alpha, beta);
            unmake_move(state);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Occupant, Square};
    use crate::config::GameConfig;

    const WHITE_MAN: Occupant = Occupant::Man(Side::White);
    const BLACK_MAN: Occupant = Occupant::Man(Side::Black);
    const WHITE_KING: Occupant = Occupant::King(Side::White);
    const BLACK_KING: Occupant = Occupant::King(Side::Black);

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    fn state_with(pieces: &[(u8, u8, Occupant)], to_move: Side) -> GameState {
        let mut board = Board::new(8);
        for &(row, col, occ) in pieces {
            board.place(sq(row, col), occ);
        }
        GameState::from_position(board, 3, to_move)
    }

    #[test]
    fn test_search_leaves_state_untouched() {
        let mut state = GameState::new(&GameConfig::default());
        let original = state.clone();

        let result = Searcher::new(4).search(&mut state);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(state, original);
    }

    #[test]
    fn test_single_move_is_forced() {
        let mut state = state_with(&[(5, 0, WHITE_MAN), (4, 1, BLACK_MAN), (0, 7, BLACK_MAN)], Side::White);
        let result = Searcher::new(6).search(&mut state);

        assert_eq!(result.search_type, SearchType::Forced);
        assert_eq!(result.nodes, 0);
        let mv = result.best_move.unwrap();
        assert_eq!((mv.from, mv.to), (sq(5, 0), sq(3, 2)));
    }

    #[test]
    fn test_no_moves() {
        let mut state = state_with(&[(7, 0, WHITE_MAN), (6, 1, BLACK_MAN), (5, 2, BLACK_MAN)], Side::White);
        let result = Searcher::new(4).search(&mut state);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, Weights::WIN);
    }

    #[test]
    fn test_immediate_win_stops_root() {
        // Black can box in the last white man
        let mut state = state_with(
            &[(7, 0, WHITE_MAN), (6, 1, BLACK_MAN), (5, 2, BLACK_MAN), (0, 1, BLACK_MAN)],
            Side::Black,
        );
        let result = Searcher::new(4).search(&mut state);

        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.score, Weights::WIN);
        assert_eq!(result.best_move.unwrap().from, sq(0, 1));
    }

    #[test]
    fn test_streak_counts_as_one_ply() {
        // (4, 5)x(2, 7) is generated first; (5, 0)x(3, 2)x(1, 4) wins two men
        let mut state = state_with(
            &[
                (4, 5, WHITE_MAN),
                (5, 0, WHITE_MAN),
                (7, 6, WHITE_MAN),
                (3, 6, BLACK_MAN),
                (4, 1, BLACK_MAN),
                (2, 3, BLACK_MAN),
                (0, 7, BLACK_MAN),
            ],
            Side::White,
        );

        let result = Searcher::new(1).search(&mut state);
        let mv = result.best_move.unwrap();
        assert_eq!((mv.from, mv.to), (sq(5, 0), sq(3, 2)));

        // The value is the static score after the whole streak
        let mut after = state.clone();
        after.apply_move(sq(5, 0), sq(3, 2)).unwrap();
        after.apply_move(sq(3, 2), sq(1, 4)).unwrap();
        assert_eq!(result.score, evaluate(&after));
    }

    #[test]
    fn test_draw_threshold_scores_zero() {
        let mut state = state_with(&[(7, 0, WHITE_KING), (0, 1, BLACK_KING)], Side::White);
        state.no_progress_plies = MOVES_FOR_DRAW - 1;

        let result = Searcher::new(4).search(&mut state);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert_eq!(state.no_progress_plies(), MOVES_FOR_DRAW - 1);
    }

    #[test]
    fn test_evaluate_position_restores_state() {
        let mut state = GameState::new(&GameConfig::default());
        let original = state.clone();
        let mut searcher = Searcher::new(4);

        let value = searcher.evaluate_position(&mut state);
        assert!(value.abs() < Weights::WIN);
        assert_eq!(state, original);
    }

    #[test]
    fn test_search_is_deterministic() {
        let mut state = GameState::new(&GameConfig::new(10, 4).unwrap());
        let first = Searcher::new(3).search(&mut state).best_move;
        let second = Searcher::new(3).search(&mut state).best_move;
        assert_eq!(first, second);
    }
}
