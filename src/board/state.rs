//! Game state with incremental piece bookkeeping

use super::{Board, Occupant, Side, Square};
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::rules::{self, GameStatus, Move, MoveOutcome};

/// Consecutive non-progress plies that end the game in a draw
pub const MOVES_FOR_DRAW: u32 = 15;

/// Largest piece count for which a side without moves is checked for a loss
pub const MAX_PIECES_IN_STALEMATE: u32 = 5;

/// The mutable game aggregate searched by the engine.
///
/// Piece and king counts are maintained incrementally by
/// [`rules::make_move`] and [`rules::unmake_move`]; they are never
/// recomputed from the grid once the state exists.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) pawn_rows: usize,
    pub(crate) side_to_move: Side,
    pub(crate) pieces: [u32; 2],
    pub(crate) kings: [u32; 2],
    pub(crate) no_progress_plies: u32,
    pub(crate) capture_mandatory: bool,
    /// Square of the piece that must keep capturing
    pub(crate) streak: Option<Square>,
    /// Pieces jumped during the current streak. They stay on the grid
    /// as blockers until the streak ends.
    pub(crate) streak_captures: Vec<Square>,
    pub(crate) selected: Option<Square>,
    /// Applied moves, most recent last
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Start a new game from a validated configuration. White moves first.
    pub fn new(config: &GameConfig) -> Self {
        let board = Board::standard(config.board_size(), config.pawn_rows());
        Self::from_position(board, config.pawn_rows(), Side::White)
    }

    /// Build a state from an arbitrary position.
    ///
    /// `pawn_rows` is only used by the evaluator to tell opening from endgame.
    pub fn from_position(board: Board, pawn_rows: usize, side_to_move: Side) -> Self {
        let (white, white_kings) = board.census(Side::White);
        let (black, black_kings) = board.census(Side::Black);
        let mut state = Self {
            board,
            pawn_rows,
            side_to_move,
            pieces: [white, black],
            kings: [white_kings, black_kings],
            no_progress_plies: 0,
            capture_mandatory: false,
            streak: None,
            streak_captures: Vec::new(),
            selected: None,
            history: Vec::with_capacity(64),
        };
        state.capture_mandatory = rules::capture_exists(&state, side_to_move);
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn pawn_rows(&self) -> usize {
        self.pawn_rows
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Pieces (men and kings) still alive for a side
    #[inline]
    pub fn pieces(&self, side: Side) -> u32 {
        self.pieces[side.index()]
    }

    #[inline]
    pub fn kings(&self, side: Side) -> u32 {
        self.kings[side.index()]
    }

    #[inline]
    pub fn no_progress_plies(&self) -> u32 {
        self.no_progress_plies
    }

    /// True iff the side to move must capture
    #[inline]
    pub fn is_capture_mandatory(&self) -> bool {
        self.capture_mandatory
    }

    /// Square of the piece that must continue capturing, if any
    #[inline]
    pub fn is_mid_streak(&self) -> Option<Square> {
        self.streak
    }

    /// Pieces already jumped in the running streak
    #[inline]
    pub fn streak_captures(&self) -> &[Square] {
        &self.streak_captures
    }

    /// Whether the piece on `sq` was jumped in the running streak
    #[inline]
    pub fn is_captured(&self, sq: Square) -> bool {
        self.streak_captures.contains(&sq)
    }

    #[inline]
    pub fn selected_origin(&self) -> Option<Square> {
        self.selected
    }

    /// Moves applied so far, oldest first
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn occupant(&self, sq: Square) -> Occupant {
        self.board.get(sq)
    }

    /// Legal destinations for the piece on `origin`.
    ///
    /// Empty when the square holds no piece of the side to move or when a
    /// streak pins play to another square.
    pub fn legal_destinations(&self, origin: Square) -> Vec<Square> {
        rules::legal_destinations(self, origin)
    }

    /// All legal moves for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::generate_moves(self)
    }

    /// Select a piece and return its legal destinations.
    ///
    /// While a streak is running the selection stays on the streak square.
    pub fn select(&mut self, origin: Square) -> Vec<Square> {
        if let Some(pinned) = self.streak {
            self.selected = Some(pinned);
            return if origin == pinned {
                rules::legal_destinations(self, pinned)
            } else {
                Vec::new()
            };
        }

        if self.board.get(origin).side() == Some(self.side_to_move) {
            self.selected = Some(origin);
            rules::legal_destinations(self, origin)
        } else {
            self.selected = None;
            Vec::new()
        }
    }

    /// Drop the current selection unless a streak pins it
    pub fn clear_selection(&mut self) {
        self.selected = self.streak;
    }

    /// Play `origin -> destination` for the side to move.
    ///
    /// The move must be one of the legal moves; the game must still be running.
    pub fn apply_move(&mut self, origin: Square, destination: Square) -> Result<MoveOutcome, MoveError> {
        let status = self.status();
        if status != GameStatus::Ongoing {
            return Err(MoveError::GameOver(status));
        }
        if let Some(required) = self.streak {
            if origin != required {
                return Err(MoveError::StreakRestricted { required });
            }
        }
        if self.board.get(origin).side() != Some(self.side_to_move) {
            return Err(MoveError::NotYourPiece(origin));
        }

        let mv = rules::generate_moves(self)
            .into_iter()
            .find(|mv| mv.from == origin && mv.to == destination)
            .ok_or(MoveError::IllegalMove {
                from: origin,
                to: destination,
            })?;

        let outcome = rules::make_move(self, mv);
        self.selected = self.streak;
        Ok(outcome)
    }

    /// Game status at the current turn boundary
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }

    /// Check that incremental counters match the grid (live pieces only)
    pub fn counts_consistent(&self) -> bool {
        [Side::White, Side::Black].iter().all(|&side| {
            let (mut pieces, mut kings) = self.board.census(side);
            for &sq in &self.streak_captures {
                match self.board.get(sq) {
                    Occupant::Man(s) if s == side => pieces -= 1,
                    Occupant::King(s) if s == side => {
                        pieces -= 1;
                        kings -= 1;
                    }
                    _ => {}
                }
            }
            pieces == self.pieces(side) && kings == self.kings(side)
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
