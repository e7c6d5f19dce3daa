//! Capture detection for men and kings
//!
//! A man captures an adjacent enemy by jumping to the empty square right
//! behind it, in any of the four diagonal directions. A king captures at any
//! distance: it slides over empty squares, jumps the first enemy it meets and
//! may land on any empty square behind it.
//!
//! Pieces already jumped in the running streak block the line and cannot be
//! captured a second time.

use crate::board::{GameState, Side, Square, DIAGONALS};

/// What a capture scan sees on a square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    Empty,
    Enemy,
    Blocked,
}

/// Hypothetical adjustments used when probing a king landing square
/// before the capture is played.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Probe {
    /// Square the capturing piece has left (reads as empty)
    pub vacated: Option<Square>,
    /// Piece being jumped (reads as blocked)
    pub jumped: Option<Square>,
}

impl Probe {
    pub const NONE: Probe = Probe {
        vacated: None,
        jumped: None,
    };
}

/// Classify a square from the point of view of `side` capturing
#[inline]
pub(crate) fn classify(state: &GameState, sq: Square, side: Side, probe: Probe) -> Cell {
    if probe.vacated == Some(sq) {
        return Cell::Empty;
    }
    if probe.jumped == Some(sq) {
        return Cell::Blocked;
    }
    match state.board.get(sq).side() {
        None => Cell::Empty,
        Some(owner) if owner != side && !state.is_captured(sq) => Cell::Enemy,
        Some(_) => Cell::Blocked,
    }
}

/// Check if a man of `side` on `from` can capture
pub fn man_can_capture(state: &GameState, from: Square, side: Side) -> bool {
    DIAGONALS
        .iter()
        .any(|&dir| man_capture_in(state, from, side, dir).is_some())
}

/// Landing square of a man capture along `dir`, if one exists
#[inline]
pub(crate) fn man_capture_in(
    state: &GameState,
    from: Square,
    side: Side,
    dir: (i32, i32),
) -> Option<(Square, Square)> {
    let board = &state.board;
    let jumped = board.step(from, dir, 1)?;
    let landing = board.step(from, dir, 2)?;

    if classify(state, jumped, side, Probe::NONE) == Cell::Enemy
        && classify(state, landing, side, Probe::NONE) == Cell::Empty
    {
        Some((jumped, landing))
    } else {
        None
    }
}

/// Check if a king of `side` on `from` can capture
pub fn king_can_capture(state: &GameState, from: Square, side: Side) -> bool {
    king_can_capture_with(state, from, side, Probe::NONE)
}

pub(crate) fn king_can_capture_with(
    state: &GameState,
    from: Square,
    side: Side,
    probe: Probe,
) -> bool {
    DIAGONALS
        .iter()
        .any(|&dir| king_target_in(state, from, side, dir, probe).is_some())
}

/// First capturable enemy along `dir` for a king on `from`, together with
/// the nearest landing square behind it.
pub(crate) fn king_target_in(
    state: &GameState,
    from: Square,
    side: Side,
    dir: (i32, i32),
    probe: Probe,
) -> Option<(Square, Square)> {
    let board = &state.board;
    let mut distance = 1;
    let jumped = loop {
        let sq = board.step(from, dir, distance)?;
        match classify(state, sq, side, probe) {
            Cell::Empty => distance += 1,
            Cell::Enemy => break sq,
            Cell::Blocked => return None,
        }
    };

    let landing = board.step(jumped, dir, 1)?;
    if classify(state, landing, side, probe) == Cell::Empty {
        Some((jumped, landing))
    } else {
        None
    }
}

/// Check if the piece on `from` can capture
pub fn piece_can_capture(state: &GameState, from: Square) -> bool {
    let occupant = state.board.get(from);
    match occupant.side() {
        Some(side) if occupant.is_king() => king_can_capture(state, from, side),
        Some(side) => man_can_capture(state, from, side),
        None => false,
    }
}

/// Check if any piece of `side` has a capture.
///
/// Used to recompute the mandatory-capture flag once per turn change.
pub fn capture_exists(state: &GameState, side: Side) -> bool {
    state
        .board
        .playable_squares()
        .filter(|&sq| state.board.get(sq).side() == Some(side))
        .any(|sq| piece_can_capture(state, sq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Occupant};

    fn state_with(pieces: &[(u8, u8, Occupant)], to_move: Side) -> GameState {
        let mut board = Board::new(8);
        for &(row, col, occ) in pieces {
            board.place(Square::new(row, col), occ);
        }
        GameState::from_position(board, 3, to_move)
    }

    #[test]
    fn test_man_captures_forward_and_backward() {
        let white = Occupant::Man(Side::White);
        let black = Occupant::Man(Side::Black);

        // Enemy in front
        let state = state_with(&[(5, 2, white), (4, 3, black)], Side::White);
        assert!(man_can_capture(&state, Square::new(5, 2), Side::White));

        // Enemy behind
        let state = state_with(&[(3, 2, white), (4, 3, black)], Side::White);
        assert!(man_can_capture(&state, Square::new(3, 2), Side::White));
    }

    #[test]
    fn test_man_capture_needs_empty_landing() {
        let white = Occupant::Man(Side::White);
        let black = Occupant::Man(Side::Black);
        let state = state_with(&[(5, 2, white), (4, 3, black), (3, 4, black)], Side::White);
        assert!(!man_can_capture(&state, Square::new(5, 2), Side::White));
    }

    #[test]
    fn test_man_capture_at_board_edge() {
        let white = Occupant::Man(Side::White);
        let black = Occupant::Man(Side::Black);
        // Landing would be off the board
        let state = state_with(&[(1, 2, white), (0, 1, black)], Side::White);
        assert!(!man_can_capture(&state, Square::new(1, 2), Side::White));
    }

    #[test]
    fn test_man_does_not_capture_own_piece() {
        let white = Occupant::Man(Side::White);
        let state = state_with(&[(5, 2, white), (4, 3, white)], Side::White);
        assert!(!man_can_capture(&state, Square::new(5, 2), Side::White));
    }

    #[test]
    fn test_king_captures_at_distance() {
        let king = Occupant::King(Side::White);
        let black = Occupant::Man(Side::Black);
        let state = state_with(&[(7, 0, king), (3, 4, black)], Side::White);
        assert!(king_can_capture(&state, Square::new(7, 0), Side::White));

        let target = king_target_in(&state, Square::new(7, 0), Side::White, (-1, 1), Probe::NONE);
        assert_eq!(target, Some((Square::new(3, 4), Square::new(2, 5))));
    }

    #[test]
    fn test_king_blocked_by_own_piece() {
        let king = Occupant::King(Side::White);
        let white = Occupant::Man(Side::White);
        let black = Occupant::Man(Side::Black);
        let state = state_with(&[(7, 0, king), (5, 2, white), (3, 4, black)], Side::White);
        assert!(!king_can_capture(&state, Square::new(7, 0), Side::White));
    }

    #[test]
    fn test_king_cannot_jump_two_in_a_row() {
        let king = Occupant::King(Side::White);
        let black = Occupant::Man(Side::Black);
        let state = state_with(&[(7, 0, king), (4, 3, black), (3, 4, black)], Side::White);
        assert!(!king_can_capture(&state, Square::new(7, 0), Side::White));
    }

    #[test]
    fn test_probe_treats_jumped_piece_as_blocker() {
        let king = Occupant::King(Side::White);
        let black = Occupant::Man(Side::Black);
        let state = state_with(&[(4, 3, king), (5, 2, black)], Side::White);
        let probe = Probe {
            vacated: None,
            jumped: Some(Square::new(5, 2)),
        };
        assert!(king_can_capture(&state, Square::new(4, 3), Side::White));
        assert!(!king_can_capture_with(&state, Square::new(4, 3), Side::White, probe));
    }

    #[test]
    fn test_capture_exists_per_side() {
        let white = Occupant::Man(Side::White);
        let black = Occupant::Man(Side::Black);
        let state = state_with(&[(5, 2, white), (4, 3, black)], Side::White);
        assert!(capture_exists(&state, Side::White));
        // Black man on (4, 3) jumps (5, 2) to (6, 1)
        assert!(capture_exists(&state, Side::Black));

        let state = state_with(&[(5, 2, white), (2, 5, black)], Side::White);
        assert!(!capture_exists(&state, Side::White));
        assert!(!capture_exists(&state, Side::Black));
    }
}
