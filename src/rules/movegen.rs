//! Legal move generation
//!
//! Generation honours the two turn-wide constraints of the game:
//! - **Mandatory capture**: while any capture exists only captures are legal.
//! - **Streak**: after a capture that can be continued, only the capturing
//!   piece may move and only by capturing again.
//!
//! For kings a further official rule applies: when some landing square
//! behind a jumped piece allows an immediate second capture, the landing
//! squares of that run which do not are illegal.

use crate::board::{GameState, Occupant, Side, Square, DIAGONALS};

use super::capture::{classify, king_can_capture_with, king_target_in, man_capture_in, Cell, Probe};

/// A piece removed by a capture, kept for restoration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Captured {
    pub square: Square,
    pub occupant: Occupant,
}

/// One ply: a step, a slide or a single jump of a capture streak.
///
/// Generated moves carry origin, destination and the pre-move context.
/// [`super::make_move`] fills in the capture and promotion facts before the
/// move is pushed onto the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_capture: bool,
    /// Removed piece; set when the move is applied
    pub captured: Option<Captured>,
    /// Played as a continuation of a running streak
    pub continues_streak: bool,
    /// Man promoted by this move; set when the move is applied
    pub promoted: bool,
    /// `no_progress_plies` before the move
    pub prior_no_progress: u32,
    /// Side that made the move
    pub side: Side,
}

impl Move {
    fn generated(state: &GameState, from: Square, to: Square, is_capture: bool) -> Self {
        Self {
            from,
            to,
            is_capture,
            captured: None,
            continues_streak: state.streak.is_some(),
            promoted: false,
            prior_no_progress: state.no_progress_plies,
            side: state.side_to_move,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.is_capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

/// Generate all legal moves for the side to move.
///
/// Ordering is row-major over origins, then by diagonal, then by distance,
/// so the result is deterministic for a given state.
pub fn generate_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);

    if let Some(origin) = state.streak {
        push_moves_from(state, origin, &mut moves);
        return moves;
    }

    let side = state.side_to_move;
    for sq in state.board.playable_squares() {
        if state.board.get(sq).side() == Some(side) {
            push_moves_from(state, sq, &mut moves);
        }
    }
    moves
}

/// Legal destinations of the piece on `origin` for the side to move
pub fn legal_destinations(state: &GameState, origin: Square) -> Vec<Square> {
    if state.streak.is_some_and(|pinned| pinned != origin) {
        return Vec::new();
    }
    if state.board.get(origin).side() != Some(state.side_to_move) {
        return Vec::new();
    }

    let mut moves = Vec::new();
    push_moves_from(state, origin, &mut moves);
    moves.into_iter().map(|mv| mv.to).collect()
}

fn push_moves_from(state: &GameState, origin: Square, out: &mut Vec<Move>) {
    let occupant = state.board.get(origin);
    let Some(side) = occupant.side() else {
        return;
    };

    match (occupant.is_king(), state.capture_mandatory) {
        (false, true) => push_man_captures(state, origin, side, out),
        (false, false) => push_man_steps(state, origin, side, out),
        (true, true) => push_king_captures(state, origin, side, out),
        (true, false) => push_king_slides(state, origin, out),
    }
}

fn push_man_steps(state: &GameState, origin: Square, side: Side, out: &mut Vec<Move>) {
    for dc in [-1, 1] {
        if let Some(to) = state.board.step(origin, (side.forward(), dc), 1) {
            if state.board.is_empty(to) {
                out.push(Move::generated(state, origin, to, false));
            }
        }
    }
}

fn push_man_captures(state: &GameState, origin: Square, side: Side, out: &mut Vec<Move>) {
    for &dir in &DIAGONALS {
        if let Some((_, landing)) = man_capture_in(state, origin, side, dir) {
            out.push(Move::generated(state, origin, landing, true));
        }
    }
}

fn push_king_slides(state: &GameState, origin: Square, out: &mut Vec<Move>) {
    for &dir in &DIAGONALS {
        let mut distance = 1;
        while let Some(to) = state.board.step(origin, dir, distance) {
            if !state.board.is_empty(to) {
                break;
            }
            out.push(Move::generated(state, origin, to, false));
            distance += 1;
        }
    }
}

fn push_king_captures(state: &GameState, origin: Square, side: Side, out: &mut Vec<Move>) {
    for &dir in &DIAGONALS {
        let Some((jumped, first_landing)) = king_target_in(state, origin, side, dir, Probe::NONE)
        else {
            continue;
        };

        // Every empty square behind the jumped piece is a candidate landing
        let mut landings = vec![first_landing];
        let mut distance = 1;
        while let Some(sq) = state.board.step(first_landing, dir, distance) {
            if classify(state, sq, side, Probe::NONE) != Cell::Empty {
                break;
            }
            landings.push(sq);
            distance += 1;
        }

        let probe = Probe {
            vacated: Some(origin),
            jumped: Some(jumped),
        };
        let leads_on: Vec<bool> = landings
            .iter()
            .map(|&landing| king_can_capture_with(state, landing, side, probe))
            .collect();
        let must_continue = leads_on.iter().any(|&b| b);

        for (&landing, &continues) in landings.iter().zip(&leads_on) {
            if continues || !must_continue {
                out.push(Move::generated(state, origin, landing, true));
            }
        }
    }
}

/// Shallow mobility scan: can `side` make any non-capturing move?
///
/// Only adjacent squares are inspected; a king that can slide at all can
/// slide one square.
pub fn can_play(state: &GameState, side: Side) -> bool {
    let board = &state.board;
    board.playable_squares().any(|sq| match board.get(sq) {
        Occupant::Man(s) if s == side => [-1, 1].iter().any(|&dc| {
            board
                .step(sq, (side.forward(), dc), 1)
                .is_some_and(|to| board.is_empty(to))
        }),
        Occupant::King(s) if s == side => DIAGONALS.iter().any(|&dir| {
            board
                .step(sq, dir, 1)
                .is_some_and(|to| board.is_empty(to))
        }),
        _ => false,
    })
}
