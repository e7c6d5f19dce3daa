//! Move application and exact reversal
//!
//! `make_move` mutates the state in place and pushes the move, completed
//! with what was captured and whether it promoted, onto the move log.
//! `unmake_move` pops the log and restores the previous state exactly,
//! including the streak bookkeeping, so search never copies the board.

use tracing::trace;

use crate::board::state::{MAX_PIECES_IN_STALEMATE, MOVES_FOR_DRAW};
use crate::board::{GameState, Occupant, Side, Square};

use super::capture::{capture_exists, king_can_capture, man_can_capture};
use super::movegen::{can_play, Captured, Move};

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The same piece must capture again
    ContinuedStreak,
    /// The turn passed to the opponent
    TurnEnded,
    /// The no-progress limit was reached
    Draw,
    /// The given side has won
    SideWon(Side),
}

/// Game status observed at a turn boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Draw,
    Won(Side),
}

/// Apply a generated move and push it onto the move log.
///
/// The move must be legal in `state`; generation guarantees this for the
/// search and [`GameState::apply_move`] checks it for callers.
pub fn make_move(state: &mut GameState, mut mv: Move) -> MoveOutcome {
    let side = state.side_to_move;
    debug_assert_eq!(mv.side, side);
    debug_assert!(state.streak.is_none() || state.streak == Some(mv.from));

    let mut piece = state.board.get(mv.from);
    debug_assert_eq!(piece.side(), Some(side));
    state.board.clear(mv.from);

    if mv.is_capture {
        let jumped = locate_jumped(state, &mv, piece);
        let victim = state.board.get(jumped);
        debug_assert_eq!(victim.side(), Some(side.opponent()));

        mv.captured = Some(Captured {
            square: jumped,
            occupant: victim,
        });
        let opp = side.opponent().index();
        state.pieces[opp] -= 1;
        if victim.is_king() {
            state.kings[opp] -= 1;
        }
        state.streak_captures.push(jumped);
        state.no_progress_plies = 0;
    } else if piece.is_man() {
        state.no_progress_plies = 0;
    } else {
        state.no_progress_plies += 1;
    }

    if piece.is_man() && mv.to.row == side.promotion_row(state.board.size()) {
        piece = Occupant::King(side);
        state.kings[side.index()] += 1;
        mv.promoted = true;
    }
    state.board.place(mv.to, piece);
    state.history.push(mv);

    if mv.is_capture {
        let continues = if piece.is_king() {
            king_can_capture(state, mv.to, side)
        } else {
            man_can_capture(state, mv.to, side)
        };
        if continues {
            state.streak = Some(mv.to);
            state.capture_mandatory = true;
            trace!(%mv, "capture streak continues");
            return MoveOutcome::ContinuedStreak;
        }

        for sq in state.streak_captures.drain(..) {
            state.board.clear(sq);
        }
    }

    state.streak = None;
    state.side_to_move = side.opponent();
    state.capture_mandatory = capture_exists(state, state.side_to_move);

    let outcome = match status(state) {
        GameStatus::Ongoing => MoveOutcome::TurnEnded,
        GameStatus::Draw => MoveOutcome::Draw,
        GameStatus::Won(winner) => MoveOutcome::SideWon(winner),
    };
    trace!(%mv, ?outcome, "turn ended");
    outcome
}

/// Square of the piece jumped by a capture: the midpoint for a man, the
/// first occupied square along the path for a king.
fn locate_jumped(state: &GameState, mv: &Move, piece: Occupant) -> Square {
    let dr = (mv.to.row as i32 - mv.from.row as i32).signum();
    let dc = (mv.to.col as i32 - mv.from.col as i32).signum();

    if piece.is_man() {
        return Square::new(
            (mv.from.row as i32 + dr) as u8,
            (mv.from.col as i32 + dc) as u8,
        );
    }

    let mut distance = 1;
    loop {
        let sq = state
            .board
            .step(mv.from, (dr, dc), distance)
            .filter(|&sq| sq != mv.to)
            .unwrap_or_else(|| panic!("king capture {mv} jumps nothing"));
        if !state.board.is_empty(sq) {
            return sq;
        }
        distance += 1;
    }
}

/// Pop the most recent move and restore the state it was applied to.
///
/// Returns `None` when the log is empty.
pub fn unmake_move(state: &mut GameState) -> Option<Move> {
    let mv = state.history.pop()?;
    let ended_turn = state.streak != Some(mv.to);

    let mut piece = state.board.get(mv.to);
    state.board.clear(mv.to);
    if mv.promoted {
        piece = Occupant::Man(mv.side);
        state.kings[mv.side.index()] -= 1;
    }
    state.board.place(mv.from, piece);

    if let Some(captured) = mv.captured {
        let opp = mv.side.opponent().index();
        state.pieces[opp] += 1;
        if captured.occupant.is_king() {
            state.kings[opp] += 1;
        }

        if ended_turn {
            // The streak's jumped pieces were swept off the grid when the
            // turn passed: put the earlier ones back as blockers.
            debug_assert!(state.streak_captures.is_empty());
            restore_streak_captures(state, &mv);
        } else {
            let popped = state.streak_captures.pop();
            debug_assert_eq!(popped, Some(captured.square));
        }
        state.board.place(captured.square, captured.occupant);
    }

    state.no_progress_plies = mv.prior_no_progress;
    state.side_to_move = mv.side;
    state.capture_mandatory = mv.is_capture;
    state.streak = mv.continues_streak.then_some(mv.from);

    Some(mv)
}

/// Walk back through the log over the earlier jumps of the streak that
/// `last` finished and mark their pieces as jumped again.
fn restore_streak_captures(state: &mut GameState, last: &Move) {
    if !last.continues_streak {
        return;
    }

    let mut earlier = Vec::new();
    for prev in state.history.iter().rev() {
        if prev.side != last.side || !prev.is_capture {
            break;
        }
        if let Some(captured) = prev.captured {
            earlier.push(captured);
        }
        if !prev.continues_streak {
            break;
        }
    }

    for captured in earlier.into_iter().rev() {
        state.board.place(captured.square, captured.occupant);
        state.streak_captures.push(captured.square);
    }
}

/// Status of the game for the side to move.
///
/// Mid-streak positions are always ongoing. A side that cannot capture,
/// has at most [`MAX_PIECES_IN_STALEMATE`] pieces and no free adjacent
/// square loses; larger armies are not scanned.
pub fn status(state: &GameState) -> GameStatus {
    if state.streak.is_some() {
        return GameStatus::Ongoing;
    }
    if state.no_progress_plies >= MOVES_FOR_DRAW {
        return GameStatus::Draw;
    }

    let side = state.side_to_move;
    let pieces = state.pieces[side.index()];
    if pieces == 0 {
        return GameStatus::Won(side.opponent());
    }
    if !state.capture_mandatory && pieces <= MAX_PIECES_IN_STALEMATE && !can_play(state, side) {
        return GameStatus::Won(side.opponent());
    }
    GameStatus::Ongoing
}
