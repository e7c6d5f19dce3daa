//! Static evaluation of Shashki positions
//!
//! The evaluator scores a position from Black's point of view based on:
//! - Win/loss detection (no pieces left, small stalemated army)
//! - Material, with kings weighted higher during the opening
//! - Tempo for the side to move
//! - Men on the ranks before promotion and on the back rank

use crate::board::state::MAX_PIECES_IN_STALEMATE;
use crate::board::{GameState, Occupant, Side};
use crate::rules::can_play;

use super::weights::Weights;

/// Evaluate the position. Positive values favor Black.
///
/// Returns [`Weights::WIN`] once White has no pieces (or is stalemated with
/// a small army) and [`Weights::LOSS`] in the mirrored cases.
///
/// # Arguments
/// * `state` - Position to evaluate, normally at a turn boundary
#[must_use]
pub fn evaluate(state: &GameState) -> f32 {
    let white = state.pieces(Side::White);
    let black = state.pieces(Side::Black);
    if white == 0 {
        return Weights::WIN;
    }
    if black == 0 {
        return Weights::LOSS;
    }

    let opening = is_opening(state);
    let mut score = material(state, opening);

    let side = state.side_to_move();
    score += side.sign() * Weights::TEMPO;
    if state.is_capture_mandatory() {
        score += side.sign() * Weights::FORCED_CAPTURE;
    } else if state.pieces(side) <= MAX_PIECES_IN_STALEMATE && !can_play(state, side) {
        return terminal_for(side.opponent());
    }

    score + territory(state, opening)
}

/// The opening lasts while more than a third of the starting men remain
#[inline]
pub fn is_opening(state: &GameState) -> bool {
    let total = state.pieces(Side::White) + state.pieces(Side::Black);
    total as usize > state.pawn_rows() * state.size() / 3
}

/// Extreme score for a win by `winner`
#[inline]
pub fn terminal_for(winner: Side) -> f32 {
    match winner {
        Side::Black => Weights::WIN,
        Side::White => Weights::LOSS,
    }
}

fn material(state: &GameState, opening: bool) -> f32 {
    let pieces = state.pieces(Side::Black) as f32 - state.pieces(Side::White) as f32;
    let kings = state.kings(Side::Black) as f32 - state.kings(Side::White) as f32;

    let mut score = pieces + Weights::KING * kings;
    if opening {
        score += Weights::OPENING_KING * kings;
    }
    score
}

/// Men close to promotion and men holding the back rank.
///
/// Men already jumped in a running streak no longer count.
fn territory(state: &GameState, opening: bool) -> f32 {
    let board = state.board();
    let size = board.size();
    let advanced = if opening {
        -Weights::ADVANCED_OPENING
    } else {
        Weights::ADVANCED_LATE
    };

    let mut score = 0.0;
    for row in 1..=2 {
        score += men_on_row(state, size - 1 - row, Side::Black) as f32 * advanced;
        score -= men_on_row(state, row, Side::White) as f32 * advanced;
    }

    if opening {
        score += men_on_row(state, 0, Side::Black) as f32 * Weights::BACK_RANK;
        score -= men_on_row(state, size - 1, Side::White) as f32 * Weights::BACK_RANK;
    }
    score
}

#[inline]
fn men_on_row(state: &GameState, row: usize, side: Side) -> usize {
    state
        .board()
        .row_squares(row)
        .filter(|&sq| state.occupant(sq) == Occupant::Man(side) && !state.is_captured(sq))
        .count()
}
