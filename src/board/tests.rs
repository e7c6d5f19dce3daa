use super::*;
use crate::config::GameConfig;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn test_side_direction() {
    assert_eq!(Side::White.forward(), -1);
    assert_eq!(Side::Black.forward(), 1);
    assert_eq!(Side::White.promotion_row(8), 0);
    assert_eq!(Side::Black.promotion_row(8), 7);
    assert_eq!(Side::Black.promotion_row(10), 9);
}

#[test]
fn test_occupant_queries() {
    assert!(Occupant::default().is_empty());
    assert_eq!(Occupant::Empty.side(), None);
    assert_eq!(Occupant::Man(Side::White).side(), Some(Side::White));
    assert!(Occupant::King(Side::Black).is_king());
    assert!(!Occupant::King(Side::Black).is_man());
}

#[test]
fn test_square_playable() {
    assert!(Square::new(0, 1).is_playable());
    assert!(Square::new(7, 0).is_playable());
    assert!(!Square::new(0, 0).is_playable());
    assert!(!Square::new(3, 3).is_playable());
}

#[test]
fn test_square_ordering() {
    let a = Square::new(0, 1);
    let b = Square::new(0, 3);
    let c = Square::new(1, 0);

    assert!(a < b);
    assert!(b < c);
    assert_eq!(c.to_string(), "(1, 0)");
}

#[test]
fn test_standard_setup() {
    let board = Board::standard(8, 3);
    assert_eq!(board.census(Side::White), (12, 0));
    assert_eq!(board.census(Side::Black), (12, 0));

    assert_eq!(board.get(Square::new(0, 1)), Occupant::Man(Side::Black));
    assert_eq!(board.get(Square::new(7, 0)), Occupant::Man(Side::White));
    // Middle rows start empty
    assert!(board.row_squares(3).all(|sq| board.is_empty(sq)));
    assert!(board.row_squares(4).all(|sq| board.is_empty(sq)));
}

#[test]
fn test_playable_squares() {
    let board = Board::new(8);
    let squares: Vec<Square> = board.playable_squares().collect();
    assert_eq!(squares.len(), 32);
    assert!(squares.iter().all(|sq| sq.is_playable()));
    assert_eq!(squares[0], Square::new(0, 1));
    assert_eq!(squares[4], Square::new(1, 0));
}

#[test]
fn test_step_stays_on_board() {
    let board = Board::new(8);
    let corner = Square::new(7, 0);
    assert_eq!(board.step(corner, (-1, 1), 7), Some(Square::new(0, 7)));
    assert_eq!(board.step(corner, (-1, 1), 8), None);
    assert_eq!(board.step(corner, (1, 1), 1), None);
    assert_eq!(board.square(-1, 0), None);
}

#[test]
#[should_panic]
fn test_odd_board_size_panics() {
    let _ = Board::new(9);
}

#[test]
#[should_panic]
fn test_out_of_range_square_panics() {
    let board = Board::new(6);
    let _ = board.get(Square::new(7, 0));
}

#[test]
fn test_board_display() {
    let board = Board::standard(4, 1);
    assert_eq!(board.to_string(), "  b   b\n.   .  \n  .   .\nw   w  \n");
}

#[test]
fn test_new_state() {
    let state = GameState::new(&GameConfig::new(10, 4).unwrap());
    assert_eq!(state.size(), 10);
    assert_eq!(state.side_to_move(), Side::White);
    assert_eq!(state.pieces(Side::White), 20);
    assert_eq!(state.pieces(Side::Black), 20);
    assert_eq!(state.kings(Side::White), 0);
    assert_eq!(state.no_progress_plies(), 0);
    assert!(!state.is_capture_mandatory());
    assert_eq!(state.is_mid_streak(), None);
    assert!(state.counts_consistent());
}

#[test]
fn test_select_and_clear() {
    let mut state = GameState::default();

    let dests = state.select(Square::new(5, 0));
    assert_eq!(dests, vec![Square::new(4, 1)]);
    assert_eq!(state.selected_origin(), Some(Square::new(5, 0)));

    // Opponent piece cannot be selected
    assert!(state.select(Square::new(2, 1)).is_empty());
    assert_eq!(state.selected_origin(), None);

    state.select(Square::new(5, 2));
    state.clear_selection();
    assert_eq!(state.selected_origin(), None);
}

#[test]
fn test_selection_pinned_during_streak() {
    let mut board = Board::new(8);
    board.place(Square::new(5, 0), Occupant::Man(Side::White));
    board.place(Square::new(7, 6), Occupant::Man(Side::White));
    board.place(Square::new(4, 1), Occupant::Man(Side::Black));
    board.place(Square::new(2, 3), Occupant::Man(Side::Black));
    board.place(Square::new(0, 7), Occupant::Man(Side::Black));
    let mut state = GameState::from_position(board, 3, Side::White);

    state.apply_move(Square::new(5, 0), Square::new(3, 2)).unwrap();
    assert_eq!(state.selected_origin(), Some(Square::new(3, 2)));

    assert!(state.select(Square::new(7, 6)).is_empty());
    assert_eq!(state.selected_origin(), Some(Square::new(3, 2)));
    state.clear_selection();
    assert_eq!(state.selected_origin(), Some(Square::new(3, 2)));
}

#[test]
fn test_apply_move_errors() {
    use crate::error::MoveError;

    let mut state = GameState::default();
    assert_eq!(
        state.apply_move(Square::new(2, 1), Square::new(3, 0)),
        Err(MoveError::NotYourPiece(Square::new(2, 1)))
    );
    assert_eq!(
        state.apply_move(Square::new(5, 0), Square::new(3, 2)),
        Err(MoveError::IllegalMove {
            from: Square::new(5, 0),
            to: Square::new(3, 2),
        })
    );
    // Rejected moves leave the state alone
    assert_eq!(state, GameState::default());
}
