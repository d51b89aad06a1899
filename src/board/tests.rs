use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2.row, 7);
    assert_eq!(pos2.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_try_from_coords() {
    assert_eq!(Pos::try_from_coords(3, 4), Some(Pos::new(3, 4)));
    assert_eq!(Pos::try_from_coords(-1, 4), None);
    assert_eq!(Pos::try_from_coords(3, 15), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
    assert_eq!(WIN_LENGTH, 5);
}

#[test]
fn test_pos_corner_indices() {
    assert_eq!(Pos::new(0, 0).to_index(), 0);
    assert_eq!(Pos::new(0, 14).to_index(), 14);
    assert_eq!(Pos::new(14, 0).to_index(), 210);
    assert_eq!(Pos::new(14, 14).to_index(), 224);
}

#[test]
fn test_place_then_occupied() {
    let mut board = Board::new();
    let pos = Pos::new(5, 5);
    assert!(!board.is_occupied(pos));

    board.place(pos, Stone::Black).unwrap();
    assert!(board.is_occupied(pos));
    assert_eq!(board.get(pos), Some(Stone::Black));
}

#[test]
fn test_no_overwrite_either_color() {
    let mut board = Board::new();
    let pos = Pos::new(5, 5);
    board.place(pos, Stone::Black).unwrap();

    // Same color and opponent color are both refused
    assert_eq!(board.place(pos, Stone::Black), Err(PlaceError::Occupied));
    assert_eq!(board.place(pos, Stone::White), Err(PlaceError::Occupied));

    // Board unchanged
    assert_eq!(board.get(pos), Some(Stone::Black));
    assert_eq!(board.stone_count(), 1);
    assert!(board.moves_of(Stone::White).is_empty());
}

#[test]
fn test_move_records_disjoint_and_complete() {
    let mut board = Board::new();
    board.place(Pos::new(0, 0), Stone::Black).unwrap();
    board.place(Pos::new(0, 1), Stone::White).unwrap();
    board.place(Pos::new(1, 0), Stone::Black).unwrap();

    let black = board.stones_of(Stone::Black);
    let white = board.stones_of(Stone::White);
    assert!(black.is_disjoint(white));
    assert_eq!(black.count() + white.count(), board.stone_count());

    // Every recorded move shows up in its color's occupancy set
    for &pos in board.moves_of(Stone::Black) {
        assert!(black.get(pos));
        assert!(!white.get(pos));
    }
    for &pos in board.moves_of(Stone::White) {
        assert!(white.get(pos));
        assert!(!black.get(pos));
    }
}

#[test]
fn test_move_order_preserved() {
    let mut board = Board::new();
    let moves = [Pos::new(3, 3), Pos::new(9, 2), Pos::new(0, 14)];
    for &pos in &moves {
        board.place(pos, Stone::White).unwrap();
    }
    assert_eq!(board.moves_of(Stone::White), moves.as_slice());
}

#[test]
fn test_reset_clears_everything() {
    let mut board = Board::new();
    board.place(Pos::new(2, 3), Stone::Black).unwrap();
    board.place(Pos::new(4, 5), Stone::White).unwrap();

    board.reset();
    assert!(board.is_board_empty());
    assert_eq!(board.stone_count(), 0);
    assert!(board.moves_of(Stone::Black).is_empty());
    assert!(board.moves_of(Stone::White).is_empty());
    for idx in 0..TOTAL_CELLS {
        assert!(!board.is_occupied(Pos::from_index(idx)));
    }
}

#[test]
fn test_bitboard_iter_ones() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(0, 0));
    bb.set(Pos::new(7, 7));
    bb.set(Pos::new(14, 14));

    let ones: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(ones, vec![Pos::new(0, 0), Pos::new(7, 7), Pos::new(14, 14)]);
}
