//! Integration tests for the board: row clearing and compaction.

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn set_and_get_round_trip() {
    let mut board = Board::new();
    assert!(board.set(3, 7, Some(PieceKind::L)));
    assert_eq!(board.get(3, 7), Some(Some(PieceKind::L)));
    assert!(board.is_occupied(3, 7));
    assert!(!board.is_occupied(3, 8));
}

#[test]
fn out_of_bounds_access_is_rejected() {
    let mut board = Board::new();
    assert!(!board.set(-1, 0, Some(PieceKind::I)));
    assert!(!board.set(10, 0, Some(PieceKind::I)));
    assert!(!board.set(0, 20, Some(PieceKind::I)));
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, 20), None);
    assert!(!board.is_occupied(-1, 19));
}

#[test]
fn single_row_clear_shifts_rows_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::T));
    board.set(9, 17, Some(PieceKind::S));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), [19]);

    assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.get(9, 18), Some(Some(PieceKind::S)));
    assert_eq!(board.get(9, 17), Some(None));
}

#[test]
fn multiple_scattered_rows_clear_together() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    fill_row(&mut board, 17, PieceKind::J);
    board.set(4, 18, Some(PieceKind::O));
    board.set(4, 16, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), [19, 17]);

    // The two surviving markers compact to the bottom, order kept.
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 18), Some(Some(PieceKind::Z)));
    let filled = board.cells().iter().filter(|c| c.is_some()).count();
    assert_eq!(filled, 2);
}

#[test]
fn four_rows_is_the_maximum_single_clear() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 4);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn almost_full_row_does_not_clear() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(5, 19, None);

    assert!(!board.is_row_full(19));
    assert!(board.clear_full_rows().is_empty());
}

#[test]
fn clear_empties_every_cell() {
    let mut board = Board::new();
    fill_row(&mut board, 10, PieceKind::T);
    board.clear();
    assert!(board.cells().iter().all(|c| c.is_none()));
}
