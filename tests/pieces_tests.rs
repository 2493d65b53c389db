//! Integration tests for shape matrices, rotation, and spawning.

use blockfall::core::{template, Piece, Shape};
use blockfall::types::PieceKind;

#[test]
fn every_kind_has_exactly_four_filled_cells() {
    for kind in PieceKind::ALL {
        assert_eq!(template(kind).filled_offsets().count(), 4, "{kind:?}");
    }
}

#[test]
fn i_piece_occupies_its_second_matrix_row() {
    let i = template(PieceKind::I);
    assert_eq!(i.size(), 4);
    for x in 0..4 {
        assert!(i.filled(x, 1));
        assert!(!i.filled(x, 0));
        assert!(!i.filled(x, 2));
    }
}

#[test]
fn clockwise_rotation_matches_transpose_reverse() {
    // new[y][x] == old[n-1-x][y], checked cell by cell.
    for kind in PieceKind::ALL {
        let shape = template(kind);
        let rotated = shape.rotated_cw();
        let n = shape.size() as usize;
        for y in 0..n {
            for x in 0..n {
                assert_eq!(rotated.filled(x, y), shape.filled(y, n - 1 - x), "{kind:?}");
            }
        }
    }
}

#[test]
fn rotated_l_matches_expected_matrix() {
    let rotated = template(PieceKind::L).rotated_cw();
    let expected = Shape::from_rows([
        [0, 1, 0],
        [0, 1, 0],
        [0, 1, 1],
    ]);
    assert_eq!(rotated, expected);
}

#[test]
fn rotated_i_is_vertical() {
    let rotated = template(PieceKind::I).rotated_cw();
    let expected = Shape::from_rows([
        [0, 0, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 1, 0],
    ]);
    assert_eq!(rotated, expected);
}

#[test]
fn four_rotations_are_the_identity() {
    for kind in PieceKind::ALL {
        let original = template(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotated_cw();
        }
        assert_eq!(shape, original, "{kind:?}");
    }
}

#[test]
fn spawn_is_horizontally_centered_at_the_top() {
    // x = W/2 - size/2 for each matrix size.
    assert_eq!(Piece::spawn(PieceKind::O).x, 4);
    assert_eq!(Piece::spawn(PieceKind::I).x, 3);
    assert_eq!(Piece::spawn(PieceKind::J).x, 4);
    assert_eq!(Piece::spawn(PieceKind::S).x, 4);
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.kind, kind);
        assert_eq!(piece.shape, template(kind));
    }
}
