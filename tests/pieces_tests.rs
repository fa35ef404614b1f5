//! Piece and catalog tests

use blockfall::core::{shape_for, Piece};
use blockfall::types::{Color, PieceKind};

#[test]
fn test_every_kind_spawns_at_anchor() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        assert_eq!((piece.x, piece.y), (4, 0), "{:?}", kind);
        assert_eq!(piece.kind, kind);
        assert_eq!(piece.cells().count(), 4);
    }
}

#[test]
fn test_catalog_matrices() {
    let expected: [(PieceKind, Vec<Vec<u8>>, Color); 7] = [
        (PieceKind::I, vec![vec![1, 1, 1, 1]], Color::Cyan),
        (PieceKind::O, vec![vec![1, 1], vec![1, 1]], Color::Yellow),
        (PieceKind::T, vec![vec![0, 1, 0], vec![1, 1, 1]], Color::Purple),
        (PieceKind::S, vec![vec![0, 1, 1], vec![1, 1, 0]], Color::Green),
        (PieceKind::Z, vec![vec![1, 1, 0], vec![0, 1, 1]], Color::Red),
        (PieceKind::J, vec![vec![1, 0, 0], vec![1, 1, 1]], Color::Blue),
        (PieceKind::L, vec![vec![0, 0, 1], vec![1, 1, 1]], Color::Orange),
    ];

    for (kind, matrix, color) in expected {
        let def = shape_for(kind);
        assert_eq!(def.kind, kind);
        assert_eq!(def.shape.to_matrix(), matrix, "{:?}", kind);
        assert_eq!(def.color, color, "{:?}", kind);
    }
}

#[test]
fn test_o_rotation_is_identity() {
    let o = Piece::spawn(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_four_rotations_restore_shape() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind).translated(1, 3);
        let mut turned = piece;
        for _ in 0..4 {
            turned = turned.rotated();
        }
        assert_eq!(turned, piece, "{:?}", kind);
    }
}

#[test]
fn test_i_alternates_between_row_and_column() {
    let i = Piece::spawn(PieceKind::I);
    let upright = i.rotated();

    assert_eq!(upright.shape.to_matrix(), vec![vec![1], vec![1], vec![1], vec![1]]);
    assert_eq!(upright.cells().collect::<Vec<_>>(), vec![(4, 0), (4, 1), (4, 2), (4, 3)]);
    assert_eq!(upright.rotated().shape, i.shape);
}

#[test]
fn test_t_rotates_clockwise() {
    let t = Piece::spawn(PieceKind::T).rotated();
    assert_eq!(
        t.shape.to_matrix(),
        vec![vec![1, 0], vec![1, 1], vec![1, 0]]
    );
}

#[test]
fn test_l_rotates_clockwise() {
    let l = Piece::spawn(PieceKind::L).rotated();
    assert_eq!(
        l.shape.to_matrix(),
        vec![vec![1, 0], vec![1, 0], vec![1, 1]]
    );
}

#[test]
fn test_rotation_keeps_anchor_and_color() {
    let piece = Piece::spawn(PieceKind::S).translated(2, 7);
    let rotated = piece.rotated();

    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.color, Color::Green);
    assert_eq!(rotated.kind, PieceKind::S);
}

#[test]
fn test_bottom_row() {
    assert_eq!(Piece::spawn(PieceKind::I).bottom(), 0);
    assert_eq!(Piece::spawn(PieceKind::T).bottom(), 1);
    assert_eq!(Piece::spawn(PieceKind::I).rotated().bottom(), 3);
}
