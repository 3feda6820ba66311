//! Cross-layer consistency between the legality evaluator and the
//! reachability enumerator.
//!
//! The enumerator must produce exactly the evaluator-legal destinations
//! that do not hold an own-colored piece, for every kind. The GUI uses
//! the enumerator for highlighting and the evaluator for move
//! confirmation, so any divergence shows up as squares that highlight
//! but reject the move (or the reverse).

use gridchess_core::{Board, Color, Coord, PieceKind};
use gridchess_rules::{is_legal_move, legal_destinations};

fn at(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

/// The evaluator-true, non-own-color destination set for the piece at
/// `source`, excluding the null move.
fn evaluator_set(board: &Board, source: Coord) -> Vec<Coord> {
    let (color, kind) = board.piece_at(source).unwrap();
    Coord::all()
        .filter(|&to| to != source)
        .filter(|&to| is_legal_move(board, kind, source, to))
        .filter(|&to| board.slot(to).color() != Some(color))
        .collect()
}

fn assert_layers_agree(board: &Board, source: Coord) {
    let mut enumerated: Vec<Coord> = legal_destinations(board, source)
        .unwrap()
        .iter()
        .collect();
    let mut expected = evaluator_set(board, source);
    enumerated.sort();
    expected.sort();
    assert_eq!(enumerated, expected, "source {}", source);
}

#[test]
fn king_layers_agree() {
    let board = Board::from_layout("8/8/8/3K4/3n4/2R5/8/8").unwrap();
    assert_layers_agree(&board, at(3, 3));
}

#[test]
fn knight_layers_agree() {
    let board = Board::from_layout("8/8/4n3/8/3B1q2/8/8/8").unwrap();
    assert_layers_agree(&board, at(2, 4));
}

#[test]
fn rook_layers_agree() {
    let board = Board::from_layout("8/8/8/1n1R2B1/8/3q4/8/8").unwrap();
    assert_layers_agree(&board, at(3, 3));
}

#[test]
fn bishop_layers_agree() {
    let board = Board::from_layout("8/8/8/3b4/4N3/1q6/8/8").unwrap();
    assert_layers_agree(&board, at(3, 3));
}

#[test]
fn queen_layers_agree() {
    let board = Board::from_layout("8/1r6/8/1n1Q2B1/8/3q1N2/8/8").unwrap();
    assert_layers_agree(&board, at(3, 3));
}

#[test]
fn corner_king_scenario() {
    let mut board = Board::empty();
    board.place(at(0, 0), Color::White, PieceKind::King);

    let mut reached: Vec<Coord> = legal_destinations(&board, at(0, 0)).unwrap().iter().collect();
    reached.sort();
    assert_eq!(reached, vec![at(0, 1), at(1, 0), at(1, 1)]);
}

#[test]
fn rook_capture_ray_scenario() {
    let mut board = Board::empty();
    board.place(at(3, 3), Color::White, PieceKind::Rook);
    board.place(at(3, 6), Color::Black, PieceKind::Bishop);

    let list = legal_destinations(&board, at(3, 3)).unwrap();
    let plus_col: Vec<Coord> = list.iter().filter(|c| c.row() == 3 && c.col() > 3).collect();
    assert_eq!(plus_col, vec![at(3, 4), at(3, 5), at(3, 6)]);
    assert!(!list.contains(at(3, 7)));
}

#[test]
fn single_blocker_flips_rook_legality() {
    let from = at(2, 1);
    let to = at(2, 6);
    let empty = Board::empty();
    assert!(is_legal_move(&empty, PieceKind::Rook, from, to));

    for col in 2..6 {
        for color in [Color::White, Color::Black] {
            let mut board = Board::empty();
            board.place(at(2, col), color, PieceKind::Knight);
            assert!(
                !is_legal_move(&board, PieceKind::Rook, from, to),
                "blocker at (2, {}) of {}",
                col,
                color
            );
        }
    }
}
