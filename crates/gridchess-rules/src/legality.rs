//! The legality evaluator.
//!
//! Per-kind predicates answering "may a piece of this kind move from
//! `from` to `to`?". These check movement geometry and, for sliders,
//! that every square strictly between the endpoints is empty. They do
//! NOT inspect the destination slot: landing on an own piece is not
//! rejected here but by the reachability enumerator in [`crate::reach`].
//! The GUI relies on that split, so the two layers must stay consistent.

use gridchess_core::{Board, Color, Coord, PieceKind};

use crate::QueryError;

/// Returns true if a piece of the given kind may move from `from` to
/// `to` under its movement geometry and path-obstruction rules.
///
/// The moving piece's color is irrelevant at this layer: no kind in the
/// variant moves differently per color, and the destination slot is not
/// inspected. The piece need not actually be on the board at `from`.
///
/// `from == to` is not special-cased (the king rule and the trivially
/// clear slider paths both accept it); callers reject null moves.
pub fn is_legal_move(board: &Board, kind: PieceKind, from: Coord, to: Coord) -> bool {
    match kind {
        PieceKind::King => king_can_move(from, to),
        PieceKind::Knight => knight_can_move(from, to),
        PieceKind::Rook => rook_can_move(board, from, to),
        PieceKind::Bishop => bishop_can_move(board, from, to),
        PieceKind::Queen => queen_can_move(board, from, to),
    }
}

/// Checked evaluator: reads the moving piece from the board and
/// dispatches on its kind.
///
/// Returns the piece's color alongside the verdict so the caller can
/// apply its own destination filtering without a second board lookup.
pub fn verify_move(board: &Board, from: Coord, to: Coord) -> Result<(bool, Color), QueryError> {
    let (color, kind) = board
        .piece_at(from)
        .ok_or(QueryError::EmptySource(from))?;
    Ok((is_legal_move(board, kind, from, to), color))
}

/// King: at most one step on each axis. Occupancy-blind.
#[inline]
pub fn king_can_move(from: Coord, to: Coord) -> bool {
    from.row_distance(to) <= 1 && from.col_distance(to) <= 1
}

/// Knight: the step distances are 1 and 2 in some order. Jumps, so no
/// path check.
#[inline]
pub fn knight_can_move(from: Coord, to: Coord) -> bool {
    let dr = from.row_distance(to);
    let dc = from.col_distance(to);
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

/// Rook: same row or same column, with every square strictly between
/// the endpoints empty.
pub fn rook_can_move(board: &Board, from: Coord, to: Coord) -> bool {
    (from.row() == to.row() || from.col() == to.col()) && path_is_clear(board, from, to)
}

/// Bishop: same diagonal (equal row and column distance), with every
/// square strictly between the endpoints empty.
pub fn bishop_can_move(board: &Board, from: Coord, to: Coord) -> bool {
    from.row_distance(to) == from.col_distance(to) && path_is_clear(board, from, to)
}

/// Queen: a rook-legal or a bishop-legal move.
pub fn queen_can_move(board: &Board, from: Coord, to: Coord) -> bool {
    rook_can_move(board, from, to) || bishop_can_move(board, from, to)
}

/// Walks the unit-step ray from `from` towards `to` and reports whether
/// every square strictly between them is empty. Requires the endpoints
/// to share a row, column, or diagonal; the walk then always lands on
/// `to`. The endpoints themselves are never inspected.
fn path_is_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let dr = (to.row() as i8 - from.row() as i8).signum();
    let dc = (to.col() as i8 - from.col() as i8).signum();
    let mut cursor = from;
    loop {
        cursor = match cursor.offset(dr, dc) {
            Some(next) => next,
            None => return true,
        };
        if cursor == to {
            return true;
        }
        if !board.is_empty(cursor) {
            return false;
        }
    }
}
