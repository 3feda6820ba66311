//! The reachability enumerator.
//!
//! Produces, for a piece at a source coordinate, every destination it
//! could move to right now. Unlike the evaluator in
//! [`crate::legality`], this layer is occupancy-aware: a destination is
//! included only if it is empty or holds an opposite-colored piece.
//!
//! King and knight destinations come from fixed offset sets; rook,
//! bishop, and queen destinations are ray-cast one step at a time, with
//! each ray ending at the first obstruction (appended only when it is a
//! capture). The scan order within each kind is fixed and deterministic
//! but is a convention the GUI must not attach meaning to.

use gridchess_core::{Board, Color, Coord, PieceKind};

use crate::{DestList, QueryError};

/// King offsets: (row_delta, col_delta), scanned in this order.
const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (1, -1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (0, 1),
    (0, -1),
];

/// Knight offsets: (row_delta, col_delta), scanned in this order.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Orthogonal ray directions, scanned in this order.
const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (-1, 0), (0, -1), (1, 0)];

/// Diagonal ray directions, scanned in this order.
const DIAGONAL_RAYS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Enumerates the legal destinations of the piece at `source`.
///
/// The piece's color and kind are read from the board; an empty source
/// is a caller precondition violation and fails with
/// [`QueryError::EmptySource`] rather than returning an empty list.
pub fn legal_destinations(board: &Board, source: Coord) -> Result<DestList, QueryError> {
    let (color, kind) = board
        .piece_at(source)
        .ok_or(QueryError::EmptySource(source))?;
    Ok(destinations(board, source, color, kind))
}

/// Like [`legal_destinations`], but additionally checks that the piece
/// at `source` is of the expected kind.
pub fn destinations_for(
    board: &Board,
    source: Coord,
    kind: PieceKind,
) -> Result<DestList, QueryError> {
    let (color, found) = board
        .piece_at(source)
        .ok_or(QueryError::EmptySource(source))?;
    if found != kind {
        return Err(QueryError::KindMismatch {
            at: source,
            expected: kind,
            found,
        });
    }
    Ok(destinations(board, source, color, kind))
}

/// Entry point for unvalidated input such as raw click coordinates.
pub fn legal_destinations_at(board: &Board, row: i32, col: i32) -> Result<DestList, QueryError> {
    let source = u8::try_from(row)
        .ok()
        .zip(u8::try_from(col).ok())
        .and_then(|(r, c)| Coord::new(r, c))
        .ok_or(QueryError::InvalidCoordinate { row, col })?;
    legal_destinations(board, source)
}

/// Enumerates destinations for a piece of the given color and kind as
/// if it stood at `source`, regardless of what the board holds there.
///
/// The color is taken out of band so the GUI can query placements that
/// have not been committed to the board yet.
pub fn destinations(board: &Board, source: Coord, color: Color, kind: PieceKind) -> DestList {
    match kind {
        PieceKind::King => king_destinations(board, source, color),
        PieceKind::Knight => knight_destinations(board, source, color),
        PieceKind::Rook => rook_destinations(board, source, color),
        PieceKind::Bishop => bishop_destinations(board, source, color),
        PieceKind::Queen => queen_destinations(board, source, color),
    }
}

/// King: the in-bounds neighbors, occupancy-filtered.
pub fn king_destinations(board: &Board, source: Coord, color: Color) -> DestList {
    step_destinations(board, source, color, &KING_OFFSETS)
}

/// Knight: the in-bounds L-shaped offsets, occupancy-filtered.
pub fn knight_destinations(board: &Board, source: Coord, color: Color) -> DestList {
    step_destinations(board, source, color, &KNIGHT_OFFSETS)
}

/// Rook: the four orthogonal rays.
pub fn rook_destinations(board: &Board, source: Coord, color: Color) -> DestList {
    let mut list = DestList::new();
    cast_rays(board, source, color, &ROOK_RAYS, &mut list);
    list
}

/// Bishop: the four diagonal rays.
pub fn bishop_destinations(board: &Board, source: Coord, color: Color) -> DestList {
    let mut list = DestList::new();
    cast_rays(board, source, color, &DIAGONAL_RAYS, &mut list);
    list
}

/// Queen: the orthogonal rays followed by the diagonal rays.
pub fn queen_destinations(board: &Board, source: Coord, color: Color) -> DestList {
    let mut list = DestList::new();
    cast_rays(board, source, color, &ROOK_RAYS, &mut list);
    cast_rays(board, source, color, &DIAGONAL_RAYS, &mut list);
    list
}

/// Generates single-step candidates from an offset table, keeping those
/// on the board that are empty or hold an opposite-colored piece.
fn step_destinations(board: &Board, source: Coord, color: Color, offsets: &[(i8, i8)]) -> DestList {
    let mut list = DestList::new();
    for &(dr, dc) in offsets {
        if let Some(to) = source.offset(dr, dc) {
            if board.slot(to).color() != Some(color) {
                list.push(to);
            }
        }
    }
    list
}

/// Walks each ray outward from `source`, appending empty squares until
/// the ray leaves the board or hits a piece. The first piece ends the
/// ray; it is appended only when opposite-colored.
fn cast_rays(
    board: &Board,
    source: Coord,
    color: Color,
    rays: &[(i8, i8)],
    list: &mut DestList,
) {
    for &(dr, dc) in rays {
        let mut cursor = source;
        while let Some(to) = cursor.offset(dr, dc) {
            match board.slot(to).color() {
                None => list.push(to),
                Some(occupant) => {
                    if occupant != color {
                        list.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}
