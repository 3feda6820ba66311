//! Query failure taxonomy.

use gridchess_core::{Coord, PieceKind};
use thiserror::Error;

/// Caller precondition violations.
///
/// None of these are recoverable inside the engine; each one means the
/// caller handed over state that should not exist (a click outside the
/// grid, a query for a piece that is not there). They are surfaced
/// immediately instead of being coerced to "no legal moves", which would
/// hide game-state corruption upstream.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A raw coordinate falls outside the 8x8 board.
    #[error("coordinate ({row}, {col}) is outside the board")]
    InvalidCoordinate { row: i32, col: i32 },

    /// The source square holds no piece.
    #[error("no piece at {0}")]
    EmptySource(Coord),

    /// A kind-targeted query does not match the occupying piece.
    #[error("expected a {expected} at {at}, found a {found}")]
    KindMismatch {
        at: Coord,
        expected: PieceKind,
        found: PieceKind,
    },
}
