//! The 8x8 board snapshot.

use crate::{Color, Coord, PieceKind};

/// The content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// No piece on the square.
    Empty,
    /// A piece of the given color and kind.
    Occupied(Color, PieceKind),
}

impl Slot {
    /// Returns true if the slot holds no piece.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns the occupying piece's color, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(color, _) => Some(color),
        }
    }

    /// Returns the occupying piece's kind, if any.
    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(_, kind) => Some(kind),
        }
    }

    /// Returns the occupying (color, kind) pair, if any.
    #[inline]
    pub const fn piece(self) -> Option<(Color, PieceKind)> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(color, kind) => Some((color, kind)),
        }
    }
}

/// A dense 8x8 occupancy snapshot.
///
/// The board is a value type: the game-state owner mutates it between
/// queries, the rules engine only ever borrows it read-only. There is no
/// sparse representation; all 64 slots exist at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: [[Slot; 8]; 8],
}

impl Board {
    /// Creates a board with every slot empty.
    pub const fn empty() -> Self {
        Board {
            slots: [[Slot::Empty; 8]; 8],
        }
    }

    /// Returns the slot at the given coordinate.
    #[inline]
    pub const fn slot(&self, at: Coord) -> Slot {
        self.slots[at.row() as usize][at.col() as usize]
    }

    /// Returns the piece at the given coordinate, if any.
    #[inline]
    pub const fn piece_at(&self, at: Coord) -> Option<(Color, PieceKind)> {
        self.slot(at).piece()
    }

    /// Returns true if the given coordinate holds no piece.
    #[inline]
    pub const fn is_empty(&self, at: Coord) -> bool {
        self.slot(at).is_empty()
    }

    /// Places a piece, replacing whatever occupied the slot.
    pub fn place(&mut self, at: Coord, color: Color, kind: PieceKind) {
        self.slots[at.row() as usize][at.col() as usize] = Slot::Occupied(color, kind);
    }

    /// Empties the slot at the given coordinate.
    pub fn clear(&mut self, at: Coord) {
        self.slots[at.row() as usize][at.col() as usize] = Slot::Empty;
    }

    /// Empties the slot and returns the piece that occupied it, if any.
    pub fn take(&mut self, at: Coord) -> Option<(Color, PieceKind)> {
        let piece = self.piece_at(at);
        self.clear(at);
        piece
    }

    /// Returns an iterator over all occupied squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Color, PieceKind)> + '_ {
        Coord::all().filter_map(|at| self.piece_at(at).map(|(color, kind)| (at, color, kind)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn empty_board_has_no_pieces() {
        let board = Board::empty();
        assert!(Coord::all().all(|c| board.is_empty(c)));
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn place_and_query() {
        let mut board = Board::empty();
        board.place(at(3, 3), Color::White, PieceKind::Rook);

        assert_eq!(
            board.slot(at(3, 3)),
            Slot::Occupied(Color::White, PieceKind::Rook)
        );
        assert_eq!(
            board.piece_at(at(3, 3)),
            Some((Color::White, PieceKind::Rook))
        );
        assert!(!board.is_empty(at(3, 3)));
        assert!(board.is_empty(at(3, 4)));
    }

    #[test]
    fn place_replaces_occupant() {
        let mut board = Board::empty();
        board.place(at(0, 0), Color::White, PieceKind::Knight);
        board.place(at(0, 0), Color::Black, PieceKind::Queen);
        assert_eq!(
            board.piece_at(at(0, 0)),
            Some((Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn take_empties_the_slot() {
        let mut board = Board::empty();
        board.place(at(5, 2), Color::Black, PieceKind::King);

        assert_eq!(board.take(at(5, 2)), Some((Color::Black, PieceKind::King)));
        assert!(board.is_empty(at(5, 2)));
        assert_eq!(board.take(at(5, 2)), None);
    }

    #[test]
    fn pieces_iterates_in_row_order() {
        let mut board = Board::empty();
        board.place(at(6, 1), Color::Black, PieceKind::Knight);
        board.place(at(2, 7), Color::White, PieceKind::Bishop);

        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(
            pieces,
            vec![
                (at(2, 7), Color::White, PieceKind::Bishop),
                (at(6, 1), Color::Black, PieceKind::Knight),
            ]
        );
    }

    #[test]
    fn slot_accessors() {
        let slot = Slot::Occupied(Color::White, PieceKind::Queen);
        assert_eq!(slot.color(), Some(Color::White));
        assert_eq!(slot.kind(), Some(PieceKind::Queen));
        assert!(!slot.is_empty());

        assert_eq!(Slot::Empty.color(), None);
        assert_eq!(Slot::Empty.kind(), None);
        assert!(Slot::Empty.is_empty());
    }
}
