//! Layout-string parsing and serialization.
//!
//! A layout string describes piece placement only, in the style of the
//! placement field of FEN: eight rows separated by `/`, row 0 first,
//! digits for runs of empty squares, letters for pieces (uppercase White,
//! lowercase Black). Example: `4k3/8/8/3R4/8/8/8/4K3`.

use thiserror::Error;

use crate::{Board, Coord, PieceKind, Slot};

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },

    #[error("row {row} describes {count} squares, expected 8")]
    InvalidRowLength { row: usize, count: usize },
}

impl Board {
    /// Parses a layout string into a board.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(run) = ch.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(LayoutError::InvalidCharacter { row, ch });
                    }
                    col += run as usize;
                } else if let Some((kind, color)) = PieceKind::from_layout_char(ch) {
                    let Some(at) = Coord::new(row as u8, col as u8) else {
                        return Err(LayoutError::InvalidRowLength { row, count: col + 1 });
                    };
                    board.place(at, color, kind);
                    col += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter { row, ch });
                }
            }
            if col != 8 {
                return Err(LayoutError::InvalidRowLength { row, count: col });
            }
        }

        Ok(board)
    }

    /// Serializes the board back into a layout string.
    pub fn to_layout(&self) -> String {
        let mut out = String::new();
        for row in 0..8u8 {
            if row > 0 {
                out.push('/');
            }
            let mut empty_run = 0u8;
            for col in 0..8u8 {
                let at = match Coord::new(row, col) {
                    Some(at) => at,
                    None => unreachable!(),
                };
                match self.slot(at) {
                    Slot::Empty => empty_run += 1,
                    Slot::Occupied(color, kind) => {
                        if empty_run > 0 {
                            out.push((b'0' + empty_run) as char);
                            empty_run = 0;
                        }
                        out.push(kind.to_layout_char(color));
                    }
                }
            }
            if empty_run > 0 {
                out.push((b'0' + empty_run) as char);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    fn at(row: u8, col: u8) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn parse_empty_board() {
        let board = Board::from_layout("8/8/8/8/8/8/8/8").unwrap();
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn parse_pieces() {
        let board = Board::from_layout("4k3/8/8/3R4/8/8/8/4K3").unwrap();
        assert_eq!(
            board.piece_at(at(0, 4)),
            Some((Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(at(3, 3)),
            Some((Color::White, PieceKind::Rook))
        );
        assert_eq!(
            board.piece_at(at(7, 4)),
            Some((Color::White, PieceKind::King))
        );
        assert_eq!(board.pieces().count(), 3);
    }

    #[test]
    fn reject_wrong_row_count() {
        assert_eq!(
            Board::from_layout("8/8/8"),
            Err(LayoutError::InvalidRowCount(3))
        );
    }

    #[test]
    fn reject_bad_character() {
        assert_eq!(
            Board::from_layout("8/8/8/3p4/8/8/8/8"),
            Err(LayoutError::InvalidCharacter { row: 3, ch: 'p' })
        );
        assert_eq!(
            Board::from_layout("8/8/8/0/8/8/8/8"),
            Err(LayoutError::InvalidCharacter { row: 3, ch: '0' })
        );
    }

    #[test]
    fn reject_short_or_long_rows() {
        assert_eq!(
            Board::from_layout("7/8/8/8/8/8/8/8"),
            Err(LayoutError::InvalidRowLength { row: 0, count: 7 })
        );
        assert_eq!(
            Board::from_layout("8/8/44K/8/8/8/8/8"),
            Err(LayoutError::InvalidRowLength { row: 2, count: 9 })
        );
    }

    #[test]
    fn layout_round_trip() {
        let layout = "r3k2r/8/2nq4/8/4B3/1N6/8/R3K2R";
        let board = Board::from_layout(layout).unwrap();
        assert_eq!(board.to_layout(), layout);
    }
}
