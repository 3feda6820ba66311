//! Core types for the grid-chess variant.
//!
//! This crate provides the fundamental types shared by the move-rules
//! engine and the surrounding GUI layer:
//! - [`Color`] and [`PieceKind`] for piece identity
//! - [`Coord`] for board coordinates
//! - [`Slot`] and [`Board`] for the 8x8 occupancy snapshot
//! - Layout-string parsing and serialization for board construction

mod board;
mod color;
mod coord;
mod layout;
mod piece;

pub use board::{Board, Slot};
pub use color::Color;
pub use coord::Coord;
pub use layout::LayoutError;
pub use piece::PieceKind;
