//! Move legality and reachable-square enumeration.
//!
//! This crate is the rules engine behind the GUI: given a read-only
//! [`Board`](gridchess_core::Board) snapshot it answers two questions per
//! piece kind:
//!
//! - [`is_legal_move`] - may a piece of this kind move from here to
//!   there? This is the raw geometry/path check: it walks blocking
//!   pieces for sliders but deliberately ignores what occupies the
//!   destination square.
//! - [`legal_destinations`] - which squares can the piece at this
//!   coordinate reach right now? This is occupancy-aware: own-color
//!   destinations are filtered out and slider rays stop at the first
//!   obstruction, including it only as a capture.
//!
//! The engine is stateless and purely functional. Every call borrows the
//! board for its duration and retains nothing; the game-state owner must
//! not mutate the board while a query is in flight.
//!
//! Caller precondition violations (out-of-range click coordinates, an
//! empty source square, a kind-targeted query against a different
//! occupant) surface as [`QueryError`] rather than an empty result, so
//! upstream state corruption fails fast.

mod error;
pub mod legality;
mod list;
pub mod reach;

pub use error::QueryError;
pub use legality::{is_legal_move, verify_move};
pub use list::DestList;
pub use reach::{destinations, destinations_for, legal_destinations, legal_destinations_at};
