//! Destination list with fixed capacity.

use gridchess_core::Coord;

/// A list of destination coordinates with a fixed maximum capacity.
///
/// A queen on an otherwise empty board reaches at most 27 squares, so a
/// fixed-size array avoids heap allocations during enumeration.
#[derive(Clone)]
pub struct DestList {
    coords: [Option<Coord>; Self::MAX_DESTINATIONS],
    len: usize,
}

impl DestList {
    /// Maximum number of destinations any piece kind can have.
    pub const MAX_DESTINATIONS: usize = 32;

    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        DestList {
            coords: [None; Self::MAX_DESTINATIONS],
            len: 0,
        }
    }

    /// Adds a destination to the list.
    #[inline]
    pub fn push(&mut self, at: Coord) {
        debug_assert!(self.len < Self::MAX_DESTINATIONS);
        self.coords[self.len] = Some(at);
        self.len += 1;
    }

    /// Returns the number of destinations.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the list contains the given coordinate.
    pub fn contains(&self, at: Coord) -> bool {
        self.iter().any(|c| c == at)
    }

    /// Returns an iterator over the destinations in scan order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords[..self.len].iter().filter_map(|c| *c)
    }
}

impl Default for DestList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for DestList {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for DestList {}

impl FromIterator<Coord> for DestList {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut list = DestList::new();
        for at in iter {
            list.push(at);
        }
        list
    }
}

impl std::fmt::Debug for DestList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
