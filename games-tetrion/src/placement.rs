//! A placement: the four grid cells chosen for one piece drop.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Four grid cells occupied by one placed piece.
///
/// Cells are stored sorted so that equality, ordering and hashing see a
/// placement as the *set* of its cells: two (shape, anchor) pairs that
/// cover the same four cells compare equal. This is what deduplicates
/// physically identical moves during move generation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Placement([Coord; 4]);

impl Placement {
    pub fn new(mut cells: [Coord; 4]) -> Placement {
        cells.sort_unstable();
        Placement(cells)
    }

    #[inline]
    pub fn cells(&self) -> &[Coord; 4] {
        &self.0
    }

    /// Whether the placement covers the given cell.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.0.contains(&coord)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} {}]",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
