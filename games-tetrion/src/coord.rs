//! Grid coordinates on the wrapping board.
//!
//! The board is a torus: moving off one edge re-enters on the opposite
//! edge, so every cell has exactly four orthogonal neighbors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_N: u8 = 11;

/// Total number of cells.
pub const CELL_COUNT: usize = (BOARD_N as usize) * (BOARD_N as usize);

/// A (row, column) pair on the board. Immutable value type; equality and
/// hashing are by (row, column).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coord {
    pub r: u8,
    pub c: u8,
}

impl Coord {
    /// Create a coordinate, wrapping both components modulo the board size.
    #[inline]
    pub fn new(r: u8, c: u8) -> Coord {
        Coord {
            r: r % BOARD_N,
            c: c % BOARD_N,
        }
    }

    /// Translate by a signed offset, wrapping at the board edges.
    #[inline]
    pub fn offset(self, dr: i16, dc: i16) -> Coord {
        let n = BOARD_N as i16;
        Coord {
            r: (self.r as i16 + dr).rem_euclid(n) as u8,
            c: (self.c as i16 + dc).rem_euclid(n) as u8,
        }
    }

    #[inline]
    pub fn up(self) -> Coord {
        self.offset(-1, 0)
    }

    #[inline]
    pub fn down(self) -> Coord {
        self.offset(1, 0)
    }

    #[inline]
    pub fn left(self) -> Coord {
        self.offset(0, -1)
    }

    #[inline]
    pub fn right(self) -> Coord {
        self.offset(0, 1)
    }

    /// The four orthogonal neighbors.
    #[inline]
    pub fn neighbors(self) -> [Coord; 4] {
        [self.up(), self.down(), self.left(), self.right()]
    }

    /// Row-major index into a flat cell array.
    #[inline]
    pub fn index(self) -> usize {
        self.r as usize * BOARD_N as usize + self.c as usize
    }

    /// Inverse of [`Coord::index`].
    #[inline]
    pub fn from_index(index: usize) -> Coord {
        debug_assert!(index < CELL_COUNT);
        Coord {
            r: (index / BOARD_N as usize) as u8,
            c: (index % BOARD_N as usize) as u8,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}
