//! Piece geometry: the seven tetromino shapes and their rotations.
//!
//! Shapes are relative coordinate lists, not yet anchored to the grid.
//! All geometry is exact integer arithmetic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coord::Coord;
use crate::placement::Placement;

/// Errors raised when constructing piece geometry. These are precondition
/// violations, not recoverable search-time conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PieceError {
    #[error("shape contains duplicate cell ({0}, {1})")]
    DuplicateCell(i8, i8),
}

/// A tetromino shape as an ordered list of four relative cells.
///
/// Invariant: after normalization the minimum row and minimum column are
/// both 0. All operations are pure and return new shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    cells: [(i8, i8); 4],
}

impl Shape {
    /// Create a shape from four relative cells, normalizing so the minimum
    /// row and column are 0. Fails on duplicate cells.
    pub fn new(cells: [(i8, i8); 4]) -> Result<Shape, PieceError> {
        for i in 0..4 {
            for j in (i + 1)..4 {
                if cells[i] == cells[j] {
                    return Err(PieceError::DuplicateCell(cells[i].0, cells[i].1));
                }
            }
        }
        Ok(Shape { cells }.normalized())
    }

    #[inline]
    pub fn cells(&self) -> &[(i8, i8); 4] {
        &self.cells
    }

    /// Translate so the minimum row and minimum column are both 0.
    fn normalized(self) -> Shape {
        let min_r = self.cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
        let min_c = self.cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
        let mut cells = self.cells;
        for cell in &mut cells {
            cell.0 -= min_r;
            cell.1 -= min_c;
        }
        Shape { cells }
    }

    /// Rotate 90 degrees clockwise `k` times about the origin, then
    /// re-normalize.
    pub fn rotate(self, k: u8) -> Shape {
        let mut shape = self;
        for _ in 0..(k % 4) {
            let mut cells = [(0i8, 0i8); 4];
            for (slot, &(r, c)) in cells.iter_mut().zip(shape.cells.iter()) {
                *slot = (c, -r);
            }
            shape = Shape { cells }.normalized();
        }
        shape
    }

    /// Translate so the `i`-th cell becomes the new origin. `i` must be
    /// in `0..4`; anything else is a precondition violation. The result
    /// is deliberately not re-normalized: cells may go negative and are
    /// wrapped onto the grid by [`Shape::anchored_at`]. This lets a piece
    /// be anchored by any one of its four cells, not just its origin.
    pub fn recentered(self, i: usize) -> Shape {
        debug_assert!(i < 4, "pivot index out of range");
        let (pivot_r, pivot_c) = self.cells[i];
        let mut cells = self.cells;
        for cell in &mut cells {
            cell.0 -= pivot_r;
            cell.1 -= pivot_c;
        }
        Shape { cells }
    }

    /// Anchor the shape so its origin lands on `anchor`, wrapping each
    /// cell at the board edges.
    pub fn anchored_at(&self, anchor: Coord) -> Placement {
        let mut cells = [Coord::new(0, 0); 4];
        for (slot, &(r, c)) in cells.iter_mut().zip(self.cells.iter()) {
            *slot = anchor.offset(r as i16, c as i16);
        }
        Placement::new(cells)
    }

    /// Cells in sorted order, for set-wise comparison of shapes.
    pub fn cell_set(&self) -> [(i8, i8); 4] {
        let mut cells = self.cells;
        cells.sort_unstable();
        cells
    }
}

/// The seven base tetromino shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tetromino {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl Tetromino {
    pub const ALL: [Tetromino; 7] = [
        Tetromino::I,
        Tetromino::J,
        Tetromino::L,
        Tetromino::O,
        Tetromino::S,
        Tetromino::Z,
        Tetromino::T,
    ];

    /// The canonical (unrotated) cell list.
    pub fn base_shape(self) -> Shape {
        let cells = match self {
            Tetromino::I => [(0, 0), (0, 1), (0, 2), (0, 3)],
            Tetromino::J => [(0, 0), (1, 0), (1, 1), (1, 2)],
            Tetromino::L => [(1, 0), (1, 1), (1, 2), (0, 2)],
            Tetromino::O => [(0, 0), (0, 1), (1, 0), (1, 1)],
            Tetromino::S => [(1, 0), (1, 1), (0, 1), (0, 2)],
            Tetromino::Z => [(0, 0), (0, 1), (1, 1), (1, 2)],
            Tetromino::T => [(1, 0), (1, 1), (0, 1), (1, 2)],
        };
        // The base cell lists above are known-good; Shape::new only fails
        // on duplicate cells.
        match Shape::new(cells) {
            Ok(shape) => shape,
            Err(_) => unreachable!("base tetromino shapes have distinct cells"),
        }
    }

    /// Number of distinct rotations before the shape repeats:
    /// 0 = invariant under all rotations, 2 = invariant under 180 degrees,
    /// 4 = no rotational symmetry.
    pub fn symmetry_class(self) -> u8 {
        match self {
            Tetromino::O => 0,
            Tetromino::I | Tetromino::S | Tetromino::Z => 2,
            Tetromino::J | Tetromino::L | Tetromino::T => 4,
        }
    }
}

/// The full set of geometrically distinct piece orientations used for move
/// generation: 19 shapes across the 7 bases (I:2, J:4, L:4, O:1, S:2, Z:2,
/// T:4), in a fixed deterministic order.
#[derive(Debug, Clone)]
pub struct PieceSet {
    shapes: Vec<Shape>,
}

impl PieceSet {
    /// Build the standard 19-shape permutation set. Order is stable: bases
    /// in catalog order, rotations in increasing quarter turns.
    pub fn standard() -> PieceSet {
        let mut shapes = Vec::with_capacity(19);

        for tetromino in Tetromino::ALL {
            let base = tetromino.base_shape();
            shapes.push(base);

            if tetromino.symmetry_class() >= 2 {
                shapes.push(base.rotate(1));
            }

            if tetromino.symmetry_class() == 4 {
                shapes.push(base.rotate(2));
                shapes.push(base.rotate(3));
            }
        }

        debug_assert_eq!(shapes.len(), 19);
        PieceSet { shapes }
    }

    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for PieceSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Flood fill over the four cells to check orthogonal connectivity.
    fn is_connected(shape: &Shape) -> bool {
        let cells: HashSet<(i8, i8)> = shape.cells().iter().copied().collect();
        let start = shape.cells()[0];
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];

        while let Some((r, c)) = stack.pop() {
            for next in [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)] {
                if cells.contains(&next) && seen.insert(next) {
                    stack.push(next);
                }
            }
        }

        seen.len() == 4
    }

    #[test]
    fn test_shape_rejects_duplicate_cells() {
        let result = Shape::new([(0, 0), (0, 1), (0, 1), (0, 2)]);
        assert_eq!(result, Err(PieceError::DuplicateCell(0, 1)));
    }

    #[test]
    fn test_standard_set_has_19_distinct_shapes() {
        let set = PieceSet::standard();
        assert_eq!(set.len(), 19);

        let distinct: HashSet<_> = set.shapes().iter().map(|s| s.cell_set()).collect();
        assert_eq!(distinct.len(), 19);
    }

    #[test]
    fn test_all_permutations_normalized_and_connected() {
        for shape in PieceSet::standard().shapes() {
            let min_r = shape.cells().iter().map(|&(r, _)| r).min().unwrap();
            let min_c = shape.cells().iter().map(|&(_, c)| c).min().unwrap();
            assert_eq!(min_r, 0, "{shape:?} not row-normalized");
            assert_eq!(min_c, 0, "{shape:?} not column-normalized");
            assert!(is_connected(shape), "{shape:?} not connected");
        }
    }

    #[test]
    fn test_orientation_counts_per_base() {
        let expected = [
            (Tetromino::I, 2),
            (Tetromino::J, 4),
            (Tetromino::L, 4),
            (Tetromino::O, 1),
            (Tetromino::S, 2),
            (Tetromino::Z, 2),
            (Tetromino::T, 4),
        ];

        for (tetromino, count) in expected {
            let base = tetromino.base_shape();
            let rotations: HashSet<_> = (0..4).map(|k| base.rotate(k).cell_set()).collect();
            assert_eq!(rotations.len(), count, "{tetromino:?}");
        }
    }

    #[test]
    fn test_rotate_full_turn_is_identity() {
        for tetromino in Tetromino::ALL {
            let base = tetromino.base_shape();
            assert_eq!(base.rotate(4).cell_set(), base.cell_set(), "{tetromino:?}");
        }
    }

    #[test]
    fn test_recentered_moves_pivot_to_origin() {
        let shape = Tetromino::L.base_shape();
        for i in 0..4 {
            let recentered = shape.recentered(i);
            assert_eq!(recentered.cells()[i], (0, 0));
        }
    }

    #[test]
    #[should_panic]
    fn test_recentered_rejects_out_of_range_pivot() {
        let _ = Tetromino::I.base_shape().recentered(4);
    }

    #[test]
    fn test_anchored_at_wraps_at_edges() {
        let shape = Tetromino::I.base_shape();
        let placement = shape.anchored_at(Coord::new(0, crate::coord::BOARD_N - 1));

        // The I piece spans columns N-1, 0, 1, 2 of row 0 after wrapping.
        assert!(placement.contains(Coord::new(0, crate::coord::BOARD_N - 1)));
        assert!(placement.contains(Coord::new(0, 0)));
        assert!(placement.contains(Coord::new(0, 1)));
        assert!(placement.contains(Coord::new(0, 2)));
    }

    #[test]
    fn test_recentered_then_anchored_covers_pivot() {
        let shape = Tetromino::T.base_shape();
        let anchor = Coord::new(3, 9);
        for i in 0..4 {
            let placement = shape.recentered(i).anchored_at(anchor);
            assert!(placement.contains(anchor), "pivot {i} missing from {placement}");
        }
    }
}
