//! Board state: cell occupancy, placement legality and line clearing.
//!
//! A `Board` is an immutable value. Every state transition
//! ([`Board::apply_placement`], [`Board::clear_full_lines`]) returns a new
//! board; a board that has been shared (for example, published into the
//! search tree) is never mutated afterwards. The flat cell array keeps
//! copies cheap during playouts.

use std::fmt;

use crate::color::PlayerColor;
use crate::coord::{Coord, BOARD_N, CELL_COUNT};
use crate::placement::Placement;

/// The grid: occupancy per cell plus the canonical encoding.
///
/// The encoding is one character per cell in row-major order (`'_'` empty,
/// `'r'` red, `'b'` blue). It is a pure function of occupancy, recomputed
/// by every constructor, and serves as the exact-match transposition key:
/// two boards are transposition-equivalent iff their keys are equal
/// character for character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PlayerColor>; CELL_COUNT],
    key: String,
}

impl Board {
    /// An empty board.
    pub fn new() -> Board {
        Board::with_cells([None; CELL_COUNT])
    }

    /// Build a board from a snapshot of occupied cells, as handed over by
    /// the referee. Later entries for the same cell overwrite earlier ones.
    pub fn from_occupied<I>(occupied: I) -> Board
    where
        I: IntoIterator<Item = (Coord, PlayerColor)>,
    {
        let mut cells = [None; CELL_COUNT];
        for (coord, color) in occupied {
            cells[coord.index()] = Some(color);
        }
        Board::with_cells(cells)
    }

    fn with_cells(cells: [Option<PlayerColor>; CELL_COUNT]) -> Board {
        let key = cells
            .iter()
            .map(|cell| cell.map_or('_', PlayerColor::as_char))
            .collect();
        Board { cells, key }
    }

    /// Occupant of the given cell, if any.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<PlayerColor> {
        self.cells[coord.index()]
    }

    /// The canonical encoding, used as the transposition key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of cells owned by `color`.
    pub fn color_cell_count(&self, color: PlayerColor) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(color)).count()
    }

    /// All currently empty cells, in row-major order.
    pub fn blank_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| Coord::from_index(i))
            .collect()
    }

    /// Whether any of the four orthogonal (wrapping) neighbors of `coord`
    /// is occupied by `color`.
    pub fn adjacent_to_color(&self, coord: Coord, color: PlayerColor) -> bool {
        coord
            .neighbors()
            .into_iter()
            .any(|neighbor| self.get(neighbor) == Some(color))
    }

    /// Whether `color` has no cells on the board yet.
    pub fn is_first_turn(&self, color: PlayerColor) -> bool {
        self.color_cell_count(color) == 0
    }

    /// Whether `placement` is legal for `color`: all four cells empty, and
    /// at least one cell adjacent to an existing cell of `color` (the
    /// adjacency requirement is waived on the player's first move).
    pub fn legal_placement(&self, placement: &Placement, color: PlayerColor) -> bool {
        if placement.cells().iter().any(|&cell| self.get(cell).is_some()) {
            return false;
        }

        self.is_first_turn(color)
            || placement
                .cells()
                .iter()
                .any(|&cell| self.adjacent_to_color(cell, color))
    }

    /// Return a new board with the placement's cells set to `color` and
    /// any completed lines cleared.
    pub fn apply_placement(&self, placement: &Placement, color: PlayerColor) -> Board {
        let mut cells = self.cells;
        for &cell in placement.cells() {
            cells[cell.index()] = Some(color);
        }
        Board::with_cells(cells).clear_full_lines()
    }

    /// Return a new board with every full row and full column removed.
    ///
    /// Full rows and columns are computed simultaneously from the pre-clear
    /// board, then cleared in one pass: a cell at the intersection of a
    /// full row and a full column is removed exactly once, and clearing
    /// does not cascade.
    pub fn clear_full_lines(&self) -> Board {
        let n = BOARD_N as usize;
        let mut full_rows = [true; BOARD_N as usize];
        let mut full_cols = [true; BOARD_N as usize];

        for r in 0..n {
            for c in 0..n {
                if self.cells[r * n + c].is_none() {
                    full_rows[r] = false;
                    full_cols[c] = false;
                }
            }
        }

        if !full_rows.contains(&true) && !full_cols.contains(&true) {
            return self.clone();
        }

        let mut cells = self.cells;
        for r in 0..n {
            for c in 0..n {
                if full_rows[r] || full_cols[c] {
                    cells[r * n + c] = None;
                }
            }
        }
        Board::with_cells(cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_N {
            for c in 0..BOARD_N {
                let mark = self.get(Coord::new(r, c)).map_or('.', PlayerColor::as_char);
                write!(f, "{mark}")?;
                if c + 1 < BOARD_N {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PlayerColor::{Blue, Red};

    fn placement(cells: [(u8, u8); 4]) -> Placement {
        Placement::new(cells.map(|(r, c)| Coord::new(r, c)))
    }

    /// A board with row `r` fully occupied by alternating colors.
    fn full_row(r: u8) -> Vec<(Coord, PlayerColor)> {
        (0..BOARD_N)
            .map(|c| (Coord::new(r, c), if c % 2 == 0 { Red } else { Blue }))
            .collect()
    }

    fn full_col(c: u8) -> Vec<(Coord, PlayerColor)> {
        (0..BOARD_N)
            .map(|r| (Coord::new(r, c), if r % 2 == 0 { Blue } else { Red }))
            .collect()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.blank_coords().len(), CELL_COUNT);
        assert_eq!(board.key().len(), CELL_COUNT);
        assert!(board.key().chars().all(|ch| ch == '_'));
    }

    #[test]
    fn test_key_is_pure_function_of_occupancy() {
        let a = Board::from_occupied([(Coord::new(2, 3), Red), (Coord::new(7, 1), Blue)]);
        let b = Board::from_occupied([(Coord::new(7, 1), Blue), (Coord::new(2, 3), Red)]);
        assert_eq!(a.key(), b.key());
        assert_eq!(a, b);

        let c = Board::from_occupied([(Coord::new(2, 3), Blue), (Coord::new(7, 1), Blue)]);
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_legal_placement_rejects_overlap() {
        let board = Board::from_occupied([(Coord::new(0, 1), Red)]);
        // Overlap is rejected even though the placement touches red cells.
        assert!(!board.legal_placement(&placement([(0, 0), (0, 1), (0, 2), (0, 3)]), Red));
        assert!(!board.legal_placement(&placement([(0, 0), (0, 1), (0, 2), (0, 3)]), Blue));
    }

    #[test]
    fn test_legal_placement_requires_adjacency() {
        let board = Board::from_occupied([(Coord::new(5, 5), Red), (Coord::new(0, 0), Blue)]);

        // Touches (5, 5) from the right.
        assert!(board.legal_placement(&placement([(5, 6), (5, 7), (5, 8), (5, 9)]), Red));
        // Far away from every red cell.
        assert!(!board.legal_placement(&placement([(8, 2), (8, 3), (8, 4), (8, 5)]), Red));
        // Adjacent to the opponent only.
        assert!(!board.legal_placement(&placement([(5, 6), (5, 7), (5, 8), (5, 9)]), Blue));
    }

    #[test]
    fn test_adjacency_wraps_around_edges() {
        let board = Board::from_occupied([(Coord::new(0, 0), Red)]);
        assert!(board.adjacent_to_color(Coord::new(BOARD_N - 1, 0), Red));
        assert!(board.adjacent_to_color(Coord::new(0, BOARD_N - 1), Red));
    }

    #[test]
    fn test_first_move_exception() {
        // Blue has no cells: anywhere empty is legal for blue.
        let board = Board::from_occupied([(Coord::new(5, 5), Red)]);
        assert!(board.is_first_turn(Blue));
        assert!(board.legal_placement(&placement([(8, 2), (8, 3), (8, 4), (8, 5)]), Blue));
        assert!(!board.is_first_turn(Red));
    }

    #[test]
    fn test_apply_placement_sets_cells_and_flips_nothing_else() {
        let board = Board::new();
        let next = board.apply_placement(&placement([(4, 4), (4, 5), (5, 4), (5, 5)]), Red);

        assert_eq!(next.occupied_count(), 4);
        assert_eq!(next.get(Coord::new(4, 4)), Some(Red));
        // The original board is untouched.
        assert!(board.is_empty());
    }

    #[test]
    fn test_clear_single_full_row() {
        let board = Board::from_occupied(full_row(3).into_iter().chain([(Coord::new(6, 6), Red)]));
        let cleared = board.clear_full_lines();

        assert_eq!(cleared.occupied_count(), 1);
        assert_eq!(cleared.get(Coord::new(6, 6)), Some(Red));
        for c in 0..BOARD_N {
            assert_eq!(cleared.get(Coord::new(3, c)), None);
        }
    }

    #[test]
    fn test_clear_row_and_column_intersection_removed_once() {
        // Full row 0 and full column 0 share cell (0, 0): the cleared cell
        // count is 2N - 1, not 2N.
        let occupied: Vec<_> = full_row(0)
            .into_iter()
            .chain(full_col(0))
            .chain([(Coord::new(5, 5), Red)])
            .collect();
        let board = Board::from_occupied(occupied);
        assert_eq!(board.occupied_count(), 2 * BOARD_N as usize - 1 + 1);

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.occupied_count(), 1);
        assert_eq!(cleared.get(Coord::new(5, 5)), Some(Red));
    }

    #[test]
    fn test_clear_does_not_cascade() {
        // Row 2 is one cell short, with that cell sitting in full column 0.
        // Clearing column 0 removes (2, 0) but must not trigger a re-check
        // that would then see row 2 as "full minus cleared".
        let mut occupied = full_col(0);
        for c in 1..BOARD_N - 1 {
            occupied.push((Coord::new(2, c), Red));
        }
        let board = Board::from_occupied(occupied);
        let cleared = board.clear_full_lines();

        // Column 0 is gone; the partial row 2 survives.
        assert_eq!(cleared.get(Coord::new(2, 0)), None);
        assert_eq!(cleared.get(Coord::new(2, 1)), Some(Red));
        assert_eq!(
            cleared.occupied_count(),
            (BOARD_N - 2) as usize
        );
    }

    #[test]
    fn test_clear_full_lines_is_idempotent() {
        let occupied: Vec<_> = full_row(0)
            .into_iter()
            .chain(full_col(4))
            .chain([(Coord::new(9, 9), Blue), (Coord::new(2, 2), Red)])
            .collect();
        let board = Board::from_occupied(occupied);

        let once = board.clear_full_lines();
        let twice = once.clear_full_lines();
        assert_eq!(once, twice);
        assert_eq!(once.key(), twice.key());
    }

    #[test]
    fn test_apply_placement_clears_completed_line() {
        // Row 7 missing four cells; one I piece completes and clears it.
        let occupied: Vec<_> = (0..BOARD_N - 4)
            .map(|c| (Coord::new(7, c), Red))
            .collect();
        let board = Board::from_occupied(occupied);

        let fill = placement([
            (7, BOARD_N - 4),
            (7, BOARD_N - 3),
            (7, BOARD_N - 2),
            (7, BOARD_N - 1),
        ]);
        assert!(board.legal_placement(&fill, Red));

        let next = board.apply_placement(&fill, Red);
        assert!(next.is_empty());
    }

    #[test]
    fn test_color_cell_count() {
        let board = Board::from_occupied([
            (Coord::new(0, 0), Red),
            (Coord::new(0, 1), Red),
            (Coord::new(9, 9), Blue),
        ]);
        assert_eq!(board.color_cell_count(Red), 2);
        assert_eq!(board.color_cell_count(Blue), 1);
    }
}
