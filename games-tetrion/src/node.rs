//! Game node: a board plus the side to move.
//!
//! The node is the unit the search operates on. It generates the legal
//! child states for the mover and runs cheap randomized playouts to a
//! terminal (no-legal-move) outcome.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

use crate::board::Board;
use crate::color::PlayerColor;
use crate::coord::{Coord, CELL_COUNT};
use crate::piece::{PieceSet, Shape};
use crate::placement::Placement;

/// Playout step cap. Line clears mean the occupied-cell count is not
/// monotonic, so a hard cap bounds pathological clear loops.
const MAX_PLAYOUT_STEPS: usize = 4 * CELL_COUNT;

/// A game state: the board, the placement that produced it (if any) and
/// the color whose turn it is. Immutable; [`GameNode::play_move`] returns
/// a new node with the color flipped to the opponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameNode {
    pub placement: Option<Placement>,
    pub board: Board,
    pub color: PlayerColor,
}

impl GameNode {
    /// A root node with no originating placement.
    pub fn root(board: Board, color: PlayerColor) -> GameNode {
        GameNode {
            placement: None,
            board,
            color,
        }
    }

    /// Apply `placement` as the current mover and hand the turn to the
    /// opponent.
    pub fn play_move(&self, placement: Placement) -> GameNode {
        GameNode {
            board: self.board.apply_placement(&placement, self.color),
            placement: Some(placement),
            color: self.color.opponent(),
        }
    }

    /// One child node per distinct legal placement for the mover.
    ///
    /// Placements are deduplicated by their cell set, since several
    /// (shape, anchor) pairs can cover the same four cells. The result is
    /// in a deterministic order. An empty result means the mover has no
    /// legal placement and has lost.
    pub fn generate_legal_moves(&self, pieces: &PieceSet) -> Vec<GameNode> {
        let blanks = self.board.blank_coords();
        let mut placements = BTreeSet::new();

        for shape in pieces.shapes() {
            for &coord in &blanks {
                let placement = shape.anchored_at(coord);
                if self.board.legal_placement(&placement, self.color) {
                    placements.insert(placement);
                }
            }
        }

        placements
            .into_iter()
            .map(|placement| self.play_move(placement))
            .collect()
    }

    /// Cheap single-placement sampler used by playouts.
    ///
    /// Draws one random start index into `pieces` and one into `coords`,
    /// then scans (piece, coordinate) pairs in nested order with
    /// wraparound from those starting points and returns the first legal
    /// hit, or `None` if every pair fails. This is *not* a uniform draw
    /// over the legal-move set: placements reachable early in the scan
    /// order from many start indices are favored. The bias is accepted for
    /// O(1)-amortized cost per rollout step.
    pub fn play_random_move(
        &self,
        pieces: &[Shape],
        coords: &[Coord],
        rng: &mut ChaCha20Rng,
    ) -> Option<GameNode> {
        if pieces.is_empty() || coords.is_empty() {
            return None;
        }

        let piece_start = rng.gen_range(0..pieces.len());
        let coord_start = rng.gen_range(0..coords.len());

        for piece_offset in 0..pieces.len() {
            let shape = &pieces[(piece_start + piece_offset) % pieces.len()];

            for coord_offset in 0..coords.len() {
                let coord = coords[(coord_start + coord_offset) % coords.len()];
                let placement = shape.anchored_at(coord);

                if self.board.legal_placement(&placement, self.color) {
                    return Some(self.play_move(placement));
                }
            }
        }

        None
    }

    /// Randomized playout to a terminal state.
    ///
    /// Repeatedly plays [`GameNode::play_random_move`] with freshly
    /// shuffled piece and blank-coordinate orderings for the current
    /// position, until the mover is stuck. Returns the color that was to
    /// move at the terminal state, i.e. the **loser**; callers credit the
    /// opposite color when backpropagating.
    pub fn playout(&self, pieces: &PieceSet, rng: &mut ChaCha20Rng) -> PlayerColor {
        let mut node = self.clone();
        let mut shuffled: Vec<Shape> = pieces.shapes().to_vec();

        for _ in 0..MAX_PLAYOUT_STEPS {
            shuffled.shuffle(rng);
            let mut coords = node.board.blank_coords();
            coords.shuffle(rng);

            match node.play_random_move(&shuffled, &coords, rng) {
                Some(next) => node = next,
                None => return node.color,
            }
        }

        // Cap reached; treat the side to move as stuck.
        node.color
    }
}
