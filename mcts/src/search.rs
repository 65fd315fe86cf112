//! Time-bounded search driver.
//!
//! One [`MctsSearch`] instance serves one game: the search tree and its
//! transposition index persist across turns, so statistics gathered while
//! thinking about earlier positions keep paying off later.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use tracing::{debug, trace};

use games_tetrion::{
    Board, Coord, GameNode, PieceSet, Placement, PlayerColor, Strategy, StrategyError, BOARD_N,
    CELL_COUNT,
};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::tree::SearchTree;

/// Descent cap per iteration. Transpositions let the tree revisit
/// cleared-and-refilled states, so a pure visited-count descent could
/// cycle.
const MAX_DESCENT_STEPS: usize = CELL_COUNT;

/// Errors that can occur during search.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The mover has no legal placement: the game is already lost. The
    /// caller is expected to detect this before invoking the engine; if
    /// it does not, this is raised instead of a malformed placement.
    #[error("no legal placement available for {0}")]
    NoLegalMoves(PlayerColor),
}

/// Monte Carlo Tree Search move engine.
pub struct MctsSearch {
    config: MctsConfig,
    pieces: PieceSet,
    tree: SearchTree,
    rng: ChaCha20Rng,
}

impl MctsSearch {
    /// Create an engine with the standard piece catalog and an
    /// entropy-seeded RNG.
    pub fn new(config: MctsConfig) -> MctsSearch {
        MctsSearch::with_rng(config, ChaCha20Rng::from_entropy())
    }

    /// Create an engine with an explicit RNG, for reproducible runs.
    pub fn with_rng(config: MctsConfig, rng: ChaCha20Rng) -> MctsSearch {
        MctsSearch {
            config,
            pieces: PieceSet::standard(),
            tree: SearchTree::new(),
            rng,
        }
    }

    /// Pick one legal placement for `color` on `board`.
    ///
    /// `remaining_secs` is the total match time left for this color; the
    /// per-turn budget is derived from it (see
    /// [`MctsConfig::turn_budget_secs`]). The budget check is advisory and
    /// runs between iterations, so a single slow iteration can overrun
    /// it; overrun is the normal early-exit path, not an error, and
    /// always leaves the tree fully backpropagated.
    pub fn choose_move(
        &mut self,
        board: &Board,
        color: PlayerColor,
        remaining_secs: Option<f64>,
    ) -> Result<Placement, SearchError> {
        // Opening shortcuts: with no own cells on the board there is no
        // adjacency target, so search has nothing meaningful to rank.
        if board.is_empty() {
            debug!(%color, "empty board, playing corner opening");
            return Ok(corner_opening());
        }
        if board.is_first_turn(color) {
            debug!(%color, "first move on a non-empty board, playing center opening");
            return Ok(center_opening());
        }

        let budget = Duration::from_secs_f64(self.config.turn_budget_secs(remaining_secs));
        let start = Instant::now();
        let root = self.tree.root_for(GameNode::root(board.clone(), color));
        debug!(%color, budget_secs = budget.as_secs_f64(), "starting search");

        let mut iterations = 0u32;
        for _ in 0..self.config.max_iterations {
            if start.elapsed() >= budget {
                break;
            }
            if !self.simulate(root) {
                break;
            }
            iterations += 1;
        }

        debug!(
            iterations,
            elapsed_secs = start.elapsed().as_secs_f64(),
            tree_nodes = self.tree.len(),
            "search finished"
        );

        self.tree
            .best_move(root, board, &self.pieces)
            .ok_or(SearchError::NoLegalMoves(color))
    }

    /// Run one select-descend-playout-backpropagate cycle. Returns false
    /// when the root has no children to select, which ends the turn.
    fn simulate(&mut self, root: NodeId) -> bool {
        let c = self.config.exploration_constant;

        let Some(mut node) = self.tree.select_max_child(root, &self.pieces, c) else {
            return false;
        };

        // Descend through already-explored nodes until an unvisited one,
        // or until nothing further can be selected (a terminal state).
        let mut depth = 0;
        while self.tree.node(node).playouts != 0 && depth < MAX_DESCENT_STEPS {
            match self.tree.select_max_child(node, &self.pieces, c) {
                Some(next) => node = next,
                None => break,
            }
            depth += 1;
        }

        let game = self.tree.node(node).game.clone();
        let loser = game.playout(&self.pieces, &mut self.rng);
        let winner = loser.opponent();
        trace!(%winner, depth, "playout complete");

        self.tree.backpropagate(node, winner);
        true
    }

    /// Number of nodes currently held by the transposition table, for
    /// inspection and logging.
    pub fn tree_len(&self) -> usize {
        self.tree.len()
    }
}

impl Strategy for MctsSearch {
    fn choose_move(
        &mut self,
        board: &Board,
        color: PlayerColor,
        remaining_secs: Option<f64>,
    ) -> Result<Placement, StrategyError> {
        MctsSearch::choose_move(self, board, color, remaining_secs)
            .map_err(|SearchError::NoLegalMoves(color)| StrategyError::NoLegalMove(color))
    }
}

/// Opening placement for a completely empty board: the four corners.
/// With wrap-around adjacency the corners form one connected block that
/// touches four rows and four columns at once.
fn corner_opening() -> Placement {
    Placement::new([
        Coord::new(0, 0),
        Coord::new(0, BOARD_N - 1),
        Coord::new(BOARD_N - 1, 0),
        Coord::new(BOARD_N - 1, BOARD_N - 1),
    ])
}

/// Opening placement for the mover's first turn on a non-empty board: a
/// fixed central 2x2 block.
fn center_opening() -> Placement {
    Placement::new([
        Coord::new(4, 4),
        Coord::new(4, 5),
        Coord::new(5, 4),
        Coord::new(5, 5),
    ])
}
