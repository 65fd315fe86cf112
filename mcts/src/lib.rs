//! Monte Carlo Tree Search for the Tetrion placement game.
//!
//! The search is the classic four-phase loop, bounded by wall-clock time:
//!
//! 1. **Selection**: descend the tree by UCB1, visiting unvisited
//!    children first
//! 2. **Expansion**: materialize the legal children of the landed node,
//!    lazily, through the transposition table
//! 3. **Simulation**: one randomized playout to a terminal
//!    (no-legal-move) state
//! 4. **Backpropagation**: update visit/win counters along the parent
//!    chain
//!
//! Nodes live in an arena ([`SearchTree`]) and are addressed by
//! [`NodeId`] handles; a separate index maps each board's canonical
//! encoding to its node, so the same position reached by different move
//! orders shares one set of statistics. The tree persists across turns of
//! one game to amortize search cost.
//!
//! # Usage
//!
//! ```rust,ignore
//! use games_tetrion::{Board, PlayerColor};
//! use mcts::{MctsConfig, MctsSearch};
//!
//! let mut search = MctsSearch::new(MctsConfig::default());
//! let board = Board::new();
//! let placement = search
//!     .choose_move(&board, PlayerColor::Red, Some(120.0))
//!     .unwrap();
//! println!("chosen: {placement}");
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod tree;

pub use config::MctsConfig;
pub use node::{NodeId, TreeNode};
pub use search::{MctsSearch, SearchError};
pub use tree::SearchTree;
