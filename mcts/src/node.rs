//! Search tree node: visit/win statistics for one canonical board state.
//!
//! Nodes are stored in an arena and referenced by [`NodeId`] handles, so
//! the parent/child linkage is index-based rather than owned — a node
//! reached by several move orders is shared, never duplicated.

use games_tetrion::GameNode;

/// Index into the node arena. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the search tree.
///
/// `wins` counts how often the player to move at this node went on to win
/// a playout that passed through it; `playouts` counts every playout that
/// passed through. The parent handle is whoever first created the node —
/// with transposition sharing a node can be linked as a child of several
/// parents, but backpropagation follows only the original chain.
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Parent node handle (NONE for a root).
    pub parent: NodeId,

    /// Game state at this node (board plus side to move).
    pub game: GameNode,

    /// Playouts that passed through this node.
    pub playouts: u32,

    /// Playouts won by the side to move at this node.
    pub wins: u32,

    /// Child handles, deduplicated, in deterministic expansion order.
    pub children: Vec<NodeId>,

    /// Whether legal moves have been generated for this node. Needed to
    /// tell "not yet expanded" apart from "expanded to zero children",
    /// which is a terminal loss for the side to move.
    pub expanded: bool,
}

impl TreeNode {
    pub fn new(game: GameNode, parent: NodeId) -> TreeNode {
        TreeNode {
            parent,
            game,
            playouts: 0,
            wins: 0,
            children: Vec::new(),
            expanded: false,
        }
    }

    /// UCB1 selection score.
    ///
    /// Unvisited nodes score infinity so they are always tried first
    /// (which also keeps `ln` away from zero). Otherwise the win rate
    /// plus an exploration bonus scaled by the parent's win count; when
    /// the parent has no wins yet the bonus is dropped rather than
    /// computing `ln(0)`.
    pub fn ucb1(&self, parent_wins: u32, exploration_constant: f64) -> f64 {
        if self.playouts == 0 {
            return f64::INFINITY;
        }

        let exploit = self.wins as f64 / self.playouts as f64;
        if parent_wins == 0 {
            return exploit;
        }

        exploit
            + exploration_constant
                * ((parent_wins as f64).ln() / self.playouts as f64).sqrt()
    }

    /// Whether this node has been expanded to zero children: the side to
    /// move is stuck and has lost.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.expanded && self.children.is_empty()
    }
}
