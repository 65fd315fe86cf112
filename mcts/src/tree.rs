//! Search tree with arena allocation and a transposition index.
//!
//! Nodes are stored in a contiguous `Vec` and referenced by [`NodeId`]
//! indices. A separate map from canonical board encoding to handle gives
//! O(1) transposition lookup: the same board reached through different
//! move orders resolves to the same node and shares its statistics. The
//! index is exact-match only — no rotation or cyclic-shift equivalences.
//!
//! The table is append-only and scoped to one game; it is never pruned.

use std::collections::HashMap;

use games_tetrion::{Board, GameNode, PieceSet, Placement};

use crate::node::{NodeId, TreeNode};

/// Arena of tree nodes plus the encoding-to-handle transposition index.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<TreeNode>,
    index: HashMap<String, NodeId>,
}

impl SearchTree {
    pub fn new() -> SearchTree {
        SearchTree::default()
    }

    /// Get a reference to a node by handle.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Total number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up the node holding this game's board encoding, or insert a
    /// new one with the given parent. On a hit the existing node is
    /// returned as-is: its statistics are shared and its original parent
    /// chain is kept.
    pub fn lookup_or_insert(&mut self, game: GameNode, parent: NodeId) -> NodeId {
        if let Some(&id) = self.index.get(game.board.key()) {
            return id;
        }

        let id = NodeId(self.nodes.len() as u32);
        self.index.insert(game.board.key().to_owned(), id);
        self.nodes.push(TreeNode::new(game, parent));
        id
    }

    /// The tree node for a root position (no parent on first creation).
    pub fn root_for(&mut self, game: GameNode) -> NodeId {
        self.lookup_or_insert(game, NodeId::NONE)
    }

    /// Materialize the children of `id` if that has not happened yet.
    ///
    /// Each legal move's resulting board is looked up in the
    /// transposition index first; an existing node is linked as the child
    /// instead of creating a duplicate. Children are deduplicated by
    /// handle, since distinct placements can clear lines into identical
    /// boards.
    pub fn expand(&mut self, id: NodeId, pieces: &PieceSet) {
        if self.node(id).expanded {
            return;
        }

        let child_games = self.node(id).game.generate_legal_moves(pieces);
        let mut children = Vec::with_capacity(child_games.len());

        for game in child_games {
            let child_id = self.lookup_or_insert(game, id);
            if child_id != id && !children.contains(&child_id) {
                children.push(child_id);
            }
        }

        let node = self.node_mut(id);
        node.children = children;
        node.expanded = true;
    }

    /// Select the most promising child of `id` by UCB1, expanding first
    /// if needed.
    ///
    /// Any unvisited child is returned immediately (its score is
    /// infinite); otherwise the child with the strictly greatest score
    /// wins, ties keeping the earliest in expansion order. Returns `None`
    /// when the node has no children, i.e. the side to move is stuck.
    pub fn select_max_child(
        &mut self,
        id: NodeId,
        pieces: &PieceSet,
        exploration_constant: f64,
    ) -> Option<NodeId> {
        self.expand(id, pieces);

        let node = self.node(id);
        let parent_wins = node.wins;

        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in &node.children {
            let child = self.node(child_id);
            if child.playouts == 0 {
                return Some(child_id);
            }

            let score = child.ucb1(parent_wins, exploration_constant);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((child_id, score)),
            }
        }

        best.map(|(child_id, _)| child_id)
    }

    /// Record a finished playout: walk from `id` to the root, counting
    /// the playout everywhere and a win wherever the side to move matches
    /// `winning_color`.
    pub fn backpropagate(&mut self, id: NodeId, winning_color: games_tetrion::PlayerColor) {
        let mut current = id;
        while current.is_some() {
            let node = self.node_mut(current);
            node.playouts += 1;
            if node.game.color == winning_color {
                node.wins += 1;
            }
            current = node.parent;
        }
    }

    /// The recommended move from `root`: the most-visited child whose
    /// placement is still legal on the authoritative board.
    ///
    /// The legality restriction defends against stale transposition
    /// entries — the shared table can hold children created from game
    /// branches the real game never took. If no visited child survives
    /// the check, fall back to the first freshly generated legal move.
    pub fn best_move(
        &mut self,
        root: NodeId,
        board: &Board,
        pieces: &PieceSet,
    ) -> Option<Placement> {
        let root_color = self.node(root).game.color;

        let best = self
            .node(root)
            .children
            .iter()
            .filter_map(|&child_id| {
                let child = self.node(child_id);
                let placement = child.game.placement?;
                board
                    .legal_placement(&placement, root_color)
                    .then_some((child.playouts, placement))
            })
            .max_by_key(|&(playouts, _)| playouts);

        if let Some((_, placement)) = best {
            return Some(placement);
        }

        // Stale or unexpanded root: regenerate from scratch.
        self.node(root)
            .game
            .generate_legal_moves(pieces)
            .first()
            .and_then(|child| child.placement)
    }
}
