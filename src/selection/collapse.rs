// src/selection/collapse.rs

//! Per-node expand/collapse state machine.
//!
//! Two states, flipped arbitrarily often for the node's lifetime.
//! Transitions only affect which children are visible; the underlying child
//! list and the selection store are never touched.

use tracing::{debug, warn};

use crate::tree::node::{NodeId, Tree};

/// Visibility state of a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseState {
    /// All children visible.
    Expanded,
    /// No children visible. The child list is retained, so expanding
    /// restores the previous subtree without recomputation.
    Collapsed,
}

impl CollapseState {
    fn flipped(self) -> Self {
        match self {
            CollapseState::Expanded => CollapseState::Collapsed,
            CollapseState::Collapsed => CollapseState::Expanded,
        }
    }
}

/// Flip one node's state. A stale id is a no-op.
pub fn toggle_node(tree: &mut Tree, id: NodeId) {
    if tree.get(id).is_none() {
        warn!(node = id.index(), "toggle for unknown node; ignoring");
        return;
    }
    let node = tree.node_mut(id);
    node.collapse = node.collapse.flipped();
    debug!(task = %node.task_id, state = ?node.collapse, "node visibility toggled");
}

/// Expand every node in the tree.
pub fn expand_all(tree: &mut Tree) {
    let ids: Vec<NodeId> = tree.iter().map(|n| n.id).collect();
    for id in ids {
        tree.node_mut(id).collapse = CollapseState::Expanded;
    }
}

/// Restore the initial visibility: root expanded, everything else
/// collapsed, so only the first level of children shows.
pub fn collapse_all(tree: &mut Tree) {
    let root = tree.root();
    let ids: Vec<NodeId> = tree.iter().map(|n| n.id).collect();
    for id in ids {
        tree.node_mut(id).collapse = if id == root {
            CollapseState::Expanded
        } else {
            CollapseState::Collapsed
        };
    }
}
