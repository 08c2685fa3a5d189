// src/tree/node.rs

//! Node arena and tree queries.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};

use crate::selection::collapse::CollapseState;
use crate::selection::store::CellId;

/// Index of a node in the owning [`Tree`]'s arena.
///
/// Ids are only meaningful for the tree that created them; a stale id held
/// across a rebuild resolves to `None` via [`Tree::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One task or group placed into the hierarchy.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub id: NodeId,
    /// Record id; unique within the tree.
    pub task_id: String,
    /// Display name shown next to the node.
    pub label: String,
    /// Owning node, `None` only for the root.
    pub parent: Option<NodeId>,
    /// Full child list, in input order. Collapse transitions never touch it.
    pub children: Vec<NodeId>,
    /// Expand/collapse state driving which children are currently shown.
    pub collapse: CollapseState,
    /// Whether this node has at least one child.
    pub is_group: bool,
    /// Parsed execution instants (leaves only; empty for groups).
    pub instances: Vec<DateTime<FixedOffset>>,
    /// Selection cells belonging to this node's row.
    pub row: Vec<CellId>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        !self.is_group
    }

    /// Children currently shown: the full list when expanded, nothing when
    /// collapsed.
    pub fn visible_children(&self) -> &[NodeId] {
        match self.collapse {
            CollapseState::Expanded => &self.children,
            CollapseState::Collapsed => &[],
        }
    }
}

/// The tree for one DAG: node arena plus root and task-id index.
///
/// The arena exclusively owns its nodes; the whole structure is dropped when
/// the owning widget is torn down.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<TreeNode>,
    root: NodeId,
    by_task_id: HashMap<String, NodeId>,
}

impl Tree {
    /// Create a tree containing only the root node. The root starts
    /// [`CollapseState::Expanded`] so the first level is visible on load.
    pub(crate) fn with_root(task_id: &str, label: &str) -> Self {
        let root = NodeId(0);
        let node = TreeNode {
            id: root,
            task_id: task_id.to_string(),
            label: label.to_string(),
            parent: None,
            children: Vec::new(),
            collapse: CollapseState::Expanded,
            is_group: false,
            instances: Vec::new(),
            row: Vec::new(),
        };
        let mut by_task_id = HashMap::new();
        by_task_id.insert(task_id.to_string(), root);
        Self {
            nodes: vec![node],
            root,
            by_task_id,
        }
    }

    /// Append a node under `parent`. Non-root nodes start
    /// [`CollapseState::Collapsed`].
    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        task_id: &str,
        label: &str,
        instances: Vec<DateTime<FixedOffset>>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            id,
            task_id: task_id.to_string(),
            label: label.to_string(),
            parent: Some(parent),
            children: Vec::new(),
            collapse: CollapseState::Collapsed,
            is_group: false,
            instances,
            row: Vec::new(),
        });
        self.by_task_id.insert(task_id.to_string(), id);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node lookup. Panics on a stale id; use [`Tree::get`] when the id may
    /// come from outside this tree's lifetime.
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    pub fn node_by_task_id(&self, task_id: &str) -> Option<NodeId> {
        self.by_task_id.get(task_id).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in arena order (depth-first from the root, as built).
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Ids of every leaf reachable from `id`, in depth-first order,
    /// including `id` itself when it is a leaf.
    pub fn descendant_leaves(&self, id: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.0];
            if node.is_leaf() {
                leaves.push(current);
            }
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        leaves
    }

    /// Minimum and maximum execution instants across all leaves, defining
    /// the time-axis extent for the render collaborator. `None` when no
    /// leaf carries any instance.
    pub fn time_extent(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        let mut extent: Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> = None;
        for node in self.nodes.iter().filter(|n| n.is_leaf()) {
            for instant in &node.instances {
                extent = Some(match extent {
                    None => (*instant, *instant),
                    Some((min, max)) => (min.min(*instant), max.max(*instant)),
                });
            }
        }
        extent
    }
}
