// src/tree/rows.rs

//! Per-node selection-cell rows.

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};
use tracing::debug;

use crate::selection::store::{CellId, CellKind, SelectionCell, SelectionStore};
use crate::tree::node::Tree;

/// Derive every node's row of selection cells and populate the shared store.
///
/// Per node: one cell per distinct execution instant across the leaves
/// reachable from it, ordered by first encounter in a depth-first walk. A
/// cell's `affected_leaf_ids` lists those leaves' task ids, so a click on a
/// group cell knows which leaf cells to cascade to. Every cell starts
/// checked; nothing is excluded initially.
///
/// A leaf with no instances contributes no cells; a group over only such
/// leaves gets an empty row. The store's key set is fixed from here on.
pub fn build_rows(tree: &mut Tree) -> SelectionStore {
    let mut store = SelectionStore::new();

    let node_ids: Vec<_> = tree.iter().map(|n| n.id).collect();
    for node_id in node_ids {
        let leaves = tree.descendant_leaves(node_id);
        let affected_leaf_ids: Vec<String> = leaves
            .iter()
            .map(|leaf| tree.node(*leaf).task_id.clone())
            .collect();

        let mut seen: HashSet<DateTime<FixedOffset>> = HashSet::new();
        let mut row: Vec<CellId> = Vec::new();

        for leaf in &leaves {
            for instant in &tree.node(*leaf).instances {
                if !seen.insert(*instant) {
                    continue;
                }
                let cell_id = CellId::new(&tree.node(node_id).task_id, *instant);
                store.insert(SelectionCell {
                    id: cell_id.clone(),
                    owner: node_id,
                    kind: if tree.node(node_id).is_group {
                        CellKind::Group
                    } else {
                        CellKind::Leaf
                    },
                    instant: *instant,
                    affected_leaf_ids: affected_leaf_ids.clone(),
                    checked: true,
                });
                row.push(cell_id);
            }
        }

        tree.node_mut(node_id).row = row;
    }

    debug!(cells = store.len(), "populated selection store");

    store
}
