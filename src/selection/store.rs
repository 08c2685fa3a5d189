// src/selection/store.rs

//! Cell identity, cell state, and the toggle cascade.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, FixedOffset};
use tracing::{debug, warn};

use crate::tree::node::NodeId;

/// Identity of one (node, execution instant) cell.
///
/// Derived deterministically from the owning record's id and the parsed
/// instant, so the same inputs yield the same key across rebuilds. chrono
/// compares and hashes `DateTime` by absolute instant, so two offsets
/// naming the same moment collapse to one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellId {
    pub task_id: String,
    pub instant: DateTime<FixedOffset>,
}

impl CellId {
    pub fn new(task_id: &str, instant: DateTime<FixedOffset>) -> Self {
        Self {
            task_id: task_id.to_string(),
            instant,
        }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.task_id, self.instant.to_rfc3339())
    }
}

/// Whether a cell sits on a group row or a leaf row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Group,
    Leaf,
}

/// One selectable execution cell.
#[derive(Debug, Clone)]
pub struct SelectionCell {
    pub id: CellId,
    /// Node whose row this cell belongs to.
    pub owner: NodeId,
    pub kind: CellKind,
    pub instant: DateTime<FixedOffset>,
    /// Task ids of the leaf cells a toggle on this cell must cascade to
    /// (just the owner itself for a leaf cell).
    pub affected_leaf_ids: Vec<String>,
    /// `true` = included in the next run, `false` = excluded.
    pub checked: bool,
}

/// Mapping from cell id to cell state.
///
/// Populated once per hierarchy build; the key set is fixed for the tree's
/// lifetime. [`SelectionStore::toggle`] is the only mutation path.
#[derive(Debug, Default)]
pub struct SelectionStore {
    cells: HashMap<CellId, SelectionCell>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, cell: SelectionCell) {
        self.cells.insert(cell.id.clone(), cell);
    }

    pub fn get(&self, id: &CellId) -> Option<&SelectionCell> {
        self.cells.get(id)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectionCell> {
        self.cells.values()
    }

    /// Flip the cell's checked state and cascade the new value to the
    /// leaf-level cell of every affected leaf at the same instant.
    ///
    /// Returns the ids whose `checked` actually changed. An unknown id is a
    /// no-op (a stale identifier from a detached render pass, not an
    /// error). Affected leaves with no cell at that instant are skipped;
    /// a group row can show a day on which a given leaf has no instance.
    ///
    /// The cascade is strictly downward: toggling a leaf cell never changes
    /// an ancestor group cell.
    pub fn toggle(&mut self, id: &CellId) -> Vec<CellId> {
        let (new_checked, affected, instant) = match self.cells.get_mut(id) {
            None => {
                warn!(cell = %id, "toggle for unknown cell; ignoring");
                return Vec::new();
            }
            Some(cell) => {
                cell.checked = !cell.checked;
                (cell.checked, cell.affected_leaf_ids.clone(), cell.instant)
            }
        };

        let mut changed = vec![id.clone()];

        for leaf_id in affected {
            let leaf_key = CellId::new(&leaf_id, instant);
            if leaf_key == *id {
                // The toggled cell itself (leaf case); already flipped.
                continue;
            }
            match self.cells.get_mut(&leaf_key) {
                Some(leaf_cell) => {
                    if leaf_cell.checked != new_checked {
                        leaf_cell.checked = new_checked;
                        changed.push(leaf_key);
                    }
                }
                None => {
                    debug!(
                        cell = %leaf_key,
                        "no instance for this leaf at this instant; skipping"
                    );
                }
            }
        }

        debug!(cell = %id, checked = new_checked, changed = changed.len(), "toggled");

        changed
    }
}
