// src/selection/report.rs

//! Host-facing exclusion query.

use serde::Serialize;

use crate::selection::store::{CellKind, SelectionStore};

/// One leaf/instant pair the host should skip on the next run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedTaskInstance {
    pub dag_id: String,
    pub task_id: String,
    /// RFC 3339 with the offset the host originally supplied.
    pub execution_date: String,
}

/// Every leaf cell currently unchecked, as host-facing rows.
///
/// Pure and read-only; reflects the latest toggles. Group cells are purely
/// visual aggregates and never reported. Ordered by task id, then instant,
/// so the host sees a deterministic list.
pub fn excluded_task_instances(store: &SelectionStore, dag_id: &str) -> Vec<ExcludedTaskInstance> {
    let mut excluded: Vec<_> = store
        .iter()
        .filter(|cell| cell.kind == CellKind::Leaf && !cell.checked)
        .collect();

    excluded.sort_by(|a, b| {
        a.id.task_id
            .cmp(&b.id.task_id)
            .then_with(|| a.id.instant.cmp(&b.id.instant))
    });

    excluded
        .into_iter()
        .map(|cell| ExcludedTaskInstance {
            dag_id: dag_id.to_string(),
            task_id: cell.id.task_id.clone(),
            execution_date: cell.id.instant.to_rfc3339(),
        })
        .collect()
}
