// src/selection/mod.rs

//! Selection and visibility state for one DAG tree.
//!
//! - [`store`] is the single source of truth for per-cell checked state and
//!   the only mutation path for it (the toggle cascade).
//! - [`collapse`] drives which nodes and rows are currently visible. It
//!   never touches the selection store.
//! - [`report`] is the read-only query producing the host-facing exclusion
//!   list.

pub mod collapse;
pub mod report;
pub mod store;

pub use collapse::{collapse_all, expand_all, toggle_node, CollapseState};
pub use report::{excluded_task_instances, ExcludedTaskInstance};
pub use store::{CellId, CellKind, SelectionCell, SelectionStore};
