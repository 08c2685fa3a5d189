// src/widget/core.rs

//! The widget's context object and command dispatch.

use tracing::debug;

use crate::errors::Result;
use crate::record::TaskRecord;
use crate::selection::{
    collapse, report, store::SelectionStore, CollapseState, ExcludedTaskInstance,
};
use crate::tree::{build_rows, build_tree, node::Tree};
use crate::widget::render::{
    CellView, LinkView, NodeView, RenderBackend, RenderSnapshot, TimeAxis,
};
use crate::widget::{Command, WidgetStep};

/// State for one open DAG: the tree and its selection store.
///
/// Exactly one widget instance owns exactly one `TreeGrid`; all mutation
/// goes through [`TreeGrid::apply`]. Dropping the value tears everything
/// down.
#[derive(Debug)]
pub struct TreeGrid {
    dag_id: String,
    tree: Tree,
    store: SelectionStore,
}

impl TreeGrid {
    /// Build the full widget state from the host's flat record list.
    ///
    /// Fails on structurally invalid input (duplicate ids, dangling or
    /// cyclic `group_id` references, malformed timestamps) without leaving
    /// any partial state behind. On success the root is expanded, every
    /// other node collapsed, and every cell checked.
    pub fn new(dag_id: &str, records: &[TaskRecord]) -> Result<Self> {
        let mut tree = build_tree(dag_id, records)?;
        let store = build_rows(&mut tree);

        debug!(
            dag_id = %dag_id,
            nodes = tree.len(),
            cells = store.len(),
            "widget state constructed"
        );

        Ok(Self {
            dag_id: dag_id.to_string(),
            tree,
            store,
        })
    }

    pub fn dag_id(&self) -> &str {
        &self.dag_id
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    /// Handle a single pointer-driven command, returning what changed.
    ///
    /// Runs synchronously to completion; the caller redraws once per step.
    pub fn apply(&mut self, command: Command) -> WidgetStep {
        let changed_cells = match command {
            Command::ToggleCell(id) => self.store.toggle(&id),
            Command::ToggleNode(id) => {
                collapse::toggle_node(&mut self.tree, id);
                Vec::new()
            }
            Command::ExpandAll => {
                collapse::expand_all(&mut self.tree);
                Vec::new()
            }
            Command::CollapseAll => {
                collapse::collapse_all(&mut self.tree);
                Vec::new()
            }
        };

        WidgetStep {
            changed_cells,
            redraw: true,
        }
    }

    /// The exclusion list the host reads back before re-triggering a run.
    pub fn excluded_task_instances(&self) -> Vec<ExcludedTaskInstance> {
        report::excluded_task_instances(&self.store, &self.dag_id)
    }

    /// Snapshot of the currently visible nodes, links, and rows.
    pub fn snapshot(&self) -> RenderSnapshot {
        let mut nodes = Vec::new();
        let mut links = Vec::new();

        let mut stack = vec![(self.tree.root(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.tree.node(id);

            nodes.push(NodeView {
                id,
                task_id: node.task_id.clone(),
                label: node.label.clone(),
                depth,
                is_group: node.is_group,
                collapsed: node.is_group && node.collapse == CollapseState::Collapsed,
                cells: node
                    .row
                    .iter()
                    .filter_map(|cell_id| self.store.get(cell_id))
                    .map(|cell| CellView {
                        id: cell.id.clone(),
                        kind: cell.kind,
                        checked: cell.checked,
                    })
                    .collect(),
            });

            for child in node.visible_children() {
                links.push(LinkView {
                    parent: id,
                    child: *child,
                });
            }
            for child in node.visible_children().iter().rev() {
                stack.push((*child, depth + 1));
            }
        }

        let axis = self
            .tree
            .time_extent()
            .map(|(min, max)| TimeAxis { min, max });

        RenderSnapshot { nodes, links, axis }
    }

    /// Draw the current snapshot through the given backend.
    pub fn render_into(&self, backend: &mut dyn RenderBackend) -> Result<()> {
        backend.draw(&self.snapshot())
    }
}
