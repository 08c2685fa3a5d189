// src/tree/builder.rs

//! Flat record list -> validated rooted tree.

use std::collections::{HashMap, HashSet};

use chrono::DateTime;
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::errors::{Result, TreeGridError};
use crate::record::TaskRecord;
use crate::tree::node::{NodeId, Tree};

/// Reserved id of the synthetic root node. Input records must not use it.
pub const ROOT_ID: &str = "[DAG]";

/// Build the tree for one DAG from the host's flat record list.
///
/// Every record with `group_id == None` becomes a child of a synthetic root
/// carrying [`ROOT_ID`] and the DAG's display label. Validation runs before
/// any node is constructed, so a failure leaves no partially built tree:
///
/// - duplicate record ids (including a collision with [`ROOT_ID`]),
/// - `group_id` references to unknown ids,
/// - `group_id` chains that never reach the root (self-references and
///   longer cycles).
///
/// Leaf `task_instances` are parsed here; a malformed timestamp aborts the
/// whole build.
pub fn build_tree(dag_id: &str, records: &[TaskRecord]) -> Result<Tree> {
    check_unique_ids(records)?;
    check_parent_refs(records)?;
    check_reaches_root(records)?;

    // Parent -> children adjacency, preserving input order within a parent.
    let mut children_of: HashMap<&str, Vec<&TaskRecord>> = HashMap::new();
    for record in records {
        children_of
            .entry(record.group_id().unwrap_or(ROOT_ID))
            .or_default()
            .push(record);
    }

    let mut tree = Tree::with_root(ROOT_ID, dag_id);
    let root = tree.root();
    add_children(&mut tree, root, ROOT_ID, &children_of)?;

    debug!(
        dag_id = %dag_id,
        nodes = tree.len(),
        "built hierarchy from record list"
    );

    Ok(tree)
}

fn check_unique_ids(records: &[TaskRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if record.id() == ROOT_ID || !seen.insert(record.id()) {
            return Err(TreeGridError::DuplicateId(record.id().to_string()));
        }
    }
    Ok(())
}

fn check_parent_refs(records: &[TaskRecord]) -> Result<()> {
    let ids: HashSet<&str> = records.iter().map(|r| r.id()).collect();
    for record in records {
        if let Some(group) = record.group_id() {
            if !ids.contains(group) {
                return Err(TreeGridError::DanglingParent {
                    task: record.id().to_string(),
                    group: group.to_string(),
                });
            }
            if group == record.id() {
                return Err(TreeGridError::UnreachableRecord {
                    task: record.id().to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Reject `group_id` cycles.
///
/// Edge direction: group -> member. Every record resolves to exactly one
/// parent (the synthetic root when `group_id` is `None`), so once dangling
/// references are excluded, the only way a record can fail to reach the
/// root is a cycle, which a topological sort detects.
fn check_reaches_root(records: &[TaskRecord]) -> Result<()> {
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    graph.add_node(ROOT_ID);
    for record in records {
        graph.add_node(record.id());
    }
    for record in records {
        graph.add_edge(record.group_id().unwrap_or(ROOT_ID), record.id(), ());
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(TreeGridError::UnreachableRecord {
            task: cycle.node_id().to_string(),
        }),
    }
}

fn add_children(
    tree: &mut Tree,
    parent: NodeId,
    parent_task_id: &str,
    children_of: &HashMap<&str, Vec<&TaskRecord>>,
) -> Result<()> {
    let Some(records) = children_of.get(parent_task_id) else {
        return Ok(());
    };

    for record in records {
        let instances = match record {
            TaskRecord::Leaf(leaf) => {
                let mut instances = Vec::with_capacity(leaf.task_instances.len());
                for value in &leaf.task_instances {
                    let instant = DateTime::parse_from_rfc3339(value).map_err(|source| {
                        TreeGridError::InvalidTimestamp {
                            task: leaf.id.clone(),
                            value: value.clone(),
                            source,
                        }
                    })?;
                    instances.push(instant);
                }
                instances
            }
            TaskRecord::Group(_) => Vec::new(),
        };

        let id = tree.add_child(parent, record.id(), record.label(), instances);
        add_children(tree, id, record.id(), children_of)?;
    }

    // Decide first, then mutate to avoid borrowing issues.
    let is_group = !tree.node(parent).children.is_empty();
    tree.node_mut(parent).is_group = is_group;
    Ok(())
}
