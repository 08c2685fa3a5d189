// src/record.rs

//! Host-facing input records.
//!
//! The host hands the widget a flat, parent-referencing list of records:
//! groups (no executions of their own) and leaf tasks (with an ordered list
//! of execution timestamps). The two shapes are distinguished explicitly as
//! enum variants; deserialization selects the variant by the presence of
//! `task_instances` in the host's JSON.

use serde::Deserialize;

/// A group of tasks. Carries no execution instances of its own.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupRecord {
    pub id: String,
    /// Display name shown next to the node.
    pub label: String,
    /// Owning group id, or `None` for a child of the implicit root.
    #[serde(default)]
    pub group_id: Option<String>,
}

/// A single runnable task with its own execution instances.
#[derive(Debug, Clone, Deserialize)]
pub struct LeafRecord {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub group_id: Option<String>,
    /// ISO-8601-with-offset timestamps, one per execution, in host order.
    pub task_instances: Vec<String>,
}

/// One record of the flat input list.
///
/// `Leaf` is tried first during deserialization so that a record carrying
/// `task_instances` never silently degrades to a group.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TaskRecord {
    Leaf(LeafRecord),
    Group(GroupRecord),
}

impl TaskRecord {
    pub fn id(&self) -> &str {
        match self {
            TaskRecord::Leaf(r) => &r.id,
            TaskRecord::Group(r) => &r.id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TaskRecord::Leaf(r) => &r.label,
            TaskRecord::Group(r) => &r.label,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        match self {
            TaskRecord::Leaf(r) => r.group_id.as_deref(),
            TaskRecord::Group(r) => r.group_id.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TaskRecord::Leaf(_))
    }
}
