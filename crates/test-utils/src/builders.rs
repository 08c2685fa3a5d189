#![allow(dead_code)]

use treegrid::record::{GroupRecord, LeafRecord, TaskRecord};

/// Builder for a flat record list to simplify test setup.
///
/// Labels default to the record id; use the `*_labelled` variants when a
/// test cares about display names.
pub struct RecordListBuilder {
    records: Vec<TaskRecord>,
}

impl RecordListBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn group(self, id: &str, group_id: Option<&str>) -> Self {
        self.group_labelled(id, id, group_id)
    }

    pub fn group_labelled(mut self, id: &str, label: &str, group_id: Option<&str>) -> Self {
        self.records.push(TaskRecord::Group(GroupRecord {
            id: id.to_string(),
            label: label.to_string(),
            group_id: group_id.map(str::to_string),
        }));
        self
    }

    pub fn leaf(self, id: &str, group_id: Option<&str>, instances: &[&str]) -> Self {
        self.leaf_labelled(id, id, group_id, instances)
    }

    pub fn leaf_labelled(
        mut self,
        id: &str,
        label: &str,
        group_id: Option<&str>,
        instances: &[&str],
    ) -> Self {
        self.records.push(TaskRecord::Leaf(LeafRecord {
            id: id.to_string(),
            label: label.to_string(),
            group_id: group_id.map(str::to_string),
            task_instances: instances.iter().map(|s| s.to_string()).collect(),
        }));
        self
    }

    pub fn build(self) -> Vec<TaskRecord> {
        self.records
    }
}

impl Default for RecordListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
