#![allow(dead_code)]

use chrono::DateTime;
use treegrid::record::TaskRecord;
use treegrid::selection::CellId;
use treegrid::TreeGrid;
use treegrid_test_utils::builders::RecordListBuilder;

pub const T1: &str = "2021-03-18T00:00:00+00:00";
pub const T2: &str = "2021-03-19T00:00:00+00:00";
pub const T3: &str = "2021-03-20T00:00:00+00:00";

/// Cell key for a task id and an RFC 3339 timestamp literal.
pub fn cell(task_id: &str, ts: &str) -> CellId {
    CellId::new(task_id, DateTime::parse_from_rfc3339(ts).unwrap())
}

/// The record list from the widget's reference scenario:
/// root -> { start, g -> { g.t1 } }, all instances on T1.
pub fn sample_records() -> Vec<TaskRecord> {
    RecordListBuilder::new()
        .leaf("start", None, &[T1])
        .group("g", None)
        .leaf("g.t1", Some("g"), &[T1])
        .build()
}

/// A two-level DAG with staggered instances, used by the cascade tests:
/// root -> { extract, transform -> { transform.a (T1,T2), transform.b (T2,T3) } }.
pub fn staggered_records() -> Vec<TaskRecord> {
    RecordListBuilder::new()
        .leaf("extract", None, &[T1, T2, T3])
        .group("transform", None)
        .leaf("transform.a", Some("transform"), &[T1, T2])
        .leaf("transform.b", Some("transform"), &[T2, T3])
        .build()
}

pub fn sample_grid() -> TreeGrid {
    treegrid_test_utils::init_tracing();
    TreeGrid::new("d", &sample_records()).expect("sample records must build")
}

pub fn staggered_grid() -> TreeGrid {
    treegrid_test_utils::init_tracing();
    TreeGrid::new("etl", &staggered_records()).expect("staggered records must build")
}
