// tests/exclusion_report.rs

mod common;

use common::{cell, sample_grid, staggered_grid, T1, T2, T3};
use serde_json::json;
use treegrid::Command;

#[test]
fn nothing_is_excluded_right_after_construction() {
    let grid = staggered_grid();
    assert!(grid.excluded_task_instances().is_empty());
}

#[test]
fn report_lists_exactly_the_unchecked_leaf_cells() {
    let mut grid = staggered_grid();

    grid.apply(Command::ToggleCell(cell("transform", T2)));
    grid.apply(Command::ToggleCell(cell("extract", T1)));

    let rows: Vec<(String, String)> = grid
        .excluded_task_instances()
        .into_iter()
        .map(|r| (r.task_id, r.execution_date))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("extract".to_string(), T1.to_string()),
            ("transform.a".to_string(), T2.to_string()),
            ("transform.b".to_string(), T2.to_string()),
        ]
    );
}

#[test]
fn group_cells_are_never_reported() {
    let mut grid = staggered_grid();

    // T3 only exists on transform.b; the group cell itself stays out of the
    // report even though it is unchecked.
    grid.apply(Command::ToggleCell(cell("transform", T3)));

    let rows = grid.excluded_task_instances();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].task_id, "transform.b");
}

#[test]
fn report_follows_the_latest_toggles() {
    let mut grid = sample_grid();

    grid.apply(Command::ToggleCell(cell("g.t1", T1)));
    assert_eq!(grid.excluded_task_instances().len(), 1);

    grid.apply(Command::ToggleCell(cell("g.t1", T1)));
    assert!(grid.excluded_task_instances().is_empty());
}

#[test]
fn report_preserves_the_host_supplied_offset() {
    let mut grid = treegrid::TreeGrid::new(
        "tz",
        &treegrid_test_utils::builders::RecordListBuilder::new()
            .leaf("task", None, &["2021-03-18T01:00:00+01:00"])
            .build(),
    )
    .unwrap();

    grid.apply(Command::ToggleCell(cell("task", "2021-03-18T01:00:00+01:00")));

    let rows = grid.excluded_task_instances();
    assert_eq!(rows[0].execution_date, "2021-03-18T01:00:00+01:00");
}

#[test]
fn report_serializes_to_the_host_shape() {
    let mut grid = sample_grid();
    grid.apply(Command::ToggleCell(cell("g", T1)));

    let value = serde_json::to_value(grid.excluded_task_instances()).unwrap();

    assert_eq!(
        value,
        json!([
            {
                "dag_id": "d",
                "task_id": "g.t1",
                "execution_date": "2021-03-18T00:00:00+00:00"
            }
        ])
    );
}
