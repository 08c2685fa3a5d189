// tests/hierarchy_building.rs

mod common;

use common::{sample_records, T1};
use treegrid::errors::TreeGridError;
use treegrid::selection::CollapseState;
use treegrid::tree::{build_tree, ROOT_ID};
use treegrid_test_utils::builders::RecordListBuilder;

#[test]
fn builds_rooted_tree_in_input_order() {
    let tree = build_tree("d", &sample_records()).unwrap();

    let root = tree.node(tree.root());
    assert_eq!(root.task_id, ROOT_ID);
    assert_eq!(root.label, "d");
    assert!(root.parent.is_none());

    let level1: Vec<&str> = root
        .children
        .iter()
        .map(|id| tree.node(*id).task_id.as_str())
        .collect();
    assert_eq!(level1, vec!["start", "g"]);

    let g = tree.node(tree.node_by_task_id("g").unwrap());
    assert!(g.is_group);
    assert_eq!(g.children.len(), 1);

    let t1 = tree.node(tree.node_by_task_id("g.t1").unwrap());
    assert!(t1.is_leaf());
    assert_eq!(t1.parent, Some(g.id));
}

#[test]
fn every_node_is_reachable_with_exactly_one_parent() {
    let tree = build_tree("d", &sample_records()).unwrap();

    for node in tree.iter() {
        if node.id == tree.root() {
            assert!(node.parent.is_none());
            continue;
        }
        // Walk the parent chain; it must hit the root in finitely many steps.
        let mut current = node.id;
        let mut steps = 0;
        while let Some(parent) = tree.node(current).parent {
            current = parent;
            steps += 1;
            assert!(steps <= tree.len(), "parent chain of {} loops", node.task_id);
        }
        assert_eq!(current, tree.root());
    }
}

#[test]
fn initial_collapse_state_shows_only_first_level() {
    let tree = build_tree("d", &sample_records()).unwrap();

    assert_eq!(tree.node(tree.root()).collapse, CollapseState::Expanded);
    for node in tree.iter().filter(|n| n.id != tree.root()) {
        assert_eq!(node.collapse, CollapseState::Collapsed);
    }
}

#[test]
fn duplicate_id_is_rejected() {
    let records = RecordListBuilder::new()
        .leaf("a", None, &[T1])
        .leaf("a", None, &[T1])
        .build();

    match build_tree("d", &records) {
        Err(TreeGridError::DuplicateId(id)) => assert_eq!(id, "a"),
        Err(e) => panic!("expected DuplicateId, got: {:?}", e),
        Ok(_) => panic!("expected error, got Ok"),
    }
}

#[test]
fn reserved_root_id_is_rejected() {
    let records = RecordListBuilder::new().leaf(ROOT_ID, None, &[]).build();

    match build_tree("d", &records) {
        Err(TreeGridError::DuplicateId(id)) => assert_eq!(id, ROOT_ID),
        Err(e) => panic!("expected DuplicateId, got: {:?}", e),
        Ok(_) => panic!("expected error, got Ok"),
    }
}

#[test]
fn dangling_group_reference_is_rejected() {
    let records = RecordListBuilder::new()
        .leaf("a", Some("missing"), &[T1])
        .build();

    match build_tree("d", &records) {
        Err(TreeGridError::DanglingParent { task, group }) => {
            assert_eq!(task, "a");
            assert_eq!(group, "missing");
        }
        Err(e) => panic!("expected DanglingParent, got: {:?}", e),
        Ok(_) => panic!("expected error, got Ok"),
    }
}

#[test]
fn self_reference_is_rejected() {
    let records = RecordListBuilder::new().group("g", Some("g")).build();

    match build_tree("d", &records) {
        Err(TreeGridError::UnreachableRecord { task }) => assert_eq!(task, "g"),
        Err(e) => panic!("expected UnreachableRecord, got: {:?}", e),
        Ok(_) => panic!("expected error, got Ok"),
    }
}

#[test]
fn group_id_cycle_is_rejected() {
    let records = RecordListBuilder::new()
        .group("a", Some("b"))
        .group("b", Some("a"))
        .leaf("t", None, &[T1])
        .build();

    match build_tree("d", &records) {
        Err(TreeGridError::UnreachableRecord { task }) => {
            assert!(task == "a" || task == "b");
        }
        Err(e) => panic!("expected UnreachableRecord, got: {:?}", e),
        Ok(_) => panic!("expected error, got Ok"),
    }
}

#[test]
fn malformed_timestamp_aborts_the_build() {
    let records = RecordListBuilder::new()
        .leaf("a", None, &["2021-03-18T00:00:00+00:00", "yesterday"])
        .build();

    match build_tree("d", &records) {
        Err(TreeGridError::InvalidTimestamp { task, value, .. }) => {
            assert_eq!(task, "a");
            assert_eq!(value, "yesterday");
        }
        Err(e) => panic!("expected InvalidTimestamp, got: {:?}", e),
        Ok(_) => panic!("expected error, got Ok"),
    }
}

#[test]
fn empty_record_list_builds_a_lone_root() {
    let tree = build_tree("d", &[]).unwrap();

    assert_eq!(tree.len(), 1);
    assert!(tree.node(tree.root()).children.is_empty());
    assert!(tree.time_extent().is_none());
}
