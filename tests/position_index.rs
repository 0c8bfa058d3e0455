//! Tests for the position index
//!
//! Covers row layout under folding, column width derivation, and the
//! reference scenarios of a two-pod namespace and an errored namespace.

use kubefold::tui::app::state::CollapseState;
use kubefold::tui::{Entity, PositionIndex};
use kubefold::{Namespace, Pod, PodHealth};
use std::sync::Arc;

fn pod(namespace: &str, name: &str, ready: u32, total: u32, status: &str) -> Pod {
    Pod {
        namespace: namespace.to_string(),
        name: name.to_string(),
        ready,
        total,
        status: status.to_string(),
        restarts: "0".to_string(),
        age: "1h".to_string(),
    }
}

fn default_namespace() -> Namespace {
    Namespace::new(
        "default",
        vec![
            pod("default", "podA", 2, 2, "Running"),
            pod("default", "podB", 0, 1, "Pending"),
        ],
    )
}

/// A mixed tree: pods, an error, an empty namespace, long names
fn mixed_tree() -> Arc<[Namespace]> {
    Arc::from(vec![
        default_namespace(),
        Namespace::with_error("ns1", "timeout"),
        Namespace::new("empty", vec![]),
        Namespace::new(
            "a-rather-long-namespace-name",
            vec![
                pod("a-rather-long-namespace-name", "x", 1, 1, "Running"),
                pod(
                    "a-rather-long-namespace-name",
                    "a-pod-with-a-very-long-generated-name-7f9c",
                    0,
                    1,
                    "CrashLoopBackOff",
                ),
            ],
        ),
    ])
}

fn folded(names: &[&str]) -> CollapseState {
    let mut collapse = CollapseState::default();
    for name in names {
        collapse.set(name, true);
    }
    collapse
}

/// Every row up to the last index resolves to exactly one kind of entity
fn assert_dense(index: &PositionIndex) {
    let Some(last) = index.last_index() else {
        assert!(index.resolve(0).is_none());
        return;
    };
    for row in 0..=last {
        let hits = [
            index.namespace_at(row).is_some(),
            index.pod_at(row).is_some(),
            index.error_at(row).is_some(),
        ];
        assert_eq!(
            hits.iter().filter(|hit| **hit).count(),
            1,
            "row {} maps to {:?}",
            row,
            hits
        );
    }
    assert!(index.resolve(last + 1).is_none());
    assert!(index.namespace_at(last + 1).is_none());
    assert!(index.pod_at(last + 1).is_none());
    assert!(index.error_at(last + 1).is_none());
}

/// Snapshot of the layout as comparable labels
fn layout(index: &PositionIndex) -> Vec<String> {
    (0..index.len())
        .map(|row| match index.resolve(row) {
            Some(Entity::Namespace(ns)) => format!("ns:{}", ns.name),
            Some(Entity::Pod(pod)) => format!("pod:{}/{}", pod.namespace, pod.name),
            Some(Entity::Error(message)) => format!("err:{}", message),
            None => "none".to_string(),
        })
        .collect()
}

#[test]
fn test_every_row_maps_to_exactly_one_entity() {
    let tree = mixed_tree();
    for collapse in [
        CollapseState::default(),
        folded(&["default"]),
        folded(&["ns1", "a-rather-long-namespace-name"]),
        folded(&["default", "ns1", "empty", "a-rather-long-namespace-name"]),
    ] {
        assert_dense(&PositionIndex::build(Arc::clone(&tree), &collapse));
    }
}

#[test]
fn test_empty_tree_has_no_rows() {
    let index = PositionIndex::build(
        Arc::from(Vec::<Namespace>::new()),
        &CollapseState::default(),
    );
    assert_eq!(index.last_index(), None);
    assert!(index.is_empty());
    assert!(index.resolve(0).is_none());
    assert_eq!(index.name_width(), 20);
    assert_eq!(index.status_width(), 8);
}

#[test]
fn test_folding_removes_own_rows_and_shifts_the_rest() {
    let tree = mixed_tree();
    let unfolded = PositionIndex::build(Arc::clone(&tree), &CollapseState::default());
    let folded_default = PositionIndex::build(Arc::clone(&tree), &folded(&["default"]));

    // "default" owns two pod rows
    assert_eq!(unfolded.len() - folded_default.len(), 2);
    let before = layout(&unfolded);
    let after = layout(&folded_default);
    assert_eq!(after[0], "ns:default");
    assert_eq!(after[1..], before[3..]);

    // "ns1" owns one error row
    let folded_ns1 = PositionIndex::build(Arc::clone(&tree), &folded(&["ns1"]));
    assert_eq!(unfolded.len() - folded_ns1.len(), 1);
    assert!(!layout(&folded_ns1).contains(&"err:timeout".to_string()));
}

#[test]
fn test_unfolding_restores_the_same_layout() {
    let tree = mixed_tree();
    let original = layout(&PositionIndex::build(Arc::clone(&tree), &CollapseState::default()));

    let mut collapse = folded(&["default", "ns1"]);
    let folded_layout = layout(&PositionIndex::build(Arc::clone(&tree), &collapse));
    assert_ne!(folded_layout, original);
    // two pods of "default" and the error row of "ns1" are hidden
    assert_eq!(folded_layout.len(), original.len() - 3);
    assert!(!folded_layout.contains(&"pod:default/podA".to_string()));
    assert!(!folded_layout.contains(&"err:timeout".to_string()));

    collapse.set("default", false);
    collapse.set("ns1", false);
    let restored = layout(&PositionIndex::build(Arc::clone(&tree), &collapse));

    assert_eq!(restored, original);
}

#[test]
fn test_widths_fit_every_visible_name_and_status() {
    let tree = mixed_tree();
    let index = PositionIndex::build(Arc::clone(&tree), &CollapseState::default());

    for ns in tree.iter() {
        assert!(index.name_width() >= ns.name.chars().count() + 2);
        for pod in &ns.pods {
            assert!(index.name_width() >= pod.name.chars().count() + 5);
            assert!(index.status_width() >= pod.status.chars().count() + 3);
        }
    }
    // the longest pod name decides
    assert_eq!(
        index.name_width(),
        "a-pod-with-a-very-long-generated-name-7f9c".len() + 5
    );
    assert_eq!(index.status_width(), "CrashLoopBackOff".len() + 3);
}

#[test]
fn test_hidden_pods_do_not_widen_columns() {
    let tree = mixed_tree();
    let index = PositionIndex::build(
        Arc::clone(&tree),
        &folded(&["a-rather-long-namespace-name"]),
    );
    // namespace rows stay visible and still count
    assert_eq!(index.name_width(), "a-rather-long-namespace-name".len() + 2);
    assert_eq!(index.status_width(), "Running".len() + 3);
}

#[test]
fn test_widths_count_characters() {
    let tree: Arc<[Namespace]> = Arc::from(vec![Namespace::new(
        "default",
        vec![pod("default", "ünïcödé-pöd-nämé-lông", 1, 1, "Running")],
    )]);
    let index = PositionIndex::build(tree, &CollapseState::default());
    assert_eq!(index.name_width(), 21 + 5);
}

#[test]
fn test_scenario_two_pods_unfolded() {
    let index = PositionIndex::build(
        Arc::from(vec![default_namespace()]),
        &CollapseState::default(),
    );

    assert_eq!(index.namespace_at(0).map(|ns| ns.name.as_str()), Some("default"));
    let pod_a = index.pod_at(1).unwrap();
    let pod_b = index.pod_at(2).unwrap();
    assert_eq!(pod_a.name, "podA");
    assert_eq!(pod_b.name, "podB");
    assert_eq!(index.last_index(), Some(2));
    assert!(index.name_width() >= "podB".len() + 5);
    assert_eq!(pod_a.health(), PodHealth::Healthy);
    assert_eq!(pod_b.health(), PodHealth::Failing);
}

#[test]
fn test_scenario_two_pods_folded() {
    let index = PositionIndex::build(Arc::from(vec![default_namespace()]), &folded(&["default"]));

    assert_eq!(index.namespace_at(0).map(|ns| ns.name.as_str()), Some("default"));
    assert_eq!(index.last_index(), Some(0));
    // podB used to be on row 2
    assert!(index.resolve(2).is_none());
}

#[test]
fn test_scenario_namespace_with_error() {
    let index = PositionIndex::build(
        Arc::from(vec![Namespace::with_error("ns1", "timeout")]),
        &CollapseState::default(),
    );

    assert_eq!(index.namespace_at(0).map(|ns| ns.name.as_str()), Some("ns1"));
    assert_eq!(index.error_at(1), Some("timeout"));
    assert_eq!(index.last_index(), Some(1));
}

#[test]
fn test_namespace_without_pods_is_one_row() {
    let index = PositionIndex::build(
        Arc::from(vec![Namespace::new("empty", vec![])]),
        &CollapseState::default(),
    );
    assert_eq!(index.last_index(), Some(0));
    assert_eq!(index.namespace_at(0).map(|ns| ns.name.as_str()), Some("empty"));
    assert!(index.resolve(1).is_none());
}
