//! Tests for the roving focus controller.

use treenav::visibility::flatten;
use treenav::{FocusController, KeySet, TreeNode};

fn tree() -> Vec<TreeNode> {
    vec![
        TreeNode::new("a", "A")
            .child(TreeNode::new("a1", "A1").disabled(true))
            .child(TreeNode::new("a2", "A2")),
        TreeNode::new("b", "B").disabled(true),
        TreeNode::new("c", "C").child(TreeNode::new("c1", "C1")),
    ]
}

fn keys(list: &[&str]) -> KeySet {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_sync_focuses_first_enabled() {
    let roots = vec![
        TreeNode::new("x", "X").disabled(true),
        TreeNode::new("y", "Y"),
    ];
    let visible = flatten(&roots, &KeySet::new());
    let mut focus = FocusController::new();
    assert!(focus.sync(&visible));
    assert_eq!(focus.focused(), Some("y"));
    // Already valid, nothing to do.
    assert!(!focus.sync(&visible));
}

#[test]
fn test_sync_clears_when_nothing_focusable() {
    let roots = tree();
    let mut focus = FocusController::new();
    focus.sync(&flatten(&roots, &KeySet::new()));
    assert_eq!(focus.focused(), Some("a"));

    let only_disabled = vec![TreeNode::new("z", "Z").disabled(true)];
    assert!(focus.sync(&flatten(&only_disabled, &KeySet::new())));
    assert_eq!(focus.focused(), None);
    assert!(!focus.sync(&[]));
}

#[test]
fn test_next_and_prev_skip_disabled() {
    let roots = tree();
    let visible = flatten(&roots, &keys(&["a", "c"]));
    let mut focus = FocusController::new();
    focus.sync(&visible);

    assert!(focus.focus_next(&visible));
    assert_eq!(focus.focused(), Some("a2"));
    assert!(focus.focus_next(&visible));
    assert_eq!(focus.focused(), Some("c"));
    assert!(focus.focus_prev(&visible));
    assert_eq!(focus.focused(), Some("a2"));
    assert!(focus.focus_prev(&visible));
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_no_wrap_at_edges() {
    let roots = tree();
    let visible = flatten(&roots, &keys(&["a", "c"]));
    let mut focus = FocusController::new();
    focus.sync(&visible);

    assert!(!focus.focus_prev(&visible));
    assert_eq!(focus.focused(), Some("a"));

    assert!(focus.focus_last(&visible));
    assert_eq!(focus.focused(), Some("c1"));
    assert!(!focus.focus_next(&visible));
    assert_eq!(focus.focused(), Some("c1"));
}

#[test]
fn test_home_and_end() {
    let roots = tree();
    let visible = flatten(&roots, &keys(&["a"]));
    let mut focus = FocusController::new();
    assert!(focus.focus_last(&visible));
    assert_eq!(focus.focused(), Some("c"));
    assert!(focus.focus_first(&visible));
    assert_eq!(focus.focused(), Some("a"));
    assert!(!focus.focus_first(&visible));
}

#[test]
fn test_focus_rejects_disabled_and_hidden() {
    let roots = tree();
    let visible = flatten(&roots, &keys(&["a"]));
    let mut focus = FocusController::new();
    focus.sync(&visible);

    assert!(!focus.focus("b", &visible));
    assert!(!focus.focus("a1", &visible));
    assert!(!focus.focus("c1", &visible));
    assert_eq!(focus.focused(), Some("a"));
    assert!(focus.focus("a2", &visible));
}

#[test]
fn test_parent_and_first_child() {
    let roots = tree();
    let visible = flatten(&roots, &keys(&["a", "c"]));
    let mut focus = FocusController::new();
    focus.sync(&visible);

    // a1 is disabled, so the first focusable child is a2.
    assert!(focus.focus_first_child(&visible));
    assert_eq!(focus.focused(), Some("a2"));
    assert!(focus.focus_parent(&visible));
    assert_eq!(focus.focused(), Some("a"));
    // Roots have no parent.
    assert!(!focus.focus_parent(&visible));
}

#[test]
fn test_first_child_requires_expanded() {
    let roots = tree();
    let visible = flatten(&roots, &KeySet::new());
    let mut focus = FocusController::new();
    focus.sync(&visible);
    assert!(!focus.focus_first_child(&visible));
    assert_eq!(focus.focused(), Some("a"));
}

#[test]
fn test_parent_skipped_when_disabled() {
    let roots = vec![TreeNode::new("p", "P")
        .disabled(true)
        .child(TreeNode::new("k", "K"))];
    let visible = flatten(&roots, &keys(&["p"]));
    let mut focus = FocusController::new();
    assert!(focus.sync(&visible));
    assert_eq!(focus.focused(), Some("k"));
    assert!(!focus.focus_parent(&visible));
    assert_eq!(focus.focused(), Some("k"));
}

#[test]
fn test_single_tab_stop() {
    let roots = tree();
    let visible = flatten(&roots, &keys(&["a", "c"]));
    let mut focus = FocusController::new();
    focus.sync(&visible);
    focus.focus("c1", &visible);

    let stops: Vec<&str> = visible
        .iter()
        .filter(|n| focus.tab_index(n.key()) == 0)
        .map(|n| n.key())
        .collect();
    assert_eq!(stops, vec!["c1"]);
    assert_eq!(focus.tab_index("a"), -1);
}
