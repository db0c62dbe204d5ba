//! Selection and check state.
//!
//! All functions here are pure: they take the current key set and return the
//! next one. Gating on disabled nodes and mode flags is the caller's job
//! (see [`TreeView`](crate::TreeView)).

use crate::model::{KeySet, TreeModel};
use crate::node::TreeNode;
use crate::visibility::VisibleNode;

/// Selection mode for the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    None,
    /// At most one selected node.
    #[default]
    Single,
    /// Any number of selected nodes.
    Multiple,
}

/// Display state of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    /// Some, but not all, descendants are checked.
    Indeterminate,
}

// =============================================================================
// Selection
// =============================================================================

/// Toggle selection of a key.
///
/// In single mode selecting a new key replaces the selection and selecting the
/// selected key clears it. In multiple mode the key is added or removed on its
/// own.
pub fn toggle_select(selected: &KeySet, key: &str, mode: SelectionMode) -> KeySet {
    match mode {
        SelectionMode::None => selected.clone(),
        SelectionMode::Single => {
            if selected.contains(key) {
                KeySet::new()
            } else {
                KeySet::from([key.to_string()])
            }
        }
        SelectionMode::Multiple => {
            let mut next = selected.clone();
            if !next.remove(key) {
                next.insert(key.to_string());
            }
            next
        }
    }
}

/// Add every visible, enabled node to the selection.
pub fn select_all_visible(selected: &KeySet, visible: &[VisibleNode<'_>]) -> KeySet {
    let mut next = selected.clone();
    next.extend(
        visible
            .iter()
            .filter(|n| !n.is_disabled())
            .map(|n| n.key().to_string()),
    );
    next
}

// =============================================================================
// Check propagation
// =============================================================================

/// Keys of a node and all of its descendants.
pub fn subtree_keys(node: &TreeNode) -> Vec<String> {
    let mut keys = Vec::new();
    collect_subtree(node, &mut keys);
    keys
}

fn collect_subtree(node: &TreeNode, keys: &mut Vec<String>) {
    keys.push(node.key.clone());
    for child in node.children() {
        collect_subtree(child, keys);
    }
}

/// Check or uncheck a node.
///
/// Unless `strictly` is set, the whole subtree follows the node, regardless
/// of descendants' disabled flags. Ancestors are never touched. Unknown keys
/// leave the set unchanged.
pub fn toggle_check(
    model: &TreeModel,
    checked: &KeySet,
    key: &str,
    check: bool,
    strictly: bool,
) -> KeySet {
    let Some(node) = model.get(key) else {
        return checked.clone();
    };

    let keys = if strictly {
        vec![node.key.clone()]
    } else {
        subtree_keys(node)
    };

    let mut next = checked.clone();
    if check {
        next.extend(keys);
    } else {
        for k in &keys {
            next.remove(k);
        }
    }
    next
}

/// Derive the checkbox state to display for a node.
///
/// A node in `checked` is checked. Otherwise a parent is shown checked when
/// every child shows checked, indeterminate when some child shows checked or
/// indeterminate. This is a view over `checked` and never modifies it.
pub fn check_state(model: &TreeModel, checked: &KeySet, key: &str) -> CheckState {
    match model.get(key) {
        Some(node) => node_check_state(node, checked),
        None => CheckState::Unchecked,
    }
}

fn node_check_state(node: &TreeNode, checked: &KeySet) -> CheckState {
    if checked.contains(&node.key) {
        return CheckState::Checked;
    }
    let children = node.children();
    if children.is_empty() {
        return CheckState::Unchecked;
    }

    let mut all_checked = true;
    let mut any_marked = false;
    for child in children {
        match node_check_state(child, checked) {
            CheckState::Checked => any_marked = true,
            CheckState::Indeterminate => {
                any_marked = true;
                all_checked = false;
            }
            CheckState::Unchecked => all_checked = false,
        }
    }

    if all_checked {
        CheckState::Checked
    } else if any_marked {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}
