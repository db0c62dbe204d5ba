//! Flattening of the tree into the list of currently visible nodes.

use crate::model::KeySet;
use crate::node::TreeNode;

/// A visible node in the flattened tree.
///
/// Sibling information is relative to the node's own sibling list, which is
/// what assistive technology expects for `level` / `setsize` / `posinset`.
#[derive(Debug, Clone, Copy)]
pub struct VisibleNode<'a> {
    /// The node itself.
    pub node: &'a TreeNode,
    /// Nesting level (roots are at depth 1).
    pub depth: usize,
    /// Key of the parent node, `None` for roots.
    pub parent_key: Option<&'a str>,
    /// Number of siblings including this node.
    pub sibling_count: usize,
    /// 1-based position among siblings.
    pub position: usize,
    /// Whether the node has children and is expanded.
    pub expanded: bool,
}

impl<'a> VisibleNode<'a> {
    pub fn key(&self) -> &'a str {
        &self.node.key
    }

    pub fn is_disabled(&self) -> bool {
        self.node.disabled
    }

    pub fn has_children(&self) -> bool {
        self.node.has_children()
    }
}

/// Flatten a forest into the list of visible nodes.
///
/// Depth-first pre-order: a node's children follow it immediately only when
/// its key is in `expanded`. Collapsed subtrees are never visited. Expanded
/// keys that point at leaves are ignored.
pub fn flatten<'a>(roots: &'a [TreeNode], expanded: &KeySet) -> Vec<VisibleNode<'a>> {
    flatten_filtered(roots, expanded, |_| true)
}

/// Flatten a forest, hiding nodes (and their subtrees) rejected by `predicate`.
///
/// Sibling counts and positions are computed over the siblings that pass the
/// predicate.
pub fn flatten_filtered<'a, F>(
    roots: &'a [TreeNode],
    expanded: &KeySet,
    predicate: F,
) -> Vec<VisibleNode<'a>>
where
    F: Fn(&TreeNode) -> bool,
{
    let mut out = Vec::new();
    collect_visible(roots, expanded, &predicate, 1, None, &mut out);
    out
}

/// Recursively collect visible nodes into the flat list.
fn collect_visible<'a, F>(
    items: &'a [TreeNode],
    expanded: &KeySet,
    predicate: &F,
    depth: usize,
    parent_key: Option<&'a str>,
    out: &mut Vec<VisibleNode<'a>>,
) where
    F: Fn(&TreeNode) -> bool,
{
    let shown: Vec<&'a TreeNode> = items.iter().filter(|n| predicate(*n)).collect();
    let sibling_count = shown.len();

    for (i, node) in shown.into_iter().enumerate() {
        let is_expanded = node.has_children() && expanded.contains(&node.key);

        out.push(VisibleNode {
            node,
            depth,
            parent_key,
            sibling_count,
            position: i + 1,
            expanded: is_expanded,
        });

        if is_expanded {
            collect_visible(
                node.children(),
                expanded,
                predicate,
                depth + 1,
                Some(node.key.as_str()),
                out,
            );
        }
    }
}

/// Keys of the visible nodes that can take focus, in display order.
pub fn visible_enabled_keys<'a>(visible: &[VisibleNode<'a>]) -> Vec<&'a str> {
    visible
        .iter()
        .filter(|n| !n.is_disabled())
        .map(VisibleNode::key)
        .collect()
}
