//! Tree node type.

use serde::Deserialize;

/// A node in the tree hierarchy.
///
/// Nodes are plain values: the engine never stores expansion, check or
/// selection state on them. Display-only fields (icons, classes) are left to
/// the renderer and ignored when deserializing.
///
/// # Example
///
/// ```
/// use treenav::TreeNode;
///
/// let tree = TreeNode::new("1", "Parent 1")
///     .child(TreeNode::new("1-1", "Child 1"))
///     .child(TreeNode::new("1-2", "Child 2").disabled(true));
///
/// assert!(tree.has_children());
/// assert_eq!(tree.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique key across the whole tree.
    pub key: String,
    /// Display label, also the default search field.
    pub title: String,
    /// Child nodes. `None` and an empty vector both mean "leaf".
    #[serde(default)]
    pub children: Option<Vec<TreeNode>>,
    /// Disabled nodes are rendered but never focused, selected or checked.
    #[serde(default)]
    pub disabled: bool,
}

impl TreeNode {
    /// Create a leaf node.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: None,
            disabled: false,
        }
    }

    /// Append a child node.
    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child);
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = Some(children);
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The children as a slice (empty for leaves).
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether this node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        !self.has_children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_children_is_leaf() {
        let absent = TreeNode::new("a", "A");
        let empty = TreeNode::new("b", "B").with_children(Vec::new());
        assert!(absent.is_leaf());
        assert!(empty.is_leaf());
        assert!(empty.children().is_empty());
    }

    #[test]
    fn test_deserialize_ignores_display_fields() {
        let json = r#"{
            "key": "1",
            "title": "Parent",
            "icon": "folder",
            "children": [{ "key": "1-1", "title": "Child", "disabled": true }]
        }"#;
        let node: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.key, "1");
        assert_eq!(node.children().len(), 1);
        assert!(node.children()[0].disabled);
        assert!(!node.disabled);
    }

    #[test]
    fn test_deserialize_null_children() {
        let node: TreeNode =
            serde_json::from_str(r#"{ "key": "x", "title": "X", "children": null }"#).unwrap();
        assert!(node.is_leaf());
    }
}
