//! Tree model and key index.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, TreeError};
use crate::node::TreeNode;

/// A set of node keys.
pub type KeySet = HashSet<String>;

/// Location of a node inside the forest.
#[derive(Debug, Clone)]
struct IndexEntry {
    /// Child indices from the root list down to the node.
    path: Vec<usize>,
    /// Key of the parent node, `None` for roots.
    parent: Option<String>,
}

/// The node forest plus a key index derived from it.
///
/// The model is treated as a value: to change the data, build a new model.
/// Lookups by key are O(depth). When keys are duplicated the node visited
/// last in pre-order wins.
#[derive(Debug, Clone, Default)]
pub struct TreeModel {
    roots: Vec<TreeNode>,
    index: HashMap<String, IndexEntry>,
}

impl TreeModel {
    /// Build a model from root nodes.
    pub fn new(roots: Vec<TreeNode>) -> Self {
        let mut index = HashMap::new();
        let mut path = Vec::new();
        index_nodes(&roots, &mut path, None, &mut index);
        log::trace!("indexed {} tree nodes", index.len());
        Self { roots, index }
    }

    /// Parse a JSON array of nodes into a model.
    pub fn from_json(json: &str) -> Result<Self> {
        let roots: Vec<TreeNode> = serde_json::from_str(json)?;
        Ok(Self::new(roots))
    }

    /// The root nodes.
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check whether a key exists in the model.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Find a node by key.
    pub fn get(&self, key: &str) -> Option<&TreeNode> {
        let entry = self.index.get(key)?;
        let (first, rest) = entry.path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &i in rest {
            node = node.children().get(i)?;
        }
        Some(node)
    }

    /// Key of the parent node, `None` for roots and unknown keys.
    pub fn parent_key(&self, key: &str) -> Option<&str> {
        self.index.get(key).and_then(|e| e.parent.as_deref())
    }

    /// Nesting level of a node (roots are at depth 1).
    pub fn depth(&self, key: &str) -> Option<usize> {
        self.index.get(key).map(|e| e.path.len())
    }

    /// Ancestor keys, nearest first.
    pub fn ancestors(&self, key: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut current = self.parent_key(key);
        while let Some(parent) = current {
            out.push(parent);
            current = self.parent_key(parent);
        }
        out
    }

    /// Whether the node exists and has children.
    pub fn has_children(&self, key: &str) -> bool {
        self.get(key).is_some_and(TreeNode::has_children)
    }

    /// Whether the node exists and is disabled.
    pub fn is_disabled(&self, key: &str) -> bool {
        self.get(key).is_some_and(|n| n.disabled)
    }

    /// All keys in the model, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Keys of every node that has children.
    pub fn expandable_keys(&self) -> KeySet {
        let mut keys = KeySet::new();
        collect_expandable(&self.roots, &mut keys);
        keys
    }

    /// Drop keys that no longer resolve to a node.
    pub fn retain_known(&self, keys: &KeySet) -> KeySet {
        keys.iter()
            .filter(|k| self.contains(k))
            .cloned()
            .collect()
    }

    /// Drop keys that do not resolve to a node with children.
    pub fn retain_expandable(&self, keys: &KeySet) -> KeySet {
        keys.iter()
            .filter(|k| self.has_children(k))
            .cloned()
            .collect()
    }

    /// Check that every key is unique.
    ///
    /// The engine itself tolerates duplicates; this is for callers that want
    /// to reject bad data up front.
    pub fn validate(&self) -> Result<()> {
        let mut seen = KeySet::new();
        check_unique(&self.roots, &mut seen)
    }
}

fn index_nodes(
    nodes: &[TreeNode],
    path: &mut Vec<usize>,
    parent: Option<&str>,
    index: &mut HashMap<String, IndexEntry>,
) {
    for (i, node) in nodes.iter().enumerate() {
        path.push(i);
        index.insert(
            node.key.clone(),
            IndexEntry {
                path: path.clone(),
                parent: parent.map(str::to_string),
            },
        );
        index_nodes(node.children(), path, Some(node.key.as_str()), index);
        path.pop();
    }
}

fn collect_expandable(nodes: &[TreeNode], keys: &mut KeySet) {
    for node in nodes {
        if node.has_children() {
            keys.insert(node.key.clone());
            collect_expandable(node.children(), keys);
        }
    }
}

fn check_unique(nodes: &[TreeNode], seen: &mut KeySet) -> Result<()> {
    for node in nodes {
        if !seen.insert(node.key.clone()) {
            return Err(TreeError::DuplicateKey {
                key: node.key.clone(),
            });
        }
        check_unique(node.children(), seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeModel {
        TreeModel::new(vec![
            TreeNode::new("1", "Parent 1")
                .child(TreeNode::new("1-1", "Child 1").child(TreeNode::new("1-1-1", "Leaf")))
                .child(TreeNode::new("1-2", "Child 2")),
            TreeNode::new("2", "Parent 2"),
        ])
    }

    #[test]
    fn test_lookup_and_parents() {
        let model = sample();
        assert_eq!(model.len(), 5);
        assert_eq!(model.get("1-1-1").map(|n| n.title.as_str()), Some("Leaf"));
        assert_eq!(model.parent_key("1-1-1"), Some("1-1"));
        assert_eq!(model.parent_key("1"), None);
        assert_eq!(model.depth("1-1-1"), Some(3));
        assert_eq!(model.ancestors("1-1-1"), vec!["1-1", "1"]);
        assert!(model.get("missing").is_none());
    }

    #[test]
    fn test_expandable_keys() {
        let model = sample();
        let keys = model.expandable_keys();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains("1"));
        assert!(keys.contains("1-1"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let model = TreeModel::new(vec![
            TreeNode::new("dup", "First"),
            TreeNode::new("dup", "Second"),
        ]);
        assert_eq!(model.get("dup").map(|n| n.title.as_str()), Some("Second"));
        assert!(matches!(
            model.validate(),
            Err(TreeError::DuplicateKey { key }) if key == "dup"
        ));
    }

    #[test]
    fn test_validate_unique() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_retain_known_and_expandable() {
        let model = sample();
        let keys: KeySet = ["1", "2", "gone"].iter().map(|s| s.to_string()).collect();
        let known = model.retain_known(&keys);
        assert_eq!(known.len(), 2);
        let expandable = model.retain_expandable(&keys);
        assert_eq!(expandable.len(), 1);
        assert!(expandable.contains("1"));
    }

    #[test]
    fn test_from_json_error() {
        assert!(matches!(
            TreeModel::from_json("{ not json"),
            Err(TreeError::Json(_))
        ));
    }
}
