//! Search filtering: prune the tree to matching nodes and their ancestors.

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;

use crate::model::KeySet;
use crate::node::TreeNode;

/// How a query is matched against node titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy subsequence match (whitespace separates independent terms).
    Fuzzy,
}

/// Output of a filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The pruned forest.
    pub roots: Vec<TreeNode>,
    /// Keys of surviving nodes that have at least one surviving descendant.
    /// These are the nodes to expand so every match is visible.
    pub matched_ancestor_keys: KeySet,
}

enum Needle {
    Substring(Atom),
    Fuzzy(Pattern),
}

/// Matches node titles against a query using nucleo-matcher.
pub struct TitleMatcher {
    matcher: Matcher,
    needle: Needle,
    buf: Vec<char>,
}

impl TitleMatcher {
    pub fn new(query: &str, mode: MatchMode) -> Self {
        let needle = match mode {
            MatchMode::Substring => Needle::Substring(Atom::new(
                query,
                CaseMatching::Ignore,
                Normalization::Never,
                AtomKind::Substring,
                false,
            )),
            MatchMode::Fuzzy => Needle::Fuzzy(Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            )),
        };
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            needle,
            buf: Vec::new(),
        }
    }

    /// Check whether a title matches the query.
    pub fn matches(&mut self, title: &str) -> bool {
        let haystack = Utf32Str::new(title, &mut self.buf);
        match &self.needle {
            Needle::Substring(atom) => atom.score(haystack, &mut self.matcher).is_some(),
            Needle::Fuzzy(pattern) => pattern.score(haystack, &mut self.matcher).is_some(),
        }
    }
}

/// Filter a forest by case-insensitive substring match on titles.
///
/// An empty query returns the forest unchanged and no ancestors.
pub fn filter(roots: &[TreeNode], query: &str) -> SearchResult {
    filter_with_mode(roots, query, MatchMode::Substring)
}

/// Filter a forest with the given match mode.
pub fn filter_with_mode(roots: &[TreeNode], query: &str, mode: MatchMode) -> SearchResult {
    if query.is_empty() {
        return SearchResult {
            roots: roots.to_vec(),
            matched_ancestor_keys: KeySet::new(),
        };
    }

    let mut matcher = TitleMatcher::new(query, mode);
    let result = filter_with(roots, |node| matcher.matches(&node.title));
    log::debug!(
        "search {:?}: {} roots kept, {} ancestors to expand",
        query,
        result.roots.len(),
        result.matched_ancestor_keys.len()
    );
    result
}

/// Filter a forest with a caller-supplied predicate.
///
/// A node survives if the predicate accepts it or any of its children
/// survived. Children lists are only rebuilt where filtering removed
/// something; untouched subtrees are carried over as they were. A node that
/// survives on its own match with no surviving children keeps its original
/// children.
pub fn filter_with<F>(roots: &[TreeNode], mut predicate: F) -> SearchResult
where
    F: FnMut(&TreeNode) -> bool,
{
    let mut ancestors = KeySet::new();
    let (roots, _) = prune(roots, &mut predicate, &mut ancestors);
    SearchResult {
        roots,
        matched_ancestor_keys: ancestors,
    }
}

/// Returns the surviving nodes and whether anything below `nodes` was removed.
fn prune<F>(
    nodes: &[TreeNode],
    predicate: &mut F,
    ancestors: &mut KeySet,
) -> (Vec<TreeNode>, bool)
where
    F: FnMut(&TreeNode) -> bool,
{
    let mut kept = Vec::with_capacity(nodes.len());
    let mut pruned = false;

    for node in nodes {
        let (filtered, children_pruned) = prune(node.children(), predicate, ancestors);

        if filtered.is_empty() && !predicate(node) {
            pruned = true;
            continue;
        }

        if !filtered.is_empty() {
            ancestors.insert(node.key.clone());
        }
        let children = if !children_pruned || filtered.is_empty() {
            node.children.clone()
        } else {
            pruned = true;
            Some(filtered)
        };

        kept.push(TreeNode {
            key: node.key.clone(),
            title: node.title.clone(),
            children,
            disabled: node.disabled,
        });
    }
    (kept, pruned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_matcher_substring_case_insensitive() {
        let mut m = TitleMatcher::new("child 1", MatchMode::Substring);
        assert!(m.matches("Child 1"));
        assert!(m.matches("My CHILD 12"));
        assert!(!m.matches("Child 2"));
        assert!(!m.matches("1 child"));
    }

    #[test]
    fn test_title_matcher_fuzzy() {
        let mut m = TitleMatcher::new("pt1", MatchMode::Fuzzy);
        assert!(m.matches("Parent 1"));
        assert!(!m.matches("Child 2"));
    }
}
