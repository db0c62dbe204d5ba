//! Tree view state.
//!
//! [`TreeView`] is the state object owned by one tree widget instance. It
//! holds the model, the expanded / checked / selected key sets, the focused
//! key and the active search, and applies every interaction as a single
//! step that leaves all of them consistent.
//!
//! # Example
//!
//! ```
//! use treenav::{TreeKey, TreeNode, TreeOptions, TreeView};
//!
//! let roots = vec![
//!     TreeNode::new("1", "Parent 1")
//!         .child(TreeNode::new("1-1", "Child 1"))
//!         .child(TreeNode::new("1-2", "Child 2")),
//!     TreeNode::new("2", "Parent 2"),
//! ];
//! let mut tree = TreeView::new(roots, TreeOptions::new().checkable());
//!
//! assert_eq!(tree.focused_key(), Some("1"));
//! tree.handle_key(TreeKey::ArrowRight); // expand "1"
//! tree.handle_key(TreeKey::ArrowRight); // focus "1-1"
//! tree.handle_key(TreeKey::Space); // check "1-1"
//!
//! assert_eq!(tree.visible_keys(), ["1", "1-1", "1-2", "2"]);
//! assert!(tree.is_checked("1-1"));
//! ```

use crate::aria::AriaAttributes;
use crate::events::{CheckInfo, EventResult, TreeEvent};
use crate::focus::FocusController;
use crate::keys::TreeKey;
use crate::model::{KeySet, TreeModel};
use crate::node::TreeNode;
use crate::options::TreeOptions;
use crate::search::{self, SearchResult};
use crate::selection::{self, CheckState, SelectionMode};
use crate::visibility::{self, VisibleNode};

/// Facts about the focused node, copied out before state is mutated.
struct FocusedNode {
    key: String,
    has_children: bool,
    expanded: bool,
    disabled: bool,
}

/// State for one tree widget instance.
#[derive(Debug, Clone)]
pub struct TreeView {
    model: TreeModel,
    options: TreeOptions,
    expanded: KeySet,
    checked: KeySet,
    selected: KeySet,
    focus: FocusController,
    query: String,
    search: Option<SearchResult>,
    events: Vec<TreeEvent>,
}

impl TreeView {
    /// Create a view over root nodes.
    pub fn new(roots: Vec<TreeNode>, options: TreeOptions) -> Self {
        Self::from_model(TreeModel::new(roots), options)
    }

    /// Create a view over an existing model.
    pub fn from_model(model: TreeModel, options: TreeOptions) -> Self {
        let expanded = if options.default_expand_all {
            model.expandable_keys()
        } else {
            KeySet::new()
        };
        let mut view = Self {
            model,
            options,
            expanded,
            checked: KeySet::new(),
            selected: KeySet::new(),
            focus: FocusController::new(),
            query: String::new(),
            search: None,
            events: Vec::new(),
        };
        view.sync_focus();
        view
    }

    /// Set the initially expanded keys. Unknown keys and leaves are dropped.
    pub fn with_expanded_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.expanded = self.model.retain_expandable(&to_key_set(keys));
        self.sync_focus();
        self
    }

    /// Set the initially checked keys. Unknown keys are dropped.
    pub fn with_checked_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.checked = self.model.retain_known(&to_key_set(keys));
        self
    }

    /// Set the initially selected keys.
    ///
    /// Unknown keys are dropped; in single mode only the first known key is
    /// kept, and nothing is kept when selection is off.
    pub fn with_selected_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.selected = self.clamp_selection(keys);
        self
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    pub fn model(&self) -> &TreeModel {
        &self.model
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn expanded_keys(&self) -> &KeySet {
        &self.expanded
    }

    pub fn checked_keys(&self) -> &KeySet {
        &self.checked
    }

    pub fn selected_keys(&self) -> &KeySet {
        &self.selected
    }

    pub fn focused_key(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// The active search query (empty when not searching).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The active search result, if a query is set.
    pub fn search_result(&self) -> Option<&SearchResult> {
        self.search.as_ref()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.checked.contains(key)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key)
    }

    /// The forest currently displayed: the search result if searching, the
    /// model otherwise.
    pub fn roots(&self) -> &[TreeNode] {
        display_roots(&self.model, &self.search)
    }

    /// The visible nodes in display order.
    pub fn visible(&self) -> Vec<VisibleNode<'_>> {
        visibility::flatten(self.roots(), &self.expanded)
    }

    /// Keys of the visible nodes in display order.
    pub fn visible_keys(&self) -> Vec<String> {
        self.visible()
            .iter()
            .map(|n| n.key().to_string())
            .collect()
    }

    /// Checkbox state to display for a node.
    ///
    /// With `check_strictly` nodes are independent, so the state is just
    /// membership in the checked set.
    pub fn check_state(&self, key: &str) -> CheckState {
        if self.options.check_strictly {
            return if self.checked.contains(key) {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            };
        }
        selection::check_state(&self.model, &self.checked, key)
    }

    /// Accessibility attributes for a visible node.
    pub fn aria(&self, node: &VisibleNode<'_>) -> AriaAttributes {
        let key = node.key();
        AriaAttributes {
            level: node.depth,
            set_size: node.sibling_count,
            pos_in_set: node.position,
            expanded: node.has_children().then_some(node.expanded),
            selected: self.selected.contains(key),
            disabled: node.is_disabled(),
            checked: self.options.checkable.then(|| self.check_state(key)),
            tab_index: self.focus.tab_index(key),
        }
    }

    /// Accessibility attributes for a node by key, if it is visible.
    pub fn aria_for(&self, key: &str) -> Option<AriaAttributes> {
        self.visible()
            .iter()
            .find(|n| n.key() == key)
            .map(|n| self.aria(n))
    }

    /// Drain the events produced since the last call.
    pub fn take_events(&mut self) -> Vec<TreeEvent> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Expand a node. Leaves and unknown keys are ignored.
    pub fn expand(&mut self, key: &str) -> bool {
        if !self.model.has_children(key) || !self.expanded.insert(key.to_string()) {
            return false;
        }
        log::debug!("expand {key}");
        self.emit_expand();
        self.refresh_focus();
        true
    }

    /// Collapse a node.
    pub fn collapse(&mut self, key: &str) -> bool {
        if !self.expanded.remove(key) {
            return false;
        }
        log::debug!("collapse {key}");
        self.emit_expand();
        self.refresh_focus();
        true
    }

    /// Toggle expand/collapse for a node.
    pub fn toggle_expand(&mut self, key: &str) -> bool {
        if self.expanded.contains(key) {
            self.collapse(key)
        } else {
            self.expand(key)
        }
    }

    /// Expand every node with children.
    pub fn expand_all(&mut self) -> bool {
        let all = self.model.expandable_keys();
        if all.is_subset(&self.expanded) {
            return false;
        }
        self.expanded.extend(all);
        self.emit_expand();
        self.refresh_focus();
        true
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) -> bool {
        if self.expanded.is_empty() {
            return false;
        }
        self.expanded.clear();
        self.emit_expand();
        self.refresh_focus();
        true
    }

    /// Replace the expanded set from outside (controlled mode). No event is
    /// emitted for the replacement itself.
    pub fn set_expanded_keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.expanded = self.model.retain_expandable(&to_key_set(keys));
        self.refresh_focus();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of a node. Disabled nodes are rejected.
    pub fn toggle_select(&mut self, key: &str) -> bool {
        let mode = self.options.selection_mode();
        if mode == SelectionMode::None || !self.is_enabled(key) {
            return false;
        }
        let next = selection::toggle_select(&self.selected, key, mode);
        self.commit_selection(next)
    }

    /// Select every visible, enabled node (multiple mode only).
    pub fn select_all(&mut self) -> bool {
        if self.options.selection_mode() != SelectionMode::Multiple {
            return false;
        }
        let next = {
            let roots = display_roots(&self.model, &self.search);
            let visible = visibility::flatten(roots, &self.expanded);
            selection::select_all_visible(&self.selected, &visible)
        };
        self.commit_selection(next)
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) -> bool {
        self.commit_selection(KeySet::new())
    }

    /// Replace the selection from outside (controlled mode). No event.
    pub fn set_selected_keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.selected = self.clamp_selection(keys);
    }

    fn clamp_selection<I, K>(&self, keys: I) -> KeySet
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let known = keys
            .into_iter()
            .map(Into::<String>::into)
            .filter(|k| self.model.contains(k));
        match self.options.selection_mode() {
            SelectionMode::None => KeySet::new(),
            SelectionMode::Single => known.take(1).collect(),
            SelectionMode::Multiple => known.collect(),
        }
    }

    fn commit_selection(&mut self, next: KeySet) -> bool {
        if next == self.selected {
            return false;
        }
        log::debug!("selection now {} keys", next.len());
        self.selected = next;
        self.events.push(TreeEvent::Select {
            selected_keys: self.selected.clone(),
        });
        true
    }

    // -------------------------------------------------------------------------
    // Check
    // -------------------------------------------------------------------------

    /// Flip the displayed check state of a node.
    pub fn toggle_check(&mut self, key: &str) -> bool {
        let check = self.check_state(key) != CheckState::Checked;
        self.set_checked(key, check)
    }

    /// Check or uncheck a node (and its descendants unless `check_strictly`).
    ///
    /// Rejected when the tree is not checkable or the node is disabled.
    pub fn set_checked(&mut self, key: &str, checked: bool) -> bool {
        if !self.options.checkable {
            return false;
        }
        let Some(node) = self.model.get(key).filter(|n| !n.disabled).cloned() else {
            return false;
        };
        let next = selection::toggle_check(
            &self.model,
            &self.checked,
            key,
            checked,
            self.options.check_strictly,
        );
        if next == self.checked {
            return false;
        }
        log::debug!("{} {key}", if checked { "check" } else { "uncheck" });
        self.checked = next;
        self.events.push(TreeEvent::Check {
            checked_keys: self.checked.clone(),
            info: CheckInfo { checked, node },
        });
        true
    }

    /// Replace the checked set from outside (controlled mode). No event.
    pub fn set_checked_keys<I, K>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.checked = self.model.retain_known(&to_key_set(keys));
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Set the live search query.
    ///
    /// A non-empty query prunes the displayed tree to matches and their
    /// ancestors, and adds those ancestors to the expanded set.
    pub fn set_search(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }
        self.query = query;
        self.events.push(TreeEvent::Search {
            query: self.query.clone(),
        });
        self.apply_search();
        self.refresh_focus();
        true
    }

    /// Clear the search query.
    pub fn clear_search(&mut self) -> bool {
        self.set_search(String::new())
    }

    fn apply_search(&mut self) {
        if self.query.is_empty() {
            self.search = None;
            return;
        }
        let result =
            search::filter_with_mode(self.model.roots(), &self.query, self.options.match_mode);
        let before = self.expanded.len();
        self.expanded
            .extend(result.matched_ancestor_keys.iter().cloned());
        self.search = Some(result);
        if self.expanded.len() != before {
            self.emit_expand();
        }
    }

    // -------------------------------------------------------------------------
    // Model
    // -------------------------------------------------------------------------

    /// Replace the tree data.
    ///
    /// Keys that no longer exist are pruned from every set, the active search
    /// is re-run against the new data, and focus is repaired if its node is
    /// gone.
    pub fn set_roots(&mut self, roots: Vec<TreeNode>) {
        self.set_model(TreeModel::new(roots));
    }

    /// Replace the tree data with a prebuilt model.
    pub fn set_model(&mut self, model: TreeModel) {
        log::debug!("model replaced: {} nodes", model.len());
        self.model = model;
        self.expanded = self.model.retain_expandable(&self.expanded);
        self.checked = self.model.retain_known(&self.checked);
        self.selected = self.model.retain_known(&self.selected);
        self.apply_search();
        self.refresh_focus();
    }

    // -------------------------------------------------------------------------
    // Focus and input
    // -------------------------------------------------------------------------

    /// Focus a visible, enabled node.
    pub fn focus(&mut self, key: &str) -> bool {
        self.move_focus(|focus, visible| focus.focus(key, visible))
    }

    /// Pointer activation: focus the node and toggle its selection.
    pub fn click(&mut self, key: &str) -> EventResult {
        let focused = self.focus(key);
        if !self.focus.is_focused(key) {
            return EventResult::Ignored;
        }
        let selected = self.toggle_select(key);
        (focused || selected).into()
    }

    /// Handle a navigation key.
    ///
    /// Returns `Consumed` when the key changed any state.
    pub fn handle_key(&mut self, key: TreeKey) -> EventResult {
        log::trace!("key {key} on {:?}", self.focus.focused());
        let changed = match key {
            TreeKey::ArrowDown => self.move_focus(FocusController::focus_next),
            TreeKey::ArrowUp => self.move_focus(FocusController::focus_prev),
            TreeKey::Home => self.move_focus(FocusController::focus_first),
            TreeKey::End => self.move_focus(FocusController::focus_last),
            TreeKey::ArrowRight => self.on_arrow_right(),
            TreeKey::ArrowLeft => self.on_arrow_left(),
            TreeKey::Enter => self.on_enter(),
            TreeKey::Space => self.on_space(),
        };
        changed.into()
    }

    fn on_arrow_right(&mut self) -> bool {
        let Some(node) = self.focused_node() else {
            return false;
        };
        if !node.has_children {
            return false;
        }
        if node.expanded {
            self.move_focus(FocusController::focus_first_child)
        } else {
            self.expand(&node.key)
        }
    }

    fn on_arrow_left(&mut self) -> bool {
        let Some(node) = self.focused_node() else {
            return false;
        };
        if node.has_children && node.expanded {
            self.collapse(&node.key)
        } else {
            self.move_focus(FocusController::focus_parent)
        }
    }

    fn on_enter(&mut self) -> bool {
        let Some(node) = self.focused_node().filter(|n| !n.disabled) else {
            return false;
        };
        let mut changed = false;
        if self.options.selection_mode() != SelectionMode::None {
            changed |= self.toggle_select(&node.key);
        }
        if node.has_children {
            changed |= self.toggle_expand(&node.key);
        }
        changed
    }

    fn on_space(&mut self) -> bool {
        let Some(node) = self.focused_node().filter(|n| !n.disabled) else {
            return false;
        };
        if self.options.checkable {
            self.toggle_check(&node.key)
        } else if self.options.selection_mode() != SelectionMode::None {
            self.toggle_select(&node.key)
        } else {
            false
        }
    }

    fn focused_node(&self) -> Option<FocusedNode> {
        let key = self.focus.focused()?;
        self.visible()
            .iter()
            .find(|n| n.key() == key)
            .map(|n| FocusedNode {
                key: key.to_string(),
                has_children: n.has_children(),
                expanded: n.expanded,
                disabled: n.is_disabled(),
            })
    }

    /// Run a focus transition against the current visible list, emitting a
    /// focus event when it moved.
    fn move_focus<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&mut FocusController, &[VisibleNode<'_>]) -> bool,
    {
        let changed = self.sync_with(step);
        if changed {
            self.events.push(TreeEvent::Focus {
                key: self.focus.focused().map(str::to_string),
            });
        }
        changed
    }

    fn sync_with<F>(&mut self, step: F) -> bool
    where
        F: FnOnce(&mut FocusController, &[VisibleNode<'_>]) -> bool,
    {
        let visible = visibility::flatten(display_roots(&self.model, &self.search), &self.expanded);
        step(&mut self.focus, &visible)
    }

    /// Repair focus without emitting an event (mount and initial state).
    fn sync_focus(&mut self) {
        self.sync_with(FocusController::sync);
    }

    /// Repair focus after the visible list changed.
    fn refresh_focus(&mut self) {
        self.move_focus(FocusController::sync);
    }

    fn is_enabled(&self, key: &str) -> bool {
        self.model.get(key).is_some_and(|n| !n.disabled)
    }

    fn emit_expand(&mut self) {
        self.events.push(TreeEvent::Expand {
            expanded_keys: self.expanded.clone(),
        });
    }
}

fn display_roots<'a>(model: &'a TreeModel, search: &'a Option<SearchResult>) -> &'a [TreeNode] {
    match search {
        Some(result) => &result.roots,
        None => model.roots(),
    }
}

fn to_key_set<I, K>(keys: I) -> KeySet
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    keys.into_iter().map(Into::into).collect()
}
