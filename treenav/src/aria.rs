//! Accessibility attributes for a visible node.

use crate::selection::CheckState;

/// The `treeitem` attributes a renderer exposes for one visible node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AriaAttributes {
    /// `aria-level`
    pub level: usize,
    /// `aria-setsize`
    pub set_size: usize,
    /// `aria-posinset`
    pub pos_in_set: usize,
    /// `aria-expanded`, only present for nodes with children.
    pub expanded: Option<bool>,
    /// `aria-selected`
    pub selected: bool,
    /// `aria-disabled`
    pub disabled: bool,
    /// `aria-checked`, only present for checkable trees.
    pub checked: Option<CheckState>,
    /// `tabindex`: 0 on the single tab stop, -1 elsewhere.
    pub tab_index: i32,
}

impl AriaAttributes {
    /// Value for `aria-checked`.
    pub fn checked_value(&self) -> Option<&'static str> {
        self.checked.map(|state| match state {
            CheckState::Checked => "true",
            CheckState::Unchecked => "false",
            CheckState::Indeterminate => "mixed",
        })
    }
}
