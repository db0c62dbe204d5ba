//! Roving focus over the visible nodes.
//!
//! Exactly one visible, enabled node holds focus and is the tree's single
//! tab stop. Every move is computed from the current flattened list, so the
//! controller stores nothing but the focused key.

use crate::visibility::VisibleNode;

/// Tracks the focused node and moves it in response to navigation.
///
/// Every movement method returns true if focus changed.
#[derive(Debug, Clone, Default)]
pub struct FocusController {
    focused: Option<String>,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the focused node.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Check if a node is focused.
    pub fn is_focused(&self, key: &str) -> bool {
        self.focused.as_deref() == Some(key)
    }

    /// Tab index for a node: 0 for the single tab stop, -1 for everything else.
    pub fn tab_index(&self, key: &str) -> i32 {
        if self.is_focused(key) { 0 } else { -1 }
    }

    /// Repair focus after the visible list changed.
    ///
    /// Focus is kept if it is still on a visible enabled node, moved to the
    /// first visible enabled node otherwise, and cleared when there is none.
    pub fn sync(&mut self, visible: &[VisibleNode<'_>]) -> bool {
        if self.current_index(visible).is_some() {
            return false;
        }
        let first = visible.iter().find(|n| !n.is_disabled()).map(|n| n.key());
        if let Some(key) = first {
            log::debug!("focus repaired: {:?} -> {:?}", self.focused, key);
            self.set(key)
        } else if self.focused.take().is_some() {
            log::debug!("focus cleared: no enabled visible nodes");
            true
        } else {
            false
        }
    }

    /// Focus a node if it is visible and enabled.
    pub fn focus(&mut self, key: &str, visible: &[VisibleNode<'_>]) -> bool {
        let focusable = visible.iter().any(|n| n.key() == key && !n.is_disabled());
        focusable && self.set(key)
    }

    /// Move to the next enabled node, skipping disabled ones. Does not wrap.
    pub fn focus_next(&mut self, visible: &[VisibleNode<'_>]) -> bool {
        let Some(current) = self.current_index(visible) else {
            return self.focus_first(visible);
        };
        let next = visible[current + 1..]
            .iter()
            .find(|n| !n.is_disabled())
            .map(|n| n.key());
        next.is_some_and(|key| self.set(key))
    }

    /// Move to the previous enabled node, skipping disabled ones. Does not wrap.
    pub fn focus_prev(&mut self, visible: &[VisibleNode<'_>]) -> bool {
        let Some(current) = self.current_index(visible) else {
            return self.focus_first(visible);
        };
        let prev = visible[..current]
            .iter()
            .rev()
            .find(|n| !n.is_disabled())
            .map(|n| n.key());
        prev.is_some_and(|key| self.set(key))
    }

    /// Move to the first enabled node.
    pub fn focus_first(&mut self, visible: &[VisibleNode<'_>]) -> bool {
        let first = visible.iter().find(|n| !n.is_disabled()).map(|n| n.key());
        first.is_some_and(|key| self.set(key))
    }

    /// Move to the last enabled node.
    pub fn focus_last(&mut self, visible: &[VisibleNode<'_>]) -> bool {
        let last = visible.iter().rev().find(|n| !n.is_disabled()).map(|n| n.key());
        last.is_some_and(|key| self.set(key))
    }

    /// Move to the parent of the focused node, if the parent is enabled.
    pub fn focus_parent(&mut self, visible: &[VisibleNode<'_>]) -> bool {
        let Some(current) = self.current_index(visible) else {
            return false;
        };
        let Some(parent) = visible[current].parent_key else {
            return false;
        };
        let target = visible[..current]
            .iter()
            .rev()
            .find(|n| n.key() == parent && !n.is_disabled())
            .map(|n| n.key());
        target.is_some_and(|key| self.set(key))
    }

    /// Move to the first enabled child of the focused node.
    ///
    /// Only succeeds when the node is expanded, since children of collapsed
    /// nodes are not in the visible list.
    pub fn focus_first_child(&mut self, visible: &[VisibleNode<'_>]) -> bool {
        let Some(current) = self.current_index(visible) else {
            return false;
        };
        let node = &visible[current];
        if !node.expanded {
            return false;
        }
        let parent = node.key();
        let depth = node.depth;
        let target = visible[current + 1..]
            .iter()
            .take_while(|n| n.depth > depth)
            .find(|n| n.parent_key == Some(parent) && !n.is_disabled())
            .map(|n| n.key());
        target.is_some_and(|key| self.set(key))
    }

    /// Position of the focused node in the visible list, if it is there and enabled.
    fn current_index(&self, visible: &[VisibleNode<'_>]) -> Option<usize> {
        let focused = self.focused.as_deref()?;
        visible
            .iter()
            .position(|n| n.key() == focused && !n.is_disabled())
    }

    fn set(&mut self, key: &str) -> bool {
        if self.focused.as_deref() == Some(key) {
            return false;
        }
        self.focused = Some(key.to_string());
        true
    }
}
