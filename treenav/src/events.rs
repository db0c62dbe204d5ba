//! Events emitted by the tree view.
//!
//! Every state change pushes a [`TreeEvent`] onto the view's queue. The host
//! drains the queue after each interaction with
//! [`TreeView::take_events`](crate::TreeView::take_events). Events carry the
//! complete new key set, never a delta.

use crate::model::KeySet;
use crate::node::TreeNode;

/// Details of a check action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    /// Whether the node was checked (true) or unchecked (false).
    pub checked: bool,
    /// The node the action was applied to.
    pub node: TreeNode,
}

/// A state change in the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// The expanded set changed.
    Expand { expanded_keys: KeySet },
    /// The checked set changed.
    Check { checked_keys: KeySet, info: CheckInfo },
    /// The selected set changed.
    Select { selected_keys: KeySet },
    /// The search query changed.
    Search { query: String },
    /// The focused node changed.
    Focus { key: Option<String> },
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(changed: bool) -> Self {
        if changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}
