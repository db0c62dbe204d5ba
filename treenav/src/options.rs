//! Tree view configuration.

use serde::Deserialize;

use crate::error::Result;
use crate::search::MatchMode;
use crate::selection::SelectionMode;

/// Mode flags for a tree view instance.
///
/// Built with the builder methods or loaded from JSON (camelCase keys, every
/// field optional):
///
/// ```
/// use treenav::TreeOptions;
///
/// let opts = TreeOptions::new().checkable().multiple();
/// let same = TreeOptions::from_json(r#"{ "checkable": true, "multiple": true }"#).unwrap();
/// assert_eq!(opts, same);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeOptions {
    /// Show checkboxes; Space toggles the check state.
    pub checkable: bool,
    /// Allow selection.
    pub selectable: bool,
    /// Allow more than one selected node.
    pub multiple: bool,
    /// Expand every node with children on mount.
    pub default_expand_all: bool,
    /// Check actions apply to the node only, not its descendants.
    pub check_strictly: bool,
    /// How search queries match titles.
    pub match_mode: MatchMode,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            checkable: false,
            selectable: true,
            multiple: false,
            default_expand_all: false,
            check_strictly: false,
            match_mode: MatchMode::default(),
        }
    }
}

impl TreeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enable checkboxes.
    pub fn checkable(mut self) -> Self {
        self.checkable = true;
        self
    }

    /// Enable or disable selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Allow multiple selection.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Expand everything on mount.
    pub fn default_expand_all(mut self) -> Self {
        self.default_expand_all = true;
        self
    }

    /// Disable downward check propagation.
    pub fn check_strictly(mut self) -> Self {
        self.check_strictly = true;
        self
    }

    /// Set the search match mode.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// The selection mode implied by the flags.
    pub fn selection_mode(&self) -> SelectionMode {
        match (self.selectable, self.multiple) {
            (false, _) => SelectionMode::None,
            (true, false) => SelectionMode::Single,
            (true, true) => SelectionMode::Multiple,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TreeOptions::default();
        assert!(opts.selectable);
        assert!(!opts.checkable);
        assert_eq!(opts.selection_mode(), SelectionMode::Single);
        assert_eq!(opts.match_mode, MatchMode::Substring);
    }

    #[test]
    fn test_from_json_partial() {
        let opts =
            TreeOptions::from_json(r#"{ "selectable": false, "matchMode": "fuzzy" }"#).unwrap();
        assert_eq!(opts.selection_mode(), SelectionMode::None);
        assert_eq!(opts.match_mode, MatchMode::Fuzzy);
        assert!(!opts.default_expand_all);
    }

    #[test]
    fn test_from_json_rejects_bad_type() {
        assert!(TreeOptions::from_json(r#"{ "checkable": "yes" }"#).is_err());
    }
}
