//! Tree-view navigation engine.
//!
//! The pieces, leaves first:
//!
//! - [`TreeModel`] - the node forest plus a key index
//! - [`visibility`] - flattening into the list of visible nodes
//! - [`search`] - pruning the forest to matches and their ancestors
//! - [`selection`] - selection and downward check propagation
//! - [`FocusController`] - roving focus over visible, enabled nodes
//!
//! [`TreeView`] ties them together into the state object owned by one widget
//! instance. Rendering is left to the host; [`AriaAttributes`] carries what a
//! renderer needs for accessibility.

pub mod aria;
pub mod error;
pub mod events;
pub mod focus;
pub mod keys;
pub mod model;
pub mod node;
pub mod options;
pub mod search;
pub mod selection;
pub mod view;
pub mod visibility;

pub use aria::AriaAttributes;
pub use error::{Result, TreeError};
pub use events::{CheckInfo, EventResult, TreeEvent};
pub use focus::FocusController;
pub use keys::TreeKey;
pub use model::{KeySet, TreeModel};
pub use node::TreeNode;
pub use options::TreeOptions;
pub use search::{MatchMode, SearchResult};
pub use selection::{CheckState, SelectionMode};
pub use view::TreeView;
pub use visibility::VisibleNode;

pub mod prelude {
    pub use crate::aria::AriaAttributes;
    pub use crate::events::{CheckInfo, EventResult, TreeEvent};
    pub use crate::focus::FocusController;
    pub use crate::keys::TreeKey;
    pub use crate::model::{KeySet, TreeModel};
    pub use crate::node::TreeNode;
    pub use crate::options::TreeOptions;
    pub use crate::search::{MatchMode, SearchResult};
    pub use crate::selection::{CheckState, SelectionMode};
    pub use crate::view::TreeView;
    pub use crate::visibility::VisibleNode;
}
