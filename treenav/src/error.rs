//! Error types for the boundary operations of the engine.
//!
//! The engine itself never fails: toggling an unknown key is a no-op and a
//! stale focus repairs itself. Only loading data and parsing key names can
//! go wrong.

use thiserror::Error;

/// Errors produced when loading trees/options or parsing input.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Node or option JSON could not be parsed.
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two nodes share the same key.
    #[error("duplicate node key '{key}'")]
    DuplicateKey { key: String },

    /// A key name did not map to any navigation key.
    #[error("unknown key name '{name}'")]
    UnknownKey { name: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TreeError>;
