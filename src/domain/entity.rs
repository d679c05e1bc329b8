//! Domain Layer - Identity and Errors
//!
//! Every live menu item carries an opaque identity that survives reordering
//! and renaming. Identifiers (names/texts) are only used to match persisted
//! orders; identity is what the tree operations work with.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identity of an item in a [`MenuTree`](super::MenuTree).
///
/// Handed out by the tree when the host adds an item; never derived from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuNodeId(pub(crate) u32);

impl MenuNodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MenuNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Menu({})", self.0)
    }
}

/// Common result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Menu-level errors
///
/// Decoding anomalies are not represented here: stale or malformed persisted
/// data is skipped, never reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[error("Not found: {0}")]
    NotFound(String),
    /// Reparent target cannot hold children, or the move would nest an item in itself
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
    #[error("Cannot drop an item onto its own descendant")]
    DescendantDrop,
    #[error("Main menu is not available")]
    MissingRoot,
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for MenuError {
    fn from(e: rusqlite::Error) -> Self {
        MenuError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(e: serde_json::Error) -> Self {
        MenuError::Storage(e.to_string())
    }
}
