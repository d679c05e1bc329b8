//! Menu Arrange
//!
//! Lets a user reorder and hide the items of a live menu, saves that
//! arrangement as two strings and reapplies it to a freshly built menu whose
//! items may have changed in the meantime.
//!
//! Layered architecture:
//! - domain: live menu tree, item model and errors
//! - tree: walks over the live menu
//! - order: persisted order codec and reconciliation
//! - settings: storage for the order and the hidden set
//! - editor: presentation tree and editing operations
//! - arrangement: restore-once lifecycle for a host

pub mod arrangement;
pub mod domain;
pub mod editor;
pub mod order;
pub mod settings;
pub mod tree;

#[cfg(test)]
mod test_support;

pub use arrangement::{MenuArrangement, MenuHost, RestoreSummary};
pub use domain::{MenuError, MenuItem, MenuItemKind, MenuItemSpec, MenuNodeId, MenuResult, MenuTree};
pub use editor::{EditorActions, EditorNode, EditorNodeId, MenuEditor, NodeStyle, PresentationTree};
pub use order::{MenuOrder, OrderToken, ReconcileStats};
pub use settings::{MemorySettingsStore, MenuSettings, SettingsStore, SqliteSettingsStore};
