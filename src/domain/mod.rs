//! Domain Layer
//!
//! Contains the live menu model and the crate error type.

mod entity;
mod menu_item;
mod menu_tree;

pub use entity::{MenuError, MenuNodeId, MenuResult};
pub use menu_item::{MenuItem, MenuItemKind, MenuItemSpec, SEPARATOR_IDENTIFIER};
pub use menu_tree::MenuTree;
