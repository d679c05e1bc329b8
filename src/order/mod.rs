//! Menu Order Module
//!
//! Persisting and reapplying the arrangement, split into:
//! - codec: `depth:identifier;` encoding of the tree shape
//! - reconcile: applying a saved order to a live menu
//! - visibility: applying the hidden set
//! - storage: wiring the above to the settings store

mod codec;
mod reconcile;
mod storage;
mod visibility;


pub(crate) use codec::escape_delimiters;
pub use codec::{decode, encode, MenuOrder, OrderToken};
pub use reconcile::{apply_order, OrderReconciler, ReconcileStats};
pub use storage::{restore_hidden_items, restore_menu_order, save_menu_order};
pub use visibility::apply_hidden_items;
