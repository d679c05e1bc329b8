//! Arrangement Editor
//!
//! Interactive editing of the menu arrangement:
//! - node: the presentation tree mirroring the live menu
//! - menu_editor: move / indent / outdent / drop / visibility operations

mod menu_editor;
mod node;

#[cfg(test)]
mod tests;

pub use menu_editor::{EditorActions, MenuEditor};
pub use node::{EditorNode, EditorNodeId, NodeStyle, PresentationTree};
