//! Menu Editor
//!
//! Editing operations over the presentation tree and the live menu at once.
//! Every operation validates first and then mutates both trees, so a
//! rejected edit leaves both untouched. Successful structural edits persist
//! the new order immediately.

use std::collections::BTreeSet;

use menu_dragdrop::{DragState, DropPosition, DropTarget};
use serde::Serialize;

use super::node::{EditorNodeId, PresentationTree};
use crate::domain::{MenuError, MenuNodeId, MenuResult, MenuTree};
use crate::order::save_menu_order;
use crate::settings::{MenuSettings, SettingsStore};

/// Which gestures apply to the selected node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditorActions {
    pub move_up: bool,
    pub move_down: bool,
    pub indent: bool,
    pub outdent: bool,
}

pub struct MenuEditor<'a, S: SettingsStore> {
    menu: &'a mut MenuTree,
    settings: &'a mut MenuSettings<S>,
    tree: PresentationTree,
    hidden: BTreeSet<String>,
    selected: Option<EditorNodeId>,
    drag: DragState<EditorNodeId>,
}

impl<'a, S: SettingsStore> MenuEditor<'a, S> {
    /// Build the presentation tree from the menu as it is now.
    ///
    /// Everything starts expanded with the first top-level menu selected.
    pub fn open(menu: &'a mut MenuTree, settings: &'a mut MenuSettings<S>) -> MenuResult<Self> {
        let hidden = settings.hidden_items()?;
        let mut tree = PresentationTree::build(menu, &hidden);
        tree.expand_all();
        let selected = tree.roots().first().copied();
        Ok(Self {
            menu,
            settings,
            tree,
            hidden,
            selected,
            drag: DragState::new(),
        })
    }

    pub fn menu(&self) -> &MenuTree {
        &*self.menu
    }

    pub fn settings(&self) -> &MenuSettings<S> {
        &*self.settings
    }

    pub fn tree(&self) -> &PresentationTree {
        &self.tree
    }

    pub fn hidden_items(&self) -> &BTreeSet<String> {
        &self.hidden
    }

    pub fn node_for_item(&self, tag: MenuNodeId) -> Option<EditorNodeId> {
        self.tree.node_for(tag)
    }

    pub fn selected(&self) -> Option<EditorNodeId> {
        self.selected
    }

    pub fn select(&mut self, node: EditorNodeId) -> MenuResult<()> {
        self.tree.node(node)?;
        self.selected = Some(node);
        Ok(())
    }

    pub fn set_expanded(&mut self, node: EditorNodeId, expanded: bool) -> MenuResult<()> {
        self.tree.node_mut(node)?.expanded = expanded;
        Ok(())
    }

    /// Live container a presentation parent stands for
    fn container_for(&self, parent: Option<EditorNodeId>) -> MenuResult<MenuNodeId> {
        let Some(parent) = parent else {
            return Ok(self.menu.root());
        };
        let tag = self.tree.node(parent)?.tag;
        let item = self.menu.item(tag)?;
        if !item.is_container() {
            return Err(MenuError::InvalidTarget(format!(
                "{} cannot hold children",
                item.display_text()
            )));
        }
        Ok(tag)
    }

    /// Move `node` under `new_parent` (`None` for the top level) at
    /// `new_index`, counted before `node` is taken out of its current list.
    ///
    /// Validation errors leave both trees untouched. A [`MenuError::Storage`]
    /// error means the move was applied to both trees but the new order could
    /// not be saved; the next successful edit saves it.
    pub fn move_node(
        &mut self,
        node: EditorNodeId,
        new_parent: Option<EditorNodeId>,
        new_index: usize,
    ) -> MenuResult<()> {
        let tag = self.tree.node(node)?.tag;
        let container = self.container_for(new_parent)?;
        if new_parent.is_some_and(|p| self.tree.is_within(p, node)) {
            return Err(MenuError::DescendantDrop);
        }

        let (old_parent, old_index) = self
            .tree
            .detach(node)
            .ok_or_else(|| MenuError::NotFound(format!("editor node {}", node)))?;
        self.menu.detach(tag);

        let mut index = new_index;
        if old_parent == new_parent && old_index < index {
            index -= 1;
        }
        self.tree.insert(new_parent, index, node);
        self.menu.insert_at(container, index, tag);

        if let Some(parent) = new_parent {
            self.tree.node_mut(parent)?.expanded = true;
        }
        self.selected = Some(node);
        log::debug!(
            "Moved {} from {:?}[{}] to {:?}[{}]",
            node,
            old_parent,
            old_index,
            new_parent,
            index
        );
        save_menu_order(&*self.menu, &mut *self.settings).inspect_err(|e| {
            log::error!("Failed to save menu order: {}", e);
        })
    }

    fn position(&self, node: EditorNodeId) -> MenuResult<(Option<EditorNodeId>, usize)> {
        let parent = self.tree.node(node)?.parent();
        let index = self
            .tree
            .index_of(node)
            .ok_or_else(|| MenuError::NotFound(format!("editor node {}", node)))?;
        Ok((parent, index))
    }

    pub fn move_up(&mut self, node: EditorNodeId) -> MenuResult<bool> {
        let (parent, index) = self.position(node)?;
        if index == 0 {
            return Ok(false);
        }
        self.move_node(node, parent, index - 1)?;
        Ok(true)
    }

    pub fn move_down(&mut self, node: EditorNodeId) -> MenuResult<bool> {
        let (parent, index) = self.position(node)?;
        if index + 1 >= self.tree.children_of(parent).len() {
            return Ok(false);
        }
        // Insert index before removal; the same-list correction brings it to index + 1
        self.move_node(node, parent, index + 2)?;
        Ok(true)
    }

    /// Make `node` the last child of its previous sibling
    pub fn indent(&mut self, node: EditorNodeId) -> MenuResult<bool> {
        let (parent, index) = self.position(node)?;
        if index == 0 {
            return Ok(false);
        }
        let previous = self.tree.children_of(parent)[index - 1];
        let end = self.tree.children_of(Some(previous)).len();
        self.move_node(node, Some(previous), end)?;
        Ok(true)
    }

    /// Place `node` right after its parent, one level up
    pub fn outdent(&mut self, node: EditorNodeId) -> MenuResult<bool> {
        let (parent, _) = self.position(node)?;
        let Some(parent) = parent else {
            return Ok(false);
        };
        let (grandparent, parent_index) = self.position(parent)?;
        self.move_node(node, grandparent, parent_index + 1)?;
        Ok(true)
    }

    /// Show or hide the item behind `node` and persist the hidden set.
    ///
    /// Items without a name or text cannot be tracked and are left alone.
    pub fn toggle_visible(&mut self, node: EditorNodeId, visible: bool) -> MenuResult<bool> {
        let tag = self.tree.node(node)?.tag;
        let Some(identifier) = self.menu.item(tag)?.identifier().map(str::to_string) else {
            log::debug!("Ignoring visibility toggle for unnamed {}", tag);
            return Ok(false);
        };

        self.menu.set_visible(tag, visible)?;
        self.tree.node_mut(node)?.checked = visible;
        if visible {
            self.hidden.remove(&identifier);
        } else {
            self.hidden.insert(identifier);
        }
        self.settings.set_hidden_items(Some(&self.hidden))?;
        Ok(true)
    }

    /// Forget the saved order and hidden set.
    ///
    /// The menu keeps its current arrangement until it is rebuilt.
    pub fn reset(&mut self) -> MenuResult<()> {
        self.settings.set_custom_menu_order(None)?;
        self.hidden.clear();
        self.settings.set_hidden_items(None)?;
        log::info!("Menu arrangement reset");
        Ok(())
    }

    pub fn reset_enabled(&self) -> MenuResult<bool> {
        self.settings.has_customizations()
    }

    /// Gestures applicable to the current selection
    pub fn available_actions(&self) -> EditorActions {
        let Some(selected) = self.selected else {
            return EditorActions::default();
        };
        let Ok((parent, index)) = self.position(selected) else {
            return EditorActions::default();
        };
        let count = self.tree.children_of(parent).len();
        EditorActions {
            move_up: index > 0,
            move_down: index + 1 < count,
            indent: index > 0,
            outdent: parent.is_some(),
        }
    }

    /// Drop `dragged` on the row of `target`, `relative_y` pixels from the
    /// top of a row `height` pixels tall.
    ///
    /// Returns false when dropped on itself.
    pub fn drop_node(
        &mut self,
        dragged: EditorNodeId,
        target: EditorNodeId,
        relative_y: i32,
        height: i32,
    ) -> MenuResult<bool> {
        if dragged == target {
            return Ok(false);
        }
        if self.tree.is_within(target, dragged) {
            return Err(MenuError::DescendantDrop);
        }
        let (parent, index) = self.position(target)?;
        let position = DropPosition::from_offset(relative_y, height);
        self.apply_drop(dragged, DropTarget::resolve(target, parent, index, position))
    }

    pub fn apply_drop(
        &mut self,
        dragged: EditorNodeId,
        target: DropTarget<EditorNodeId>,
    ) -> MenuResult<bool> {
        match target {
            DropTarget::Item(item) if item == dragged => Ok(false),
            DropTarget::Item(item) => {
                let end = self.tree.children_of(Some(item)).len();
                self.move_node(dragged, Some(item), end)?;
                Ok(true)
            }
            DropTarget::Zone(parent, position) => {
                self.move_node(dragged, parent, position)?;
                Ok(true)
            }
        }
    }

    pub fn drag(&self) -> &DragState<EditorNodeId> {
        &self.drag
    }

    /// Pointer events go here while the user drags a row
    pub fn drag_mut(&mut self) -> &mut DragState<EditorNodeId> {
        &mut self.drag
    }

    /// Mouse released: apply the pending drop, if any
    pub fn finish_drag(&mut self) -> MenuResult<bool> {
        match self.drag.on_mouseup() {
            Some((dragged, target)) => self.apply_drop(dragged, target),
            None => Ok(false),
        }
    }
}
