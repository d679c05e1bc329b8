//! Live Menu Tree
//!
//! Arena of menu items addressed by [`MenuNodeId`]. Each item keeps an ordered
//! list of child ids and a back-pointer to its parent, so "where is this item
//! now" is an identity lookup rather than a search.
//!
//! The host builds the tree with [`MenuTree::add`]; the rest of the crate only
//! reorders, reparents and toggles visibility. Items are never removed.

use super::entity::{MenuError, MenuNodeId, MenuResult};
use super::menu_item::{MenuItem, MenuItemSpec};

#[derive(Debug, Clone)]
pub struct MenuTree {
    items: Vec<MenuItem>,
}

impl Default for MenuTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuTree {
    /// Create a tree holding only the main menu strip
    pub fn new() -> Self {
        let root = MenuItem::new(MenuNodeId(0), MenuItemSpec::default(), None);
        Self { items: vec![root] }
    }

    /// The main menu strip; its children are the top-level menus
    pub fn root(&self) -> MenuNodeId {
        MenuNodeId(0)
    }

    /// Append a new item as the last child of `parent`
    pub fn add(&mut self, parent: MenuNodeId, spec: MenuItemSpec) -> MenuResult<MenuNodeId> {
        let parent_item = self.item(parent)?;
        if !parent_item.is_container() {
            return Err(MenuError::InvalidTarget(format!("{} cannot hold children", parent)));
        }
        let id = MenuNodeId(self.items.len() as u32);
        self.items.push(MenuItem::new(id, spec, Some(parent)));
        self.items[parent.index()].children.push(id);
        Ok(id)
    }

    pub fn get(&self, id: MenuNodeId) -> Option<&MenuItem> {
        self.items.get(id.index())
    }

    pub(crate) fn item(&self, id: MenuNodeId) -> MenuResult<&MenuItem> {
        self.get(id).ok_or_else(|| MenuError::NotFound(format!("menu item {}", id)))
    }

    fn item_mut(&mut self, id: MenuNodeId) -> MenuResult<&mut MenuItem> {
        self.items
            .get_mut(id.index())
            .ok_or_else(|| MenuError::NotFound(format!("menu item {}", id)))
    }

    /// Children of `id`, empty for unknown ids and non-containers
    pub fn children(&self, id: MenuNodeId) -> &[MenuNodeId] {
        self.get(id).map(|item| item.children()).unwrap_or(&[])
    }

    pub fn parent(&self, id: MenuNodeId) -> Option<MenuNodeId> {
        self.get(id).and_then(|item| item.parent)
    }

    pub fn is_expandable(&self, id: MenuNodeId) -> bool {
        self.get(id).is_some_and(|item| item.is_expandable())
    }

    /// Number of items, not counting the main menu strip
    pub fn len(&self) -> usize {
        self.items.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All item ids, in creation order, not counting the main menu strip
    pub fn ids(&self) -> impl Iterator<Item = MenuNodeId> + '_ {
        self.items.iter().skip(1).map(|item| item.id)
    }

    /// Current `(parent, index)` of an item; None for the root and unknown ids
    pub fn locate(&self, id: MenuNodeId) -> Option<(MenuNodeId, usize)> {
        let parent = self.parent(id)?;
        let index = self.children(parent).iter().position(|&c| c == id)?;
        Some((parent, index))
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn is_same_or_ancestor(&self, ancestor: MenuNodeId, node: MenuNodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// First item in pre-order (all containers) with this name or text
    pub fn find_by_identifier(&self, identifier: &str) -> Option<MenuNodeId> {
        let mut stack: Vec<MenuNodeId> = self.children(self.root()).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let item = self.get(id)?;
            if item.identifier() == Some(identifier) {
                return Some(id);
            }
            stack.extend(item.children.iter().rev().copied());
        }
        None
    }

    pub fn set_visible(&mut self, id: MenuNodeId, visible: bool) -> MenuResult<()> {
        self.item_mut(id)?.visible = visible;
        Ok(())
    }

    /// Move `id` into `container` at `index` (appended when past the end).
    ///
    /// Rejected without any change when the container cannot hold children or
    /// lies inside the moved item.
    pub fn move_to(
        &mut self,
        id: MenuNodeId,
        container: MenuNodeId,
        index: usize,
    ) -> MenuResult<()> {
        if id == self.root() {
            return Err(MenuError::InvalidTarget("the main menu cannot be moved".to_string()));
        }
        self.item(id)?;
        if !self.item(container)?.is_container() {
            return Err(MenuError::InvalidTarget(format!("{} cannot hold children", container)));
        }
        if self.is_same_or_ancestor(id, container) {
            return Err(MenuError::InvalidTarget(format!("{} would be nested inside itself", id)));
        }
        self.detach(id);
        self.insert_at(container, index, id);
        Ok(())
    }

    /// Remove `id` from its parent's child list, returning where it was
    pub(crate) fn detach(&mut self, id: MenuNodeId) -> Option<(MenuNodeId, usize)> {
        let (parent, index) = self.locate(id)?;
        self.items[parent.index()].children.remove(index);
        self.items[id.index()].parent = None;
        Some((parent, index))
    }

    /// Insert a detached `id` into `container`, clamping `index` to an append
    pub(crate) fn insert_at(&mut self, container: MenuNodeId, index: usize, id: MenuNodeId) {
        let children = &mut self.items[container.index()].children;
        if index > children.len() {
            children.push(id);
        } else {
            children.insert(index, id);
        }
        self.items[id.index()].parent = Some(container);
    }
}
