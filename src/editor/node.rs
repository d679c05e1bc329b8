//! Presentation Tree
//!
//! The editor's own view of the menu: one node per live item, in the same
//! shape, each tagged with the [`MenuNodeId`] it stands for. Top-level menus
//! are the roots; there is no node for the main menu strip itself.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::{MenuError, MenuItemKind, MenuNodeId, MenuResult, MenuTree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EditorNodeId(pub(crate) u32);

impl EditorNodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for EditorNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// How a row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStyle {
    Normal,
    /// Gray rule line
    Separator,
    /// Highlighted embedded control
    Control,
}

impl NodeStyle {
    fn for_kind(kind: MenuItemKind) -> Self {
        if kind == MenuItemKind::Separator {
            NodeStyle::Separator
        } else if kind.is_control() {
            NodeStyle::Control
        } else {
            NodeStyle::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorNode {
    pub id: EditorNodeId,
    /// Live item this row stands for
    pub tag: MenuNodeId,
    pub label: String,
    pub style: NodeStyle,
    /// Visibility checkbox
    pub checked: bool,
    pub expanded: bool,
    pub(crate) parent: Option<EditorNodeId>,
    pub(crate) children: Vec<EditorNodeId>,
}

impl EditorNode {
    pub fn parent(&self) -> Option<EditorNodeId> {
        self.parent
    }

    pub fn children(&self) -> &[EditorNodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresentationTree {
    nodes: Vec<EditorNode>,
    roots: Vec<EditorNodeId>,
    by_tag: HashMap<MenuNodeId, EditorNodeId>,
}

impl PresentationTree {
    /// Mirror `menu`; items in `hidden` (or already invisible) start unchecked
    pub fn build(menu: &MenuTree, hidden: &BTreeSet<String>) -> Self {
        fn add(
            tree: &mut PresentationTree,
            menu: &MenuTree,
            hidden: &BTreeSet<String>,
            tag: MenuNodeId,
            parent: Option<EditorNodeId>,
        ) {
            let Some(item) = menu.get(tag) else {
                return;
            };
            let id = EditorNodeId(tree.nodes.len() as u32);
            let is_hidden = item.identifier().is_some_and(|i| hidden.contains(i));
            tree.nodes.push(EditorNode {
                id,
                tag,
                label: item.display_text(),
                style: NodeStyle::for_kind(item.kind),
                checked: item.is_visible() && !is_hidden,
                expanded: false,
                parent,
                children: Vec::new(),
            });
            tree.by_tag.insert(tag, id);
            match parent {
                Some(p) => tree.nodes[p.index()].children.push(id),
                None => tree.roots.push(id),
            }
            for &child in item.children() {
                add(tree, menu, hidden, child, Some(id));
            }
        }

        let mut tree = PresentationTree::default();
        for &child in menu.children(menu.root()) {
            add(&mut tree, menu, hidden, child, None);
        }
        tree
    }

    pub fn roots(&self) -> &[EditorNodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: EditorNodeId) -> Option<&EditorNode> {
        self.nodes.get(id.index())
    }

    pub fn node(&self, id: EditorNodeId) -> MenuResult<&EditorNode> {
        self.get(id).ok_or_else(|| MenuError::NotFound(format!("editor node {}", id)))
    }

    pub(crate) fn node_mut(&mut self, id: EditorNodeId) -> MenuResult<&mut EditorNode> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| MenuError::NotFound(format!("editor node {}", id)))
    }

    /// Node standing for a live item
    pub fn node_for(&self, tag: MenuNodeId) -> Option<EditorNodeId> {
        self.by_tag.get(&tag).copied()
    }

    /// Children of `parent`, or the roots for `None`
    pub fn children_of(&self, parent: Option<EditorNodeId>) -> &[EditorNodeId] {
        match parent {
            Some(p) => self.get(p).map(|node| node.children()).unwrap_or(&[]),
            None => &self.roots,
        }
    }

    /// Position of `id` among its siblings
    pub fn index_of(&self, id: EditorNodeId) -> Option<usize> {
        let parent = self.get(id)?.parent;
        self.children_of(parent).iter().position(|&c| c == id)
    }

    /// Whether `node` is `ancestor` or lies somewhere beneath it
    pub fn is_within(&self, node: EditorNodeId, ancestor: EditorNodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Nodes in display order with their depth, skipping collapsed subtrees
    pub fn visible_rows(&self) -> Vec<(EditorNodeId, usize)> {
        fn collect(
            tree: &PresentationTree,
            ids: &[EditorNodeId],
            depth: usize,
            result: &mut Vec<(EditorNodeId, usize)>,
        ) {
            for &id in ids {
                result.push((id, depth));
                if let Some(node) = tree.get(id) {
                    if node.expanded {
                        collect(tree, &node.children, depth + 1, result);
                    }
                }
            }
        }

        let mut result = Vec::new();
        collect(self, &self.roots, 0, &mut result);
        result
    }

    pub(crate) fn expand_all(&mut self) {
        for node in &mut self.nodes {
            node.expanded = !node.children.is_empty();
        }
    }

    /// Remove `id` from its sibling list, returning where it was
    pub(crate) fn detach(&mut self, id: EditorNodeId) -> Option<(Option<EditorNodeId>, usize)> {
        let parent = self.get(id)?.parent;
        let index = self.index_of(id)?;
        match parent {
            Some(p) => {
                self.nodes[p.index()].children.remove(index);
            }
            None => {
                self.roots.remove(index);
            }
        }
        self.nodes[id.index()].parent = None;
        Some((parent, index))
    }

    /// Insert a detached `id` under `parent`, clamping `index` to an append
    pub(crate) fn insert(&mut self, parent: Option<EditorNodeId>, index: usize, id: EditorNodeId) {
        let siblings = match parent {
            Some(p) => &mut self.nodes[p.index()].children,
            None => &mut self.roots,
        };
        if index > siblings.len() {
            siblings.push(id);
        } else {
            siblings.insert(index, id);
        }
        self.nodes[id.index()].parent = parent;
    }
}
