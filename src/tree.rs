//! Tree Utilities
//!
//! Helper functions for walking the live menu.

use crate::domain::{MenuNodeId, MenuTree};

/// Flatten the menu as (item, depth) pairs in document order.
///
/// Top-level menus have depth 0. Only drop-downs are descended into, so a
/// command without children is a leaf here.
pub fn flatten_tree(menu: &MenuTree) -> Vec<(MenuNodeId, usize)> {
    fn collect(
        menu: &MenuTree,
        parent: MenuNodeId,
        depth: usize,
        result: &mut Vec<(MenuNodeId, usize)>,
    ) {
        for &child in menu.children(parent) {
            result.push((child, depth));
            if menu.is_expandable(child) {
                collect(menu, child, depth + 1, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(menu, menu.root(), 0, &mut result);
    result
}

/// Drop-down items in post-order: every child before its parent.
pub fn children_first(menu: &MenuTree) -> Vec<MenuNodeId> {
    fn collect(menu: &MenuTree, parent: MenuNodeId, result: &mut Vec<MenuNodeId>) {
        for &child in menu.children(parent) {
            if menu.is_expandable(child) {
                collect(menu, child, result);
            }
            result.push(child);
        }
    }

    let mut result = Vec::new();
    collect(menu, menu.root(), &mut result);
    result
}
