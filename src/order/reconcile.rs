//! Order Reconciler
//!
//! Reapplies a saved [`MenuOrder`] to a menu that may have gained or lost
//! items since the order was saved. Matching is by identifier; moves are by
//! identity, so every item stays in the tree exactly once.
//!
//! Per container the reconciler collects the matched items in token order
//! (recursing into drop-downs first), then places each one at its sequence
//! index. Items the order does not mention are not repositioned explicitly.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use super::codec::{MenuOrder, OrderToken};
use crate::domain::{MenuNodeId, MenuTree};
use crate::tree::flatten_tree;

/// What a reconciliation pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileStats {
    /// Tokens matched to a live item
    pub accepted: usize,
    /// Items detached and reinserted
    pub moved: usize,
    /// Tokens dropped: unknown identifier, orphaned child, or a placement
    /// that would nest a drop-down inside itself
    pub skipped: usize,
}

/// Apply `order` to `menu` in place
pub fn apply_order(order: &MenuOrder, menu: &mut MenuTree) -> ReconcileStats {
    OrderReconciler::new(menu).apply(order)
}

pub struct OrderReconciler<'a> {
    menu: &'a mut MenuTree,
    /// Identifier -> live items carrying it, in pre-order. Each accepted
    /// token consumes the front entry, so the k-th token for an identifier
    /// matches the k-th item with it.
    lookup: HashMap<String, VecDeque<MenuNodeId>>,
    stats: ReconcileStats,
}

impl<'a> OrderReconciler<'a> {
    pub fn new(menu: &'a mut MenuTree) -> Self {
        let mut lookup: HashMap<String, VecDeque<MenuNodeId>> = HashMap::new();
        for (id, _) in flatten_tree(menu) {
            if let Some(item) = menu.get(id) {
                lookup
                    .entry(item.order_identifier().to_string())
                    .or_default()
                    .push_back(id);
            }
        }
        Self {
            menu,
            lookup,
            stats: ReconcileStats::default(),
        }
    }

    pub fn apply(mut self, order: &MenuOrder) -> ReconcileStats {
        let root = self.menu.root();
        self.apply_level(root, order.tokens(), 0);
        log::debug!("Menu order applied: {:?}", self.stats);
        self.stats
    }

    fn take(&mut self, identifier: &str) -> Option<MenuNodeId> {
        self.lookup.get_mut(identifier).and_then(|queue| queue.pop_front())
    }

    /// Reconcile `tokens` into `container`, whose children sit at `level`
    fn apply_level(&mut self, container: MenuNodeId, tokens: &[OrderToken], level: usize) {
        let mut desired = Vec::new();
        let mut index = 0;

        while index < tokens.len() {
            let token = &tokens[index];
            if token.depth < level {
                break;
            }
            index += 1;

            if token.depth > level {
                // Child entry whose parent was not accepted
                log::debug!("Skipping orphaned order entry {}", token);
                self.stats.skipped += 1;
                continue;
            }

            let Some(item) = self.take(&token.identifier) else {
                log::debug!("Skipping order entry without a live item {}", token);
                self.stats.skipped += 1;
                continue;
            };
            self.stats.accepted += 1;
            desired.push(item);

            if self.menu.is_expandable(item) {
                let start = index;
                while index < tokens.len() && tokens[index].depth > level {
                    index += 1;
                }
                if index > start {
                    self.apply_level(item, &tokens[start..index], level + 1);
                }
            }
        }

        self.place(container, &desired);
    }

    /// Put `desired[i]` at index `i` of `container`, wherever it lives now
    fn place(&mut self, container: MenuNodeId, desired: &[MenuNodeId]) {
        for (target_index, &item) in desired.iter().enumerate() {
            let Some((parent, current_index)) = self.menu.locate(item) else {
                continue;
            };
            if parent == container && current_index == target_index {
                continue;
            }
            if self.menu.is_same_or_ancestor(item, container) {
                log::debug!("Not moving {} into its own subtree", item);
                self.stats.skipped += 1;
                continue;
            }
            self.menu.detach(item);
            self.menu.insert_at(container, target_index, item);
            self.stats.moved += 1;
        }
    }
}
