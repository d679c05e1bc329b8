//! Visibility Reconciler
//!
//! Hides live items whose identifier is in the saved hidden set. This only
//! ever hides; showing an item again goes through the editor.

use std::collections::BTreeSet;

use crate::domain::MenuTree;
use crate::tree::children_first;

/// Hide every item listed in `hidden`, children before their parents.
///
/// Items without a name or text are never matched. Returns how many items
/// were hidden.
pub fn apply_hidden_items(hidden: &BTreeSet<String>, menu: &mut MenuTree) -> usize {
    if hidden.is_empty() {
        return 0;
    }

    let mut count = 0;
    for id in children_first(menu) {
        let matches = menu
            .get(id)
            .and_then(|item| item.identifier())
            .is_some_and(|identifier| hidden.contains(identifier));
        if matches && menu.set_visible(id, false).is_ok() {
            count += 1;
        }
    }
    count
}
