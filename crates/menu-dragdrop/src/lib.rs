//! Menu DragDrop Utilities
//!
//! Drag-and-drop state for tree editors, independent of any UI toolkit.
//! Uses movement threshold to distinguish click from drag, and thirds of the
//! hovered row to choose between inserting before, after or inside it.

use serde::{Deserialize, Serialize};

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropTarget<Id> {
    /// Drop on an item (become its last child)
    Item(Id),
    /// Drop on a zone between items (parent, position); `None` is the top level
    Zone(Option<Id>, usize),
}

/// Where the pointer sits inside a hovered row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
    Inside,
}

impl DropPosition {
    /// Top third inserts before, bottom third inserts after, the middle nests.
    ///
    /// Integer thirds, so a row of height 30 nests for offsets 10..=20.
    pub fn from_offset(relative_y: i32, height: i32) -> Self {
        if relative_y < height / 3 {
            DropPosition::Before
        } else if relative_y > 2 * height / 3 {
            DropPosition::After
        } else {
            DropPosition::Inside
        }
    }
}

impl<Id: Copy> DropTarget<Id> {
    /// Resolve a hovered row into a drop target.
    ///
    /// `parent` and `index` locate the hovered row among its siblings.
    pub fn resolve(row: Id, parent: Option<Id>, index: usize, position: DropPosition) -> Self {
        match position {
            DropPosition::Before => DropTarget::Zone(parent, index),
            DropPosition::After => DropTarget::Zone(parent, index + 1),
            DropPosition::Inside => DropTarget::Item(row),
        }
    }
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// DnD state for one tree view
#[derive(Clone, Debug)]
pub struct DragState<Id> {
    dragging: Option<Id>,
    drop_target: Option<DropTarget<Id>>,
    /// Pending item id (mousedown but not yet dragging)
    pending: Option<Id>,
    /// Start position for movement detection
    start_x: i32,
    start_y: i32,
}

impl<Id> Default for DragState<Id> {
    fn default() -> Self {
        Self {
            dragging: None,
            drop_target: None,
            pending: None,
            start_x: 0,
            start_y: 0,
        }
    }
}

impl<Id: Copy + PartialEq + std::fmt::Debug> DragState<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item currently being dragged
    pub fn dragging(&self) -> Option<Id> {
        self.dragging
    }

    /// Target under the pointer while dragging
    pub fn drop_target(&self) -> Option<DropTarget<Id>> {
        self.drop_target
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some() && self.dragging.is_none()
    }

    /// Mouse button pressed on an item. Records pending drag with start position.
    pub fn on_mousedown(&mut self, item: Id, x: i32, y: i32) {
        self.pending = Some(item);
        self.start_x = x;
        self.start_y = y;
    }

    /// Starts dragging if moved enough. Returns true when the drag just started.
    pub fn on_mousemove(&mut self, x: i32, y: i32) -> bool {
        if self.pending.is_none() || self.dragging.is_some() {
            return false;
        }
        let dx = (x - self.start_x).abs();
        let dy = (y - self.start_y).abs();
        if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
            self.dragging = self.pending;
            log::debug!("[DND] drag started: {:?}", self.dragging);
            return true;
        }
        false
    }

    /// Pointer entered an item row (become child target)
    pub fn on_item_enter(&mut self, item: Id) {
        if let Some(dragging) = self.dragging {
            // Don't allow dropping on self
            if dragging != item {
                self.drop_target = Some(DropTarget::Item(item));
            }
        }
    }

    /// Pointer entered a zone between rows
    pub fn on_zone_enter(&mut self, parent: Option<Id>, position: usize) {
        if self.dragging.is_some() {
            self.drop_target = Some(DropTarget::Zone(parent, position));
        }
    }

    /// Pointer moved over a row; picks before/after/inside from the row geometry
    pub fn on_row_hover(
        &mut self,
        row: Id,
        parent: Option<Id>,
        index: usize,
        relative_y: i32,
        height: i32,
    ) {
        let Some(dragging) = self.dragging else {
            return;
        };
        if dragging == row {
            self.drop_target = None;
            return;
        }
        let position = DropPosition::from_offset(relative_y, height);
        self.drop_target = Some(DropTarget::resolve(row, parent, index, position));
    }

    pub fn on_leave(&mut self) {
        if self.dragging.is_some() {
            self.drop_target = None;
        }
    }

    /// Mouse button released.
    ///
    /// Returns `(dragged, target)` only when a drag was in progress over a
    /// target; a plain click yields `None`. State is reset either way.
    pub fn on_mouseup(&mut self) -> Option<(Id, DropTarget<Id>)> {
        let result = match (self.dragging, self.drop_target) {
            (Some(dragged), Some(target)) => Some((dragged, target)),
            _ => None,
        };
        self.end_drag();
        result
    }

    /// End drag operation
    pub fn end_drag(&mut self) {
        self.dragging = None;
        self.drop_target = None;
        self.pending = None;
    }
}
