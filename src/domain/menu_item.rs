//! Menu Item Entity
//!
//! Represents one entry of the live menu: a command (which may own a
//! drop-down of children), a separator, or an embedded control.

use serde::{Deserialize, Serialize};
use super::entity::MenuNodeId;

/// Identifier written for items that have neither a name nor a text
pub const SEPARATOR_IDENTIFIER: &str = "_separator_";

/// Item kind determines container capability and presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuItemKind {
    /// Regular menu command; can own a drop-down of children
    #[default]
    Command,
    Separator,
    Button,
    Label,
    ComboBox,
    TextBox,
}

impl MenuItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuItemKind::Command => "command",
            MenuItemKind::Separator => "separator",
            MenuItemKind::Button => "button",
            MenuItemKind::Label => "label",
            MenuItemKind::ComboBox => "combobox",
            MenuItemKind::TextBox => "textbox",
        }
    }

    /// Only commands own a child collection
    pub fn is_container(&self) -> bool {
        matches!(self, MenuItemKind::Command)
    }

    /// Embedded controls (buttons, labels, combo boxes, text boxes)
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            MenuItemKind::Button
                | MenuItemKind::Label
                | MenuItemKind::ComboBox
                | MenuItemKind::TextBox
        )
    }
}

/// What the host supplies when adding an item to the tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemSpec {
    pub name: Option<String>,
    pub text: Option<String>,
    pub kind: MenuItemKind,
    pub visible: bool,
}

impl MenuItemSpec {
    /// A command with a stable name
    pub fn command(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            text: None,
            kind: MenuItemKind::Command,
            visible: true,
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: MenuItemKind::Separator,
            visible: true,
            ..Default::default()
        }
    }

    pub fn control(kind: MenuItemKind, text: &str) -> Self {
        Self {
            name: None,
            text: Some(text.to_string()),
            kind,
            visible: true,
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// A live menu item inside the arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub(crate) id: MenuNodeId,
    /// Stable programmatic name
    pub name: Option<String>,
    /// Human-readable label
    pub text: Option<String>,
    pub kind: MenuItemKind,
    pub(crate) visible: bool,
    /// Parent item (None only for the main menu itself)
    pub(crate) parent: Option<MenuNodeId>,
    /// Ordered children; always empty for non-containers
    pub(crate) children: Vec<MenuNodeId>,
}

impl MenuItem {
    pub(crate) fn new(id: MenuNodeId, spec: MenuItemSpec, parent: Option<MenuNodeId>) -> Self {
        Self {
            id,
            name: spec.name,
            text: spec.text,
            kind: spec.kind,
            visible: spec.visible,
            parent,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> MenuNodeId {
        self.id
    }

    pub fn parent(&self) -> Option<MenuNodeId> {
        self.parent
    }

    pub fn children(&self) -> &[MenuNodeId] {
        &self.children
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// A container currently showing a drop-down (has at least one child)
    pub fn is_expandable(&self) -> bool {
        self.is_container() && !self.children.is_empty()
    }

    /// Name, falling back to text; None when both are empty.
    ///
    /// This is the key of the hidden-items set.
    pub fn identifier(&self) -> Option<&str> {
        non_empty(self.name.as_deref()).or_else(|| non_empty(self.text.as_deref()))
    }

    /// Identifier used in persisted orders; separators get a fixed sentinel
    pub fn order_identifier(&self) -> &str {
        self.identifier().unwrap_or(SEPARATOR_IDENTIFIER)
    }

    /// Label shown in the arrangement editor
    pub fn display_text(&self) -> String {
        let text = self.text.as_deref().unwrap_or_default();
        match self.kind {
            MenuItemKind::Separator => "─────────────".to_string(),
            MenuItemKind::Command if text.is_empty() => "[Empty Menu Item]".to_string(),
            MenuItemKind::Command => text.to_string(),
            MenuItemKind::Button => format!("[Button: {}]", text),
            MenuItemKind::Label => format!("[Label: {}]", text),
            MenuItemKind::ComboBox => format!("[ComboBox: {}]", text),
            MenuItemKind::TextBox => format!("[TextBox: {}]", text),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
