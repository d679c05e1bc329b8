//! Settings Layer
//!
//! The two persisted values of an arrangement: the custom menu order and the
//! set of hidden item identifiers.
//!
//! The hidden set is stored as a `", "`-joined list, e.g.
//! `"Edit.Cut, View.Toolbar"`. Only `%`, `,` and ASCII control characters
//! are percent-escaped, so the list always splits back into the same set
//! while non-ASCII names stay readable.

mod memory;
mod sqlite;
mod traits;


use std::collections::BTreeSet;

use percent_encoding::{percent_decode_str, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::domain::MenuResult;
use crate::order::escape_delimiters;

pub use memory::MemorySettingsStore;
pub use sqlite::SqliteSettingsStore;
pub use traits::SettingsStore;

pub const CUSTOM_MENU_ORDER_KEY: &str = "CustomMenuOrder";
pub const HIDDEN_MENU_ITEMS_KEY: &str = "HiddenMenuItems";

const HIDDEN_ESCAPES: &AsciiSet = &CONTROLS.add(b'%').add(b',');

/// Raw persisted values, exportable as JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub custom_menu_order: Option<String>,
    pub hidden_menu_items: Option<String>,
}

/// Typed access to the arrangement settings on top of a [`SettingsStore`]
pub struct MenuSettings<S: SettingsStore> {
    store: S,
}

impl<S: SettingsStore> MenuSettings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Saved order string; None when no custom order exists
    pub fn custom_menu_order(&self) -> MenuResult<Option<String>> {
        Ok(self
            .store
            .load(CUSTOM_MENU_ORDER_KEY)?
            .filter(|order| !order.is_empty()))
    }

    pub fn set_custom_menu_order(&mut self, order: Option<&str>) -> MenuResult<()> {
        let order = order.filter(|o| !o.is_empty());
        self.store.save(CUSTOM_MENU_ORDER_KEY, order)
    }

    pub fn hidden_items(&self) -> MenuResult<BTreeSet<String>> {
        Ok(self
            .store
            .load(HIDDEN_MENU_ITEMS_KEY)?
            .map(|value| parse_hidden_items(&value))
            .unwrap_or_default())
    }

    /// Persist the hidden set; `None` or an empty set clears it
    pub fn set_hidden_items(&mut self, hidden: Option<&BTreeSet<String>>) -> MenuResult<()> {
        let value = hidden
            .filter(|set| !set.is_empty())
            .map(format_hidden_items);
        self.store.save(HIDDEN_MENU_ITEMS_KEY, value.as_deref())
    }

    /// Whether there is anything for a reset to clear
    pub fn has_customizations(&self) -> MenuResult<bool> {
        Ok(self.custom_menu_order()?.is_some() || !self.hidden_items()?.is_empty())
    }

    pub fn snapshot(&self) -> MenuResult<SettingsSnapshot> {
        Ok(SettingsSnapshot {
            custom_menu_order: self.store.load(CUSTOM_MENU_ORDER_KEY)?,
            hidden_menu_items: self.store.load(HIDDEN_MENU_ITEMS_KEY)?,
        })
    }

    pub fn restore_snapshot(&mut self, snapshot: &SettingsSnapshot) -> MenuResult<()> {
        self.store
            .save(CUSTOM_MENU_ORDER_KEY, snapshot.custom_menu_order.as_deref())?;
        self.store
            .save(HIDDEN_MENU_ITEMS_KEY, snapshot.hidden_menu_items.as_deref())
    }

    pub fn export_json(&self) -> MenuResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot()?)?)
    }

    pub fn import_json(&mut self, json: &str) -> MenuResult<()> {
        let snapshot: SettingsSnapshot = serde_json::from_str(json)?;
        self.restore_snapshot(&snapshot)
    }
}

/// Split a persisted hidden list back into identifiers
pub fn parse_hidden_items(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .enumerate()
        .map(|(i, part)| if i > 0 { part.strip_prefix(' ').unwrap_or(part) } else { part })
        .filter(|part| !part.is_empty())
        .map(|part| percent_decode_str(part).decode_utf8_lossy().into_owned())
        .collect()
}

/// Join identifiers as `"a, b, c"`
pub fn format_hidden_items(hidden: &BTreeSet<String>) -> String {
    hidden
        .iter()
        .map(|identifier| escape_delimiters(identifier, HIDDEN_ESCAPES))
        .collect::<Vec<_>>()
        .join(", ")
}
