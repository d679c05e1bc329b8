//! Host Lifecycle
//!
//! Ties the settings to a host's main menu: restore the saved arrangement
//! once the host has built its items, and hand out editors afterwards.

use serde::Serialize;

use crate::domain::{MenuError, MenuResult, MenuTree};
use crate::editor::MenuEditor;
use crate::order::{restore_hidden_items, restore_menu_order, ReconcileStats};
use crate::settings::{MenuSettings, SettingsStore};

/// Whatever owns the live main menu
pub trait MenuHost {
    /// None while the host has no main menu
    fn main_menu(&mut self) -> Option<&mut MenuTree>;
}

impl MenuHost for MenuTree {
    fn main_menu(&mut self) -> Option<&mut MenuTree> {
        Some(self)
    }
}

impl MenuHost for Option<MenuTree> {
    fn main_menu(&mut self) -> Option<&mut MenuTree> {
        self.as_mut()
    }
}

/// Result of the startup restore
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RestoreSummary {
    /// None when no custom order was saved
    pub order: Option<ReconcileStats>,
    pub hidden: usize,
}

pub struct MenuArrangement<S: SettingsStore> {
    settings: MenuSettings<S>,
    restored: bool,
}

impl<S: SettingsStore> MenuArrangement<S> {
    pub fn new(store: S) -> Self {
        Self {
            settings: MenuSettings::new(store),
            restored: false,
        }
    }

    pub fn settings(&self) -> &MenuSettings<S> {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut MenuSettings<S> {
        &mut self.settings
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Host finished building its menu items.
    ///
    /// Reapplies the saved order and then the hidden set on the first call
    /// only; later calls return `Ok(None)`. A host without a main menu fails
    /// with [`MenuError::MissingRoot`] and may notify again later.
    pub fn on_items_loaded<H: MenuHost + ?Sized>(
        &mut self,
        host: &mut H,
    ) -> MenuResult<Option<RestoreSummary>> {
        if self.restored {
            log::debug!("Menu arrangement already restored");
            return Ok(None);
        }
        let Some(menu) = host.main_menu() else {
            log::warn!("Cannot restore menu arrangement: no main menu");
            return Err(MenuError::MissingRoot);
        };

        let order = restore_menu_order(menu, &self.settings).inspect_err(|e| {
            log::error!("Failed to restore menu order: {}", e);
        })?;
        let hidden = restore_hidden_items(menu, &self.settings).inspect_err(|e| {
            log::error!("Failed to restore hidden menu items: {}", e);
        })?;
        self.restored = true;
        Ok(Some(RestoreSummary { order, hidden }))
    }

    /// Start an editing session on `menu`
    pub fn open_editor<'a>(&'a mut self, menu: &'a mut MenuTree) -> MenuResult<MenuEditor<'a, S>> {
        MenuEditor::open(menu, &mut self.settings)
    }
}
