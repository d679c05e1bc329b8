//! Saving and restoring the arrangement through [`MenuSettings`].

use crate::domain::{MenuResult, MenuTree};
use crate::settings::{MenuSettings, SettingsStore};

use super::codec::{encode, MenuOrder};
use super::reconcile::{apply_order, ReconcileStats};
use super::visibility::apply_hidden_items;

/// Save current menu order to settings
pub fn save_menu_order<S: SettingsStore>(
    menu: &MenuTree,
    settings: &mut MenuSettings<S>,
) -> MenuResult<()> {
    settings.set_custom_menu_order(Some(&encode(menu)))
}

/// Restore menu order from settings; None when no custom order is saved
pub fn restore_menu_order<S: SettingsStore>(
    menu: &mut MenuTree,
    settings: &MenuSettings<S>,
) -> MenuResult<Option<ReconcileStats>> {
    let Some(saved) = settings.custom_menu_order()? else {
        return Ok(None);
    };
    let stats = apply_order(&MenuOrder::parse(&saved), menu);
    log::info!(
        "Restored menu order: {} matched, {} moved, {} skipped",
        stats.accepted,
        stats.moved,
        stats.skipped
    );
    Ok(Some(stats))
}

/// Restore hidden items from settings; returns how many were hidden
pub fn restore_hidden_items<S: SettingsStore>(
    menu: &mut MenuTree,
    settings: &MenuSettings<S>,
) -> MenuResult<usize> {
    let hidden = settings.hidden_items()?;
    let count = apply_hidden_items(&hidden, menu);
    if count > 0 {
        log::info!("Hid {} menu items", count);
    }
    Ok(count)
}
