//! Compact menu layouts for tests.
//!
//! `"File[Open,-,Exit],$Go"` builds a `File` drop-down holding `Open`, a
//! separator and `Exit`, followed by a top-level button with text `Go`.
//! [`render`] prints a tree back in the same notation.

use crate::domain::{MenuError, MenuItemKind, MenuItemSpec, MenuNodeId, MenuResult, MenuTree};
use crate::settings::SettingsStore;

pub(crate) fn build_menu(layout: &str) -> MenuTree {
    let mut menu = MenuTree::new();
    let mut parents = vec![menu.root()];
    let mut last: Option<MenuNodeId> = None;
    let mut name = String::new();

    for ch in layout.chars().chain(std::iter::once(',')) {
        match ch {
            ',' | '[' | ']' => {
                if !name.is_empty() {
                    let parent = *parents.last().unwrap();
                    last = Some(menu.add(parent, spec_for(&name)).unwrap());
                    name.clear();
                }
                match ch {
                    '[' => parents.push(last.unwrap()),
                    ']' => {
                        parents.pop();
                    }
                    _ => {}
                }
            }
            c if c.is_whitespace() => {}
            c => name.push(c),
        }
    }
    menu
}

fn spec_for(name: &str) -> MenuItemSpec {
    if name == "-" {
        MenuItemSpec::separator()
    } else if let Some(text) = name.strip_prefix('$') {
        MenuItemSpec::control(MenuItemKind::Button, text)
    } else {
        MenuItemSpec::command(name).text(name)
    }
}

pub(crate) fn render(menu: &MenuTree) -> String {
    fn write(menu: &MenuTree, parent: MenuNodeId, out: &mut String) {
        for (i, &child) in menu.children(parent).iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let item = menu.get(child).unwrap();
            match item.kind {
                MenuItemKind::Separator => out.push('-'),
                MenuItemKind::Button => {
                    out.push('$');
                    out.push_str(item.order_identifier());
                }
                _ => out.push_str(item.order_identifier()),
            }
            if !item.children().is_empty() {
                out.push('[');
                write(menu, child, out);
                out.push(']');
            }
        }
    }

    let mut out = String::new();
    write(menu, menu.root(), &mut out);
    out
}

/// Id of the first item (pre-order) named `name`
pub(crate) fn id_of(menu: &MenuTree, name: &str) -> MenuNodeId {
    menu.find_by_identifier(name)
        .unwrap_or_else(|| panic!("no item named {}", name))
}

/// Settings backend that rejects writes, and reads too unless `readable`
pub(crate) struct BrokenStore {
    pub(crate) readable: bool,
}

impl SettingsStore for BrokenStore {
    fn load(&self, _key: &str) -> MenuResult<Option<String>> {
        if self.readable {
            Ok(None)
        } else {
            Err(MenuError::Storage("database is locked".to_string()))
        }
    }

    fn save(&mut self, _key: &str, _value: Option<&str>) -> MenuResult<()> {
        Err(MenuError::Storage("database is locked".to_string()))
    }
}

#[test]
fn test_layout_round_trip() {
    let layout = "File[Open,-,Exit],Edit[Cut,Copy[Plain,Rich]],$Go";
    assert_eq!(render(&build_menu(layout)), layout);
}
