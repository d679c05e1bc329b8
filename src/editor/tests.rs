//! Editor Tests
//!
//! Every edit is checked against both trees: the live menu (rendered in the
//! compact layout notation) and the presentation tree, which must keep
//! mirroring it node for node.

use menu_dragdrop::DropTarget;

use super::*;
use crate::domain::{MenuError, MenuNodeId, MenuTree};
use crate::order::{apply_order, encode, MenuOrder};
use crate::settings::{MemorySettingsStore, MenuSettings, SettingsStore};
use crate::test_support::{build_menu, id_of, render, BrokenStore};

type Editor<'a> = MenuEditor<'a, MemorySettingsStore>;

fn settings() -> MenuSettings<MemorySettingsStore> {
    MenuSettings::new(MemorySettingsStore::new())
}

fn node(editor: &Editor<'_>, name: &str) -> EditorNodeId {
    editor.node_for_item(id_of(editor.menu(), name)).unwrap()
}

fn assert_mirrored<S: SettingsStore>(editor: &MenuEditor<'_, S>) {
    fn walk(menu: &MenuTree, tree: &PresentationTree, tag: MenuNodeId, nodes: &[EditorNodeId]) {
        let live = menu.children(tag);
        assert_eq!(nodes.len(), live.len(), "child count differs under {}", tag);
        for (&node, &child) in nodes.iter().zip(live) {
            let node = tree.get(node).unwrap();
            assert_eq!(node.tag, child);
            walk(menu, tree, child, node.children());
        }
    }
    let menu = editor.menu();
    walk(menu, editor.tree(), menu.root(), editor.tree().roots());
}

#[test]
fn test_open_selects_first_and_expands() {
    let mut menu = build_menu("File[Open,Exit],Edit");
    let mut settings = settings();
    let editor = MenuEditor::open(&mut menu, &mut settings).unwrap();

    let file = node(&editor, "File");
    assert_eq!(editor.selected(), Some(file));
    assert!(editor.tree().get(file).unwrap().expanded);
    assert!(!editor.tree().get(node(&editor, "Edit")).unwrap().expanded);
    assert_eq!(editor.tree().visible_rows().len(), 4);
    assert_mirrored(&editor);
}

#[test]
fn test_move_every_pair_in_five_item_list() {
    let names = ["A", "B", "C", "D", "E"];
    for from in 0..names.len() {
        for to in 0..=names.len() {
            let mut menu = build_menu("A,B,C,D,E");
            let mut settings = settings();
            let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();

            let moved = editor.tree().roots()[from];
            editor.move_node(moved, None, to).unwrap();

            let mut expected: Vec<&str> = names.to_vec();
            let item = expected.remove(from);
            expected.insert(if to > from { to - 1 } else { to }, item);

            assert_eq!(render(editor.menu()), expected.join(","), "move {} -> {}", from, to);
            assert_eq!(editor.tree().index_of(moved), expected.iter().position(|&n| n == item));
            assert_eq!(editor.selected(), Some(moved));
            assert_mirrored(&editor);
        }
    }
}

#[test]
fn test_move_up_and_down() {
    let mut menu = build_menu("A,B,C");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let a = node(&editor, "A");
    let b = node(&editor, "B");
    let c = node(&editor, "C");

    assert!(editor.move_down(a).unwrap());
    assert_eq!(render(editor.menu()), "B,A,C");
    assert!(editor.move_up(c).unwrap());
    assert_eq!(render(editor.menu()), "B,C,A");

    assert!(!editor.move_up(b).unwrap());
    assert!(!editor.move_down(a).unwrap());
    assert_eq!(render(editor.menu()), "B,C,A");
    assert_mirrored(&editor);
}

#[test]
fn test_indent_then_outdent_restores_position() {
    for name in ["B", "C", "D"] {
        let mut menu = build_menu("A,B,C,D");
        let mut settings = settings();
        let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
        let moved = node(&editor, name);

        assert!(editor.indent(moved).unwrap());
        assert_mirrored(&editor);
        assert!(editor.outdent(moved).unwrap());
        assert_eq!(render(editor.menu()), "A,B,C,D", "indent/outdent {}", name);
        assert_mirrored(&editor);
    }
}

#[test]
fn test_indent_then_outdent_inside_dropdown() {
    for name in ["C", "D"] {
        let mut menu = build_menu("A[B,C,D],E");
        let mut settings = settings();
        let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
        let moved = node(&editor, name);
        let a = node(&editor, "A");

        assert!(editor.indent(moved).unwrap());
        assert_ne!(editor.tree().get(moved).unwrap().parent(), Some(a));
        assert!(editor.outdent(moved).unwrap());
        assert_eq!(render(editor.menu()), "A[B,C,D],E", "indent/outdent {}", name);
        assert_eq!(editor.tree().get(moved).unwrap().parent(), Some(a));
        assert_mirrored(&editor);
    }
}

#[test]
fn test_indent_appends_to_previous_sibling() {
    let mut menu = build_menu("A[X],B,C");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let a = node(&editor, "A");
    let b = node(&editor, "B");
    let c = node(&editor, "C");

    assert!(!editor.indent(a).unwrap());
    assert!(editor.indent(b).unwrap());
    assert_eq!(render(editor.menu()), "A[X,B],C");

    // C's previous sibling is now A
    assert!(editor.indent(c).unwrap());
    assert_eq!(render(editor.menu()), "A[X,B,C]");
    assert!(editor.tree().get(a).unwrap().expanded);
    assert_mirrored(&editor);
}

#[test]
fn test_outdent_nested_and_top_level() {
    let mut menu = build_menu("A[B[C]],D");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let c = node(&editor, "C");
    let d = node(&editor, "D");

    assert!(editor.outdent(c).unwrap());
    assert_eq!(render(editor.menu()), "A[B,C],D");
    assert!(editor.outdent(c).unwrap());
    assert_eq!(render(editor.menu()), "A[B],C,D");
    assert!(!editor.outdent(d).unwrap());
    assert_mirrored(&editor);
}

#[test]
fn test_move_into_non_container_rejected() {
    let mut menu = build_menu("A,-,B,$Go");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let b = node(&editor, "B");
    let a = node(&editor, "A");
    let go = editor.tree().roots()[3];

    // Previous sibling of B is the separator
    assert!(matches!(editor.indent(b), Err(MenuError::InvalidTarget(_))));
    assert!(matches!(
        editor.apply_drop(a, DropTarget::Item(go)),
        Err(MenuError::InvalidTarget(_))
    ));
    assert_eq!(render(editor.menu()), "A,-,B,$Go");
    assert_mirrored(&editor);
    assert_eq!(editor.settings().custom_menu_order().unwrap(), None);
}

#[test]
fn test_descendant_drop_rejected() {
    let mut menu = build_menu("A[B[C]],D");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let a = node(&editor, "A");
    let b = node(&editor, "B");
    let c = node(&editor, "C");

    for relative_y in [0, 15, 29] {
        assert_eq!(editor.drop_node(a, c, relative_y, 30), Err(MenuError::DescendantDrop));
    }
    assert_eq!(editor.apply_drop(a, DropTarget::Item(b)), Err(MenuError::DescendantDrop));
    assert_eq!(
        editor.apply_drop(a, DropTarget::Zone(Some(b), 0)),
        Err(MenuError::DescendantDrop)
    );
    assert_eq!(editor.drop_node(a, a, 15, 30), Ok(false));

    assert_eq!(render(editor.menu()), "A[B[C]],D");
    assert_mirrored(&editor);
}

#[test]
fn test_drop_uses_row_thirds() {
    let mut menu = build_menu("A,B,C");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let a = node(&editor, "A");
    let b = node(&editor, "B");
    let c = node(&editor, "C");

    // Top third of A: before A
    assert!(editor.drop_node(c, a, 5, 30).unwrap());
    assert_eq!(render(editor.menu()), "C,A,B");

    // Bottom third of B: after B
    assert!(editor.drop_node(c, b, 25, 30).unwrap());
    assert_eq!(render(editor.menu()), "A,B,C");

    // Middle of A: last child of A
    assert!(editor.drop_node(c, a, 15, 30).unwrap());
    assert_eq!(render(editor.menu()), "A[C],B");
    assert!(editor.tree().get(a).unwrap().expanded);
    assert_mirrored(&editor);
}

#[test]
fn test_drag_session() {
    let mut menu = build_menu("A,B,C");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let a = node(&editor, "A");
    let c = node(&editor, "C");

    // A click is not a drag
    editor.drag_mut().on_mousedown(c, 10, 10);
    assert!(!editor.finish_drag().unwrap());

    editor.drag_mut().on_mousedown(c, 10, 10);
    assert!(editor.drag_mut().on_mousemove(10, 40));
    editor.drag_mut().on_row_hover(a, None, 0, 2, 30);
    assert!(editor.finish_drag().unwrap());
    assert_eq!(render(editor.menu()), "C,A,B");
    assert_eq!(editor.drag().dragging(), None);
    assert_mirrored(&editor);
}

#[test]
fn test_toggle_visible_persists_hidden_set() {
    let mut menu = build_menu("File[Open,-,Exit]");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let exit = node(&editor, "Exit");

    assert!(editor.toggle_visible(exit, false).unwrap());
    assert!(!editor.menu().get(id_of(editor.menu(), "Exit")).unwrap().is_visible());
    assert!(!editor.tree().get(exit).unwrap().checked);
    assert!(editor.settings().hidden_items().unwrap().contains("Exit"));
    assert!(editor.reset_enabled().unwrap());

    assert!(editor.toggle_visible(exit, true).unwrap());
    assert!(editor.menu().get(id_of(editor.menu(), "Exit")).unwrap().is_visible());
    assert!(editor.settings().hidden_items().unwrap().is_empty());
    assert!(!editor.reset_enabled().unwrap());

    // Separators have nothing to persist
    let file = node(&editor, "File");
    let separator = editor.tree().get(file).unwrap().children()[1];
    assert!(!editor.toggle_visible(separator, false).unwrap());
    let separator_tag = editor.tree().get(separator).unwrap().tag;
    assert!(editor.menu().get(separator_tag).unwrap().is_visible());
}

#[test]
fn test_move_persists_order() {
    let mut menu = build_menu("File[Open,Exit],Edit[Cut]");
    let mut settings = settings();
    {
        let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
        let exit = node(&editor, "Exit");
        let edit = node(&editor, "Edit");
        editor.move_node(exit, Some(edit), 0).unwrap();
        assert_eq!(
            editor.settings().custom_menu_order().unwrap(),
            Some(encode(editor.menu()))
        );
    }

    // A fresh menu restored from the saved order ends up the same
    let saved = settings.custom_menu_order().unwrap().unwrap();
    let mut fresh = build_menu("File[Open,Exit],Edit[Cut]");
    apply_order(&MenuOrder::parse(&saved), &mut fresh);
    assert_eq!(render(&fresh), render(&menu));
    assert_eq!(render(&menu), "File[Open],Edit[Exit,Cut]");
}

#[test]
fn test_reset_clears_settings_only() {
    let mut menu = build_menu("A,B");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let b = node(&editor, "B");

    editor.move_up(b).unwrap();
    editor.toggle_visible(b, false).unwrap();
    assert!(editor.reset_enabled().unwrap());

    editor.reset().unwrap();
    assert!(!editor.reset_enabled().unwrap());
    assert!(editor.hidden_items().is_empty());
    assert_eq!(editor.settings().custom_menu_order().unwrap(), None);
    assert_eq!(render(editor.menu()), "B,A");
}

#[test]
fn test_available_actions() {
    let mut menu = build_menu("A[X],B,C");
    let mut settings = settings();
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();

    let b = node(&editor, "B");
    editor.select(b).unwrap();
    assert_eq!(
        editor.available_actions(),
        EditorActions { move_up: true, move_down: true, indent: true, outdent: false }
    );

    let x = node(&editor, "X");
    editor.select(x).unwrap();
    assert_eq!(
        editor.available_actions(),
        EditorActions { move_up: false, move_down: false, indent: false, outdent: true }
    );
}

#[test]
fn test_open_with_saved_hidden_items() {
    let mut menu = build_menu("A,B");
    let mut settings = settings();
    settings
        .set_hidden_items(Some(&std::collections::BTreeSet::from(["B".to_string()])))
        .unwrap();
    let editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    assert!(!editor.tree().get(node(&editor, "B")).unwrap().checked);
    assert!(editor.tree().get(node(&editor, "A")).unwrap().checked);
}

#[test]
fn test_move_kept_when_order_cannot_be_saved() {
    let mut menu = build_menu("A,B,C");
    let mut settings = MenuSettings::new(BrokenStore { readable: true });
    let mut editor = MenuEditor::open(&mut menu, &mut settings).unwrap();
    let c = editor.node_for_item(id_of(editor.menu(), "C")).unwrap();

    assert!(matches!(editor.move_node(c, None, 0), Err(MenuError::Storage(_))));
    assert_eq!(render(editor.menu()), "C,A,B");
    assert_eq!(editor.tree().index_of(c), Some(0));
    assert_mirrored(&editor);
}
