//! Menu keyboard focus helpers.

use wasm_bindgen::JsCast;

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(menu_id))
    else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]:not([disabled])"#) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

fn focused_index(items: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())?;
    items
        .iter()
        .position(|item| item.is_same_node(Some(active.as_ref())))
}

/// Focuses the first enabled item of a menu. Returns `false` when there is none.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    match menu_items(menu_id).first() {
        Some(first) => first.focus().is_ok(),
        None => false,
    }
}

/// Arrow/Home/End navigation between menu items. Returns whether the key was handled.
pub(super) fn handle_menu_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let items = menu_items(menu_id);
    if items.is_empty() {
        return false;
    }
    let last = items.len() - 1;
    let current = focused_index(&items);
    let next = match ev.key().as_str() {
        "ArrowDown" => current.map_or(0, |index| if index == last { 0 } else { index + 1 }),
        "ArrowUp" => current.map_or(last, |index| index.checked_sub(1).unwrap_or(last)),
        "Home" => 0,
        "End" => last,
        _ => return false,
    };

    ev.prevent_default();
    ev.stop_propagation();
    let _ = items[next].focus();
    true
}
