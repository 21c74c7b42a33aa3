//! Markup for the mobile strips and the desktop accordion, regenerated from
//! the catalog and store after every menu interaction.

use crate::constants::{
    CATEGORY_STRIP_ID, DATA_CATEGORY, DATA_ITEM, DESKTOP_MENU_ID, ITEM_STRIP_ID,
    STATUS_READOUT_ID, SUBMENU_CONTAINER_ID,
};
use crate::dom;
use crate::markup::escape;
use viewer_core::{Category, Item, SelectionController, Store};

fn item_class(selection: &SelectionController, store: &Store, category: &str, item: &Item) -> &'static str {
    let on = selection.is_item_on(store, category, item);
    match (item.is_toggleable(), on) {
        (true, true) => "toggled",
        (true, false) => "untoggled",
        (false, true) => "active",
        (false, false) => "inactive",
    }
}

fn item_button(selection: &SelectionController, store: &Store, category: &str, item: &Item) -> String {
    let class = item_class(selection, store, category, item);
    let style = match item.color_value {
        Some(hex) if class == "active" => format!(" style='background-color: {}'", escape(hex)),
        _ => String::new(),
    };
    let swatch = match item.color_value {
        Some(hex) => format!("<span class='color-circle' style='background: {}'></span>", escape(hex)),
        None => format!("<i class='icon' data-icon='{}'></i>", escape(item.icon.0)),
    };
    format!(
        "<div class='submenu-item-wrapper'><div class='submenu-label'>{label}</div>\
         <button class='submenu-item {class}' {DATA_CATEGORY}='{category}' {DATA_ITEM}='{label}'{style}>{swatch}</button></div>",
        label = escape(item.label),
        category = escape(category),
    )
}

fn category_button(selection: &SelectionController, store: &Store, category: &Category) -> String {
    let active = selection.active_category() == Some(category.id);
    let icon = selection
        .icon_for(store, category.id)
        .unwrap_or(category.icon);
    format!(
        "<button class='nav-item {state}' {DATA_CATEGORY}='{id}'>\
         <i class='nav-icon' data-icon='{icon}'></i><span class='nav-label'>{label}</span>{indicator}</button>",
        state = if active { "active" } else { "inactive" },
        id = escape(category.id),
        icon = escape(icon.0),
        label = escape(category.label),
        indicator = if active { "<div class='active-indicator'></div>" } else { "" },
    )
}

pub fn render_mobile(selection: &SelectionController, store: &Store) {
    if let Some(strip) = dom::element_by_id(CATEGORY_STRIP_ID) {
        let html: String = selection
            .catalog()
            .categories()
            .iter()
            .map(|c| category_button(selection, store, c))
            .collect();
        strip.set_inner_html(&html);
    }
    if let Some(container) = dom::element_by_id(SUBMENU_CONTAINER_ID) {
        let visible = selection.submenu_visible() && !selection.open_items().is_empty();
        if visible {
            _ = container.remove_attribute("hidden");
        } else {
            _ = container.set_attribute("hidden", "");
        }
    }
    if let (Some(strip), Some(category)) =
        (dom::element_by_id(ITEM_STRIP_ID), selection.active_category())
    {
        let html: String = selection
            .open_items()
            .iter()
            .map(|i| item_button(selection, store, category, i))
            .collect();
        strip.set_inner_html(&html);
    }
}

pub fn render_desktop(selection: &SelectionController, store: &Store) {
    let Some(menu) = dom::element_by_id(DESKTOP_MENU_ID) else {
        return;
    };
    let mut html = String::new();
    for category in selection.catalog().categories() {
        let expanded = selection.is_expanded(category.id);
        let icon = selection
            .icon_for(store, category.id)
            .unwrap_or(category.icon);
        let selected = store
            .get_selected_item(category.id)
            .map(|l| format!("<span class='desktop-menu-button-selected'>• {}</span>", escape(l)))
            .unwrap_or_default();
        html.push_str(&format!(
            "<div class='desktop-menu-item'><button class='desktop-menu-button{exp}' {DATA_CATEGORY}='{id}'{disabled}>\
             <i class='desktop-menu-icon' data-icon='{icon}'></i><span>{label}</span>{selected}</button>",
            exp = if expanded { " expanded" } else { "" },
            id = escape(category.id),
            disabled = if category.items.is_empty() { " disabled" } else { "" },
            icon = escape(icon.0),
            label = escape(category.label),
        ));
        if expanded {
            html.push_str("<div class='desktop-submenu-grid'>");
            for item in category.items {
                html.push_str(&item_button(selection, store, category.id, item));
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    }
    menu.set_inner_html(&html);
}

/// Cube colour and toggle states, one line each.
pub fn render_status(selection: &SelectionController, store: &Store) {
    let Some(panel) = dom::element_by_id(STATUS_READOUT_ID) else {
        return;
    };
    let html: String = selection
        .status_readout(store)
        .into_iter()
        .map(|(label, value)| format!("<div>{}: {}</div>", escape(label), escape(&value)))
        .collect();
    panel.set_inner_html(&html);
}

pub fn render(selection: &SelectionController, store: &Store) {
    render_mobile(selection, store);
    render_desktop(selection, store);
    render_status(selection, store);
}
