//! Menu selection and toggle model.
//!
//! `SelectionController` mediates between the read-only [`Catalog`] and the
//! [`Store`]. It owns the transient navigation state of both menu layouts
//! (which category is open on mobile, which sections are expanded on desktop)
//! while persistent choices live in the store.

use crate::catalog::{Catalog, IconId, Item};
use crate::store::Store;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    catalog: Catalog,
    active_category: Option<&'static str>,
    show_submenu: bool,
    expanded: BTreeSet<&'static str>,
}

impl SelectionController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            active_category: None,
            show_submenu: false,
            expanded: BTreeSet::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Ensure a visited category has a well-defined active item.
    ///
    /// With no valid stored selection, the first item wins and its side
    /// effects are applied. A toggleable first item is never toggled here.
    /// Calling this again is a no-op.
    pub fn on_category_open(&self, store: &mut Store, category_id: &str) {
        let items = self.catalog.items(category_id);
        let Some(first) = items.first() else {
            return;
        };
        if self.active_item(store, category_id).is_some() {
            return;
        }
        if first.is_toggleable() {
            return;
        }
        if let Some(stale) = store.get_selected_item(category_id) {
            log::debug!(
                "[menu] stored selection {:?} missing from {}, using first item",
                stale,
                category_id
            );
        }
        self.select(store, category_id, first);
    }

    /// Apply a click on a submenu item.
    pub fn on_item_activate(&self, store: &mut Store, category_id: &str, item: &Item) {
        if let Some(key) = item.setting_key {
            let value = store.toggle_setting(key);
            log::info!("[menu] {} = {}", key, value);
            return;
        }
        if self.catalog.item(category_id, item.label).is_none() {
            log::warn!(
                "[menu] ignoring {:?}: not an item of {}",
                item.label,
                category_id
            );
            return;
        }
        self.select(store, category_id, item);
    }

    /// Icon of the selected item, or the category's own icon when nothing
    /// (or nothing that still exists) is selected.
    pub fn icon_for(&self, store: &Store, category_id: &str) -> Option<IconId> {
        let category = self.catalog.category(category_id)?;
        let selected = store
            .get_selected_item(category_id)
            .and_then(|label| self.catalog.item(category_id, label));
        Some(selected.map_or(category.icon, |item| item.icon))
    }

    /// The stored selection for a category, if it still names a catalog item.
    pub fn active_item(&self, store: &Store, category_id: &str) -> Option<&'static Item> {
        store
            .get_selected_item(category_id)
            .and_then(|label| self.catalog.item(category_id, label))
    }

    /// Whether an item renders as active/toggled in either layout.
    pub fn is_item_on(&self, store: &Store, category_id: &str, item: &Item) -> bool {
        match item.setting_key {
            Some(key) => store.get_toggle_state(key),
            None => store.get_selected_item(category_id) == Some(item.label),
        }
    }

    /// Label/value pairs for the on-screen status panel: the cube colour,
    /// then every toggleable item in catalog order as `ON`/`OFF`.
    pub fn status_readout(&self, store: &Store) -> Vec<(&'static str, String)> {
        let toggles = self
            .catalog
            .categories()
            .iter()
            .flat_map(|c| c.items.iter())
            .filter_map(|item| {
                let key = item.setting_key?;
                let state = if store.get_toggle_state(key) { "ON" } else { "OFF" };
                Some((item.label, state.to_string()))
            });
        std::iter::once(("Cube Color", store.cube_color().to_string()))
            .chain(toggles)
            .collect()
    }

    // ---------------- Mobile navigation ----------------

    /// Tap on a category in the bottom strip.
    ///
    /// Tapping the open category collapses everything; any other tap opens
    /// that category and shows its submenu when it has items.
    pub fn on_main_option_click(&mut self, store: &mut Store, category_id: &str) {
        let Some(category) = self.catalog.category(category_id) else {
            return;
        };
        if self.active_category == Some(category.id) && self.show_submenu {
            self.active_category = None;
            self.show_submenu = false;
            return;
        }
        self.active_category = Some(category.id);
        self.show_submenu = self.catalog.has_submenu(category.id);
        self.on_category_open(store, category.id);
    }

    pub fn active_category(&self) -> Option<&'static str> {
        self.active_category
    }

    pub fn submenu_visible(&self) -> bool {
        self.show_submenu
    }

    /// Items of the open category, empty when nothing is open.
    pub fn open_items(&self) -> &'static [Item] {
        self.active_category
            .map(|id| self.catalog.items(id))
            .unwrap_or(&[])
    }

    // ---------------- Desktop accordion ----------------

    /// Expand or collapse a desktop menu section. Returns the new state.
    pub fn toggle_expanded(&mut self, category_id: &str) -> bool {
        let Some(category) = self.catalog.category(category_id) else {
            return false;
        };
        if category.items.is_empty() {
            return false;
        }
        if !self.expanded.remove(category.id) {
            self.expanded.insert(category.id);
            return true;
        }
        false
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded.contains(category_id)
    }

    fn select(&self, store: &mut Store, category_id: &str, item: &Item) {
        store.set_selected_item(category_id, Some(item.label));
        if let Some(hex) = item.color_value {
            store.set_cube_color(hex);
        }
        if let Some(preset) = item.environment_preset {
            store.set_environment_preset(preset);
        }
    }
}
