//! Persisted UI state store.
//!
//! One `Store` holds the selections, toggles and active appearance for the
//! whole shell. All writes go through [`Store::set`], which applies the change,
//! notifies observers in order and rewrites the durable snapshot wholesale.
//! Persistence is best-effort: backend failures are logged and swallowed, and
//! the in-memory state stays authoritative for the session.

use crate::constants::STORAGE_KEY;
use crate::storage::{SnapshotStorage, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The serializable subset of the store.
///
/// Every field is required when decoding; a record with missing or mistyped
/// fields is discarded as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub selected_items: BTreeMap<String, Option<String>>,
    pub toggle_states: BTreeMap<String, bool>,
    pub cube_color: String,
    pub environment_preset: String,
}

impl Snapshot {
    /// Declared defaults matching the standard catalog.
    pub fn standard() -> Self {
        let selected_items = [
            ("shapes", "Cube"),
            ("colors", "Cyan"),
            ("lighting", "Studio"),
            ("option4", "Target"),
            ("option5", "Zap"),
        ]
        .into_iter()
        .map(|(c, l)| (c.to_string(), Some(l.to_string())))
        .collect();
        let toggle_states = [("auto-rotate", true), ("show-grid", false), ("debug-mode", false)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Self {
            selected_items,
            toggle_states,
            cube_color: "#64ffda".to_string(),
            environment_preset: "studio".to_string(),
        }
    }

    /// Defaults with no selections and no declared toggles.
    pub fn empty(cube_color: &str, environment_preset: &str) -> Self {
        Self {
            selected_items: BTreeMap::new(),
            toggle_states: BTreeMap::new(),
            cube_color: cube_color.to_string(),
            environment_preset: environment_preset.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::standard()
    }
}

/// A single applied change, as seen by observers.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    SelectedItem {
        category: String,
        label: Option<String>,
    },
    Toggle {
        key: String,
        value: bool,
    },
    CubeColor(String),
    EnvironmentPreset(String),
}

/// Changes collected by an observer while the store is still borrowed, so
/// they can be delivered after the mutating call has returned.
///
/// Repeated toggles of one key keep only the latest value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingChanges {
    appearance: bool,
    toggles: Vec<(String, bool)>,
}

impl PendingChanges {
    pub fn record(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::CubeColor(_) | Mutation::EnvironmentPreset(_) => self.appearance = true,
            Mutation::Toggle { key, value } => {
                match self.toggles.iter_mut().find(|(k, _)| k == key) {
                    Some(entry) => entry.1 = *value,
                    None => self.toggles.push((key.clone(), *value)),
                }
            }
            Mutation::SelectedItem { .. } => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.appearance && self.toggles.is_empty()
    }

    /// Cube colour or environment preset changed.
    pub fn appearance_changed(&self) -> bool {
        self.appearance
    }

    pub fn toggles(&self) -> &[(String, bool)] {
        &self.toggles
    }

    /// Hand over everything collected so far and start empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Mutation, &Snapshot)>;

pub struct Store {
    state: Snapshot,
    storage: Box<dyn SnapshotStorage>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl Store {
    /// Rehydrate from `storage`, falling back to `defaults` when the record is
    /// absent, unreadable or malformed.
    pub fn open(storage: Box<dyn SnapshotStorage>, defaults: Snapshot) -> Self {
        let state = match storage.load(STORAGE_KEY) {
            Ok(Some(raw)) => match Snapshot::from_json(&raw) {
                Ok(snapshot) => {
                    log::info!("[store] restored snapshot from storage");
                    snapshot
                }
                Err(e) => {
                    log::warn!("[store] discarding malformed snapshot: {}", e);
                    defaults
                }
            },
            Ok(None) => defaults,
            Err(e) => {
                log::warn!("[store] storage read failed, using defaults: {}", e);
                defaults
            }
        };
        Self {
            state,
            storage,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// Apply one mutation, notify observers, then persist.
    pub fn set(&mut self, mutation: Mutation) {
        match &mutation {
            Mutation::SelectedItem { category, label } => {
                self.state
                    .selected_items
                    .insert(category.clone(), label.clone());
            }
            Mutation::Toggle { key, value } => {
                self.state.toggle_states.insert(key.clone(), *value);
            }
            Mutation::CubeColor(hex) => self.state.cube_color = hex.clone(),
            Mutation::EnvironmentPreset(name) => self.state.environment_preset = name.clone(),
        }
        for (_, observer) in self.observers.iter_mut() {
            observer(&mutation, &self.state);
        }
        self.persist();
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Mutation, &Snapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    pub fn set_selected_item(&mut self, category: &str, label: Option<&str>) {
        self.set(Mutation::SelectedItem {
            category: category.to_string(),
            label: label.map(str::to_string),
        });
    }

    pub fn get_selected_item(&self, category: &str) -> Option<&str> {
        self.state
            .selected_items
            .get(category)
            .and_then(|l| l.as_deref())
    }

    /// Flip a setting. Unknown keys read as `false`, so their first toggle
    /// yields `true`. Returns the new value.
    pub fn toggle_setting(&mut self, key: &str) -> bool {
        let value = !self.get_toggle_state(key);
        self.set(Mutation::Toggle {
            key: key.to_string(),
            value,
        });
        value
    }

    pub fn get_toggle_state(&self, key: &str) -> bool {
        self.state.toggle_states.get(key).copied().unwrap_or(false)
    }

    pub fn set_cube_color(&mut self, hex: &str) {
        self.set(Mutation::CubeColor(hex.to_string()));
    }

    pub fn cube_color(&self) -> &str {
        &self.state.cube_color
    }

    pub fn set_environment_preset(&mut self, name: &str) {
        self.set(Mutation::EnvironmentPreset(name.to_string()));
    }

    pub fn environment_preset(&self) -> &str {
        &self.state.environment_preset
    }

    fn persist(&mut self) {
        let result = self
            .state
            .to_json()
            .and_then(|raw| self.storage.save(STORAGE_KEY, &raw));
        if let Err(e) = result {
            log::warn!("[store] snapshot not persisted: {}", e);
        }
    }
}
