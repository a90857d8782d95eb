//! UI Preferences
//!
//! Small persisted settings shared across views. The browser keeps them in
//! `localStorage`; tests use [`MemoryPreferences`].

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const VIEW_MODE_KEY: &str = "goal-tracker.view-mode";

/// Key/value storage for preferences
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// How goal lists are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
    Board,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::List, ViewMode::Grid, ViewMode::Board];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Grid => "grid",
            ViewMode::Board => "board",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "list" => Some(ViewMode::List),
            "grid" => Some(ViewMode::Grid),
            "board" => Some(ViewMode::Board),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Grid => "Grid",
            ViewMode::Board => "Board",
        }
    }

    /// Read the stored mode, falling back to the default for missing or unknown values.
    pub fn hydrate(store: &impl PreferenceStore) -> Self {
        match store.load(VIEW_MODE_KEY) {
            Some(raw) => ViewMode::from_str(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unknown stored view mode");
                ViewMode::default()
            }),
            None => ViewMode::default(),
        }
    }

    pub fn persist(&self, store: &impl PreferenceStore) {
        store.save(VIEW_MODE_KEY, self.as_str());
    }
}

/// In-memory [`PreferenceStore`]
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydrate_defaults_then_reads_persisted_mode() {
        let store = MemoryPreferences::default();
        assert_eq!(ViewMode::hydrate(&store), ViewMode::List);

        ViewMode::Board.persist(&store);
        assert_eq!(ViewMode::hydrate(&store), ViewMode::Board);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let store = MemoryPreferences::default();
        store.save(VIEW_MODE_KEY, "carousel");
        assert_eq!(ViewMode::hydrate(&store), ViewMode::List);
    }
}
