use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::warn;

use super::cell::StateCell;
use crate::domain::contract::Domain;
use crate::infrastructure::storage::LocalStore;

pub const PREFERENCES_KEY: &str = "nf-preferences";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub default_domain: Domain,
    pub default_model_provider: String,
    pub auto_refresh_enabled: bool,
    pub refresh_interval_ms: u64,
    pub max_rows_per_table: u32,
    pub compact_mode: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_domain: Domain::Literary,
            default_model_provider: "ollama".to_string(),
            auto_refresh_enabled: true,
            refresh_interval_ms: 5000,
            max_rows_per_table: 50,
            compact_mode: false,
        }
    }
}

/// Partial preference update; absent fields are left as they are
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_domain: Option<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_refresh_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rows_per_table: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_mode: Option<bool>,
}

/// Persisted user-tunable defaults.
///
/// A corrupt persisted blob is logged and discarded so startup always
/// lands on the documented defaults.
pub struct PreferencesStore<L> {
    cell: StateCell<UserPreferences>,
    storage: L,
}

impl<L: LocalStore> PreferencesStore<L> {
    pub fn new(storage: L) -> Self {
        Self {
            cell: StateCell::new(UserPreferences::default()),
            storage,
        }
    }

    pub fn load(&self) {
        let Some(stored) = self.storage.get(PREFERENCES_KEY) else {
            return;
        };

        match serde_json::from_str(&stored) {
            Ok(preferences) => self.cell.set(preferences),
            Err(e) => warn!(error = %e, "Failed to load preferences, keeping defaults"),
        }
    }

    /// Merge a partial update into the current state and re-persist the
    /// merged whole
    pub fn save(&self, patch: PreferencesPatch) {
        self.cell.update(|prefs| {
            if let Some(domain) = patch.default_domain {
                prefs.default_domain = domain;
            }
            if let Some(provider) = patch.default_model_provider {
                prefs.default_model_provider = provider;
            }
            if let Some(enabled) = patch.auto_refresh_enabled {
                prefs.auto_refresh_enabled = enabled;
            }
            if let Some(interval) = patch.refresh_interval_ms {
                prefs.refresh_interval_ms = interval;
            }
            if let Some(rows) = patch.max_rows_per_table {
                prefs.max_rows_per_table = rows;
            }
            if let Some(compact) = patch.compact_mode {
                prefs.compact_mode = compact;
            }
        });

        match serde_json::to_string(&self.cell.get()) {
            Ok(serialized) => self.storage.set(PREFERENCES_KEY, &serialized),
            Err(e) => warn!(error = %e, "Failed to persist preferences"),
        }
    }

    /// Restore the documented defaults and drop the persisted blob
    pub fn reset(&self) {
        self.cell.set(UserPreferences::default());
        self.storage.remove(PREFERENCES_KEY);
    }

    pub fn current(&self) -> UserPreferences {
        self.cell.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<UserPreferences> {
        self.cell.subscribe()
    }
}
