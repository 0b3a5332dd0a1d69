use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::cell::StateCell;
use crate::infrastructure::storage::LocalStore;

pub const THEME_KEY: &str = "nf-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Hook into the presentation layer's root styling.
///
/// The theme store is the only caller, which keeps the persisted value and
/// the rendered state from drifting apart.
pub trait ThemeApplier: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Applier for headless use and tests
#[derive(Debug, Default)]
pub struct NoopThemeApplier;

impl ThemeApplier for NoopThemeApplier {
    fn apply(&self, _theme: Theme) {}
}

pub struct ThemeStore<L, A> {
    cell: StateCell<Theme>,
    storage: L,
    applier: A,
}

impl<L: LocalStore, A: ThemeApplier> ThemeStore<L, A> {
    pub fn new(storage: L, applier: A) -> Self {
        Self {
            cell: StateCell::new(Theme::Dark),
            storage,
            applier,
        }
    }

    /// Resolve the starting theme: persisted value first, then the
    /// platform preference, then dark.
    pub fn init(&self, platform_preference: Option<Theme>) -> Theme {
        let resolved = self
            .storage
            .get(THEME_KEY)
            .and_then(|stored| Theme::parse(&stored))
            .or(platform_preference)
            .unwrap_or(Theme::Dark);
        self.cell.set(resolved);
        resolved
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        self.set(next);
        next
    }

    pub fn set(&self, theme: Theme) {
        self.storage.set(THEME_KEY, theme.as_str());
        self.applier.apply(theme);
        self.cell.set(theme);
    }

    pub fn current(&self) -> Theme {
        self.cell.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.cell.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryLocalStore;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApplier {
        applied: Mutex<Vec<Theme>>,
    }

    impl ThemeApplier for &RecordingApplier {
        fn apply(&self, theme: Theme) {
            self.applied.lock().unwrap().push(theme);
        }
    }

    #[tokio::test]
    async fn test_init_prefers_persisted_value() {
        let storage = InMemoryLocalStore::new();
        storage.set(THEME_KEY, "light");

        let store = ThemeStore::new(storage, NoopThemeApplier);
        assert_eq!(store.init(None), Theme::Light);
    }

    #[tokio::test]
    async fn test_init_falls_back_to_platform_then_dark() {
        let store = ThemeStore::new(InMemoryLocalStore::new(), NoopThemeApplier);
        assert_eq!(store.init(Some(Theme::Light)), Theme::Light);

        let store = ThemeStore::new(InMemoryLocalStore::new(), NoopThemeApplier);
        assert_eq!(store.init(None), Theme::Dark);
    }

    #[tokio::test]
    async fn test_garbage_persisted_value_is_ignored() {
        let storage = InMemoryLocalStore::new();
        storage.set(THEME_KEY, "sepia");

        let store = ThemeStore::new(storage, NoopThemeApplier);
        assert_eq!(store.init(Some(Theme::Light)), Theme::Light);
    }

    #[tokio::test]
    async fn test_toggle_persists_and_applies() {
        let applier = RecordingApplier::default();
        let store = ThemeStore::new(InMemoryLocalStore::new(), &applier);
        store.init(Some(Theme::Light));

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(store.storage.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(*applier.applied.lock().unwrap(), vec![Theme::Dark]);
    }

    #[tokio::test]
    async fn test_explicit_set_persists() {
        let store = ThemeStore::new(InMemoryLocalStore::new(), NoopThemeApplier);
        store.set(Theme::Light);
        assert_eq!(store.storage.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(store.current(), Theme::Light);
    }
}
