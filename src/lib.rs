//! NeuroForge Console Core
//!
//! Headless core of the NeuroForge operator dashboard:
//! - Typed API client for the backend with per-call correlation IDs
//! - Overview aggregation with fan-out/fan-in partial-failure semantics
//! - Observable UI state stores (theme, auth, nav, playground, preferences)
//! - Durable local key-value storage for persisted preferences
//!
//! Rendering, routing and the backend itself live outside this crate and
//! are reachable only through the API contract in [`domain::contract`].

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::ConsoleError;

use std::path::PathBuf;
use std::sync::Arc;

use crate::infrastructure::api::{ApiClient, ReqwestTransport};
use crate::infrastructure::overview::{MockOverviewSource, OverviewService};
use crate::infrastructure::storage::FileLocalStore;
use crate::infrastructure::stores::{
    AppStateStore, AuthStore, NavStore, NoopThemeApplier, PlaygroundStore, PreferencesStore,
    ThemeStore,
};

/// Fully wired console state: one API client, the overview service and all
/// UI state stores sharing a single local storage file.
///
/// The overview service currently runs on the mock source; swap in
/// [`infrastructure::overview::LiveOverviewSource`] once the backend
/// section endpoints ship.
pub struct Console {
    pub config: AppConfig,
    pub api: ApiClient<ReqwestTransport>,
    pub overview: OverviewService<MockOverviewSource>,
    pub theme: ThemeStore<Arc<FileLocalStore>, NoopThemeApplier>,
    pub auth: AuthStore,
    pub app_state: AppStateStore,
    pub nav: NavStore,
    pub playground: PlaygroundStore,
    pub preferences: PreferencesStore<Arc<FileLocalStore>>,
}

/// Create the console state with all stores initialized
pub fn create_console(
    config: AppConfig,
    state_path: impl Into<PathBuf>,
) -> anyhow::Result<Console> {
    let storage = Arc::new(FileLocalStore::open(state_path));

    let api = ApiClient::from_config(&config)?;
    let overview = OverviewService::new(MockOverviewSource::new());

    let theme = ThemeStore::new(Arc::clone(&storage), NoopThemeApplier);
    theme.init(None);

    let preferences = PreferencesStore::new(Arc::clone(&storage));
    preferences.load();

    let app_state = AppStateStore::new(&config);

    Ok(Console {
        api,
        overview,
        theme,
        auth: AuthStore::new(),
        app_state,
        nav: NavStore::new(),
        playground: PlaygroundStore::new(),
        preferences,
        config,
    })
}
