//! Observable UI state stores.
//!
//! Each store is an explicit state container with a defined mutation
//! surface and watch-based subscriptions; consumers receive store handles
//! instead of touching ambient globals.

mod app;
mod auth;
mod cell;
mod nav;
mod playground;
mod preferences;
mod theme;

pub use app::{AppState, AppStateStore, Notification, NotificationKind, NOTIFICATION_TTL};
pub use auth::{AuthStore, User, UserRole};
pub use cell::StateCell;
pub use nav::{NavState, NavStore, Page};
pub use playground::{PlaygroundState, PlaygroundStore};
pub use preferences::{PreferencesPatch, PreferencesStore, UserPreferences, PREFERENCES_KEY};
pub use theme::{NoopThemeApplier, Theme, ThemeApplier, ThemeStore, THEME_KEY};
