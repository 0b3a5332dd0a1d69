use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::cell::StateCell;
use crate::config::{AppConfig, Environment};

/// How long a notification stays visible unless superseded or cleared
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub environment: Environment,
    pub backend_url: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub notification: Option<Notification>,
}

/// App-wide state: environment, loading flag, error banner and a transient
/// notification with a 5-second auto-clear.
///
/// Each notification carries a sequence number; the delayed clear task only
/// fires if its notification is still the current one, so a newer
/// notification supersedes a stale pending clear.
pub struct AppStateStore {
    cell: Arc<StateCell<AppState>>,
    notification_seq: Arc<AtomicU64>,
}

impl AppStateStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            cell: Arc::new(StateCell::new(AppState {
                environment: config.environment,
                backend_url: config.backend.base_url.clone(),
                is_loading: false,
                error_message: None,
                notification: None,
            })),
            notification_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.cell.update(|state| state.is_loading = loading);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.cell.update(|state| state.error_message = error);
    }

    pub fn show_notification(&self, kind: NotificationKind, message: impl Into<String>) {
        let seq = self.notification_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.cell.update(|state| {
            state.notification = Some(Notification {
                kind,
                message: message.into(),
                timestamp: Utc::now(),
            });
        });

        let cell = Arc::clone(&self.cell);
        let counter = Arc::clone(&self.notification_seq);
        tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TTL).await;
            // Only clear if no newer notification (or explicit clear)
            // superseded this one in the meantime.
            if counter.load(Ordering::SeqCst) == seq {
                cell.update(|state| state.notification = None);
            }
        });
    }

    pub fn clear_notification(&self) {
        self.notification_seq.fetch_add(1, Ordering::SeqCst);
        self.cell.update(|state| state.notification = None);
    }

    pub fn state(&self) -> AppState {
        self.cell.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.cell.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn store() -> AppStateStore {
        AppStateStore::new(&AppConfig::default())
    }

    #[tokio::test]
    async fn test_startup_state_comes_from_config() {
        let state = store().state();
        assert_eq!(state.environment, Environment::Development);
        assert_eq!(state.backend_url, "http://localhost:8000/api/v1");
        assert!(!state.is_loading);
        assert!(state.notification.is_none());
    }

    #[tokio::test]
    async fn test_loading_and_error_flags() {
        let store = store();
        store.set_loading(true);
        store.set_error(Some("backend unreachable".to_string()));

        let state = store.state();
        assert!(state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some("backend unreachable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_auto_clears_after_ttl() {
        let store = store();
        store.show_notification(NotificationKind::Info, "saved");
        assert!(store.state().notification.is_some());

        sleep(NOTIFICATION_TTL + Duration::from_millis(50)).await;
        tokio::task::yield_now().await;
        assert!(store.state().notification.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notification_supersedes_pending_clear() {
        let store = store();
        store.show_notification(NotificationKind::Info, "first");

        sleep(Duration::from_millis(2000)).await;
        store.show_notification(NotificationKind::Warning, "second");

        // First notification's timer elapses; the second must survive it.
        sleep(Duration::from_millis(3100)).await;
        tokio::task::yield_now().await;
        let visible = store.state().notification.unwrap();
        assert_eq!(visible.message, "second");

        // And the second clears on its own schedule.
        sleep(Duration::from_millis(2000)).await;
        tokio::task::yield_now().await;
        assert!(store.state().notification.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_clear_invalidates_pending_timer() {
        let store = store();
        store.show_notification(NotificationKind::Error, "boom");
        store.clear_notification();
        assert!(store.state().notification.is_none());

        // A notification shown right after must not be wiped by the old timer.
        store.show_notification(NotificationKind::Success, "recovered");
        sleep(Duration::from_millis(4900)).await;
        tokio::task::yield_now().await;
        assert!(store.state().notification.is_some());
    }
}
