use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::cell::StateCell;
use crate::domain::contract::Domain;

/// Closed set of console pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Overview,
    Pipelines,
    Domains,
    Models,
    Evaluations,
    Logs,
    Playground,
    Settings,
    Analytics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub current_page: Page,
    pub sidebar_open: bool,
    pub selected_domain: Option<Domain>,
    pub selected_pipeline_id: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            current_page: Page::Overview,
            sidebar_open: true,
            selected_domain: None,
            selected_pipeline_id: None,
        }
    }
}

/// Volatile navigation state; resets on reload
#[derive(Debug)]
pub struct NavStore {
    cell: StateCell<NavState>,
}

impl NavStore {
    pub fn new() -> Self {
        Self {
            cell: StateCell::new(NavState::default()),
        }
    }

    pub fn navigate_to(&self, page: Page) {
        self.cell.update(|state| state.current_page = page);
    }

    pub fn toggle_sidebar(&self) {
        self.cell.update(|state| state.sidebar_open = !state.sidebar_open);
    }

    pub fn select_domain(&self, domain: Option<Domain>) {
        self.cell.update(|state| state.selected_domain = domain);
    }

    pub fn select_pipeline(&self, pipeline_id: Option<String>) {
        self.cell
            .update(|state| state.selected_pipeline_id = pipeline_id);
    }

    pub fn state(&self) -> NavState {
        self.cell.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<NavState> {
        self.cell.subscribe()
    }
}

impl Default for NavStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navigation_defaults_and_mutations() {
        let store = NavStore::new();
        let state = store.state();
        assert_eq!(state.current_page, Page::Overview);
        assert!(state.sidebar_open);

        store.navigate_to(Page::Pipelines);
        store.toggle_sidebar();
        store.select_domain(Some(Domain::Market));
        store.select_pipeline(Some("pipeline-market".to_string()));

        let state = store.state();
        assert_eq!(state.current_page, Page::Pipelines);
        assert!(!state.sidebar_open);
        assert_eq!(state.selected_domain, Some(Domain::Market));
        assert_eq!(state.selected_pipeline_id.as_deref(), Some("pipeline-market"));
    }
}
