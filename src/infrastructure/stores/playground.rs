use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::cell::StateCell;
use crate::domain::contract::{Domain, InferenceResult};

/// One in-progress interactive inference session.
///
/// `result` and `error` are mutually exclusive; the mutation surface below
/// keeps them that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundState {
    pub query: String,
    pub context: String,
    pub selected_domain: Option<Domain>,
    pub selected_model: Option<String>,
    pub is_running: bool,
    pub result: Option<InferenceResult>,
    pub error: Option<String>,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self {
            query: String::new(),
            context: String::new(),
            selected_domain: Some(Domain::Literary),
            selected_model: None,
            is_running: false,
            result: None,
            error: None,
        }
    }
}

#[derive(Debug)]
pub struct PlaygroundStore {
    cell: StateCell<PlaygroundState>,
}

impl PlaygroundStore {
    pub fn new() -> Self {
        Self {
            cell: StateCell::new(PlaygroundState::default()),
        }
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.cell.update(|state| state.query = query);
    }

    pub fn set_context(&self, context: impl Into<String>) {
        let context = context.into();
        self.cell.update(|state| state.context = context);
    }

    pub fn select_domain(&self, domain: Option<Domain>) {
        self.cell.update(|state| state.selected_domain = domain);
    }

    pub fn select_model(&self, model: Option<String>) {
        self.cell.update(|state| state.selected_model = model);
    }

    pub fn set_running(&self, running: bool) {
        self.cell.update(|state| state.is_running = running);
    }

    pub fn set_result(&self, result: Option<InferenceResult>) {
        self.cell.update(|state| {
            state.result = result;
            state.error = None;
        });
    }

    pub fn set_error(&self, error: Option<String>) {
        self.cell.update(|state| {
            if error.is_some() {
                state.result = None;
            }
            state.error = error;
        });
    }

    /// Restore every field to its initial default in one update
    pub fn reset(&self) {
        self.cell.set(PlaygroundState::default());
    }

    pub fn state(&self) -> PlaygroundState {
        self.cell.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<PlaygroundState> {
        self.cell.subscribe()
    }
}

impl Default for PlaygroundStore {
    fn default() -> Self {
        Self::new()
    }
}
