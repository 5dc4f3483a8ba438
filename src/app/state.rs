//! App state - pure data structure with no I/O logic

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::{NetworkResponse, RenderState};
use crate::storage::Storage;

/// Main application state
pub struct AppState {
    pub title: String,

    // Draft being edited
    pub draft: String,
    pub cursor_position: usize,

    // Last result laid out as request lines, "", response lines, "", body
    pub result: Vec<String>,
    pub selected_line: usize,
    pub result_scroll: u16,
    pub time_ms: Option<u64>,

    // Request tracking
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    pub error: Option<String>,

    pub storage: Storage,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_storage(Storage::new())
    }

    /// State seeded with the draft saved in `storage`
    pub fn with_storage(storage: Storage) -> Self {
        let draft = storage.load_text();
        AppState {
            title: format!("{} v{}", APP_NAME, APP_VERSION),
            cursor_position: draft.find('\n').unwrap_or(draft.len()),
            draft,
            result: Vec::new(),
            selected_line: 0,
            result_scroll: 0,
            time_ms: None,
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
            error: None,
            storage,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Apply a network response; anything but the pending request is stale
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Ignoring stale response");
            return;
        }
        self.pending_request_id = None;
        self.is_loading = false;

        match response {
            NetworkResponse::Completed { result, time_ms, .. } => {
                let lines = result.to_lines();
                if self.selected_line >= lines.len() {
                    self.selected_line = 0;
                }
                self.result = lines;
                self.time_ms = Some(time_ms);
                self.clear_error();
            }
            NetworkResponse::Failed { message, time_ms, .. } => {
                self.result.clear();
                self.selected_line = 0;
                self.result_scroll = 0;
                self.time_ms = Some(time_ms);
                self.set_error(message);
            }
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            title: self.title.clone(),
            draft: self.draft.clone(),
            cursor_position: self.cursor_position,
            result: self.result.clone(),
            selected_line: self.selected_line,
            result_scroll: self.result_scroll,
            time_ms: self.time_ms,
            is_loading: self.is_loading,
            error: self.error.clone(),
        }
    }
}
