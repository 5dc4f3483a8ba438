//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::{APP_NAME, APP_VERSION, DEFAULT_DRAFT_TEXT};

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub title: String,

    // Draft
    pub draft: String,
    pub cursor_position: usize,

    // Result viewport: request lines, "", response lines, "", body
    pub result: Vec<String>,
    pub selected_line: usize,
    pub result_scroll: u16,
    pub time_ms: Option<u64>,
    pub is_loading: bool,

    // Error bar
    pub error: Option<String>,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            title: format!("{} v{}", APP_NAME, APP_VERSION),
            draft: String::from(DEFAULT_DRAFT_TEXT),
            cursor_position: 0,
            result: Vec::new(),
            selected_line: 0,
            result_scroll: 0,
            time_ms: None,
            is_loading: false,
            error: None,
        }
    }
}
