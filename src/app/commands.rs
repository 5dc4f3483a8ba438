//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::clipboard::ClipboardSink;
use crate::messages::NetworkCommand;

/// Byte offset `n` characters past `start`, stopping at `end`
fn advance_chars(text: &str, start: usize, end: usize, n: usize) -> usize {
    text[start..end]
        .char_indices()
        .nth(n)
        .map(|(i, _)| start + i)
        .unwrap_or(end)
}

impl AppState {
    // ========================
    // Draft editing
    // ========================

    fn line_start(&self) -> usize {
        self.draft[..self.cursor_position]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    fn line_end(&self) -> usize {
        self.draft[self.cursor_position..]
            .find('\n')
            .map(|i| self.cursor_position + i)
            .unwrap_or(self.draft.len())
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        if cursor_pos <= self.draft.len() {
            self.draft.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let prev_pos = self.draft[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.draft.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor_position < self.draft.len() {
            self.draft.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.draft[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.draft.len() {
            self.cursor_position =
                advance_chars(&self.draft, self.cursor_position, self.draft.len(), 1);
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = self.line_start();
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.line_end();
    }

    /// Same column on the previous line, clamped to its length
    pub fn move_cursor_up(&mut self) {
        let start = self.line_start();
        if start == 0 {
            return;
        }
        let column = self.draft[start..self.cursor_position].chars().count();
        let prev_end = start - 1;
        let prev_start = self.draft[..prev_end]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        self.cursor_position = advance_chars(&self.draft, prev_start, prev_end, column);
    }

    /// Same column on the next line, clamped to its length
    pub fn move_cursor_down(&mut self) {
        let end = self.line_end();
        if end == self.draft.len() {
            return;
        }
        let column = self.draft[self.line_start()..self.cursor_position]
            .chars()
            .count();
        let next_start = end + 1;
        let next_end = self.draft[next_start..]
            .find('\n')
            .map(|i| next_start + i)
            .unwrap_or(self.draft.len());
        self.cursor_position = advance_chars(&self.draft, next_start, next_end, column);
    }

    // ========================
    // Request
    // ========================

    /// Start a request for the current draft; supersedes any pending one
    pub fn send_request(&mut self) -> NetworkCommand {
        let id = self.next_id();
        self.pending_request_id = Some(id);
        self.is_loading = true;
        tracing::debug!(id, "Sending draft");
        NetworkCommand::Hit {
            id,
            text: self.draft.clone(),
        }
    }

    // ========================
    // Result viewport
    // ========================

    /// Lines the viewport shows once the body is split on newlines
    pub fn rendered_line_count(&self) -> usize {
        match self.result.split_last() {
            Some((body, headers)) => headers.len() + body.lines().count(),
            None => 0,
        }
    }

    pub fn select_prev_line(&mut self) {
        if self.selected_line > 0 {
            self.selected_line -= 1;
        }
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Selection stops at the last response header; scrolling may continue into the body
    pub fn select_next_line(&mut self) {
        if self.selected_line + 3 < self.result.len() {
            self.selected_line += 1;
        }
        let max_scroll = self.rendered_line_count().saturating_sub(1);
        let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
        if self.result_scroll < max_scroll {
            self.result_scroll += 1;
        }
    }

    // ========================
    // Clipboard
    // ========================

    fn copy(&mut self, clipboard: &mut dyn ClipboardSink, text: &str) {
        match clipboard.set_text(text) {
            Ok(()) => self.clear_error(),
            Err(e) => {
                tracing::warn!(error = %e, "Copy failed");
                self.set_error(e.to_string());
            }
        }
    }

    /// Copy request lines, response lines and body
    pub fn copy_result(&mut self, clipboard: &mut dyn ClipboardSink) {
        if self.result.is_empty() {
            self.set_error("no result to copy");
            return;
        }
        let text = self.result.join("\n");
        self.copy(clipboard, &text);
    }

    /// Copy everything but the body
    pub fn copy_headers(&mut self, clipboard: &mut dyn ClipboardSink) {
        if self.result.is_empty() {
            self.set_error("no headers to copy");
            return;
        }
        let text = self.result[..self.result.len() - 2].join("\n");
        self.copy(clipboard, &text);
    }

    /// Copy the highlighted line
    pub fn copy_selected_line(&mut self, clipboard: &mut dyn ClipboardSink) {
        match self.result.get(self.selected_line).cloned() {
            Some(line) => self.copy(clipboard, &line),
            None => self.set_error("no result to copy"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardError;
    use crate::storage::Storage;

    #[derive(Default)]
    struct FakeClipboard {
        copied: Vec<String>,
        fail: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError(arboard::Error::ClipboardNotSupported));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn state_with_draft(draft: &str, cursor: usize) -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let mut state = AppState::with_storage(Storage::with_path(dir.path().join("draft")));
        state.draft = draft.to_string();
        state.cursor_position = cursor;
        (dir, state)
    }

    fn with_result() -> (tempfile::TempDir, AppState) {
        let (dir, mut state) = state_with_draft("GET x", 0);
        state.result = vec![
            "GET https://x/".into(),
            "".into(),
            "200 OK".into(),
            "A : 1".into(),
            "".into(),
            "line one\nline two".into(),
        ];
        (dir, state)
    }

    #[test]
    fn test_typing_and_deleting() {
        let (_dir, mut state) = state_with_draft("GET", 3);
        for c in " é".chars() {
            state.enter_char(c);
        }
        assert_eq!(state.draft, "GET é");
        assert_eq!(state.cursor_position, "GET é".len());

        state.delete_char();
        assert_eq!(state.draft, "GET ");
        state.move_cursor_home();
        state.delete_char_forward();
        assert_eq!(state.draft, "ET ");
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_cursor_left_right_respect_char_boundaries() {
        let (_dir, mut state) = state_with_draft("aé", 0);
        state.move_cursor_right();
        state.move_cursor_right();
        assert_eq!(state.cursor_position, 3);
        state.move_cursor_right();
        assert_eq!(state.cursor_position, 3);
        state.move_cursor_left();
        assert_eq!(state.cursor_position, 1);
    }

    #[test]
    fn test_cursor_up_down_keep_column() {
        let draft = "GET www.example.com\nX: 1\nAccept: text/html";
        // column 8 on the first line
        let (_dir, mut state) = state_with_draft(draft, 8);

        state.move_cursor_down();
        assert_eq!(state.cursor_position, draft.find("\nAccept").unwrap());

        state.move_cursor_down();
        assert_eq!(state.cursor_position, draft.find("Accept").unwrap() + 4);

        state.move_cursor_down();
        assert_eq!(state.cursor_position, draft.find("Accept").unwrap() + 4);

        state.move_cursor_up();
        state.move_cursor_up();
        assert_eq!(state.cursor_position, 4);

        state.move_cursor_up();
        assert_eq!(state.cursor_position, 4);
    }

    #[test]
    fn test_home_end() {
        let draft = "GET x\nA: 1";
        let (_dir, mut state) = state_with_draft(draft, 8);
        state.move_cursor_home();
        assert_eq!(state.cursor_position, 6);
        state.move_cursor_end();
        assert_eq!(state.cursor_position, draft.len());
    }

    #[test]
    fn test_send_request_tracks_pending_id() {
        let (_dir, mut state) = state_with_draft("GET x", 0);
        let first = state.send_request();
        let second = state.send_request();

        assert!(matches!(first, NetworkCommand::Hit { id: 1, .. }));
        match second {
            NetworkCommand::Hit { id, text } => {
                assert_eq!(id, 2);
                assert_eq!(text, "GET x");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(state.pending_request_id, Some(2));
        assert!(state.is_loading);
    }

    #[test]
    fn test_selection_stops_at_last_response_header() {
        let (_dir, mut state) = with_result();
        for _ in 0..10 {
            state.select_next_line();
        }
        assert_eq!(state.selected_line, 3);
        assert_eq!(state.rendered_line_count(), 7);
        assert_eq!(state.result_scroll, 6);

        state.select_prev_line();
        assert_eq!(state.selected_line, 2);
        assert_eq!(state.result_scroll, 5);
    }

    #[test]
    fn test_copy_variants() {
        let (_dir, mut state) = with_result();
        let mut clipboard = FakeClipboard::default();

        state.copy_result(&mut clipboard);
        state.copy_headers(&mut clipboard);
        state.selected_line = 2;
        state.copy_selected_line(&mut clipboard);

        assert_eq!(
            clipboard.copied,
            vec![
                "GET https://x/\n\n200 OK\nA : 1\n\nline one\nline two".to_string(),
                "GET https://x/\n\n200 OK\nA : 1".to_string(),
                "200 OK".to_string(),
            ]
        );
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_copy_without_result() {
        let (_dir, mut state) = state_with_draft("GET x", 0);
        let mut clipboard = FakeClipboard::default();

        state.copy_result(&mut clipboard);
        assert_eq!(state.error.as_deref(), Some("no result to copy"));
        state.copy_headers(&mut clipboard);
        assert_eq!(state.error.as_deref(), Some("no headers to copy"));
        state.copy_selected_line(&mut clipboard);
        assert_eq!(state.error.as_deref(), Some("no result to copy"));
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn test_copy_failure_is_shown() {
        let (_dir, mut state) = with_result();
        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };

        state.copy_result(&mut clipboard);
        assert!(state.error.as_deref().unwrap().starts_with("clipboard unavailable"));
    }
}
