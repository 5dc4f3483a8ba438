//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    clipboard: Box<dyn ClipboardSink>,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        Self::with_parts(AppState::new(), Box::new(SystemClipboard), network_tx, render_tx)
    }

    pub fn with_parts(
        state: AppState,
        clipboard: Box<dyn ClipboardSink>,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            clipboard,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        self.state.storage.save_text(&self.state.draft);
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Draft editing
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Newline => self.state.enter_char('\n'),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::Delete => self.state.delete_char_forward(),
            UiEvent::CursorLeft => self.state.move_cursor_left(),
            UiEvent::CursorRight => self.state.move_cursor_right(),
            UiEvent::CursorUp => self.state.move_cursor_up(),
            UiEvent::CursorDown => self.state.move_cursor_down(),
            UiEvent::CursorHome => self.state.move_cursor_home(),
            UiEvent::CursorEnd => self.state.move_cursor_end(),

            // Request
            UiEvent::SendRequest => {
                let command = self.state.send_request();
                let _ = self.network_tx.send(command);
            }

            // Result viewport
            UiEvent::SelectPrevLine => self.state.select_prev_line(),
            UiEvent::SelectNextLine => self.state.select_next_line(),

            // Clipboard
            UiEvent::CopyResult => self.state.copy_result(self.clipboard.as_mut()),
            UiEvent::CopyHeaders => self.state.copy_headers(self.clipboard.as_mut()),
            UiEvent::CopySelectedLine => self.state.copy_selected_line(self.clipboard.as_mut()),

            // System
            UiEvent::Quit => return true,
        }
        false
    }
}
