//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Draft editing
    CharInput(char),
    Newline,
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,

    // Request
    SendRequest,

    // Result viewport
    SelectPrevLine,
    SelectNextLine,

    // Clipboard
    CopyResult,
    CopyHeaders,
    CopySelectedLine,

    // System
    Quit,
}

/// Convert a key event to a UiEvent
pub fn key_to_ui_event(key: KeyEvent) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            KeyCode::Up => Some(UiEvent::SelectPrevLine),
            KeyCode::Down => Some(UiEvent::SelectNextLine),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('a') => Some(UiEvent::CopyResult),
            KeyCode::Char('s') => Some(UiEvent::CopyHeaders),
            KeyCode::Char('d') => Some(UiEvent::CopySelectedLine),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Tab => Some(UiEvent::SendRequest),
        KeyCode::Enter => Some(UiEvent::Newline),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Delete => Some(UiEvent::Delete),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Up => Some(UiEvent::CursorUp),
        KeyCode::Down => Some(UiEvent::CursorDown),
        KeyCode::Home => Some(UiEvent::CursorHome),
        KeyCode::End => Some(UiEvent::CursorEnd),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}
