//! System clipboard access

use crate::error::ClipboardError;

/// Destination for copied text
pub trait ClipboardSink: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard, opened fresh for every copy
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
