use clipboard_rs::{Clipboard, ClipboardContext};

/// Destination for copied text.
pub trait TextSink {
    fn copy_text(&mut self, text: &str) -> Result<(), String>;
}

/// The system clipboard.
pub struct SystemClipboard;

impl TextSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), String> {
        let ctx = ClipboardContext::new().map_err(|e| format!("cannot access clipboard: {e}"))?;
        ctx.set_text(text.to_string()).map_err(|e| e.to_string())
    }
}
