//! System clipboard for the copy action
//!
//! Uses `arboard` for cross-platform support (Windows, macOS, Linux). A
//! fresh handle is opened per copy so nothing is held between writes.

use crate::converter::ClipboardWriter;
use anyhow::{Context, Result};
use arboard::Clipboard;

/// The platform clipboard, as seen by the form
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    /// Fails without a display server (headless Linux) or when access is
    /// denied; the form logs that and still confirms.
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")
    }
}
