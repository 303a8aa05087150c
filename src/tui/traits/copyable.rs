//! Copyable trait for components that provide clipboard content

use super::Component;

/// Trait for components that can provide content for the clipboard
///
/// When the user triggers a copy (Ctrl+Y, or Enter on a copy button), the
/// component's `Copyable` implementation decides what gets copied.
pub trait Copyable: Component {
    /// Get text for the clipboard
    ///
    /// Returns `None` if there's nothing to copy (e.g., no result yet).
    fn copy_text(&self) -> Option<String>;
}
