// Components module - reusable UI building blocks
//
// - Form card: the conversion form (code input, selector, button, result)
// - Text input: single-line editable field used by the form card
// - Toast: bottom-right notification overlay and the notifier that feeds it
// - Status bar: key hints and latest log line

pub mod form_card;
pub mod formatters;
pub mod status_bar;
pub mod text_input;
pub mod toast;

pub use form_card::FormCard;
pub use toast::ToastCenter;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
