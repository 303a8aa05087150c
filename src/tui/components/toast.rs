//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders in the bottom-right corner on top of all other content.
//!
//! [`ToastCenter`] is the TUI's [`Notifier`]: the form raises notifications
//! into it and the draw loop shows whatever toast is current.

use super::formatters::{display_width, wrap_words};
use crate::converter::{Notification, Notifier, Severity};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Widest a toast grows before wrapping its message
const TOAST_MAX_WIDTH: u16 = 44;

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    pub fn new(notification: Notification, duration: Duration) -> Self {
        Self {
            notification,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title_width = display_width(&self.notification.title);
        let message_width = display_width(&self.notification.message);
        // 2 for borders, 2 for padding
        let width = (title_width.max(message_width) as u16 + 4)
            .min(TOAST_MAX_WIDTH)
            .min(area.width.saturating_sub(4));
        if width < 5 {
            return;
        }

        let rows = wrap_words(&self.notification.message, (width - 4) as usize);
        let height = (rows.len() as u16 + 3).min(area.height);

        // Position: bottom-right corner, offset by 2 cells from edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2).max(area.y);
        let toast_area = Rect::new(x, y, width, height);

        let accent = match self.notification.severity {
            Severity::Destructive => theme.error,
            Severity::Normal => theme.success,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.card));

        let mut lines = vec![Line::from(Span::styled(
            format!(" {}", self.notification.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(rows.into_iter().map(|row| {
            Line::from(Span::styled(
                format!(" {}", row),
                Style::default().fg(theme.foreground),
            ))
        }));

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(Paragraph::new(lines).block(block), toast_area);
    }
}

/// Holds the toast currently on screen. A new notification replaces the
/// previous one.
#[derive(Clone)]
pub struct ToastCenter {
    current: Arc<Mutex<Option<Toast>>>,
    duration: Duration,
}

impl ToastCenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            duration,
        }
    }

    /// The toast to draw, if one is live
    pub fn current(&self) -> Option<Toast> {
        self.current
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Drop the current toast once its time is up
    pub fn expire(&self) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        if current.as_ref().is_some_and(Toast::is_expired) {
            *current = None;
        }
    }
}

impl Notifier for ToastCenter {
    fn notify(&self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            destructive = notification.is_destructive(),
            "Toast raised"
        );
        let toast = Toast::new(notification, self.duration);
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = Some(toast);
    }
}
