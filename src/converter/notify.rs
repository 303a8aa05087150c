//! Notification seam
//!
//! The form never owns how or when notifications are displayed. It calls into
//! whatever `Notifier` it was given: the TUI passes a toast center, the
//! headless CLI passes a `LogNotifier`.

use std::fmt;

/// How loudly a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Normal,
    /// Error styling (validation failures)
    Destructive,
}

/// A user-visible notification: title, message and severity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn normal(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Normal,
        }
    }

    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Receives notifications raised by the form
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Headless notifier: prints to stderr (stdout is reserved for results)
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, "{}", notification.message);
        match notification.severity {
            Severity::Normal => eprintln!("✓ {}", notification),
            Severity::Destructive => eprintln!("✗ {}", notification),
        }
    }
}
