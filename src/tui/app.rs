// TUI application state
//
// Holds the form card, the toast center it notifies into, the active theme
// and the log buffer shown in the status bar.

use super::components::{FormCard, ToastCenter};
use super::theme::{Theme, ThemeKind};
use super::traits::Copyable;
use crate::config::Config;
use crate::converter::{ClipboardWriter, Completion, FormConfig, SlipForm};
use crate::logging::LogBuffer;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application state for the TUI
pub struct App {
    pub form_card: FormCard,

    /// Notifications raised by the form, drawn as toasts
    pub toasts: ToastCenter,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Animation frame counter for the busy spinner
    pub animation_frame: usize,
}

impl App {
    /// Build the app from config. Conversion completions are sent on
    /// `completions`; the event loop feeds them back through
    /// [`App::handle_completion`].
    pub fn new(
        config: &Config,
        log_buffer: LogBuffer,
        completions: mpsc::Sender<Completion>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let theme_kind = ThemeKind::parse(&config.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %config.theme, "Unknown theme, using default");
            ThemeKind::default()
        });

        let toasts = ToastCenter::new(config.toast.duration());
        let form = SlipForm::new(
            FormConfig::for_variant(config.variant),
            Arc::new(toasts.clone()),
            completions,
        );

        Self {
            form_card: FormCard::new(form, clipboard),
            toasts,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Periodic housekeeping: advance the spinner and expire toasts
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.toasts.expire();
    }

    pub fn handle_completion(&mut self, completion: Completion) {
        if self.form_card.form_mut().complete(completion) {
            tracing::debug!(phase = ?self.form_card.form().phase(), "Completion applied");
        }
    }

    /// Switch to the next built-in theme
    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::info!(theme = self.theme_kind.name(), "Theme changed");
    }

    /// Copy the converted code (Ctrl+Y)
    pub fn copy_result(&mut self) {
        if self.form_card.copy_text().is_none() {
            tracing::debug!("Nothing to copy yet");
            return;
        }
        self.form_card.copy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::FormVariant;
    use std::time::Duration;

    struct NullClipboard;

    impl ClipboardWriter for NullClipboard {
        fn write_text(&self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn app(config: &Config) -> (App, mpsc::Receiver<Completion>) {
        let (tx, rx) = mpsc::channel(4);
        let app = App::new(config, LogBuffer::new(), tx, Box::new(NullClipboard));
        (app, rx)
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        let (app, _rx) = app(&config);
        assert_eq!(app.theme_kind, ThemeKind::Betting);
    }

    #[test]
    fn theme_cycles() {
        let (mut app, _rx) = app(&Config::default());
        app.cycle_theme();
        assert_eq!(app.theme_kind, ThemeKind::Dark);
    }

    #[test]
    fn variant_selects_form_shape() {
        let config = Config {
            variant: FormVariant::FixedTarget,
            ..Config::default()
        };
        let (app, _rx) = app(&config);
        assert!(!app.form_card.form().config().show_target_selector);
    }

    #[tokio::test(start_paused = true)]
    async fn completion_raises_toast_that_expires() {
        let (mut app, mut rx) = app(&Config::default());
        let form = app.form_card.form_mut();
        form.set_source_code("ABC");
        assert!(form.select_target("sportybet"));
        app.form_card.submit();

        let completion = rx.recv().await.expect("completion");
        app.handle_completion(completion);
        assert_eq!(app.form_card.form().result(), "sportybet-ABC-converted");

        let toast = app.toasts.current().expect("success toast");
        assert_eq!(toast.notification.title, "Success!");

        tokio::time::advance(Duration::from_millis(3000)).await;
        app.tick();
        assert!(app.toasts.current().is_none());
    }

    #[tokio::test]
    async fn copy_before_result_is_a_no_op() {
        let (mut app, _rx) = app(&Config::default());
        app.copy_result();
        assert!(app.toasts.current().is_none());
    }
}
