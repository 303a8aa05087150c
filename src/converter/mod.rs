//! Slip conversion form
//!
//! Owns the four pieces of form state (source code, target selection, busy
//! flag, result) and walks them through the submit cycle:
//!
//! ```text
//! Idle ──submit──▶ Validating ──missing field──▶ Idle (+ destructive toast)
//!                      │
//!                      └──ok──▶ Converting ──1500ms──▶ Complete ──submit──▶ Validating
//! ```
//!
//! The conversion delay runs as a tokio task owned by the form. Its completion
//! comes back over an mpsc channel and must be handed to [`SlipForm::complete`]
//! by whoever drives the form (the TUI event loop or the headless CLI).
//! Dropping the form aborts a pending task, so a torn-down form never sees a
//! late completion.

mod notify;
mod policy;

pub use notify::{LogNotifier, Notification, Notifier, Severity};
pub use policy::{FormConfig, FormVariant, ResultPolicy};

use crate::catalog::Bookmaker;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Simulated conversion time
pub const CONVERSION_DELAY: Duration = Duration::from_millis(1500);

/// Submit button label while idle
pub const SUBMIT_LABEL: &str = "Convert Bet Slip";

/// Submit button label while a conversion is pending
pub const BUSY_LABEL: &str = "Converting...";

/// Writes text to the system clipboard
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

/// A required input the user has not provided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    SourceCode,
    TargetBookmaker,
}

/// Why a submit was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingInformation {
        missing: Vec<MissingField>,
        /// Whether the form shows a target selector (changes the wording)
        selector_shown: bool,
    },
}

impl FormError {
    /// Notification title for this error
    pub fn title(&self) -> &'static str {
        match self {
            FormError::MissingInformation { .. } => "Missing Information",
        }
    }

    pub fn missing(&self) -> &[MissingField] {
        match self {
            FormError::MissingInformation { missing, .. } => missing,
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingInformation {
                selector_shown: true,
                ..
            } => f.write_str("Please enter both a bet slip code and select a target company."),
            FormError::MissingInformation {
                selector_shown: false,
                ..
            } => f.write_str("Please enter a bet slip code."),
        }
    }
}

impl std::error::Error for FormError {}

// ─────────────────────────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────────────────────────

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Converting,
    Complete,
}

/// What a call to [`SlipForm::submit`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Conversion scheduled
    Started,
    /// Validation failed; a destructive notification was raised
    Rejected(FormError),
    /// A conversion is already pending; nothing happened
    Ignored,
}

/// Delivered on the completion channel when the delay elapses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    ticket: u64,
}

/// A scheduled conversion. Aborts its timer task when dropped.
struct PendingConversion {
    ticket: u64,
    source_code: String,
    target: Option<Bookmaker>,
    task: JoinHandle<()>,
}

impl Drop for PendingConversion {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub struct SlipForm {
    config: FormConfig,
    notifier: Arc<dyn Notifier>,
    completions: mpsc::Sender<Completion>,

    source_code: String,
    target: Option<Bookmaker>,
    busy: bool,
    result: String,
    phase: FormPhase,

    pending: Option<PendingConversion>,
    next_ticket: u64,
}

impl SlipForm {
    /// Create a form. Completions for conversions it schedules are sent to
    /// `completions`; pass them back through [`SlipForm::complete`].
    pub fn new(
        config: FormConfig,
        notifier: Arc<dyn Notifier>,
        completions: mpsc::Sender<Completion>,
    ) -> Self {
        Self {
            config,
            notifier,
            completions,
            source_code: String::new(),
            target: None,
            busy: false,
            result: String::new(),
            phase: FormPhase::Idle,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn set_source_code(&mut self, code: impl Into<String>) {
        self.source_code = code.into();
    }

    pub fn target(&self) -> Option<&Bookmaker> {
        self.target.as_ref()
    }

    /// Select a target by id. Returns false if the id is not offered.
    pub fn select_target(&mut self, id: &str) -> bool {
        match self.config.catalog.iter().find(|b| b.id == id) {
            Some(bookmaker) => {
                self.target = Some(*bookmaker);
                true
            }
            None => false,
        }
    }

    /// Step the selection through the catalog, wrapping at both ends.
    /// From no selection, forward picks the first entry and backward the last.
    pub fn cycle_target(&mut self, forward: bool) {
        let catalog = self.config.catalog;
        if catalog.is_empty() {
            return;
        }
        let current = self
            .target
            .and_then(|t| catalog.iter().position(|b| b.id == t.id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => catalog.len() - 1,
            (Some(i), true) => (i + 1) % catalog.len(),
            (Some(i), false) => (i + catalog.len() - 1) % catalog.len(),
        };
        self.target = Some(catalog[next]);
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Submit control is enabled only while no conversion is pending
    pub fn can_submit(&self) -> bool {
        !self.busy
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Latest converted code, empty until a conversion produced one
    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn has_result(&self) -> bool {
        !self.result.is_empty()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Presence check only: whitespace counts as input.
    fn validate(&self) -> Result<(), FormError> {
        let mut missing = Vec::new();
        if self.source_code.is_empty() {
            missing.push(MissingField::SourceCode);
        }
        if self.config.show_target_selector && self.target.is_none() {
            missing.push(MissingField::TargetBookmaker);
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingInformation {
                missing,
                selector_shown: self.config.show_target_selector,
            })
        }
    }

    /// Validate and, if everything is present, start the simulated conversion.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.busy {
            tracing::debug!("Submit ignored: conversion already pending");
            return SubmitOutcome::Ignored;
        }

        self.phase = FormPhase::Validating;
        if let Err(err) = self.validate() {
            self.phase = FormPhase::Idle;
            tracing::debug!(missing = ?err.missing(), "Submit rejected");
            self.notifier
                .notify(Notification::destructive(err.title(), err.to_string()));
            return SubmitOutcome::Rejected(err);
        }

        self.busy = true;
        self.phase = FormPhase::Converting;

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let tx = self.completions.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(CONVERSION_DELAY).await;
            // Receiver gone means the driver shut down; nothing to report to
            let _ = tx.send(Completion { ticket }).await;
        });

        tracing::info!(
            ticket,
            bookmaker = self.target.map(|t| t.id).unwrap_or("-"),
            "Conversion started"
        );

        self.pending = Some(PendingConversion {
            ticket,
            source_code: self.source_code.clone(),
            target: self.target,
            task,
        });

        SubmitOutcome::Started
    }

    /// Finish the pending conversion. Returns false for a completion that
    /// does not belong to the pending conversion.
    pub fn complete(&mut self, completion: Completion) -> bool {
        let matches = self
            .pending
            .as_ref()
            .is_some_and(|p| p.ticket == completion.ticket);
        if !matches {
            tracing::debug!(ticket = completion.ticket, "Stale completion ignored");
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        self.busy = false;
        self.phase = FormPhase::Complete;

        let policy = self.config.policy;
        match policy.derive(pending.target.as_ref(), &pending.source_code) {
            Some(result) => {
                tracing::info!(ticket = pending.ticket, %result, "Conversion complete");
                self.result = result;
            }
            None if policy == ResultPolicy::ComingSoon => {
                tracing::info!(ticket = pending.ticket, "Conversion not available yet");
            }
            None => {
                tracing::warn!(ticket = pending.ticket, "Conversion produced no result");
            }
        }

        self.notifier.notify(policy.completion_notice());
        true
    }

    /// Copy the result to the clipboard and confirm.
    ///
    /// Returns false when there is no result yet (the copy action is not
    /// offered then). Clipboard failures are logged, not surfaced.
    pub fn copy_result(&self, clipboard: &dyn ClipboardWriter) -> bool {
        if !self.has_result() {
            return false;
        }

        if let Err(e) = clipboard.write_text(&self.result) {
            tracing::warn!("Clipboard write failed: {:#}", e);
        }

        self.notifier.notify(Notification::normal(
            "Copied!",
            "The converted code has been copied to your clipboard.",
        ));
        true
    }
}
