//! Toast display settings

use serde::Deserialize;
use std::time::Duration;

/// How long notifications stay on screen in the TUI
#[derive(Debug, Clone, PartialEq)]
pub struct ToastConfig {
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

/// Toast settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileToast {
    pub duration_ms: Option<u64>,
}

impl ToastConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileToast>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            duration_ms: file.duration_ms.unwrap_or(Self::default().duration_ms),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
