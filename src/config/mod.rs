//! Configuration for the converter
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/slipconv/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::converter::FormVariant;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;
mod toast;

#[cfg(test)]
mod tests;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use toast::{FileToast, ToastConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default theme name
pub const DEFAULT_THEME: &str = "betting";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Which form deployment to run: generic, fixed-target, coming-soon
    pub variant: FormVariant,

    /// Theme name: "betting", "dark", "light"
    pub theme: String,

    /// Toast display settings
    pub toast: ToastConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            variant: FormVariant::default(),
            theme: DEFAULT_THEME.to_string(),
            toast: ToastConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Form settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileForm {
    pub variant: Option<String>,
}

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [form] section
    pub form: Option<FileForm>,

    /// Optional [toast] section
    pub toast: Option<FileToast>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/slipconv/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("slipconv").join("config.toml"))
    }

    /// Write the default config template to `path`, creating parent directories
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml())
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Parse the config file at `path`. A missing file yields defaults; a
    /// file that exists but cannot be read or parsed is an error.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // Variant: env > file > default
        let variant = env("SLIPCONV_VARIANT")
            .or(file.form.and_then(|f| f.variant))
            .map(|name| {
                FormVariant::parse(&name).unwrap_or_else(|| {
                    eprintln!(
                        "Warning: unknown form variant {:?}, using {:?}",
                        name,
                        FormVariant::default().as_str()
                    );
                    FormVariant::default()
                })
            })
            .unwrap_or_default();

        // Theme: env > file > default
        let theme = env("SLIPCONV_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        let toast = ToastConfig::from_file(file.toast);
        let logging = LoggingConfig::from_file(file.logging);

        Self {
            variant,
            theme,
            toast,
            logging,
        }
    }
}

/// Print a clear, actionable config error before exiting
pub fn print_config_error(err: &anyhow::Error) {
    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
    eprintln!("║  CONFIG ERROR - Failed to load configuration file            ║");
    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
    eprintln!("  Error: {:#}\n", err);
    eprintln!("  Tip: Check for:\n");
    eprintln!("    - Missing quotes around string values");
    eprintln!("    - Invalid boolean values (use true/false)");
    eprintln!("    - Typos in section names\n");
    eprintln!("  To reset, run `slipconv config --reset`.\n");
}
