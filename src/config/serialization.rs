//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# slipconv configuration

# Theme: betting, dark, light
theme = "{theme}"

[form]
# generic      - pick a target bookmaker, result is <target>-<code>-converted
# fixed-target - always BetPawa, result is BETPAWA-<code>-converted
# coming-soon  - no result, announces the feature instead
variant = "{variant}"

[toast]
# How long notifications stay on screen
duration_ms = {toast_ms}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            theme = self.theme,
            variant = self.variant.as_str(),
            toast_ms = self.toast.duration_ms,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
