//! Form configuration and result derivation
//!
//! Three deployments of the form exist. They differ only in whether a target
//! selector is shown and in how the result is derived, so they share one
//! `SlipForm` driven by a `FormConfig`.

use super::notify::Notification;
use crate::catalog::{Bookmaker, BETPAWA, BOOKMAKERS};

/// Deployment flavor, as named in the config file and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormVariant {
    /// Selector shown, result is `{target}-{code}-converted`
    #[default]
    Generic,
    /// No selector, result is `BETPAWA-{code}-converted`
    FixedTarget,
    /// Selector shown, no result; announces the feature instead
    ComingSoon,
}

impl FormVariant {
    /// Parse variant string from config. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generic" => Some(Self::Generic),
            "fixed-target" | "fixed_target" | "fixed" => Some(Self::FixedTarget),
            "coming-soon" | "coming_soon" | "stub" => Some(Self::ComingSoon),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::FixedTarget => "fixed-target",
            Self::ComingSoon => "coming-soon",
        }
    }
}

/// How a completed conversion turns inputs into a result string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultPolicy {
    /// No result is produced
    ComingSoon,
    /// `{targetId}-{sourceCode}-converted`
    Generic,
    /// `{BOOKMAKERID}-{sourceCode}-converted` for one hardwired bookmaker
    FixedTarget(Bookmaker),
}

impl ResultPolicy {
    /// Derive the result. Pure: the same inputs always give the same output.
    ///
    /// `Generic` needs a target; without one it yields `None`.
    pub fn derive(&self, target: Option<&Bookmaker>, source_code: &str) -> Option<String> {
        match self {
            Self::ComingSoon => None,
            Self::Generic => target.map(|t| format!("{}-{}-converted", t.id, source_code)),
            Self::FixedTarget(bookmaker) => Some(format!(
                "{}-{}-converted",
                bookmaker.id.to_uppercase(),
                source_code
            )),
        }
    }

    /// Notification raised when the delay elapses
    pub fn completion_notice(&self) -> Notification {
        match self {
            Self::ComingSoon => Notification::normal(
                "Coming Soon",
                "The conversion feature will be available soon!",
            ),
            Self::Generic | Self::FixedTarget(_) => {
                Notification::normal("Success!", "Your bet slip has been converted.")
            }
        }
    }
}

/// Everything that distinguishes one deployment of the form from another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub show_target_selector: bool,
    /// Entries offered by the selector (empty when it is hidden)
    pub catalog: &'static [Bookmaker],
    pub policy: ResultPolicy,
}

impl FormConfig {
    pub fn generic() -> Self {
        Self {
            show_target_selector: true,
            catalog: BOOKMAKERS,
            policy: ResultPolicy::Generic,
        }
    }

    pub fn fixed_target(bookmaker: Bookmaker) -> Self {
        Self {
            show_target_selector: false,
            catalog: &[],
            policy: ResultPolicy::FixedTarget(bookmaker),
        }
    }

    pub fn coming_soon() -> Self {
        Self {
            show_target_selector: true,
            catalog: BOOKMAKERS,
            policy: ResultPolicy::ComingSoon,
        }
    }

    pub fn for_variant(variant: FormVariant) -> Self {
        match variant {
            FormVariant::Generic => Self::generic(),
            FormVariant::FixedTarget => Self::fixed_target(BETPAWA),
            FormVariant::ComingSoon => Self::coming_soon(),
        }
    }

    /// Line shown under the form title
    pub fn subtitle(&self) -> String {
        match self.policy {
            ResultPolicy::FixedTarget(bookmaker) => {
                format!("Enter your bet slip code to convert it for {}", bookmaker.name)
            }
            _ => "Enter your bet slip code and select your target platform".to_string(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::for_variant(FormVariant::default())
    }
}
