// CLI module - command-line argument parsing and handlers
//
// Subcommands:
// - convert: run the form once without a terminal UI
// - bookmakers: list the target catalog
// - config --show/--path/--reset/--edit: manage the config file
//
// No subcommand runs the TUI.

use crate::catalog::{self, BOOKMAKERS};
use crate::config::{Config, VERSION};
use crate::converter::{
    Completion, FormConfig, FormError, FormVariant, LogNotifier, Notifier, SlipForm,
    SubmitOutcome,
};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::process::Command;
use std::sync::Arc;
use tokio::sync::mpsc;

/// slipconv - bet slip converter
#[derive(Parser)]
#[command(name = "slipconv")]
#[command(version = VERSION)]
#[command(about = "Convert bet slip codes between bookmakers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a bet slip code without the terminal UI
    Convert(ConvertArgs),

    /// List the bookmakers that can be targeted
    Bookmakers,

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Bet slip code to convert (may start with '-')
    #[arg(allow_hyphen_values = true)]
    pub code: String,

    /// Target bookmaker id (see `slipconv bookmakers`)
    #[arg(long)]
    pub target: Option<String>,

    /// Form variant: generic, fixed-target, coming-soon (defaults to config)
    #[arg(long, value_parser = parse_variant)]
    pub variant: Option<FormVariant>,
}

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Show effective configuration
    #[arg(long)]
    pub show: bool,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config file to defaults
    #[arg(long)]
    pub reset: bool,

    /// Open config file in $EDITOR
    #[arg(long)]
    pub edit: bool,
}

fn parse_variant(s: &str) -> Result<FormVariant, String> {
    FormVariant::parse(s)
        .ok_or_else(|| format!("unknown variant {:?} (expected generic, fixed-target, coming-soon)", s))
}

// ─────────────────────────────────────────────────────────────────────────────
// convert
// ─────────────────────────────────────────────────────────────────────────────

/// Run one conversion headlessly. Prints the result on stdout.
///
/// A rejected submission comes back as a [`crate::converter::FormError`]
/// after its notice has been printed.
pub async fn run_convert(config: &Config, args: ConvertArgs) -> Result<()> {
    let variant = args.variant.unwrap_or(config.variant);
    let result = convert(
        FormConfig::for_variant(variant),
        &args.code,
        args.target.as_deref(),
        Arc::new(LogNotifier),
    )
    .await?;

    if let Some(result) = result {
        println!("{}", result);
    }
    Ok(())
}

/// Map the outcome of `convert` to a process exit status. A rejected
/// submission is exit 1 with nothing further printed, since the notifier
/// already reported it; other errors propagate.
pub fn exit_status(outcome: Result<()>) -> Result<u8> {
    match outcome {
        Ok(()) => Ok(0),
        Err(e) if e.downcast_ref::<FormError>().is_some() => Ok(1),
        Err(e) => Err(e),
    }
}

/// Drive a form through one submit cycle and wait out the conversion delay
pub async fn convert(
    form_config: FormConfig,
    code: &str,
    target: Option<&str>,
    notifier: Arc<dyn Notifier>,
) -> Result<Option<String>> {
    let (tx, mut rx) = mpsc::channel::<Completion>(1);
    let mut form = SlipForm::new(form_config, notifier, tx);
    form.set_source_code(code);

    if let Some(id) = target {
        let Some(bookmaker) = catalog::find(id) else {
            bail!(
                "Unknown bookmaker {:?}. Known ids: {}",
                id,
                catalog::known_ids()
            );
        };
        if !form.select_target(bookmaker.id) {
            tracing::warn!(
                bookmaker = bookmaker.id,
                "Form has a fixed target, --target ignored"
            );
        }
    }

    match form.submit() {
        SubmitOutcome::Started => {}
        SubmitOutcome::Rejected(err) => return Err(err.into()),
        SubmitOutcome::Ignored => bail!("A conversion is already in progress"),
    }

    let completion = rx
        .recv()
        .await
        .context("Conversion was cancelled before it completed")?;
    form.complete(completion);

    Ok(form.has_result().then(|| form.result().to_string()))
}

// ─────────────────────────────────────────────────────────────────────────────
// bookmakers
// ─────────────────────────────────────────────────────────────────────────────

pub fn print_bookmakers() {
    for bookmaker in BOOKMAKERS {
        println!("{}\t{}", bookmaker.id, bookmaker.name);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

/// Handle `config` flags. Runs before the config is loaded so `--reset` and
/// `--edit` still work when the file is broken.
pub fn handle_config(args: ConfigArgs) -> Result<()> {
    if args.path {
        handle_config_path()
    } else if args.show {
        handle_config_show()
    } else if args.reset {
        handle_config_reset()
    } else if args.edit {
        handle_config_edit()
    } else {
        // No flag provided, show help
        println!("Usage: slipconv config [--show|--path|--reset|--edit]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --path    Show config file path");
        println!("  --reset   Reset config file to defaults");
        println!("  --edit    Open config file in $EDITOR");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    Config::write_default(&path)?;
    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

fn handle_config_edit() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Ensure config exists
    if !path.exists() {
        Config::write_default(&path)?;
        println!("Created new config file: {}", path.display());
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            // Platform-specific fallback
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    println!("Opening {} with {}", path.display(), editor);

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .with_context(|| {
            format!(
                "Failed to launch editor '{}'. Set $EDITOR to your preferred editor",
                editor
            )
        })?;

    if !status.success() {
        bail!("Editor exited with status: {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BETPAWA;
    use crate::converter::Notification;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<Notification>>);

    impl Notifier for Recorder {
        fn notify(&self, notification: Notification) {
            self.0.lock().unwrap().push(notification);
        }
    }

    #[test]
    fn parses_convert_arguments() {
        let cli = Cli::try_parse_from([
            "slipconv",
            "convert",
            "ABC123",
            "--target",
            "betway",
            "--variant",
            "fixed-target",
        ])
        .unwrap();
        let Some(Commands::Convert(args)) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.code, "ABC123");
        assert_eq!(args.target.as_deref(), Some("betway"));
        assert_eq!(args.variant, Some(FormVariant::FixedTarget));
    }

    #[test]
    fn code_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["slipconv", "convert", "-ABC", "--target", "betway"])
            .unwrap();
        let Some(Commands::Convert(args)) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.code, "-ABC");
        assert_eq!(args.target.as_deref(), Some("betway"));
    }

    #[tokio::test(start_paused = true)]
    async fn hyphen_code_converts() {
        let result = convert(
            FormConfig::generic(),
            "-ABC",
            Some("betway"),
            Arc::new(Recorder::default()),
        )
        .await
        .unwrap();
        assert_eq!(result.as_deref(), Some("betway--ABC-converted"));
    }

    #[tokio::test]
    async fn rejected_submit_exits_with_status_one() {
        let outcome = convert(
            FormConfig::generic(),
            "",
            Some("betway"),
            Arc::new(Recorder::default()),
        )
        .await
        .map(|_| ());
        assert_eq!(exit_status(outcome).unwrap(), 1);
    }

    #[test]
    fn exit_status_passes_other_errors_through() {
        assert_eq!(exit_status(Ok(())).unwrap(), 0);
        let err = exit_status(Err(anyhow::anyhow!("Unknown bookmaker"))).unwrap_err();
        assert_eq!(err.to_string(), "Unknown bookmaker");
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["slipconv", "convert", "X", "--variant", "beta"]).is_err());
    }

    #[test]
    fn no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["slipconv"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn generic_conversion_prints_result() {
        let result = convert(
            FormConfig::generic(),
            "ABC123",
            Some("betway"),
            Arc::new(Recorder::default()),
        )
        .await
        .unwrap();
        assert_eq!(result.as_deref(), Some("betway-ABC123-converted"));
    }

    #[tokio::test(start_paused = true)]
    async fn fixed_target_ignores_target_flag() {
        let result = convert(
            FormConfig::fixed_target(BETPAWA),
            "XYZ999",
            Some("betway"),
            Arc::new(Recorder::default()),
        )
        .await
        .unwrap();
        assert_eq!(result.as_deref(), Some("BETPAWA-XYZ999-converted"));
    }

    #[tokio::test(start_paused = true)]
    async fn coming_soon_has_no_result() {
        let recorder = Arc::new(Recorder::default());
        let result = convert(
            FormConfig::coming_soon(),
            "ABC",
            Some("sportpesa"),
            recorder.clone(),
        )
        .await
        .unwrap();
        assert_eq!(result, None);
        assert_eq!(recorder.0.lock().unwrap()[0].title, "Coming Soon");
    }

    #[tokio::test]
    async fn missing_target_is_a_form_error() {
        let recorder = Arc::new(Recorder::default());
        let err = convert(FormConfig::generic(), "ABC", None, recorder.clone())
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<FormError>().is_some());
        assert!(recorder.0.lock().unwrap()[0].is_destructive());
    }

    #[tokio::test]
    async fn unknown_target_lists_known_ids() {
        let recorder = Arc::new(Recorder::default());
        let err = convert(FormConfig::generic(), "ABC", Some("bet365"), recorder.clone())
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bet365"));
        assert!(message.contains("betway"));
        // Rejected before the form ever ran
        assert!(recorder.0.lock().unwrap().is_empty());
    }
}
