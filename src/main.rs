// slipconv - Bet slip converter
//
// Turns a bet slip code from one bookmaker into a code for another. Runs as a
// terminal form by default, or headlessly through the `convert` subcommand.
//
// Architecture:
// - Catalog: the fixed list of bookmakers that can be targeted
// - Converter: the form state machine, its result policies and notifier seam
// - TUI (ratatui): the form card, toasts and status bar
// - CLI (clap): headless convert, catalog listing, config management
// - Config/logging: TOML file + env overrides, tracing subscriber setup

mod catalog;
mod cli;
mod config;
mod converter;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use logging::{LogBuffer, LogSink};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Config management must work even when the file is broken
    let command = match cli.command {
        Some(Commands::Config(args)) => {
            cli::handle_config(args)?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Bookmakers) => {
            cli::print_bookmakers();
            return Ok(ExitCode::SUCCESS);
        }
        other => other,
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            config::print_config_error(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    // In TUI mode logs go to the in-memory buffer (keeps the alternate screen
    // clean); headless runs log to stderr so stdout carries only the result
    let log_buffer = LogBuffer::new();
    let sink = if command.is_none() {
        LogSink::Buffer
    } else {
        LogSink::Stderr
    };
    let _file_guard = logging::init(&config.logging, &log_buffer, sink);

    tracing::debug!(
        variant = config.variant.as_str(),
        theme = %config.theme,
        "Configuration loaded"
    );

    // Returning (rather than exiting) lets the file guard flush on drop
    match command {
        Some(Commands::Convert(args)) => {
            let status = cli::exit_status(cli::run_convert(&config, args).await)?;
            Ok(ExitCode::from(status))
        }
        _ => {
            tui::run_tui(config, log_buffer).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
