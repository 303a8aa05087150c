// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, paste, timer ticks)
// - Rendering the form
// - Feeding conversion completions back into the form

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::converter::Completion;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use clipboard::SystemClipboard;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::Interactive;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done (also when the loop fails).
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let (completion_tx, mut completion_rx) = mpsc::channel::<Completion>(8);
    let mut app = App::new(&config, log_buffer, completion_tx, Box::new(SystemClipboard));

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!(variant = config.variant.as_str(), "Form ready");

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut completion_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three kinds of events:
/// 1. Terminal input (keys and bracketed paste)
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Conversion completions from the form's delay task
///
/// The completion receiver lives outside `App` so each select! branch
/// borrows something different.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    completion_rx: &mut mpsc::Receiver<Completion>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or paste input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Paste(text)) => app.form_card.paste(&text),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }

            Some(completion) = completion_rx.recv() => {
                app.handle_completion(completion);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Global → focused control
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Ignore release/repeat reports from terminals that send them
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    app.form_card.handle_key(key_event);
}

/// Keys that work regardless of focus. Returns true if consumed.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('y') if ctrl => {
            app.copy_result();
            true
        }
        KeyCode::F(2) => {
            app.cycle_theme();
            true
        }
        _ => false,
    }
}
