//! Terminal User Interface (TUI) for zentro.
//!
//! The interactive focus timer, built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::error::ZentroError;
use crate::features::focus::FocusController;
use crate::storage::KeyValueStore;

/// Run the TUI application until the user quits.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<S: KeyValueStore>(controller: FocusController<S>) -> Result<(), ZentroError> {
    enable_raw_mode()
        .map_err(|e| ZentroError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    or_restore(
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| ZentroError::Terminal(format!("Failed to setup terminal: {e}"))),
        restore_screen,
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_restore(
        Terminal::new(backend)
            .map_err(|e| ZentroError::Terminal(format!("Failed to create terminal: {e}"))),
        restore_screen,
    )?;

    info!("timer started");
    let mut app = App::new(controller);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    info!("timer closed");

    result
}

/// Undo raw mode and the alternate screen after a failed setup.
fn restore_screen() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}

/// Run `cleanup` if `result` is an error, then pass it through.
fn or_restore<T>(result: Result<T, ZentroError>, cleanup: impl FnOnce()) -> Result<T, ZentroError> {
    if result.is_err() {
        cleanup();
    }
    result
}

/// Run the main application loop.
fn run_app<B: Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), ZentroError> {
    loop {
        let view = app.view();
        let status = app
            .status
            .as_deref()
            .or_else(|| app.controller.notice());
        terminal
            .draw(|frame| ui::render(frame, &view, status))
            .map_err(|e| ZentroError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => app.should_quit = true,
                event::Action::Timer(command) => app.command(command, Instant::now()),
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
