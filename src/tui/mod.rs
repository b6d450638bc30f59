//! Terminal UI for tic-tac-toe.

#![warn(missing_docs)]

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tic_tac_toe::{SessionConfig, SessionHandle, spawn_session};
use tracing::{error, info, instrument, warn};

use app::App;

/// How long to wait for a key before checking for session updates.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the TUI until the user quits.
pub async fn run(config: SessionConfig) -> Result<()> {
    let (session, task) = spawn_session(&config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Key polling blocks; keep it off the session task's worker.
    let res = tokio::task::block_in_place(|| event_loop(&mut terminal, &session));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = session.shutdown() {
        warn!(error = %e, "Session already stopped");
    }
    task.await?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, reads keys, and forwards commands until quit.
#[instrument(skip_all)]
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, session: &SessionHandle) -> Result<()> {
    let mut updates = session.subscribe();
    let mut app = App::new(updates.borrow_and_update().clone());
    info!("Entering game loop");

    loop {
        if updates.has_changed()? {
            app.update(updates.borrow_and_update().clone());
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        // Poll for input with short timeout to keep the loop responsive.
        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(action) = input::map_key(key.code, app.cursor()) {
                app.handle(action, session)?;
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
