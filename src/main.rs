//! Authflow TUI - login, registration and password recovery in the terminal
//!
//! A Ratatui front end whose forms validate locally and submit through an
//! asynchronous authentication backend.

mod app;
mod auth;
mod config;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use auth::SimulatedBackend;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log filter used when `RUST_LOG` is unset. stderr shares the tty with the
/// alternate screen, so only warnings and errors get through.
const DEFAULT_LOG_FILTER: &str = "authflow_tui=warn";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load()?;
    let backend = Arc::new(SimulatedBackend::from_config(&config));
    tracing::debug!("Starting with submit delay {:?}", backend.delay());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(config, backend).with_persistence();
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let terminal_height = terminal.size()?.height;
        if app.in_splash() {
            app.update_splash(terminal_height);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        // ~60fps while something animates, otherwise 100ms
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        // crossterm's poll blocks the calling thread
        let next_event = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
            if event::poll(poll_duration)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })?;

        if let Some(Event::Key(key)) = next_event {
            if key.kind == KeyEventKind::Press {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                app.handle_key(key)?;
            }
        }

        app.tick();

        if app.should_quit() {
            return Ok(());
        }
    }
}
