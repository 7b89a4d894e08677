//! Terminal presentation layer for the morpion widget.
//!
//! The host hands the widget the whole terminal as its mount area. This
//! module owns the terminal session and the sequential event loop; all
//! game logic stays in [`crate::game`].

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::WidgetConfig;
use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use input::Action;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info};

/// Runs the widget until the user quits.
///
/// Raw mode, the alternate screen and mouse capture are enabled on
/// entry and restored on exit, error or not.
pub fn run(config: WidgetConfig, log_file: &Path) -> Result<()> {
    // Log to a file so tracing output never lands on the terminal the
    // widget is drawing into.
    let log = std::fs::File::create(log_file)
        .with_context(|| format!("creating log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log))
        .with_ansi(false)
        .try_init();

    info!("starting morpion widget");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_widget(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = ?err, "widget loop failed");
    }
    result
}

/// Sequential event loop: draw, poll, dispatch. Each input event is
/// handled to completion before the next one is read.
fn run_widget<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut zones = ui::Zones::default();

    loop {
        terminal.draw(|frame| {
            zones = ui::zones(frame.area());
            ui::draw(frame, &app, &zones);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => match input::from_key(key.code) {
                Action::Quit => {
                    info!("user quit");
                    return Ok(());
                }
                action => app.handle(action),
            },
            Event::Mouse(mouse) => {
                if let Some(action) = input::from_mouse(&mouse, &zones) {
                    debug!(?action, "mouse input");
                    app.handle(action);
                }
            }
            _ => {}
        }
    }
}
