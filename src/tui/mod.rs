//! TUI module
//!
//! Provides the terminal dashboard: the position index, the dashboard state
//! and its serialization point, the views and the renderer they draw through.

pub mod app;
pub mod constants;
pub mod keybindings;
pub mod positions;
pub mod renderer;
mod theme;
pub mod views;

pub use app::*;
pub use keybindings::Command;
pub use positions::{Entity, PositionIndex, Selection};
pub use renderer::{RenderError, Renderer, TerminalRenderer};
pub use theme::*;

use crate::config::Config;
use crate::source::PodSource;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::EventStream,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// Run the dashboard until the user quits or the terminal fails
pub async fn run_tui(
    source: Arc<dyn PodSource>,
    header: HeaderInfo,
    config: &Config,
    theme: Theme,
) -> Result<()> {
    tracing::debug!("Initializing TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let result = run_dashboard(
        CrosstermBackend::new(stdout),
        source,
        header,
        Duration::from_secs(config.refresh_interval),
        config.ui.show_help,
        theme,
    )
    .await;

    tracing::debug!("TUI shutting down");

    // Restore terminal even when the dashboard failed
    let restored = restore_terminal();
    result.and(restored)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen")?;
    Ok(())
}

async fn run_dashboard(
    backend: CrosstermBackend<io::Stdout>,
    source: Arc<dyn PodSource>,
    header: HeaderInfo,
    refresh: Duration,
    show_help: bool,
    theme: Theme,
) -> Result<()> {
    let terminal = Terminal::new(backend)?;
    let renderer = TerminalRenderer::new(terminal)?;
    let dashboard = Arc::new(Dashboard::new(renderer, header, theme)?.with_help_line(show_help));
    dashboard.redraw_all()?;

    let mut refresher = dashboard.spawn_refresher(source, refresh);
    let mut events = EventStream::new();

    tracing::debug!(?refresh, "TUI initialized, entering main loop");

    let outcome: Result<()> = loop {
        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    let Some(command) = Command::from_event(&event) else {
                        continue;
                    };
                    match dashboard.handle_command(command) {
                        Ok(true) => break Ok(()),
                        Ok(false) => {}
                        Err(e) => break Err(e.into()),
                    }
                }
                Some(Err(e)) => break Err(anyhow::Error::new(e).context("Terminal event error")),
                None => {
                    tracing::debug!("Terminal event stream closed");
                    break Ok(());
                }
            },
            joined = &mut refresher => {
                break match joined {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(anyhow::Error::new(e).context("Refresh redraw failed")),
                    Err(e) => Err(anyhow::anyhow!("Refresh task failed: {}", e)),
                };
            }
        }
    };

    refresher.abort();
    outcome
}
