//! timeline-tui: terminal renderer for the timeline component
//!
//! This crate provides the terminal layer for timeline, including:
//! - A ratatui widget that draws a resolved timeline
//! - Themes and icon sets for different terminals
//! - Off-screen rendering to plain text
//! - An interactive gallery of examples with Preview and Code tabs

mod app;
mod event;
pub mod render;
mod tabs;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod timeline;

pub use app::{examples, Example, Gallery, GalleryOptions, View, TICK_MS};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use render::{buffer_to_string, render_to_string};
pub use theme::{IconMode, IconSet, Theme};
pub use timeline::TimelineWidget;
pub use timeline_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tracing::{debug, info};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the interactive gallery.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit.
pub async fn run_gallery(options: GalleryOptions) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut gallery = Gallery::new(options);
    let mut events = EventHandler::new(TICK_MS);
    info!(examples = gallery.examples.len(), "gallery started");

    let result = run_loop(&mut terminal, &mut gallery, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    gallery: &mut Gallery,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| gallery.render(frame.area(), frame.buffer_mut()))?;
        gallery.mark_mounted();

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => gallery.handle_action(key_to_action(key)),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => gallery.handle_action(Action::Up),
                    MouseEventKind::ScrollDown => gallery.handle_action(Action::Down),
                    _ => {}
                },
                Event::Tick => gallery.tick(),
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            }
        }

        if gallery.should_quit {
            break;
        }
    }

    Ok(())
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
