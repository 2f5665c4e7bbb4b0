//! Event handling for the timeline gallery.

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Events that can occur in the gallery.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// A tick event for animation frames.
    Tick,
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that polls the terminal on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate.
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let tx_clone = tx.clone();

        // crossterm polling blocks, so it gets its own thread
        std::thread::spawn(move || {
            let tick_rate = Duration::from_millis(tick_rate_ms);
            loop {
                let event = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Some(Event::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => Some(Event::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(w, h)) => Some(Event::Resize(w, h)),
                        _ => None,
                    }
                } else {
                    Some(Event::Tick)
                };

                if let Some(e) = event {
                    if tx_clone.send(e).is_err() {
                        break;
                    }
                }
            }
        });

        Self { rx, _tx: tx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Gallery action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextExample,
    PrevExample,
    Example(usize),
    ShowPreview,
    ShowCode,
    ToggleView,
    Copy,
    Replay,
    Up,
    Down,
    None,
}

/// Convert a key event to a gallery action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                Action::PrevExample
            } else {
                Action::NextExample
            }
        }
        KeyCode::BackTab => Action::PrevExample,
        KeyCode::Char(c @ '1'..='9') => Action::Example(c as usize - '1' as usize),
        KeyCode::Char('p') => Action::ShowPreview,
        KeyCode::Char('c') => Action::ShowCode,
        KeyCode::Left | KeyCode::Right | KeyCode::Char('h' | 'l') => Action::ToggleView,
        KeyCode::Char('y') => Action::Copy,
        KeyCode::Char('r') => Action::Replay,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_example_navigation() {
        assert_eq!(key_to_action(key(KeyCode::Tab)), Action::NextExample);
        assert_eq!(key_to_action(key(KeyCode::BackTab)), Action::PrevExample);
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::Example(0));
        assert_eq!(key_to_action(key(KeyCode::Char('7'))), Action::Example(6));
    }

    #[test]
    fn test_view_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('p'))), Action::ShowPreview);
        assert_eq!(key_to_action(key(KeyCode::Char('c'))), Action::ShowCode);
        assert_eq!(key_to_action(key(KeyCode::Right)), Action::ToggleView);
        assert_eq!(key_to_action(key(KeyCode::Char('y'))), Action::Copy);
        assert_eq!(key_to_action(key(KeyCode::Char('x'))), Action::None);
    }
}
