//! Test utilities for timeline-tui render tests.

use crate::app::{Gallery, GalleryOptions};
use crate::render::buffer_to_string;
use crate::theme::{IconMode, IconSet};
use chrono::NaiveDate;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with the default dimensions (80x24).
pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// A gallery with ASCII icons and fixtures anchored at 2024-06-01.
pub fn create_test_gallery() -> Gallery {
    Gallery::new(GalleryOptions {
        icons: IconSet::new(IconMode::Ascii),
        today: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..GalleryOptions::default()
    })
}

/// Render the gallery at the default size and return it as text.
pub fn render_gallery_to_string(gallery: &Gallery) -> String {
    let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
    let mut buffer = Buffer::empty(area);
    gallery.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_gallery_draws_through_terminal() {
        let mut terminal = create_test_terminal();
        let gallery = create_test_gallery();
        terminal
            .draw(|frame| gallery.render(frame.area(), frame.buffer_mut()))
            .unwrap();

        let out = buffer_to_string(terminal.backend().buffer());
        assert!(out.contains("[1] Basic"));
        assert!(out.contains("Timeline"));
        assert!(out.contains("q quit"));
    }
}
