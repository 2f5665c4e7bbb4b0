//! Off-screen rendering to plain text.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use timeline_core::TimelineView;

use crate::text::visual_width;
use crate::theme::{IconSet, Theme};
use crate::timeline::TimelineWidget;

/// Convert a buffer to text, one line per row with trailing spaces trimmed.
///
/// Cells covered by a wide symbol are skipped so that the text reads the
/// way the terminal shows it.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        let mut skip = 0;
        for x in area.x..area.x + area.width {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
                skip = visual_width(cell.symbol()).saturating_sub(1);
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Draw `view` at `width` columns into a buffer tall enough for all of it
/// and return the text.
pub fn render_to_string(view: &TimelineView, theme: &Theme, icons: &IconSet, width: u16) -> String {
    let widget = TimelineWidget::new(view, theme, icons);
    let height = u16::try_from(widget.content_height(width))
        .unwrap_or(u16::MAX)
        .max(1);

    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    widget.render(area, &mut buffer);
    buffer_to_string(&buffer)
}
