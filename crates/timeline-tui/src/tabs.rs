//! Tab bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::Theme;

/// A horizontal tab bar with optional number hints.
#[derive(Debug, Clone)]
pub struct Tabs<'a> {
    titles: Vec<&'a str>,
    selected: usize,
    numbered: bool,
    theme: &'a Theme,
}

impl<'a> Tabs<'a> {
    /// Create a new tabs widget.
    pub fn new(titles: Vec<&'a str>, theme: &'a Theme) -> Self {
        Self {
            titles,
            selected: 0,
            numbered: false,
            theme,
        }
    }

    /// Set the selected tab index.
    #[must_use]
    pub fn select(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Prefix each title with its `[n]` shortcut.
    #[must_use]
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    fn line(&self) -> Line<'a> {
        let dim = Style::default().fg(self.theme.muted);
        let highlight = Style::default()
            .fg(self.theme.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

        let mut spans = Vec::new();
        for (i, title) in self.titles.iter().enumerate() {
            let is_selected = i == self.selected;

            if i > 0 {
                spans.push(Span::styled(" | ", dim));
            }
            if self.numbered {
                spans.push(Span::styled(format!("[{}] ", i + 1), dim));
            }
            spans.push(if is_selected {
                Span::styled(*title, highlight)
            } else {
                Span::styled(*title, Style::default().fg(self.theme.subtext))
            });
        }
        Line::from(spans)
    }
}

impl Widget for Tabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }
        let line = self.line();
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
