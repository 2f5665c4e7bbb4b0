//! Timeline widget for drawing a resolved timeline.
//!
//! Each item is laid out in four columns: a current-step marker, the date
//! (right-aligned), the icon with the connector running below it, and the
//! title with the wrapped description.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use timeline_core::{AnimatedItem, Icon, ItemBody, Size, TimelineView};

use crate::text::{align_right, pad_right, truncate_to_width, visual_width, wrap_text};
use crate::theme::{IconSet, Theme};

const MARKER_WIDTH: usize = 2;
const ICON_WIDTH: usize = 2;
const COLUMN_GAP: &str = "  ";
const DATE_MIN_WIDTH: usize = 6;
const DATE_MAX_WIDTH: usize = 24;
const SKELETON_TITLE: usize = 12;
const SKELETON_DESCRIPTION: usize = 24;

/// Blank rows between items for a size variant.
pub fn gap_rows(size: Size) -> usize {
    match size {
        Size::Sm => 0,
        Size::Md => 1,
        Size::Lg => 2,
    }
}

/// Timeline pane widget.
pub struct TimelineWidget<'a> {
    view: &'a TimelineView,
    theme: &'a Theme,
    icons: &'a IconSet,
    /// Seconds since the timeline appeared; `None` draws every item settled.
    elapsed: Option<f32>,
    frame: usize,
    scroll: u16,
    focused: bool,
    with_border: bool,
}

impl<'a> TimelineWidget<'a> {
    /// Create a new timeline widget.
    pub fn new(view: &'a TimelineView, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            view,
            theme,
            icons,
            elapsed: None,
            frame: 0,
            scroll: 0,
            focused: false,
            with_border: false,
        }
    }

    /// Play entrance animations as of `seconds` after the timeline appeared.
    #[must_use]
    pub fn elapsed(mut self, seconds: f32) -> Self {
        self.elapsed = Some(seconds);
        self
    }

    /// Spinner frame used by loading items.
    #[must_use]
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    /// Rows scrolled off the top.
    #[must_use]
    pub fn scroll(mut self, rows: u16) -> Self {
        self.scroll = rows;
        self
    }

    /// Set whether the pane is focused.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to render with a border.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.with_border = border;
        self
    }

    /// Number of rows the content needs at `width` columns, without border.
    pub fn content_height(&self, width: u16) -> usize {
        self.lines(width).len()
    }

    /// All content rows at `width` columns.
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        match self.view {
            TimelineView::Empty { message, .. } => vec![Line::styled(
                message.clone(),
                Style::default().fg(self.theme.muted),
            )
            .alignment(Alignment::Center)],
            TimelineView::List { size, items, .. } => {
                let date_width = date_column_width(items);
                let content_width = usize::from(width)
                    .saturating_sub(MARKER_WIDTH + date_width + ICON_WIDTH + 2 * COLUMN_GAP.len())
                    .max(1);
                let gap = gap_rows(*size);

                items
                    .iter()
                    .flat_map(|item| self.item_lines(item, date_width, content_width, gap))
                    .collect()
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    fn item_lines(
        &self,
        item: &AnimatedItem,
        date_width: usize,
        content_width: usize,
        gap: usize,
    ) -> Vec<Line<'static>> {
        let view = &item.view;
        let muted = Style::default().fg(self.theme.muted);
        let icon_style = Style::default()
            .fg(self.theme.tone(view.icon_tone()))
            .add_modifier(if view.icon_size == Some(Size::Lg) {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });

        let (date, icon, title, body): (
            Span<'static>,
            Span<'static>,
            Span<'static>,
            Vec<Span<'static>>,
        ) = match &view.body {
            ItemBody::Loading => {
                let block = self.icons.skeleton();
                (
                    Span::styled(
                        align_right(&block.repeat(date_width.min(8)), date_width),
                        muted,
                    ),
                    Span::styled(pad_right(self.icons.spinner(self.frame), ICON_WIDTH), muted),
                    Span::styled(block.repeat(content_width.min(SKELETON_TITLE)), muted),
                    vec![Span::styled(
                        block.repeat(content_width.min(SKELETON_DESCRIPTION)),
                        muted,
                    )],
                )
            }
            ItemBody::Error { title, message } => {
                let destructive = Style::default().fg(self.theme.destructive);
                (
                    Span::styled(align_right(&view.date.display, date_width), destructive),
                    Span::styled(
                        pad_right(self.icons.glyph(&Icon::AlertCircle), ICON_WIDTH),
                        icon_style,
                    ),
                    Span::styled(
                        truncate_to_width(title, content_width),
                        destructive.add_modifier(Modifier::BOLD),
                    ),
                    wrap_text(message, content_width)
                        .into_iter()
                        .map(|line| Span::styled(line, destructive))
                        .collect(),
                )
            }
            ItemBody::Normal {
                title,
                description,
                icon,
                ..
            } => {
                let glyph = icon
                    .as_ref()
                    .map_or(self.icons.dot(), |icon| self.icons.glyph(icon));
                (
                    Span::styled(align_right(&view.date.display, date_width), muted),
                    Span::styled(pad_right(glyph, ICON_WIDTH), icon_style),
                    Span::styled(
                        truncate_to_width(title, content_width),
                        Style::default()
                            .fg(self.theme.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                    wrap_text(description, content_width)
                        .into_iter()
                        .map(|line| Span::styled(line, Style::default().fg(self.theme.subtext)))
                        .collect(),
                )
            }
        };

        let marker = if view.is_current() {
            Span::styled(
                pad_right(self.icons.current(), MARKER_WIDTH),
                Style::default().fg(self.theme.primary),
            )
        } else {
            Span::raw(" ".repeat(MARKER_WIDTH))
        };

        let mut rows = 1 + body.len() + gap;
        if view.show_connector {
            rows = rows.max(2);
        }
        let connector_rows = rows - 1;
        let mut body = body.into_iter();

        let mut lines = vec![Line::from(vec![
            marker,
            date,
            Span::raw(COLUMN_GAP),
            icon,
            Span::raw(COLUMN_GAP),
            title,
        ])];

        for row in 0..connector_rows {
            let rail = if view.show_connector {
                let color = self
                    .theme
                    .tone_at(view.connector_tone(), row, connector_rows);
                Span::styled(
                    pad_right(self.icons.connector(), ICON_WIDTH),
                    Style::default().fg(color),
                )
            } else {
                Span::raw(" ".repeat(ICON_WIDTH))
            };

            let mut spans = vec![
                Span::raw(" ".repeat(MARKER_WIDTH + date_width)),
                Span::raw(COLUMN_GAP),
                rail,
            ];
            if let Some(text) = body.next() {
                spans.push(Span::raw(COLUMN_GAP));
                spans.push(text);
            }
            lines.push(Line::from(spans));
        }

        self.animate(item, lines)
    }

    /// Hide items that have not started and dim those still fading in.
    fn animate(&self, item: &AnimatedItem, mut lines: Vec<Line<'static>>) -> Vec<Line<'static>> {
        let (Some(elapsed), Some(animation)) = (self.elapsed, item.animation) else {
            return lines;
        };

        if !animation.has_started(elapsed) {
            return lines.iter().map(|_| Line::default()).collect();
        }

        if animation.progress(elapsed) < 1.0 {
            for line in &mut lines {
                for span in &mut line.spans {
                    span.style = span.style.add_modifier(Modifier::DIM);
                }
            }
        }
        lines
    }
}

/// Width of the date column: the widest date, clamped.
fn date_column_width(items: &[AnimatedItem]) -> usize {
    items
        .iter()
        .map(|item| visual_width(&item.view.date.display))
        .max()
        .unwrap_or(0)
        .clamp(DATE_MIN_WIDTH, DATE_MAX_WIDTH)
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = if self.with_border {
            let border_style = if self.focused {
                Style::default().fg(self.theme.border_focused)
            } else {
                Style::default().fg(self.theme.border)
            };

            let block = Block::default()
                .title(" Timeline ")
                .title_style(Style::default().fg(self.theme.text))
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(self.theme.base));

            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.view.is_empty() {
            let para = Paragraph::new(self.lines(inner.width));
            para.render(
                Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1),
                buf,
            );
            return;
        }

        Paragraph::new(self.lines(inner.width))
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}
