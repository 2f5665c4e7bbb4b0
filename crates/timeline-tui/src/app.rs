//! Demo gallery state.
//!
//! The gallery shows one example at a time with a Preview tab (the widget)
//! and a Code tab (the snippet that builds it).

use chrono::NaiveDate;
use std::cell::Cell;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use timeline_core::fixtures::{
    custom_items, error_items, loading_items, site_items, state_items,
};
use timeline_core::{
    ColorVariant, DateFormat, DateLocale, Document, Icon, LayoutProps, MountState, RenderContext,
    Size, TimeFormatter, TimelineLayout, TimelineView,
};
use tracing::{debug, info, warn};

use crate::event::Action;
use crate::tabs::Tabs;
use crate::theme::{IconSet, Theme};
use crate::timeline::TimelineWidget;

/// Milliseconds between animation ticks.
pub const TICK_MS: u64 = 50;

/// Ticks a notification stays visible (about two seconds).
const NOTIFICATION_TICKS: u8 = 40;

/// Width used to bound scrolling before the first draw.
const SCROLL_WIDTH: u16 = 80;

/// One gallery entry.
#[derive(Debug, Clone)]
pub struct Example {
    pub name: String,
    pub code: String,
    pub props: LayoutProps,
    pub formatter: TimeFormatter,
}

impl Example {
    fn new(name: &str, code: &str, props: LayoutProps) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            props,
            formatter: TimeFormatter::new(DateFormat::default(), DateLocale::default()),
        }
    }

    /// Example built from a document, showing the document as its code.
    pub fn from_document(name: &str, document: &Document) -> Self {
        Self {
            name: name.to_string(),
            code: serde_json::to_string_pretty(document).unwrap_or_default(),
            props: document.layout_props(),
            formatter: document.formatter(),
        }
    }

    /// Resolve the example for drawing.
    pub fn render(&self, mount: MountState) -> TimelineView {
        TimelineLayout::render(
            &self.props,
            &RenderContext::new(self.formatter.clone(), mount),
        )
    }
}

const BASIC_CODE: &str = "\
let props = LayoutProps::new(items).size(Size::Md);
let view = TimelineLayout::render(&props, &ctx);";

const CUSTOM_ICON_CODE: &str = "\
let props = LayoutProps::new(items)
    .size(Size::Lg)
    .icon_color(ColorVariant::Primary)
    .custom_icon(Icon::Calendar);
let view = TimelineLayout::render(&props, &ctx);";

const ANIMATED_CODE: &str = "\
let props = LayoutProps::new(items).size(Size::Md).animate(true);
let view = TimelineLayout::render(&props, &ctx);";

const STATES_CODE: &str = "\
let items = vec![
    TimelineElement::new(4, \"Completed Task\", \"2024-01-15\").status(Status::Completed),
    TimelineElement::new(5, \"In Progress Task\", \"2024-01-16\").status(Status::InProgress),
    TimelineElement::new(6, \"Pending Task\", \"2024-01-17\").status(Status::Pending),
];
let view = TimelineLayout::render(&LayoutProps::new(items), &ctx);";

const LOADING_CODE: &str = "\
let item = TimelineElement::new(7, \"Loading...\", today).loading(true);
let view = TimelineLayout::render(&LayoutProps::new(vec![item]), &ctx);";

const ERROR_CODE: &str = "\
let item = TimelineElement::new(10, \"Error State\", today)
    .status(Status::Pending)
    .error(\"Failed to load item\");
let view = TimelineLayout::render(&LayoutProps::new(vec![item]), &ctx);";

const CUSTOM_CODE: &str = "\
let items = custom_items(5, today);
let props = LayoutProps::new(items).size(Size::Sm).connector_color(ColorVariant::Accent);
let view = TimelineLayout::render(&props, &ctx);";

const EMPTY_CODE: &str = "\
let view = TimelineLayout::render(&LayoutProps::new(Vec::new()), &ctx);";

/// The built-in examples, with dated fixtures anchored at `today`.
pub fn examples(today: NaiveDate) -> Vec<Example> {
    vec![
        Example::new("Basic", BASIC_CODE, LayoutProps::new(site_items()).size(Size::Md)),
        Example::new(
            "Custom Icon",
            CUSTOM_ICON_CODE,
            LayoutProps::new(site_items())
                .size(Size::Lg)
                .icon_color(ColorVariant::Primary)
                .custom_icon(Icon::Calendar),
        ),
        Example::new(
            "Animated",
            ANIMATED_CODE,
            LayoutProps::new(site_items()).size(Size::Md).animate(true),
        ),
        Example::new("States", STATES_CODE, LayoutProps::new(state_items())),
        Example::new("Loading", LOADING_CODE, LayoutProps::new(loading_items(today))),
        Example::new("Error", ERROR_CODE, LayoutProps::new(error_items(today))),
        Example::new(
            "Custom",
            CUSTOM_CODE,
            LayoutProps::new(custom_items(5, today))
                .size(Size::Sm)
                .connector_color(ColorVariant::Accent),
        ),
        Example::new("Empty", EMPTY_CODE, LayoutProps::new(Vec::new())),
    ]
}

/// Which tab of the current example is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Preview,
    Code,
}

/// Settings the gallery starts with.
#[derive(Debug, Clone, Default)]
pub struct GalleryOptions {
    pub theme: Theme,
    pub icons: IconSet,
    /// Extra example loaded from a document, shown first.
    pub document: Option<Document>,
    /// Day the dated fixtures are anchored at; defaults to today.
    pub today: Option<NaiveDate>,
}

/// Gallery state.
#[derive(Debug)]
pub struct Gallery {
    /// Whether the gallery should quit.
    pub should_quit: bool,
    pub examples: Vec<Example>,
    pub selected: usize,
    pub view: View,
    pub scroll: u16,
    pub mount: MountState,
    pub theme: Theme,
    pub icons: IconSet,
    /// Transient status line message.
    pub notification: Option<String>,
    notification_ttl: u8,
    tick: usize,
    /// Tick at which the current example was shown.
    shown_at: usize,
    /// Content width of the body at the last draw.
    body_width: Cell<u16>,
}

impl Gallery {
    /// Create a gallery from options.
    pub fn new(options: GalleryOptions) -> Self {
        let today = options
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let mut list = Vec::new();
        if let Some(document) = &options.document {
            list.push(Example::from_document("Document", document));
        }
        list.extend(examples(today));

        Self {
            should_quit: false,
            examples: list,
            selected: 0,
            view: View::default(),
            scroll: 0,
            mount: MountState::default(),
            theme: options.theme,
            icons: options.icons,
            notification: None,
            notification_ttl: 0,
            tick: 0,
            shown_at: 0,
            body_width: Cell::new(SCROLL_WIDTH),
        }
    }

    /// The example being shown.
    pub fn current(&self) -> &Example {
        &self.examples[self.selected]
    }

    /// Seconds since the current example was shown.
    #[allow(clippy::cast_precision_loss)]
    pub fn elapsed(&self) -> f32 {
        self.tick.wrapping_sub(self.shown_at) as f32 * TICK_MS as f32 / 1000.0
    }

    /// Record that the first frame has been drawn.
    pub fn mark_mounted(&mut self) {
        if !self.mount.is_mounted() {
            self.mount.mount();
            info!("gallery mounted");
        }
    }

    /// Advance animation time and expire notifications.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        if self.notification_ttl > 0 {
            self.notification_ttl -= 1;
            if self.notification_ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextExample => self.select((self.selected + 1) % self.examples.len()),
            Action::PrevExample => self.select(
                (self.selected + self.examples.len() - 1) % self.examples.len(),
            ),
            Action::Example(index) => {
                if index < self.examples.len() {
                    self.select(index);
                }
            }
            Action::ShowPreview => self.view = View::Preview,
            Action::ShowCode => self.view = View::Code,
            Action::ToggleView => {
                self.view = match self.view {
                    View::Preview => View::Code,
                    View::Code => View::Preview,
                };
            }
            Action::Copy => self.copy_code(),
            Action::Replay => self.shown_at = self.tick,
            Action::Up => self.scroll = self.scroll.saturating_sub(1),
            Action::Down => {
                if self.scroll < self.max_scroll() {
                    self.scroll += 1;
                }
            }
            Action::None => {}
        }
    }

    fn select(&mut self, index: usize) {
        if index != self.selected {
            debug!(example = %self.examples[index].name, "example selected");
        }
        self.selected = index;
        self.scroll = 0;
        self.shown_at = self.tick;
    }

    fn max_scroll(&self) -> u16 {
        let rows = match self.view {
            View::Preview => {
                let view = self.current().render(self.mount);
                TimelineWidget::new(&view, &self.theme, &self.icons)
                    .content_height(self.body_width.get())
            }
            View::Code => self.current().code.lines().count(),
        };
        u16::try_from(rows.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Copy the current example's code to the system clipboard.
    pub fn copy_code(&mut self) {
        let name = self.current().name.clone();
        let code = self.current().code.clone();
        let copied = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(code));

        let message = match copied {
            Ok(()) => format!("Copied {name} snippet"),
            Err(e) => {
                warn!(error = %e, "clipboard unavailable");
                "Clipboard unavailable".to_string()
            }
        };
        self.notify(message);
    }

    fn notify(&mut self, message: String) {
        self.notification = Some(message);
        self.notification_ttl = NOTIFICATION_TICKS;
    }

    /// Draw the whole gallery.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let [examples_area, view_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);
        // Inside the body border.
        self.body_width.set(body_area.width.saturating_sub(2).max(1));

        let names: Vec<&str> = self.examples.iter().map(|e| e.name.as_str()).collect();
        Tabs::new(names, &self.theme)
            .select(self.selected)
            .numbered(true)
            .render(examples_area, buf);

        Tabs::new(vec!["Preview", "Code"], &self.theme)
            .select(match self.view {
                View::Preview => 0,
                View::Code => 1,
            })
            .render(view_area, buf);

        match self.view {
            View::Preview => {
                let view = self.current().render(self.mount);
                let mut widget = TimelineWidget::new(&view, &self.theme, &self.icons)
                    .frame(self.tick / 2)
                    .scroll(self.scroll)
                    .with_border(true)
                    .focused(true);
                if self.current().props.animate {
                    widget = widget.elapsed(self.elapsed());
                }
                widget.render(body_area, buf);
            }
            View::Code => self.render_code(body_area, buf),
        }

        self.render_footer(footer_area, buf);
    }

    fn render_code(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Code ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_focused))
            .style(Style::default().bg(self.theme.base));

        let lines: Vec<Line<'_>> = self
            .current()
            .code
            .lines()
            .map(|line| Line::styled(line, Style::default().fg(self.theme.secondary)))
            .collect();

        Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll, 0))
            .render(area, buf);
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let line = match &self.notification {
            Some(message) => Line::from(Span::styled(
                message.as_str(),
                Style::default()
                    .fg(self.theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            None => {
                let key = Style::default().fg(self.theme.text);
                let hint = Style::default().fg(self.theme.muted);
                Line::from(vec![
                    Span::styled("Tab", key),
                    Span::styled(" next  ", hint),
                    Span::styled("p/c", key),
                    Span::styled(" preview/code  ", hint),
                    Span::styled("y", key),
                    Span::styled(" copy  ", hint),
                    Span::styled("r", key),
                    Span::styled(" replay  ", hint),
                    Span::styled("q", key),
                    Span::styled(" quit", hint),
                ])
            }
        };
        Paragraph::new(line).render(area, buf);
    }
}
