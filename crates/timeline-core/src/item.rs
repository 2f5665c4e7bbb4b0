//! Per-entry item view.
//!
//! An item renders in exactly one of three modes, checked in priority
//! order: loading, then error, else normal. Resolution turns caller props
//! into an [`ItemView`] that renderers draw without further decisions.

use serde::Serialize;

use crate::element::{ColorVariant, DateValue, ElementId, Icon, Size, Status};
use crate::node::{NodeRef, Role};
use crate::time::{FormattedDate, MountState, TimeFormatter};
use crate::variants::{connector_tone, icon_tone, Tone};

/// Title shown by an error item whose title is empty.
pub const ERROR_FALLBACK_TITLE: &str = "Error";

/// Mutually exclusive visual state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Loading,
    Error,
    Normal,
}

/// Caller-facing props for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemProps {
    pub key: Option<ElementId>,
    pub date: Option<DateValue>,
    /// Display text for the date, replacing the formatted value.
    pub date_text: Option<String>,
    pub title: String,
    pub description: String,
    pub icon: Option<Icon>,
    pub icon_color: Option<ColorVariant>,
    pub connector_color: Option<ColorVariant>,
    pub status: Status,
    pub show_connector: bool,
    pub icon_size: Option<Size>,
    pub loading: bool,
    pub error: Option<String>,
    pub class_name: Option<String>,
    pub node_ref: Option<NodeRef>,
}

impl Default for ItemProps {
    fn default() -> Self {
        Self {
            key: None,
            date: None,
            date_text: None,
            title: String::new(),
            description: String::new(),
            icon: None,
            icon_color: None,
            connector_color: None,
            status: Status::default(),
            show_connector: true,
            icon_size: None,
            loading: false,
            error: None,
            class_name: None,
            node_ref: None,
        }
    }
}

impl ItemProps {
    /// Which mode this item renders in. An empty error message does not
    /// count as an error.
    pub fn mode(&self) -> RenderMode {
        if self.loading {
            RenderMode::Loading
        } else if self.error.as_deref().is_some_and(|e| !e.is_empty()) {
            RenderMode::Error
        } else {
            RenderMode::Normal
        }
    }
}

/// Everything a renderer needs to know about one date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderContext {
    pub formatter: TimeFormatter,
    pub mount: MountState,
}

impl RenderContext {
    pub fn new(formatter: TimeFormatter, mount: MountState) -> Self {
        Self { formatter, mount }
    }

    fn date(&self, props: &ItemProps) -> FormattedDate {
        let formatted = self.formatter.format(props.date.as_ref(), self.mount);
        match &props.date_text {
            Some(text) => formatted.with_text(text.clone()),
            None => formatted,
        }
    }
}

/// Mode-specific content of a resolved item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum ItemBody {
    Loading,
    Error {
        title: String,
        message: String,
    },
    Normal {
        title: String,
        description: String,
        icon: Option<Icon>,
        icon_tone: Tone,
        connector_tone: Tone,
        /// Marked as the current step for assistive technology.
        current: bool,
    },
}

/// A fully resolved item, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub key: Option<ElementId>,
    pub date: FormattedDate,
    pub icon_size: Option<Size>,
    pub show_connector: bool,
    pub class_name: Option<String>,
    #[serde(flatten)]
    pub body: ItemBody,
    #[serde(skip)]
    pub node_ref: Option<NodeRef>,
}

impl ItemView {
    pub fn mode(&self) -> RenderMode {
        match self.body {
            ItemBody::Loading => RenderMode::Loading,
            ItemBody::Error { .. } => RenderMode::Error,
            ItemBody::Normal { .. } => RenderMode::Normal,
        }
    }

    /// Role exposed by the item's root.
    pub fn role(&self) -> Role {
        match self.body {
            ItemBody::Loading => Role::Status,
            ItemBody::Error { .. } => Role::Alert,
            ItemBody::Normal { .. } => Role::ListItem,
        }
    }

    pub fn icon_tone(&self) -> Tone {
        match &self.body {
            ItemBody::Loading => Tone::Muted,
            ItemBody::Error { .. } => Tone::Destructive,
            ItemBody::Normal { icon_tone, .. } => *icon_tone,
        }
    }

    /// Connector paint. Loading and error items draw a muted connector.
    pub fn connector_tone(&self) -> Tone {
        match &self.body {
            ItemBody::Loading => Tone::Muted,
            ItemBody::Error { .. } => connector_tone(None, Status::Pending),
            ItemBody::Normal { connector_tone, .. } => *connector_tone,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self.body, ItemBody::Normal { current: true, .. })
    }
}

/// Resolve props into a view.
pub fn resolve_item(props: &ItemProps, ctx: &RenderContext) -> ItemView {
    let body = match props.mode() {
        RenderMode::Loading => ItemBody::Loading,
        RenderMode::Error => ItemBody::Error {
            title: if props.title.is_empty() {
                ERROR_FALLBACK_TITLE.to_string()
            } else {
                props.title.clone()
            },
            message: props.error.clone().unwrap_or_default(),
        },
        RenderMode::Normal => ItemBody::Normal {
            title: props.title.clone(),
            description: props.description.clone(),
            icon: props.icon.clone(),
            icon_tone: icon_tone(props.icon_color, props.status),
            connector_tone: connector_tone(props.connector_color, props.status),
            current: props.status == Status::InProgress,
        },
    };

    // Loading items show placeholder blocks instead of a date.
    let date = match body {
        ItemBody::Loading => FormattedDate::default(),
        _ => ctx.date(props),
    };

    ItemView {
        key: props.key.clone(),
        date,
        icon_size: props.icon_size,
        show_connector: props.show_connector,
        class_name: props.class_name.clone(),
        body,
        node_ref: props.node_ref.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> ItemProps {
        ItemProps {
            date: Some("2024-01-01".into()),
            title: "Test Event".into(),
            description: "Test Description".into(),
            ..ItemProps::default()
        }
    }

    #[test]
    fn test_mode_priority() {
        let mut p = props();
        assert_eq!(p.mode(), RenderMode::Normal);

        p.error = Some("boom".into());
        assert_eq!(p.mode(), RenderMode::Error);

        p.loading = true;
        assert_eq!(p.mode(), RenderMode::Loading);
    }

    #[test]
    fn test_empty_error_is_normal() {
        let p = ItemProps {
            error: Some(String::new()),
            ..props()
        };
        assert_eq!(p.mode(), RenderMode::Normal);
    }

    #[test]
    fn test_loading_hides_content() {
        let p = ItemProps {
            loading: true,
            ..props()
        };
        let view = resolve_item(&p, &RenderContext::default());
        assert_eq!(view.body, ItemBody::Loading);
        assert_eq!(view.role(), Role::Status);
        assert!(view.date.display.is_empty());
    }

    #[test]
    fn test_error_title_fallback() {
        let p = ItemProps {
            title: String::new(),
            error: Some("X".into()),
            ..props()
        };
        let view = resolve_item(&p, &RenderContext::default());
        assert_eq!(
            view.body,
            ItemBody::Error {
                title: "Error".into(),
                message: "X".into()
            }
        );
        assert_eq!(view.role(), Role::Alert);
        assert_eq!(view.icon_tone(), Tone::Destructive);
        assert_eq!(view.connector_tone(), Tone::Muted);
    }

    #[test]
    fn test_in_progress_is_current() {
        let p = ItemProps {
            status: Status::InProgress,
            ..props()
        };
        let view = resolve_item(&p, &RenderContext::default());
        assert!(view.is_current());
        assert_eq!(view.icon_tone(), Tone::Primary);
        assert_eq!(view.connector_tone(), Tone::Gradient);
    }

    #[test]
    fn test_explicit_colors() {
        let p = ItemProps {
            status: Status::Pending,
            icon_color: Some(ColorVariant::Accent),
            connector_color: Some(ColorVariant::Secondary),
            ..props()
        };
        let view = resolve_item(&p, &RenderContext::default());
        assert_eq!(view.icon_tone(), Tone::Accent);
        assert_eq!(view.connector_tone(), Tone::Secondary);
    }

    #[test]
    fn test_date_text_override() {
        let p = ItemProps {
            date_text: Some("Q1".into()),
            ..props()
        };
        let view = resolve_item(&p, &RenderContext::default());
        assert_eq!(view.date.display, "Q1");
        assert_eq!(
            view.date.datetime.as_deref(),
            Some("2024-01-01T00:00:00.000Z")
        );
    }
}
