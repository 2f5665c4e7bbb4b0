//! Timeline container and ordering policy.
//!
//! This module provides:
//! - [`Timeline`] - the container: empty state, or an ordered list whose
//!   items get the icon size and connector flag injected
//! - [`TimelineLayout`] - maps entries to item props in reversed order with
//!   caller defaults, and staggers an entrance animation
//! - [`Animation`] - the cosmetic fade/slide-in decorator

use serde::Serialize;
use tracing::debug;

use crate::element::{ColorVariant, Icon, Size, TimelineElement};
use crate::item::{resolve_item, ItemProps, ItemView, RenderContext};
use crate::node::NodeRef;

/// Text of the empty-state view.
pub const EMPTY_MESSAGE: &str = "No timeline items to display";

/// Delay added per item position, in seconds.
pub const STAGGER_STEP: f32 = 0.1;

/// Duration of the entrance transition, in seconds.
pub const FADE_DURATION: f32 = 0.5;

/// Vertical distance an item slides in from.
pub const SLIDE_OFFSET: f32 = 20.0;

/// Fade/slide-in transition applied around one item view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animation {
    pub delay: f32,
    pub duration: f32,
    pub offset_y: f32,
}

impl Animation {
    /// Transition for the item at `index`, delayed linearly by position.
    #[allow(clippy::cast_precision_loss)]
    pub fn staggered(index: usize) -> Self {
        Self {
            delay: index as f32 * STAGGER_STEP,
            duration: FADE_DURATION,
            offset_y: SLIDE_OFFSET,
        }
    }

    /// Transition progress in `[0, 1]` after `elapsed` seconds.
    pub fn progress(&self, elapsed: f32) -> f32 {
        if elapsed <= self.delay {
            0.0
        } else if self.duration <= 0.0 {
            1.0
        } else {
            ((elapsed - self.delay) / self.duration).min(1.0)
        }
    }

    pub fn opacity_at(&self, elapsed: f32) -> f32 {
        self.progress(elapsed)
    }

    pub fn offset_at(&self, elapsed: f32) -> f32 {
        self.offset_y * (1.0 - self.progress(elapsed))
    }

    /// Whether the item has started appearing.
    pub fn has_started(&self, elapsed: f32) -> bool {
        elapsed >= self.delay
    }
}

/// An item view with its optional entrance animation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimatedItem {
    #[serde(flatten)]
    pub view: ItemView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// Result of rendering the container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TimelineView {
    Empty {
        message: String,
        class_name: Option<String>,
        #[serde(skip)]
        node_ref: Option<NodeRef>,
    },
    List {
        size: Size,
        class_name: Option<String>,
        items: Vec<AnimatedItem>,
        #[serde(skip)]
        node_ref: Option<NodeRef>,
    },
}

impl TimelineView {
    pub fn items(&self) -> &[AnimatedItem] {
        match self {
            Self::Empty { .. } => &[],
            Self::List { items, .. } => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Props for the container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimelineProps {
    pub size: Size,
    pub icon_size: Option<Size>,
    pub class_name: Option<String>,
    /// Replaces [`EMPTY_MESSAGE`] in the empty state.
    pub empty_message: Option<String>,
    pub items: Vec<ItemProps>,
    pub node_ref: Option<NodeRef>,
}

/// The container view.
pub struct Timeline;

impl Timeline {
    /// Render the container. Only the last item suppresses its connector.
    pub fn render(props: &TimelineProps, ctx: &RenderContext) -> TimelineView {
        if props.items.is_empty() {
            return TimelineView::Empty {
                message: props
                    .empty_message
                    .clone()
                    .unwrap_or_else(|| EMPTY_MESSAGE.to_string()),
                class_name: props.class_name.clone(),
                node_ref: props.node_ref.clone(),
            };
        }

        let last = props.items.len() - 1;
        let items = props
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let injected = ItemProps {
                    icon_size: props.icon_size,
                    show_connector: index != last,
                    ..item.clone()
                };
                AnimatedItem {
                    view: resolve_item(&injected, ctx),
                    animation: None,
                }
            })
            .collect();

        TimelineView::List {
            size: props.size,
            class_name: props.class_name.clone(),
            items,
            node_ref: props.node_ref.clone(),
        }
    }
}

/// Props for the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutProps {
    pub items: Vec<TimelineElement>,
    pub size: Size,
    pub icon_color: Option<ColorVariant>,
    pub connector_color: Option<ColorVariant>,
    pub custom_icon: Option<Icon>,
    pub animate: bool,
    pub class_name: Option<String>,
    pub node_ref: Option<NodeRef>,
}

impl Default for LayoutProps {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            size: Size::default(),
            icon_color: None,
            connector_color: None,
            custom_icon: None,
            animate: true,
            class_name: None,
            node_ref: None,
        }
    }
}

impl LayoutProps {
    pub fn new(items: Vec<TimelineElement>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn icon_color(mut self, color: ColorVariant) -> Self {
        self.icon_color = Some(color);
        self
    }

    #[must_use]
    pub fn connector_color(mut self, color: ColorVariant) -> Self {
        self.connector_color = Some(color);
        self
    }

    #[must_use]
    pub fn custom_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.custom_icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }
}

/// The ordering policy on top of [`Timeline`].
pub struct TimelineLayout;

impl TimelineLayout {
    /// Item props for every entry, in reversed display order.
    pub fn item_props(props: &LayoutProps) -> Vec<ItemProps> {
        let last = props.items.len().saturating_sub(1);
        props
            .items
            .iter()
            .rev()
            .enumerate()
            .map(|(index, entry)| ItemProps {
                key: Some(entry.id.clone()),
                date: entry.date.clone(),
                title: entry.title.clone(),
                description: entry.description.clone(),
                icon: entry.icon.clone().or_else(|| props.custom_icon.clone()),
                icon_color: entry.color.or(props.icon_color),
                connector_color: entry.color.or(props.connector_color),
                status: entry.status,
                show_connector: index != last,
                icon_size: Some(props.size),
                loading: entry.loading,
                error: entry.error.clone(),
                ..ItemProps::default()
            })
            .collect()
    }

    pub fn render(props: &LayoutProps, ctx: &RenderContext) -> TimelineView {
        let container = TimelineProps {
            size: props.size,
            icon_size: Some(props.size),
            class_name: props.class_name.clone(),
            empty_message: None,
            items: Self::item_props(props),
            node_ref: props.node_ref.clone(),
        };

        let mut view = Timeline::render(&container, ctx);
        if props.animate {
            if let TimelineView::List { items, .. } = &mut view {
                for (index, item) in items.iter_mut().enumerate() {
                    item.animation = Some(Animation::staggered(index));
                }
            }
        }

        debug!(
            entries = props.items.len(),
            size = props.size.as_str(),
            animate = props.animate,
            "timeline layout rendered"
        );
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementId, Status};
    use crate::item::{ItemBody, RenderMode};
    use crate::variants::Tone;

    fn entries() -> Vec<TimelineElement> {
        vec![
            TimelineElement::new(1, "First event", "2024-01-01"),
            TimelineElement::new(2, "Second event", "2024-02-01").status(Status::InProgress),
            TimelineElement::new(3, "Third event", "2024-03-01").status(Status::Pending),
        ]
    }

    fn titles(view: &TimelineView) -> Vec<String> {
        view.items()
            .iter()
            .map(|item| match &item.view.body {
                ItemBody::Normal { title, .. } | ItemBody::Error { title, .. } => title.clone(),
                ItemBody::Loading => String::new(),
            })
            .collect()
    }

    #[test]
    fn test_reversed_order() {
        let view = TimelineLayout::render(&LayoutProps::new(entries()), &RenderContext::default());
        assert_eq!(view.items().len(), 3);
        assert_eq!(titles(&view), vec!["Third event", "Second event", "First event"]);
    }

    #[test]
    fn test_only_first_entry_drops_connector() {
        let view = TimelineLayout::render(&LayoutProps::new(entries()), &RenderContext::default());
        let connectors: Vec<bool> = view.items().iter().map(|i| i.view.show_connector).collect();
        assert_eq!(connectors, vec![true, true, false]);
        assert_eq!(view.items()[2].view.key, Some(ElementId::Number(1)));
    }

    #[test]
    fn test_empty_items() {
        let view = TimelineLayout::render(&LayoutProps::new(vec![]), &RenderContext::default());
        assert!(view.is_empty());
        assert!(view.items().is_empty());
        match view {
            TimelineView::Empty { message, .. } => assert_eq!(message, EMPTY_MESSAGE),
            TimelineView::List { .. } => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_custom_empty_message() {
        let props = TimelineProps {
            empty_message: Some("Nothing yet".into()),
            ..TimelineProps::default()
        };
        match Timeline::render(&props, &RenderContext::default()) {
            TimelineView::Empty { message, .. } => assert_eq!(message, "Nothing yet"),
            TimelineView::List { .. } => panic!("expected empty state"),
        }
    }

    #[test]
    fn test_container_injects_connector_and_icon_size() {
        let props = TimelineProps {
            icon_size: Some(Size::Lg),
            items: vec![ItemProps::default(), ItemProps::default()],
            ..TimelineProps::default()
        };
        let view = Timeline::render(&props, &RenderContext::default());
        let items = view.items();
        assert!(items[0].view.show_connector);
        assert!(!items[1].view.show_connector);
        assert!(items.iter().all(|i| i.view.icon_size == Some(Size::Lg)));
        assert!(items.iter().all(|i| i.animation.is_none()));
    }

    #[test]
    fn test_entry_color_beats_defaults() {
        let items = vec![TimelineElement::new(1, "Accent", "2024-01-01").color(ColorVariant::Accent)];
        let props = LayoutProps::new(items)
            .icon_color(ColorVariant::Secondary)
            .connector_color(ColorVariant::Muted);
        let view = TimelineLayout::render(&props, &RenderContext::default());
        assert_eq!(view.items()[0].view.icon_tone(), Tone::Accent);
    }

    #[test]
    fn test_defaults_apply_without_entry_color() {
        let props = LayoutProps::new(entries())
            .icon_color(ColorVariant::Secondary)
            .connector_color(ColorVariant::Accent);
        let view = TimelineLayout::render(&props, &RenderContext::default());
        for item in view.items() {
            assert_eq!(item.view.icon_tone(), Tone::Secondary);
            assert_eq!(item.view.connector_tone(), Tone::Accent);
        }
    }

    #[test]
    fn test_custom_icon_fallback() {
        let mut items = entries();
        items[0] = items[0].clone().icon(Icon::Check);
        let props = LayoutProps::new(items).custom_icon(Icon::Calendar);
        let view = TimelineLayout::render(&props, &RenderContext::default());
        let icons: Vec<Option<Icon>> = view
            .items()
            .iter()
            .map(|item| match &item.view.body {
                ItemBody::Normal { icon, .. } => icon.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(
            icons,
            vec![Some(Icon::Calendar), Some(Icon::Calendar), Some(Icon::Check)]
        );
    }

    #[test]
    fn test_stagger() {
        let view = TimelineLayout::render(&LayoutProps::new(entries()), &RenderContext::default());
        let delays: Vec<f32> = view
            .items()
            .iter()
            .filter_map(|i| i.animation.map(|a| a.delay))
            .collect();
        assert_eq!(delays.len(), 3);
        assert!((delays[1] - 0.1).abs() < f32::EPSILON);
        assert!((delays[2] - 0.2).abs() < 1e-6);

        let still = TimelineLayout::render(
            &LayoutProps::new(entries()).animate(false),
            &RenderContext::default(),
        );
        assert!(still.items().iter().all(|i| i.animation.is_none()));
    }

    #[test]
    fn test_animation_progress() {
        let anim = Animation::staggered(2);
        assert!(!anim.has_started(0.1));
        assert!(anim.opacity_at(0.1).abs() < f32::EPSILON);
        assert!((anim.offset_at(0.0) - SLIDE_OFFSET).abs() < f32::EPSILON);
        assert!((anim.opacity_at(5.0) - 1.0).abs() < f32::EPSILON);
        assert!(anim.offset_at(5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_render_modes_survive_layout() {
        let items = vec![
            TimelineElement::new(1, "ok", "2024-01-01"),
            TimelineElement::new(2, "broken", "2024-01-02").error("Failed to load item"),
            TimelineElement::new(3, "wait", "2024-01-03").loading(true),
        ];
        let view = TimelineLayout::render(&LayoutProps::new(items), &RenderContext::default());
        let modes: Vec<RenderMode> = view.items().iter().map(|i| i.view.mode()).collect();
        assert_eq!(
            modes,
            vec![RenderMode::Loading, RenderMode::Error, RenderMode::Normal]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let props = LayoutProps::new(entries()).size(Size::Lg);
        let ctx = RenderContext::default();
        assert_eq!(
            TimelineLayout::render(&props, &ctx),
            TimelineLayout::render(&props, &ctx)
        );
    }
}
