//! HTML rendering of resolved timeline views.
//!
//! [`render_timeline`] builds an element tree carrying the classes from
//! [`crate::variants`] and the accessibility roles tests and assistive
//! technology depend on. [`to_html`] serialises any element.

use crate::element::Icon;
use crate::item::{ItemBody, ItemView};
use crate::layout::{Animation, AnimatedItem, TimelineView};
use crate::node::{Element, Node, NodeRef};
use crate::time::FormattedDate;
use crate::variants::{
    connector_classes, icon_classes, icon_glyph_classes, item_classes, join_classes,
    timeline_classes, Tone, DESCRIPTION_CLASSES, DESTRUCTIVE_TEXT, EMPTY_CLASSES,
    ERROR_GLYPH_CLASSES, ERROR_ICON_CLASSES, GRID_CLASSES, TIME_CLASSES, TITLE_CLASSES,
};

const PULSE: &str = "bg-muted rounded animate-pulse";

fn attach(element: Element, node_ref: Option<&NodeRef>) -> Element {
    if let Some(node_ref) = node_ref {
        node_ref.attach(&element);
    }
    element
}

/// Build the element tree for a rendered timeline.
pub fn render_timeline(view: &TimelineView) -> Element {
    match view {
        TimelineView::Empty {
            message,
            class_name,
            node_ref,
        } => attach(
            render_empty(message, class_name.as_deref()),
            node_ref.as_ref(),
        ),
        TimelineView::List {
            size,
            class_name,
            items,
            node_ref,
        } => {
            let list = items.iter().fold(
                Element::new("ol")
                    .attr("aria-label", "Timeline")
                    .class(timeline_classes(*size, class_name.as_deref())),
                |list, item| list.child(render_animated(item)),
            );
            attach(list, node_ref.as_ref())
        }
    }
}

/// The empty-state view.
pub fn render_empty(message: &str, class_name: Option<&str>) -> Element {
    Element::new("div")
        .class(join_classes([EMPTY_CLASSES, class_name.unwrap_or_default()]))
        .child(
            Element::new("p")
                .class("text-sm text-muted-foreground")
                .text(message),
        )
}

fn render_animated(item: &AnimatedItem) -> Element {
    let element = render_item(&item.view);
    match &item.animation {
        Some(animation) => decorate(element, animation),
        None => element,
    }
}

/// Attach the entrance transition to an item's root.
fn decorate(element: Element, animation: &Animation) -> Element {
    element.attr("data-motion", "fade-slide").attr(
        "style",
        format!(
            "--motion-delay: {:.1}s; --motion-duration: {:.1}s; --motion-offset: {}px",
            animation.delay, animation.duration, animation.offset_y
        ),
    )
}

/// Build one list item in its render mode.
pub fn render_item(view: &ItemView) -> Element {
    let element = match &view.body {
        ItemBody::Loading => render_loading(view),
        ItemBody::Error { title, message } => render_error(view, title, message),
        ItemBody::Normal {
            title,
            description,
            icon,
            ..
        } => render_normal(view, title, description, icon.as_ref()),
    };
    attach(element, view.node_ref.as_ref())
}

fn render_loading(view: &ItemView) -> Element {
    let mut rail = Element::new("div")
        .class("mx-3 flex flex-col items-center justify-start gap-y-2")
        .child(
            Element::new("div")
                .class(join_classes([
                    "relative flex h-8 w-8 items-center justify-center rounded-full",
                    "bg-muted ring-8 ring-background animate-pulse",
                ]))
                .child(
                    Element::new("div")
                        .attr("data-icon", Icon::Loader.name())
                        .attr("aria-hidden", "true")
                        .class("h-4 w-4 animate-spin text-muted-foreground"),
                ),
        );
    if view.show_connector {
        rail = rail.child(Element::new("div").class("h-full w-0.5 bg-muted animate-pulse"));
    }

    Element::new("li")
        .attr("role", "status")
        .class(item_classes(view.class_name.as_deref(), false))
        .child(
            Element::new("div")
                .class(GRID_CLASSES)
                .child(
                    Element::new("div")
                        .class("text-right pr-4")
                        .child(Element::new("div").class(join_classes(["h-4 w-16", PULSE]))),
                )
                .child(rail)
                .child(
                    Element::new("div").class("flex flex-col gap-2 pl-2").child(
                        Element::new("div")
                            .class("space-y-2")
                            .child(Element::new("div").class(join_classes(["h-4 w-24", PULSE])))
                            .child(Element::new("div").class(join_classes(["h-3 w-48", PULSE]))),
                    ),
                ),
        )
}

fn render_error(view: &ItemView, title: &str, message: &str) -> Element {
    let mut rail = Element::new("div")
        .class("mx-3 flex flex-col items-center justify-start gap-y-2")
        .child(
            Element::new("div")
                .class(ERROR_ICON_CLASSES)
                .child(glyph(&Icon::AlertCircle, ERROR_GLYPH_CLASSES)),
        );
    if view.show_connector {
        rail = rail.child(connector(view.connector_tone()));
    }

    Element::new("li")
        .attr("role", "alert")
        .class(item_classes(view.class_name.as_deref(), true))
        .child(
            Element::new("div")
                .class(GRID_CLASSES)
                .child(
                    Element::new("div")
                        .class("text-right pr-4")
                        .child(render_time(&view.date, Some(DESTRUCTIVE_TEXT))),
                )
                .child(rail)
                .child(content(
                    heading(title, Some(DESTRUCTIVE_TEXT)),
                    paragraph(message, Some(DESTRUCTIVE_TEXT)),
                )),
        )
}

fn render_normal(
    view: &ItemView,
    title: &str,
    description: &str,
    icon: Option<&Icon>,
) -> Element {
    let icon_box = Element::new("div")
        .class(icon_classes(view.icon_tone(), view.icon_size))
        .child(match icon {
            Some(icon) => glyph(icon, &icon_glyph_classes(view.icon_size)),
            None => Element::new("div").class(icon_glyph_classes(view.icon_size)),
        });

    let mut rail = Element::new("div")
        .class("mx-3 flex flex-col h-full w-6 items-center justify-start gap-y-2")
        .child(icon_box);
    if view.show_connector {
        rail = rail.child(connector(view.connector_tone()));
    }

    let mut grid = Element::new("div").class(GRID_CLASSES);
    if view.is_current() {
        grid = grid.attr("aria-current", "step");
    }
    let grid = grid
        .child(render_time(&view.date, Some("text-right pr-4")))
        .child(rail)
        .child(content(
            heading(title, None),
            paragraph(description, None),
        ));

    Element::new("li")
        .class(item_classes(view.class_name.as_deref(), false))
        .child(grid)
}

/// A `<time>` element. The `datetime` attribute is omitted for bad dates.
pub fn render_time(date: &FormattedDate, class_name: Option<&str>) -> Element {
    let mut time = Element::new("time");
    if let Some(iso) = &date.datetime {
        time = time.attr("datetime", iso.clone());
    }
    time.class(join_classes([TIME_CLASSES, class_name.unwrap_or_default()]))
        .text(date.display.clone())
}

fn glyph(icon: &Icon, classes: &str) -> Element {
    let element = Element::new("div")
        .attr("data-icon", icon.name())
        .attr("aria-hidden", "true")
        .class(classes);
    match icon {
        Icon::Custom(text) => element.text(text.clone()),
        _ => element,
    }
}

fn connector(tone: Tone) -> Element {
    Element::new("div").class(connector_classes(tone))
}

fn heading(title: &str, class_name: Option<&str>) -> Element {
    Element::new("div").class("flex items-center gap-4").child(
        Element::new("h3")
            .class(join_classes([TITLE_CLASSES, class_name.unwrap_or_default()]))
            .text(title),
    )
}

fn paragraph(text: &str, class_name: Option<&str>) -> Element {
    Element::new("p")
        .class(join_classes([
            DESCRIPTION_CLASSES,
            class_name.unwrap_or_default(),
        ]))
        .text(text)
}

fn content(header: Element, body: Element) -> Element {
    Element::new("div")
        .class("flex flex-col gap-2 pl-2")
        .child(header)
        .child(body)
}

/// Serialise an element tree to HTML.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(value, out, true);
        out.push('"');
    }
    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(el) => write_element(el, out),
            Node::Text(text) => escape_into(text, out, false),
        }
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn escape_into(text: &str, out: &mut String, attribute: bool) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ColorVariant, Size, Status, TimelineElement};
    use crate::item::RenderContext;
    use crate::layout::{LayoutProps, Timeline, TimelineLayout, TimelineProps};
    use crate::node::Role;
    use crate::time::MountState;

    fn render(props: &LayoutProps) -> Element {
        render_timeline(&TimelineLayout::render(props, &RenderContext::default()))
    }

    fn entries() -> Vec<TimelineElement> {
        vec![
            TimelineElement::new(1, "First event", "2024-01-01").description("one"),
            TimelineElement::new(2, "Second event", "2024-02-01")
                .description("two")
                .status(Status::InProgress),
            TimelineElement::new(3, "Third event", "2024-03-01")
                .description("three")
                .status(Status::Pending),
        ]
    }

    #[test]
    fn test_list_item_count_and_order() {
        let root = render(&LayoutProps::new(entries()));
        let items = root.find_all_by_role(Role::ListItem);
        assert_eq!(items.len(), 3);

        let titles: Vec<String> = root
            .find_all_by_tag("h3")
            .iter()
            .map(|h| h.text_content())
            .collect();
        assert_eq!(titles, vec!["Third event", "Second event", "First event"]);
    }

    #[test]
    fn test_last_item_has_no_connector() {
        let root = render(&LayoutProps::new(entries()));
        let items = root.find_all_by_tag("li");
        let has_connector: Vec<bool> = items
            .iter()
            .map(|li| li.find_by_classes(&["w-0.5", "h-full"]).is_some())
            .collect();
        assert_eq!(has_connector, vec![true, true, false]);
    }

    #[test]
    fn test_empty_state() {
        let root = render(&LayoutProps::new(vec![]));
        assert!(root.has_text("No timeline items to display"));
        assert!(root.find_all_by_role(Role::ListItem).is_empty());
    }

    #[test]
    fn test_loading_item() {
        let items = vec![TimelineElement::new(1, "Secret title", "2024-01-01")
            .description("Secret description")
            .loading(true)];
        let root = render(&LayoutProps::new(items));
        assert!(root.find_by_role(Role::Status).is_some());
        let text = root.text_content();
        assert!(!text.contains("Secret title"));
        assert!(!text.contains("Secret description"));
    }

    #[test]
    fn test_error_item() {
        let items = vec![TimelineElement::new(1, "", "2024-01-01").error("X")];
        let root = render(&LayoutProps::new(items));
        assert!(root.find_by_role(Role::Alert).is_some());
        assert!(root.has_text("X"));
        assert!(root.has_text("Error"));
    }

    #[test]
    fn test_error_icon_ignores_size() {
        for size in [Size::Sm, Size::Md, Size::Lg] {
            let items = vec![TimelineElement::new(1, "", "2024-01-01").error("X")];
            let root = render(&LayoutProps::new(items).size(size));
            let icon = root
                .find_by_classes(&["rounded-full", "bg-destructive/20"])
                .unwrap();
            assert!(icon.has_class("h-8"));
            assert!(icon.has_class("w-8"));
            assert!(!icon.has_class("aspect-square"));

            let glyph = root
                .descendants()
                .into_iter()
                .find(|el| el.get_attr("data-icon") == Some("alert-circle"))
                .unwrap();
            assert!(glyph.has_class("h-4"));
            assert!(glyph.has_class("text-destructive"));
            assert!(!glyph.has_class("text-primary-foreground"));
        }
    }

    #[test]
    fn test_accent_color_wins() {
        let items = vec![
            TimelineElement::new(1, "a", "2024-01-01").color(ColorVariant::Accent),
            TimelineElement::new(2, "b", "2024-01-02").color(ColorVariant::Accent),
        ];
        let props = LayoutProps::new(items)
            .icon_color(ColorVariant::Primary)
            .connector_color(ColorVariant::Muted);
        let root = render(&props);
        let icon = root
            .find_by_classes(&["rounded-full", "aspect-square"])
            .unwrap();
        assert!(icon.has_class("bg-accent"));
        let connector = root.find_by_classes(&["w-0.5", "h-full"]).unwrap();
        assert!(connector.has_class("bg-accent"));
    }

    #[test]
    fn test_time_attribute() {
        let items = vec![TimelineElement::new(1, "a", "2024-01-01")];
        let root = render(&LayoutProps::new(items));
        let time = root.find_by_tag("time").unwrap();
        assert_eq!(time.get_attr("datetime"), Some("2024-01-01T00:00:00.000Z"));
    }

    #[test]
    fn test_invalid_time() {
        let items = vec![TimelineElement::new(1, "a", "yesterday-ish")];
        let root = render(&LayoutProps::new(items));
        let time = root.find_by_tag("time").unwrap();
        assert!(time.text_content().is_empty());
        assert!(time.get_attr("datetime").is_none());
    }

    #[test]
    fn test_in_progress_marks_current_step() {
        let root = render(&LayoutProps::new(entries()));
        let current: Vec<&Element> = root
            .descendants()
            .into_iter()
            .filter(|el| el.get_attr("aria-current") == Some("step"))
            .collect();
        assert_eq!(current.len(), 1);
        assert!(current[0].text_content().contains("Second event"));
    }

    #[test]
    fn test_size_variants() {
        let root = render(&LayoutProps::new(entries()).size(Size::Lg));
        assert!(root.has_class("flex-col"));
        assert!(root.has_class("gap-8"));
        let icon = root
            .find_by_classes(&["relative", "flex", "items-center", "justify-center", "rounded-full"])
            .unwrap();
        assert!(icon.has_class("h-10"));
        assert!(icon.has_class("w-10"));
    }

    #[test]
    fn test_animation_decorator() {
        let root = render(&LayoutProps::new(entries()));
        let styles: Vec<&str> = root
            .find_all_by_tag("li")
            .iter()
            .filter_map(|li| li.get_attr("style"))
            .collect();
        assert_eq!(styles.len(), 3);
        assert!(styles[1].contains("--motion-delay: 0.1s"));

        let still = render(&LayoutProps::new(entries()).animate(false));
        assert!(still.find_all_by_tag("li").iter().all(|li| li.get_attr("style").is_none()));
    }

    #[test]
    fn test_node_refs_attach() {
        let list_ref = NodeRef::new();
        let root = render(&LayoutProps::new(entries()).node_ref(list_ref.clone()));
        assert_eq!(list_ref.get(), Some(root));

        let empty_ref = NodeRef::new();
        let props = TimelineProps {
            node_ref: Some(empty_ref.clone()),
            ..TimelineProps::default()
        };
        render_timeline(&Timeline::render(&props, &RenderContext::default()));
        assert_eq!(empty_ref.get().map(|el| el.tag), Some("div"));
    }

    #[test]
    fn test_mounted_display() {
        let items = vec![TimelineElement::new(1, "a", "2024-01-01")];
        let ctx = RenderContext {
            mount: MountState::Mounted,
            ..RenderContext::default()
        };
        let root = render_timeline(&TimelineLayout::render(&LayoutProps::new(items), &ctx));
        assert_eq!(root.find_by_tag("time").unwrap().text_content(), "Jan 01, 2024");
    }

    #[test]
    fn test_to_html_escapes() {
        let el = Element::new("p").attr("title", "a\"b").text("<x> & y");
        assert_eq!(to_html(&el), r#"<p title="a&quot;b">&lt;x&gt; &amp; y</p>"#);
    }

    #[test]
    fn test_empty_html_snapshot() {
        let root = render(&LayoutProps::new(vec![]));
        insta::assert_snapshot!(
            to_html(&root),
            @r#"<div class="flex flex-col items-center justify-center p-8 text-center"><p class="text-sm text-muted-foreground">No timeline items to display</p></div>"#
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let props = LayoutProps::new(entries());
        assert_eq!(to_html(&render(&props)), to_html(&render(&props)));
    }
}
