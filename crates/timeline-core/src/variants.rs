//! Style-class lookup tables.
//!
//! Every class string the timeline emits comes from a pure function of
//! (size, tone, status). Tones are resolved first, then mapped to classes,
//! so renderers that do not speak CSS (the terminal widget) can share the
//! same decision table.

use serde::Serialize;

use crate::element::{ColorVariant, Size, Status};

/// Resolved paint for an icon or connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Primary,
    Secondary,
    Muted,
    Accent,
    /// Primary fading into muted, used by in-progress connectors.
    Gradient,
    Destructive,
}

impl From<ColorVariant> for Tone {
    fn from(color: ColorVariant) -> Self {
        match color {
            ColorVariant::Primary => Self::Primary,
            ColorVariant::Secondary => Self::Secondary,
            ColorVariant::Muted => Self::Muted,
            ColorVariant::Accent => Self::Accent,
        }
    }
}

/// Icon tone: explicit color, else the status default.
///
/// In-progress icons have no dedicated paint and fall back to primary.
pub fn icon_tone(color: Option<ColorVariant>, status: Status) -> Tone {
    match (color, status) {
        (Some(color), _) => color.into(),
        (None, Status::Completed | Status::InProgress) => Tone::Primary,
        (None, Status::Pending) => Tone::Muted,
    }
}

/// Connector tone: explicit color, else the status default.
pub fn connector_tone(color: Option<ColorVariant>, status: Status) -> Tone {
    match (color, status) {
        (Some(color), _) => color.into(),
        (None, Status::Completed) => Tone::Primary,
        (None, Status::InProgress) => Tone::Gradient,
        (None, Status::Pending) => Tone::Muted,
    }
}

pub fn tone_background(tone: Tone) -> &'static str {
    match tone {
        Tone::Primary => "bg-primary",
        Tone::Secondary => "bg-secondary",
        Tone::Muted => "bg-muted",
        Tone::Accent => "bg-accent",
        Tone::Gradient => "bg-gradient-to-b from-primary to-muted",
        Tone::Destructive => "bg-destructive/20",
    }
}

/// Join class fragments, skipping empty ones.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn timeline_gap(size: Size) -> &'static str {
    match size {
        Size::Sm => "gap-4",
        Size::Md => "gap-6",
        Size::Lg => "gap-8",
    }
}

/// Classes for the ordered list container.
pub fn timeline_classes(size: Size, class_name: Option<&str>) -> String {
    join_classes([
        "flex flex-col",
        timeline_gap(size),
        class_name.unwrap_or_default(),
        "flex min-h-80 w-full justify-center items-center",
    ])
}

pub const EMPTY_CLASSES: &str = "flex flex-col items-center justify-center p-8 text-center";

pub const ITEM_CLASSES: &str = "relative rounded-lg transition-colors duration-200 w-fit";

pub const ERROR_ITEM_CLASSES: &str = "border border-destructive/50 bg-destructive/10";

pub const GRID_CLASSES: &str = "grid grid-cols-[minmax(auto,8rem)_auto_1fr] items-start px-4";

pub const TIME_CLASSES: &str = "text-sm font-medium tracking-tight text-muted-foreground";

pub const TITLE_CLASSES: &str = "font-semibold leading-none tracking-tight text-secondary-foreground";

pub const DESCRIPTION_CLASSES: &str = "text-sm text-muted-foreground max-w-sm";

pub const DESTRUCTIVE_TEXT: &str = "text-destructive";

/// The error icon keeps one size whatever the size variant.
pub const ERROR_ICON_CLASSES: &str =
    "relative flex h-8 w-8 items-center justify-center rounded-full bg-destructive/20 ring-8 ring-background";

pub const ERROR_GLYPH_CLASSES: &str = "h-4 w-4 text-destructive";

/// Classes for one list item. Error items get the destructive frame.
pub fn item_classes(class_name: Option<&str>, errored: bool) -> String {
    join_classes([
        ITEM_CLASSES,
        class_name.unwrap_or_default(),
        if errored { ERROR_ITEM_CLASSES } else { "" },
    ])
}

fn icon_box(icon_size: Option<Size>) -> &'static str {
    match icon_size {
        None | Some(Size::Sm) => "h-6 w-6",
        Some(Size::Md) => "h-8 w-8",
        Some(Size::Lg) => "h-10 w-10",
    }
}

fn glyph_box(icon_size: Option<Size>) -> &'static str {
    match icon_size {
        None | Some(Size::Sm) => "h-4 w-4",
        Some(Size::Md) => "h-5 w-5",
        Some(Size::Lg) => "h-6 w-6",
    }
}

/// Classes for the round icon container.
pub fn icon_classes(tone: Tone, icon_size: Option<Size>) -> String {
    join_classes([
        "relative flex items-center justify-center rounded-full",
        "p-2.5 aspect-square",
        tone_background(tone),
        icon_box(icon_size),
    ])
}

/// Classes for the glyph inside the icon container.
pub fn icon_glyph_classes(icon_size: Option<Size>) -> String {
    join_classes([
        "flex items-center justify-center text-primary-foreground",
        glyph_box(icon_size),
    ])
}

pub fn connector_classes(tone: Tone) -> String {
    join_classes(["w-0.5", tone_background(tone), "h-full"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_color_wins() {
        for status in [Status::Completed, Status::InProgress, Status::Pending] {
            assert_eq!(icon_tone(Some(ColorVariant::Accent), status), Tone::Accent);
            assert_eq!(
                connector_tone(Some(ColorVariant::Accent), status),
                Tone::Accent
            );
        }
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(icon_tone(None, Status::Completed), Tone::Primary);
        assert_eq!(icon_tone(None, Status::InProgress), Tone::Primary);
        assert_eq!(icon_tone(None, Status::Pending), Tone::Muted);

        assert_eq!(connector_tone(None, Status::Completed), Tone::Primary);
        assert_eq!(connector_tone(None, Status::InProgress), Tone::Gradient);
        assert_eq!(connector_tone(None, Status::Pending), Tone::Muted);
    }

    #[test]
    fn test_timeline_classes() {
        assert_eq!(
            timeline_classes(Size::Lg, None),
            "flex flex-col gap-8 flex min-h-80 w-full justify-center items-center"
        );
        assert!(timeline_classes(Size::Sm, Some("my-timeline")).contains("gap-4 my-timeline"));
    }

    #[test]
    fn test_icon_sizes() {
        assert!(icon_classes(Tone::Primary, None).ends_with("h-6 w-6"));
        assert!(icon_classes(Tone::Primary, Some(Size::Md)).ends_with("h-8 w-8"));
        assert!(icon_classes(Tone::Primary, Some(Size::Lg)).ends_with("h-10 w-10"));
        assert!(icon_glyph_classes(Some(Size::Lg)).ends_with("h-6 w-6"));
    }

    #[test]
    fn test_join_classes_skips_empty() {
        assert_eq!(join_classes(["a", "", "  ", "b"]), "a b");
        assert_eq!(item_classes(None, false), ITEM_CLASSES);
        assert!(item_classes(Some("x"), true).ends_with(ERROR_ITEM_CLASSES));
    }
}
