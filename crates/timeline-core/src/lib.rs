//! timeline-core: rendering core for the timeline component
//!
//! This crate turns a list of timeline entries into rendered views:
//! - Entry model and variant enumerations
//! - Style-class lookup tables and tone resolution
//! - Date formatting with a first-paint fallback
//! - The item state machine (loading / error / normal)
//! - The container and the reversed-order layout with staggered animation
//! - An accessible element tree and its HTML serialisation
//! - JSON documents describing a timeline and its settings

pub mod document;
pub mod element;
pub mod fixtures;
pub mod html;
pub mod item;
pub mod layout;
pub mod node;
pub mod time;
pub mod variants;

// Re-export commonly used types
pub use document::{Document, DocumentError, DocumentIssue};
pub use element::{ColorVariant, DateValue, ElementId, Icon, Size, Status, TimelineElement};
pub use html::{render_timeline, to_html};
pub use item::{resolve_item, ItemBody, ItemProps, ItemView, RenderContext, RenderMode};
pub use layout::{
    AnimatedItem, Animation, LayoutProps, Timeline, TimelineLayout, TimelineProps, TimelineView,
    EMPTY_MESSAGE,
};
pub use node::{Element, Node, NodeRef, Role};
pub use time::{DateFormat, DateLocale, FormattedDate, MountState, TimeFormatter};
pub use variants::Tone;

/// Returns the core version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
