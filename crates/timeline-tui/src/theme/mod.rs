//! Theme components for the timeline widget.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast)
//! - [`IconSet`] - Glyphs with Nerd/Unicode/ASCII modes

mod colors;
mod icons;

pub use colors::Theme;
pub use icons::{IconMode, IconSet};
