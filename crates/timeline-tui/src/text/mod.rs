//! Text layout utilities.
//!
//! This module provides:
//! - [`visual_width`], [`truncate_to_width`], [`align_right`], [`pad_right`] - cell-width fitting
//! - [`wrap_text`] - word wrapping for descriptions

mod width;
mod wrap;

pub use width::{align_right, pad_right, truncate_to_width, visual_width};
pub use wrap::wrap_text;
