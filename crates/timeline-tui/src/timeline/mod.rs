//! Terminal timeline rendering.
//!
//! This module provides:
//! - [`TimelineWidget`] - draws a resolved [`timeline_core::TimelineView`]
//! - [`gap_rows`] - row spacing for each size variant

mod widget;

pub use widget::{gap_rows, TimelineWidget};
