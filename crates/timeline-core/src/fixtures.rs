//! Sample entries for the demo gallery and tests.

use chrono::{Days, NaiveDate};

use crate::element::{ColorVariant, Icon, Status, TimelineElement};

fn iso_day(base: NaiveDate, offset: u64) -> String {
    base.checked_add_days(Days::new(offset))
        .unwrap_or(base)
        .format("%Y-%m-%d")
        .to_string()
}

/// The three events shown on the landing page.
pub fn site_items() -> Vec<TimelineElement> {
    vec![
        TimelineElement::new(1, "First event", "2022-01-01").description(
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor \
             incididunt ut labore et dolore magna aliqua. Odio euismod lacinia at quis risus \
             sed vulputate odio ut. Quam viverra orci sagittis eu volutpat odio facilisis mauris.",
        ),
        TimelineElement::new(2, "Second event", "2022-02-01").description(
            "Aut eius excepturi ex recusandae eius est minima molestiae. Nam dolores iusto ad \
             fugit reprehenderit hic dolorem quisquam et quia omnis non suscipit nihil sit.",
        ),
        TimelineElement::new(3, "Third event", "2022-03-01").description(
            "Sit culpa quas ex nulla animi qui deleniti minus rem placeat mollitia. Et enim \
             doloremque et quia sequi ea dolores voluptatem ea rerum vitae.",
        ),
    ]
}

/// One entry per status, each with an explicit color.
pub fn default_items() -> Vec<TimelineElement> {
    vec![
        TimelineElement::new(1, "First event", "2024-01-01")
            .description("Lorem ipsum dolor sit amet, consectetur adipiscing elit.")
            .icon(Icon::Check)
            .status(Status::Completed)
            .color(ColorVariant::Primary),
        TimelineElement::new(2, "Second event", "2024-02-01")
            .description("Aut eius excepturi ex recusandae eius est minima molestiae.")
            .icon(Icon::GitPullRequest)
            .status(Status::InProgress)
            .color(ColorVariant::Secondary),
        TimelineElement::new(3, "Third event", "2024-03-01")
            .description("Sit culpa quas ex nulla animi qui deleniti minus.")
            .icon(Icon::GitBranch)
            .status(Status::Pending)
            .color(ColorVariant::Muted),
    ]
}

/// Completed, in-progress and pending tasks without color overrides.
pub fn state_items() -> Vec<TimelineElement> {
    vec![
        TimelineElement::new(4, "Completed Task", "2024-01-15")
            .description("This task has been completed successfully.")
            .icon(Icon::Check)
            .status(Status::Completed),
        TimelineElement::new(5, "In Progress Task", "2024-01-16")
            .description("This task is currently in progress.")
            .icon(Icon::GitPullRequest)
            .status(Status::InProgress),
        TimelineElement::new(6, "Pending Task", "2024-01-17")
            .description("This task is pending start.")
            .icon(Icon::Calendar)
            .status(Status::Pending),
    ]
}

/// Three skeleton entries on consecutive days from `base`.
pub fn loading_items(base: NaiveDate) -> Vec<TimelineElement> {
    (0..3)
        .map(|offset| {
            TimelineElement::new(7 + offset, "Loading...", iso_day(base, offset))
                .description("Content is loading...")
                .status(Status::Pending)
                .loading(true)
        })
        .collect()
}

/// A failed entry between two healthy ones.
pub fn error_items(today: NaiveDate) -> Vec<TimelineElement> {
    vec![
        TimelineElement::new(12, "Synced", iso_day(today, 0))
            .description("Data synced from upstream.")
            .icon(Icon::Check),
        TimelineElement::new(10, "Error State", iso_day(today, 1))
            .description("An error occurred while loading this item.")
            .icon(Icon::AlertTriangle)
            .status(Status::Pending)
            .error("Failed to load item"),
        TimelineElement::new(11, "", iso_day(today, 2))
            .status(Status::Pending)
            .error("Connection reset"),
    ]
}

/// `count` completed entries on consecutive days from `base`.
pub fn custom_items(count: u64, base: NaiveDate) -> Vec<TimelineElement> {
    (0..count)
        .map(|index| {
            let n = index + 1;
            TimelineElement::new(100 + index, format!("Custom Event {n}"), iso_day(base, index))
                .description(format!("Custom description for event {n}"))
                .icon(Icon::Star)
                .status(Status::Completed)
                .color(ColorVariant::Primary)
        })
        .collect()
}
