//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

use timeline_core::Icon;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility).
    Ascii,
}

const UNICODE_SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
const ASCII_SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Glyph for a timeline icon. Custom icons are drawn verbatim.
    pub fn glyph<'a>(&self, icon: &'a Icon) -> &'a str {
        match (icon, self.mode) {
            (Icon::Custom(glyph), _) => glyph,
            (Icon::Check, IconMode::Nerd) => "\u{f012c}",
            (Icon::Check, IconMode::Unicode) => "✓",
            (Icon::Check, IconMode::Ascii) => "v",
            (Icon::GitPullRequest, IconMode::Nerd) => "\u{f407}",
            (Icon::GitPullRequest, IconMode::Unicode) => "⇡",
            (Icon::GitPullRequest, IconMode::Ascii) => "^",
            (Icon::GitBranch, IconMode::Nerd) => "\u{f062c}",
            (Icon::GitBranch, IconMode::Unicode) => "⎇",
            (Icon::GitBranch, IconMode::Ascii) => "@",
            (Icon::Calendar, IconMode::Nerd) => "\u{f00ed}",
            (Icon::Calendar, IconMode::Unicode) => "▦",
            (Icon::Calendar, IconMode::Ascii) => "#",
            (Icon::Star, IconMode::Nerd) => "\u{f04ce}",
            (Icon::Star, IconMode::Unicode) => "★",
            (Icon::Star, IconMode::Ascii) => "*",
            (Icon::AlertTriangle, IconMode::Nerd) => "\u{f0026}",
            (Icon::AlertTriangle, IconMode::Unicode) => "⚠",
            (Icon::AlertTriangle, IconMode::Ascii) => "!",
            (Icon::AlertCircle, IconMode::Nerd) => "\u{f0028}",
            (Icon::AlertCircle, IconMode::Unicode) => "⊗",
            (Icon::AlertCircle, IconMode::Ascii) => "x",
            (Icon::Loader, _) => self.spinner(0),
        }
    }

    /// Glyph drawn when an entry has no icon.
    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "●",
            IconMode::Ascii => "o",
        }
    }

    /// Spinner frame for loading entries.
    pub fn spinner(&self, frame: usize) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f110}",
            IconMode::Unicode => UNICODE_SPINNER[frame % UNICODE_SPINNER.len()],
            IconMode::Ascii => ASCII_SPINNER[frame % ASCII_SPINNER.len()],
        }
    }

    pub fn connector(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "│",
            IconMode::Ascii => "|",
        }
    }

    /// Fill character for skeleton placeholders.
    pub fn skeleton(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "░",
            IconMode::Ascii => ".",
        }
    }

    /// Marker for the entry in progress.
    pub fn current(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "▸",
            IconMode::Ascii => ">",
        }
    }
}
