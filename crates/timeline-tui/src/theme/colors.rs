//! Catppuccin color palettes for the timeline widget.

use ratatui::style::Color;
use timeline_core::Tone;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,

    // Tones
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
    pub accent: Color,
    pub destructive: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8

            primary: Color::Rgb(180, 190, 254),     // #b4befe (lavender)
            secondary: Color::Rgb(148, 226, 213),   // #94e2d5 (teal)
            muted: Color::Rgb(108, 112, 134),       // #6c7086
            accent: Color::Rgb(245, 194, 231),      // #f5c2e7 (pink)
            destructive: Color::Rgb(243, 139, 168), // #f38ba8 (red)

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77

            primary: Color::Rgb(114, 135, 253),   // #7287fd (lavender)
            secondary: Color::Rgb(23, 146, 153),  // #179299 (teal)
            muted: Color::Rgb(140, 143, 161),     // #8c8fa1
            accent: Color::Rgb(234, 118, 203),    // #ea76cb (pink)
            destructive: Color::Rgb(210, 15, 57), // #d20f39 (red)

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),

            primary: Color::Cyan,
            secondary: Color::Magenta,
            muted: Color::Rgb(150, 150, 150),
            accent: Color::Yellow,
            destructive: Color::Red,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }

    /// Color for a resolved tone.
    ///
    /// A terminal cell holds one color, so a gradient is drawn by the widget
    /// as its two ends; this returns the starting end.
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Primary | Tone::Gradient => self.primary,
            Tone::Secondary => self.secondary,
            Tone::Muted => self.muted,
            Tone::Accent => self.accent,
            Tone::Destructive => self.destructive,
        }
    }

    /// Color of row `row` out of `rows` for a tone painted along a connector.
    pub fn tone_at(&self, tone: Tone, row: usize, rows: usize) -> Color {
        match tone {
            Tone::Gradient if row * 2 >= rows => self.muted,
            other => self.tone(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mocha_theme_creates() {
        let theme = Theme::mocha();
        assert!(matches!(theme.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_latte_theme_creates() {
        let theme = Theme::latte();
        assert!(matches!(theme.base, Color::Rgb(239, 241, 245)));
    }

    #[test]
    fn test_high_contrast_theme_creates() {
        let theme = Theme::high_contrast();
        assert!(matches!(theme.base, Color::Black));
    }

    #[test]
    fn test_default_is_mocha() {
        let default = Theme::default();
        assert!(matches!(default.base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_tone_colors() {
        let theme = Theme::high_contrast();
        assert_eq!(theme.tone(Tone::Accent), Color::Yellow);
        assert_eq!(theme.tone(Tone::Destructive), Color::Red);
        assert_eq!(theme.tone(Tone::Gradient), theme.primary);
    }

    #[test]
    fn test_gradient_fades_to_muted() {
        let theme = Theme::mocha();
        assert_eq!(theme.tone_at(Tone::Gradient, 0, 4), theme.primary);
        assert_eq!(theme.tone_at(Tone::Gradient, 1, 4), theme.primary);
        assert_eq!(theme.tone_at(Tone::Gradient, 2, 4), theme.muted);
        assert_eq!(theme.tone_at(Tone::Secondary, 3, 4), theme.secondary);
    }
}
