use ratatui::style::Color;

/// Reader palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    /// The token being read
    pub word: Color,
    /// Play/pause and the focused pane border
    pub accent: Color,
    /// Restart
    pub confirm: Color,
    pub dimmed: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(243, 244, 246), // gray-100
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(55, 65, 81),      // gray-700
            word: Color::Rgb(31, 41, 55),      // gray-800
            accent: Color::Rgb(59, 130, 246),  // blue-500
            confirm: Color::Rgb(34, 197, 94),  // green-500
            dimmed: Color::Rgb(107, 114, 128), // gray-500
            warning: Color::Rgb(220, 38, 38),  // red-600
        }
    }

    pub fn current() -> Self {
        Self::slate()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn surface() -> Color {
        Theme::current().surface
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn word() -> Color {
        Theme::current().word
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn confirm() -> Color {
        Theme::current().confirm
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn warning() -> Color {
        Theme::current().warning
    }
}
