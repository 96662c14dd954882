//! Color definitions for themes.

use ratatui::style::Color;

use crate::editor::mode::EditorMode;

/// The set of colors used to draw the editor.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // UI colors
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Color of the block cursor.
    pub cursor: Color,
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Color for directory entries.
    pub directory: Color,

    // Mode badge colors
    pub mode_normal: Color,
    pub mode_insert: Color,
    pub mode_command: Color,
    /// Badge color for modes without their own color.
    pub mode_other: Color,

    // Semantic colors
    /// Color for error messages and indicators.
    pub error: Color,
    /// Color for informational messages.
    pub info: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// Uses ANSI colors so the actual shades follow the terminal's palette.
    ///
    /// ```
    /// use vimlet::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::Gray,
            cursor: Color::LightBlue,
            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            directory: Color::LightBlue,

            mode_normal: Color::Blue,
            mode_insert: Color::Green,
            mode_command: Color::Yellow,
            mode_other: Color::Magenta,

            error: Color::Red,
            info: Color::LightBlue,
        }
    }

    /// Returns the default light color scheme.
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            cursor: Color::Rgb(82, 139, 255),
            status_line_bg: Color::Rgb(238, 238, 238),
            status_line_fg: Color::Rgb(56, 58, 66),
            directory: Color::Rgb(1, 132, 188),

            mode_normal: Color::Rgb(64, 120, 242),
            mode_insert: Color::Rgb(80, 161, 79),
            mode_command: Color::Rgb(152, 104, 1),
            mode_other: Color::Rgb(166, 38, 164),

            error: Color::Rgb(202, 18, 67),
            info: Color::Rgb(1, 132, 188),
        }
    }

    /// Badge color for `mode` in the status line.
    pub fn mode_color(&self, mode: EditorMode) -> Color {
        match mode {
            EditorMode::Normal => self.mode_normal,
            EditorMode::Insert => self.mode_insert,
            EditorMode::Command => self.mode_command,
            EditorMode::Visual | EditorMode::Replace => self.mode_other,
        }
    }
}
