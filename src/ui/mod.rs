//! UI module for the vimlet terminal interface.
//!
//! This module owns layout and widget composition; every widget renders from
//! the editor session.

pub mod buffer_view;
pub mod command_line;
pub mod message_area;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Margin};
use ratatui::Terminal;

use crate::editor::session::EditorSession;
use crate::input::router::{DEFAULT_MARGIN_X, DEFAULT_MARGIN_Y};
use crate::theme::Theme;

/// Default columns drawn for a tab character.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Main UI structure that manages the terminal interface rendering.
///
/// Inside a blank frame margin the screen has three areas:
/// - Main view (top): the buffer, or the entries of a directory target
/// - Status line (middle): mode, target path, error flag, cursor position
/// - Message area (bottom): the command line in Command mode, otherwise the
///   last error or an info message
///
/// # Example
///
/// ```
/// use vimlet::ui::UI;
/// use vimlet::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme).with_margins(2, 1);
/// assert_eq!(ui.theme_name(), "default-dark");
/// ```
pub struct UI {
    theme: Theme,
    margin_x: u16,
    margin_y: u16,
    tab_width: usize,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            margin_x: DEFAULT_MARGIN_X,
            margin_y: DEFAULT_MARGIN_Y,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }

    pub fn with_margins(mut self, margin_x: u16, margin_y: u16) -> Self {
        self.margin_x = margin_x;
        self.margin_y = margin_y;
        self
    }

    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Draws the whole screen.
    ///
    /// Takes the session mutably because the buffer scroll is adjusted to the
    /// real viewport height while drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        session: &mut EditorSession,
    ) -> Result<()> {
        let colors = &self.theme.colors;

        terminal.draw(|f| {
            let area = f.area().inner(Margin {
                horizontal: self.margin_x,
                vertical: self.margin_y,
            });
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Main view area
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(area);

            if session.is_directory() {
                buffer_view::render_directory_view(f, chunks[0], session.target_path(), colors);
            } else {
                buffer_view::render_buffer_view(
                    f,
                    chunks[0],
                    session.buffer_mut(),
                    colors,
                    self.tab_width,
                );
            }

            status_line::render_status_line(f, chunks[1], session, colors);
            message_area::render_message_area(f, chunks[2], session, colors);
        })?;

        Ok(())
    }
}
