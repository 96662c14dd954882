//! Message area rendering for the command line, errors, and info messages.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::command_line::render_command_line;
use crate::editor::mode::EditorMode;
use crate::editor::session::EditorSession;
use crate::theme::colors::ThemeColors;

/// Renders the message area at the bottom of the screen.
///
/// Displays:
/// - Command mode: the command line
/// - Otherwise: the last recorded error, else the info message, else nothing
pub fn render_message_area(
    f: &mut Frame,
    area: Rect,
    session: &EditorSession,
    colors: &ThemeColors,
) {
    if session.in_mode(EditorMode::Command) {
        render_command_line(f, area, session.command_line(), colors);
        return;
    }

    let content = if let Some(error) = session.last_error() {
        Line::from(vec![Span::styled(
            error.text.as_str(),
            Style::default().fg(colors.error),
        )])
    } else if let Some(message) = session.message() {
        Line::from(vec![Span::styled(message, Style::default().fg(colors.info))])
    } else {
        Line::from("")
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
