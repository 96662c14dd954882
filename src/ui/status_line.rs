//! Status line widget for displaying editor state information.
//!
//! The status line shows:
//! - Current mode badge (NORMAL, INSERT, COMMAND, ...)
//! - Target path
//! - Error indicator "[E]" while an error is recorded
//! - Cursor position (row:col, one-based) on the right
//!
//! Example status line: ` NORMAL  notes.txt [E]                    5:12`

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::editor::session::EditorSession;
use crate::theme::colors::ThemeColors;

/// Renders the status line showing mode, target path, and cursor position.
pub fn render_status_line(
    f: &mut Frame,
    area: Rect,
    session: &EditorSession,
    colors: &ThemeColors,
) {
    let mode_text = format!(" {} ", session.mode());
    let path_text = format!(" {}", session.target_path().display());
    let error_indicator = if session.last_error().is_some() {
        " [E]"
    } else {
        ""
    };

    let position = if session.is_directory() {
        "dir".to_string()
    } else {
        let (row, col) = session.buffer().cursor();
        format!("{}:{}", row + 1, col + 1)
    };

    // Calculate padding to position right-aligned text
    let total_width = area.width as usize;
    let left_len = mode_text.chars().count()
        + path_text.chars().count()
        + error_indicator.len();
    let position_len = position.len();
    let padding = if left_len + position_len + 1 < total_width {
        total_width - left_len - position_len
    } else {
        1
    };

    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let mode_style = Style::default()
        .fg(colors.status_line_bg)
        .bg(colors.mode_color(session.mode()))
        .add_modifier(Modifier::BOLD);
    let error_style = Style::default().fg(colors.error).bg(colors.status_line_bg);

    let mut spans = vec![
        Span::styled(mode_text, mode_style),
        Span::styled(path_text, default_style),
    ];
    if !error_indicator.is_empty() {
        spans.push(Span::styled(error_indicator, error_style));
    }
    spans.push(Span::styled(" ".repeat(padding), default_style));
    spans.push(Span::styled(position, default_style));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::mode::EditorMode;
    use crate::editor::session::ErrorSource;
    use crate::theme;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use termion::event::Key;

    fn draw(session: &EditorSession) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = theme::get_builtin_theme("default-dark").unwrap();

        terminal
            .draw(|f| {
                let area = f.area();
                render_status_line(f, area, session, &theme.colors);
            })
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_status_line_mode_and_path() {
        let mut session = EditorSession::new("notes.txt");
        session.set_mode(EditorMode::Insert);
        let text = draw(&session);
        assert!(text.starts_with(" INSERT  notes.txt"), "{}", text);
        assert!(!text.contains("[E]"));
    }

    #[test]
    fn test_status_line_position_is_one_based() {
        let mut session = EditorSession::new("notes.txt");
        session.buffer_mut().set_value("abc\ndef");
        session.buffer_mut().update(Key::Down);
        session.buffer_mut().update(Key::Right);
        let text = draw(&session);
        assert!(text.trim_end().ends_with("2:2"), "{}", text);
    }

    #[test]
    fn test_status_line_error_flag() {
        let mut session = EditorSession::new("notes.txt");
        session.record_error(ErrorSource::Save, "denied".to_string());
        assert!(draw(&session).contains("[E]"));
    }
}
