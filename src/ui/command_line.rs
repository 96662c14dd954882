use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::colors::ThemeColors;
use crate::widgets::{FocusWidget, LineInput};

/// Renders the command line with a block cursor while it has focus.
pub fn render_command_line(f: &mut Frame, area: Rect, input: &LineInput, colors: &ThemeColors) {
    let chars: Vec<char> = input.value().chars().collect();
    let cursor_pos = input.cursor().min(chars.len());

    // Split into: text before cursor, char at cursor, text after cursor
    let before: String = chars.iter().take(cursor_pos).collect();
    let after: String = chars.iter().skip(cursor_pos + 1).collect();
    let char_at_cursor = chars.get(cursor_pos).copied().unwrap_or(' ');

    let text_style = Style::default()
        .fg(colors.foreground)
        .bg(colors.background)
        .add_modifier(Modifier::BOLD);
    let cursor_style = if input.focused() {
        Style::default()
            .fg(colors.background)
            .bg(colors.cursor)
            .add_modifier(Modifier::BOLD)
    } else {
        text_style
    };

    let mut spans = vec![
        Span::styled(before, text_style),
        Span::styled(char_at_cursor.to_string(), cursor_style),
    ];
    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }

    let line = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.background));
    f.render_widget(line, area);
}
