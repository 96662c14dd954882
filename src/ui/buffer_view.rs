//! Main view: the text buffer, or the listing of a directory target.

use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::file::loader;
use crate::theme::colors::ThemeColors;
use crate::widgets::{FocusWidget, TextArea};

/// Renders the visible part of `buffer` into `area`.
///
/// Scrolls the buffer vertically so the cursor row is on screen, and shifts
/// the view horizontally when the cursor is past the right edge. The cursor
/// cell is drawn inverted while the buffer has focus.
pub fn render_buffer_view(
    f: &mut Frame,
    area: Rect,
    buffer: &mut TextArea,
    colors: &ThemeColors,
    tab_width: usize,
) {
    let height = area.height as usize;
    buffer.adjust_scroll(height);

    let (cursor_row, cursor_col) = buffer.cursor();
    let scroll = buffer.scroll_offset();
    let show_cursor = buffer.focused();
    let base = Style::default().fg(colors.foreground).bg(colors.background);

    let mut lines = Vec::with_capacity(height);
    let mut hscroll = 0usize;
    for (i, text) in buffer.visible_lines(height).iter().enumerate() {
        if show_cursor && scroll + i == cursor_row {
            let (line, display_col) = cursor_line(text, cursor_col, tab_width, base, colors);
            let width = area.width as usize;
            if width > 0 && display_col >= width {
                hscroll = display_col + 1 - width;
            }
            lines.push(line);
        } else {
            lines.push(Line::from(Span::styled(expand_tabs(text, tab_width), base)));
        }
    }

    let hscroll = u16::try_from(hscroll).unwrap_or(u16::MAX);
    let paragraph = Paragraph::new(lines).style(base).scroll((0, hscroll));
    f.render_widget(paragraph, area);
}

/// Renders the sorted entries of the directory at `path`.
pub fn render_directory_view(f: &mut Frame, area: Rect, path: &Path, colors: &ThemeColors) {
    let base = Style::default().fg(colors.foreground).bg(colors.background);
    let mut lines = vec![Line::from(Span::styled(
        path.display().to_string(),
        base.add_modifier(Modifier::BOLD),
    ))];

    match loader::list_directory(path) {
        Ok(entries) => {
            for entry in entries {
                let style = if entry.ends_with('/') {
                    base.fg(colors.directory)
                } else {
                    base
                };
                lines.push(Line::from(Span::styled(format!("  {}", entry), style)));
            }
        }
        Err(e) => lines.push(Line::from(Span::styled(e.to_string(), base.fg(colors.error)))),
    }

    f.render_widget(Paragraph::new(lines).style(base), area);
}

fn expand_tabs(text: &str, tab_width: usize) -> String {
    text.replace('\t', &" ".repeat(tab_width))
}

/// Builds the cursor line with the cursor cell highlighted.
///
/// Returns the line and the display column of the cursor.
fn cursor_line<'a>(
    text: &str,
    cursor_col: usize,
    tab_width: usize,
    base: Style,
    colors: &ThemeColors,
) -> (Line<'a>, usize) {
    let chars: Vec<char> = text.chars().collect();
    let col = cursor_col.min(chars.len());
    let before = expand_tabs(&chars[..col].iter().collect::<String>(), tab_width);
    let display_col = before.chars().count();

    let (at, tab_rest) = match chars.get(col) {
        Some('\t') => (' ', " ".repeat(tab_width.saturating_sub(1))),
        Some(c) => (*c, String::new()),
        None => (' ', String::new()),
    };
    let after: String = chars.iter().skip(col + 1).collect();

    let cursor_style = Style::default()
        .fg(colors.background)
        .bg(colors.cursor)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(before, base),
        Span::styled(at.to_string(), cursor_style),
        Span::styled(tab_rest + &expand_tabs(&after, tab_width), base),
    ]);
    (line, display_col)
}
