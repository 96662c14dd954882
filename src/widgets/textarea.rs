//! Multi-line text buffer widget.
//!
//! `TextArea` owns the edited text, the cursor, and the viewport size. Lines
//! are stored without their trailing newline and the cursor column counts
//! chars, not bytes, so multi-byte text moves one character at a time.

use termion::event::Key;

use super::{byte_offset, FocusWidget};

/// A multi-line text buffer with a 2D cursor and a scrolling viewport.
///
/// # Example
///
/// ```
/// use vimlet::widgets::{FocusWidget, TextArea};
/// use termion::event::Key;
///
/// let mut area = TextArea::new();
/// area.focus();
/// area.set_value("hello\nworld");
/// area.update(Key::Down);
/// area.update(Key::Char('!'));
/// assert_eq!(area.value(), "hello\n!world");
/// ```
#[derive(Debug, Clone)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    col: usize,
    /// Column the cursor tries to keep while moving vertically.
    desired_col: usize,
    width: u16,
    height: u16,
    scroll: usize,
    focused: bool,
}

impl TextArea {
    /// Creates an empty, unfocused text area.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            desired_col: 0,
            width: 0,
            height: 0,
            scroll: 0,
            focused: false,
        }
    }

    /// Replaces the whole content and moves the cursor to the top.
    pub fn set_value(&mut self, text: &str) {
        self.lines = text.split('\n').map(String::from).collect();
        self.row = 0;
        self.col = 0;
        self.desired_col = 0;
        self.scroll = 0;
    }

    /// Returns the whole content, lines joined with `\n`.
    pub fn value(&self) -> String {
        self.lines.join("\n")
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: u16) {
        self.height = height;
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cursor position as (row, char column), both zero-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Scrolls so the cursor row is inside a viewport of `viewport_height` rows.
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + viewport_height {
            self.scroll = self.row + 1 - viewport_height;
        }
    }

    /// Lines visible in a viewport of `viewport_height` rows at the current scroll.
    pub fn visible_lines(&self, viewport_height: usize) -> &[String] {
        let start = self.scroll.min(self.lines.len());
        let end = (start + viewport_height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Applies one key to the buffer.
    ///
    /// Returns true if the key was consumed. Unfocused text areas consume nothing.
    pub fn update(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }

        match key {
            Key::Char('\n') => self.insert_newline(),
            Key::Char(c) => self.insert_char(c),
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete(),
            Key::Left => self.move_left(),
            Key::Right => self.move_right(),
            Key::Up => self.move_vertical(-1),
            Key::Down => self.move_vertical(1),
            Key::Home => self.set_col(0),
            Key::End => self.set_col(self.current_len()),
            Key::PageUp => self.move_vertical(-(self.page() as isize)),
            Key::PageDown => self.move_vertical(self.page() as isize),
            _ => return false,
        }
        true
    }

    fn page(&self) -> usize {
        (self.height as usize).max(1)
    }

    fn current_len(&self) -> usize {
        self.lines[self.row].chars().count()
    }

    fn set_col(&mut self, col: usize) {
        self.col = col;
        self.desired_col = col;
    }

    fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let at = byte_offset(line, self.col);
        line.insert(at, c);
        self.set_col(self.col + 1);
    }

    fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let at = byte_offset(line, self.col);
        let rest = line.split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.set_col(0);
    }

    fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let at = byte_offset(line, self.col - 1);
            line.remove(at);
            self.set_col(self.col - 1);
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            let col = self.current_len();
            self.lines[self.row].push_str(&current);
            self.set_col(col);
        }
    }

    fn delete(&mut self) {
        if self.col < self.current_len() {
            let line = &mut self.lines[self.row];
            let at = byte_offset(line, self.col);
            line.remove(at);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.col > 0 {
            self.set_col(self.col - 1);
        } else if self.row > 0 {
            self.row -= 1;
            self.set_col(self.current_len());
        }
    }

    fn move_right(&mut self) {
        if self.col < self.current_len() {
            self.set_col(self.col + 1);
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.set_col(0);
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let last = self.lines.len() - 1;
        let target = if delta < 0 {
            self.row.saturating_sub(delta.unsigned_abs())
        } else {
            (self.row + delta as usize).min(last)
        };
        self.row = target;
        self.col = self.desired_col.min(self.current_len());
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusWidget for TextArea {
    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focused_area(text: &str) -> TextArea {
        let mut area = TextArea::new();
        area.focus();
        area.set_value(text);
        area
    }

    #[test]
    fn test_value_round_trip_keeps_trailing_newline() {
        let area = focused_area("one\ntwo\n");
        assert_eq!(area.value(), "one\ntwo\n");
        assert_eq!(area.line_count(), 3);
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut area = TextArea::new();
        area.set_value("abc");
        assert!(!area.update(Key::Char('x')));
        assert_eq!(area.value(), "abc");
    }

    #[test]
    fn test_insert_and_newline() {
        let mut area = focused_area("ab");
        area.update(Key::Right);
        area.update(Key::Char('\n'));
        area.update(Key::Char('c'));
        assert_eq!(area.value(), "a\ncb");
        assert_eq!(area.cursor(), (1, 1));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = focused_area("ab\ncd");
        area.update(Key::Down);
        area.update(Key::Backspace);
        assert_eq!(area.value(), "abcd");
        assert_eq!(area.cursor(), (0, 2));
    }

    #[test]
    fn test_delete_at_line_end_joins_next() {
        let mut area = focused_area("ab\ncd");
        area.update(Key::End);
        area.update(Key::Delete);
        assert_eq!(area.value(), "abcd");
    }

    #[test]
    fn test_vertical_movement_keeps_desired_column() {
        let mut area = focused_area("abcdef\nab\nabcdef");
        area.update(Key::End);
        area.update(Key::Down);
        assert_eq!(area.cursor(), (1, 2));
        area.update(Key::Down);
        assert_eq!(area.cursor(), (2, 6));
    }

    #[test]
    fn test_horizontal_movement_wraps_lines() {
        let mut area = focused_area("a\nb");
        area.update(Key::End);
        area.update(Key::Right);
        assert_eq!(area.cursor(), (1, 0));
        area.update(Key::Left);
        assert_eq!(area.cursor(), (0, 1));
    }

    #[test]
    fn test_multibyte_insert() {
        let mut area = focused_area("héllo");
        area.update(Key::Right);
        area.update(Key::Right);
        area.update(Key::Char('x'));
        assert_eq!(area.value(), "héxllo");
    }

    #[test]
    fn test_page_down_uses_height() {
        let text = (0..20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut area = focused_area(&text);
        area.set_height(5);
        area.update(Key::PageDown);
        assert_eq!(area.cursor().0, 5);
        area.update(Key::PageUp);
        area.update(Key::PageUp);
        assert_eq!(area.cursor().0, 0);
    }

    #[test]
    fn test_adjust_scroll_follows_cursor() {
        let text = (0..10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let mut area = focused_area(&text);
        for _ in 0..6 {
            area.update(Key::Down);
        }
        area.adjust_scroll(3);
        assert_eq!(area.scroll_offset(), 4);
        assert_eq!(area.visible_lines(3), ["4", "5", "6"]);
    }
}
