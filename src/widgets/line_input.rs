//! Single-line text input used for the `:` command line.

use termion::event::Key;

use super::{byte_offset, FocusWidget};

/// A single line of editable text with a cursor.
///
/// `set_value` places the cursor after the last character, so text typed
/// after `set_value(":")` is appended to the prefix.
#[derive(Debug, Clone, Default)]
pub struct LineInput {
    value: String,
    cursor: usize,
    focused: bool,
}

impl LineInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position as a char index into the value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Applies one key to the line.
    ///
    /// Returns true if the key was consumed. Newlines are never inserted.
    pub fn update(&mut self, key: Key) -> bool {
        if !self.focused {
            return false;
        }

        let len = self.value.chars().count();
        match key {
            Key::Char('\n') => return false,
            Key::Char(c) => {
                let at = byte_offset(&self.value, self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
            }
            Key::Backspace if self.cursor > 0 => {
                let at = byte_offset(&self.value, self.cursor - 1);
                self.value.remove(at);
                self.cursor -= 1;
            }
            Key::Delete if self.cursor < len => {
                let at = byte_offset(&self.value, self.cursor);
                self.value.remove(at);
            }
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(len),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = len,
            Key::Ctrl('u') => {
                self.value.clear();
                self.cursor = 0;
            }
            _ => return false,
        }
        true
    }
}

impl FocusWidget for LineInput {
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

    fn focused_input(value: &str) -> LineInput {
        let mut input = LineInput::new();
        input.focus();
        input.set_value(value);
        input
    }

    #[test]
    fn test_typing_appends_after_prefix() {
        let mut input = focused_input(":");
        input.update(Key::Char('w'));
        input.update(Key::Char('q'));
        assert_eq!(input.value(), ":wq");
    }

    #[test]
    fn test_newline_is_not_inserted() {
        let mut input = focused_input(":w");
        assert!(!input.update(Key::Char('\n')));
        assert_eq!(input.value(), ":w");
    }

    #[test]
    fn test_backspace_and_cursor_moves() {
        let mut input = focused_input(":wx");
        input.update(Key::Left);
        input.update(Key::Backspace);
        assert_eq!(input.value(), ":x");
        input.update(Key::Home);
        input.update(Key::Delete);
        assert_eq!(input.value(), "x");
        input.update(Key::End);
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = focused_input(":q!");
        input.update(Key::Ctrl('u'));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_unfocused_ignores_keys() {
        let mut input = LineInput::new();
        input.set_value(":");
        assert!(!input.update(Key::Char('w')));
        assert_eq!(input.value(), ":");
    }
}
