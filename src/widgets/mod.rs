//! Input widgets owned by the editor session.
//!
//! - `textarea`: the multi-line buffer widget (text, cursor, viewport)
//! - `line_input`: the single-line widget used for `:` command entry
//!
//! Both widgets only react to keys while focused.

pub mod line_input;
pub mod textarea;

pub use line_input::LineInput;
pub use textarea::TextArea;

/// Focus handling shared by every input widget.
pub trait FocusWidget {
    /// Gives the widget input focus.
    fn focus(&mut self);
    /// Removes input focus from the widget.
    fn blur(&mut self);
    /// Returns true if the widget currently has input focus.
    fn focused(&self) -> bool;
}

/// Converts a char column into a byte offset within `line`.
///
/// Columns past the end map to `line.len()`.
pub(crate) fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}
