//! Editor mode registry for modal editing.
//!
//! This module provides the `EditorMode` enum, the closed set of editing modes
//! vimlet knows about. Exactly one mode is active at a time and the editor
//! always starts in Normal mode.
//!
//! # Modes
//!
//! - **Normal**: The default mode; arrow keys move the cursor, `i` and `:` enter
//!   the other modes
//! - **Insert**: Keystrokes edit the buffer
//! - **Command**: Keystrokes edit the `:` command line
//! - **Visual** / **Replace**: Declared, but no handler is registered for them yet
//!
//! # Example
//!
//! ```
//! use vimlet::editor::mode::EditorMode;
//!
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! ```

use std::fmt;

use super::session::EditorSession;

/// Represents the current editing mode of the editor.
///
/// The mode is displayed in the status line using the `Display` implementation.
///
/// # Examples
///
/// ```
/// use vimlet::editor::mode::EditorMode;
///
/// assert_eq!(format!("{}", EditorMode::Insert), "INSERT");
/// assert_eq!(EditorMode::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorMode {
    /// Normal mode for navigation and mode entry.
    Normal,
    /// Insert mode for editing buffer text.
    Insert,
    /// Visual mode for selections (no handler yet).
    Visual,
    /// Command mode for typing `:` commands.
    Command,
    /// Replace mode for overtyping (no handler yet).
    Replace,
}

impl EditorMode {
    /// Every mode, in declaration order.
    pub const ALL: [EditorMode; 5] = [
        EditorMode::Normal,
        EditorMode::Insert,
        EditorMode::Visual,
        EditorMode::Command,
        EditorMode::Replace,
    ];
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase string suitable for the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::Visual => write!(f, "VISUAL"),
            EditorMode::Command => write!(f, "COMMAND"),
            EditorMode::Replace => write!(f, "REPLACE"),
        }
    }
}

impl Default for EditorMode {
    /// Returns `EditorMode::Normal`, the startup mode.
    fn default() -> Self {
        EditorMode::Normal
    }
}

/// Reports whether `session` is currently in `candidate` mode.
///
/// Pure and total over the mode set.
///
/// # Examples
///
/// ```
/// use vimlet::editor::mode::{is_mode, EditorMode};
/// use vimlet::editor::session::EditorSession;
///
/// let session = EditorSession::new("notes.txt");
/// assert!(is_mode(&session, EditorMode::Normal));
/// assert!(!is_mode(&session, EditorMode::Command));
/// ```
pub fn is_mode(session: &EditorSession, candidate: EditorMode) -> bool {
    session.mode() == candidate
}
