//! The editor session: target path, active mode, and the two input widgets.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::mode::{self, EditorMode};
use crate::file::loader;
use crate::widgets::{FocusWidget, LineInput, TextArea};

/// Where a recorded error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSource {
    Save,
    Load,
}

/// A recoverable error kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    pub source: ErrorSource,
    pub text: String,
}

/// State for one running editor instance.
///
/// The session exclusively owns the buffer widget and the command-line
/// widget. Mode changes go through `set_mode`, which also blurs the command
/// line whenever Command mode is left.
///
/// # Example
///
/// ```
/// use vimlet::editor::mode::EditorMode;
/// use vimlet::editor::session::EditorSession;
/// use vimlet::widgets::FocusWidget;
///
/// let session = EditorSession::new("notes.txt");
/// assert_eq!(session.mode(), EditorMode::Normal);
/// assert!(session.buffer().focused());
/// assert!(session.last_error().is_none());
/// ```
#[derive(Debug)]
pub struct EditorSession {
    target_path: PathBuf,
    mode: EditorMode,
    last_error: Option<SessionError>,
    message: Option<String>,
    buffer: TextArea,
    command_line: LineInput,
}

impl EditorSession {
    /// Creates a session in Normal mode with a focused, empty buffer.
    ///
    /// Nothing is read from disk here; the first resize loads the target.
    pub fn new<P: Into<PathBuf>>(target_path: P) -> Self {
        let mut buffer = TextArea::new();
        buffer.focus();

        Self {
            target_path: target_path.into(),
            mode: EditorMode::default(),
            last_error: None,
            message: None,
            buffer,
            command_line: LineInput::new(),
        }
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Returns true if the target path denotes a directory.
    pub fn is_directory(&self) -> bool {
        loader::is_directory(&self.target_path)
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Returns true if the session is in `candidate` mode.
    pub fn in_mode(&self, candidate: EditorMode) -> bool {
        mode::is_mode(self, candidate)
    }

    /// Switches to `mode`.
    ///
    /// An actual change clears the info message; leaving Command mode blurs
    /// the command line.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode == mode {
            return;
        }
        debug!(target: "router", from = %self.mode, to = %mode, "mode_transition");
        if self.mode == EditorMode::Command {
            self.command_line.blur();
        }
        self.mode = mode;
        self.message = None;
    }

    pub fn last_error(&self) -> Option<&SessionError> {
        self.last_error.as_ref()
    }

    /// Records `text` as the latest error, replacing any previous one.
    pub fn record_error(&mut self, source: ErrorSource, text: String) {
        self.last_error = Some(SessionError { source, text });
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, text: String) {
        self.message = Some(text);
    }

    pub fn buffer(&self) -> &TextArea {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextArea {
        &mut self.buffer
    }

    pub fn command_line(&self) -> &LineInput {
        &self.command_line
    }

    pub fn command_line_mut(&mut self) -> &mut LineInput {
        &mut self.command_line
    }
}
