//! Editor state and modal dispatch.
//!
//! # Modules
//!
//! - `mode`: the closed set of editing modes
//! - `session`: the per-instance editor state and its widgets
//! - `handlers`: per-mode key handlers and the mode-to-handler table
//! - `command`: the `:` command-line interpreter
//!
//! # Example
//!
//! ```
//! use vimlet::editor::mode::EditorMode;
//! use vimlet::editor::session::EditorSession;
//!
//! let session = EditorSession::new("notes.txt");
//! assert_eq!(session.mode(), EditorMode::Normal);
//! ```

pub mod command;
pub mod handlers;
pub mod mode;
pub mod session;
