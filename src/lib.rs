//! vimlet - a small terminal-based modal text editor.
//!
//! The library holds everything except terminal setup: the mode registry,
//! the editor session, per-mode handlers, the event router, the command-line
//! interpreter, file persistence, and ratatui rendering.

pub mod config;
pub mod editor;
pub mod file;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod widgets;
