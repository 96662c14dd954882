//! Per-mode key handlers and the table that maps modes to them.
//!
//! Handlers never enter other modes on their own; which keys enter which
//! mode is decided by the router's global triggers. The one exception is
//! the Command handler, whose `:w` returns to Normal as part of executing
//! the command.

use std::collections::HashMap;

use termion::event::Key;

use super::command::Command;
use super::mode::EditorMode;
use super::session::EditorSession;
use crate::input::event::Effect;
use crate::input::keys::{self, CONFIRM};

/// Interprets keys for one editing mode.
pub trait ModeHandler {
    fn handle(&self, key: Key, session: &mut EditorSession) -> Vec<Effect>;
}

/// Normal mode: arrow keys move the buffer cursor, everything else is left
/// to the router.
#[derive(Debug, Default)]
pub struct NormalHandler;

impl ModeHandler for NormalHandler {
    fn handle(&self, key: Key, session: &mut EditorSession) -> Vec<Effect> {
        if keys::is_direction(key) {
            session.buffer_mut().update(key);
        }
        Vec::new()
    }
}

/// Insert mode: every key goes to the buffer widget.
#[derive(Debug, Default)]
pub struct InsertHandler;

impl ModeHandler for InsertHandler {
    fn handle(&self, key: Key, session: &mut EditorSession) -> Vec<Effect> {
        session.buffer_mut().update(key);
        Vec::new()
    }
}

/// Command mode: Enter runs the command line, other keys edit it.
#[derive(Debug, Default)]
pub struct CommandHandler;

impl ModeHandler for CommandHandler {
    fn handle(&self, key: Key, session: &mut EditorSession) -> Vec<Effect> {
        if key == CONFIRM {
            let command = Command::parse(session.command_line().value());
            return command.execute(session);
        }
        session.command_line_mut().update(key);
        Vec::new()
    }
}

/// Maps each mode to the handler registered for it, if any.
///
/// `HandlerTable::default()` registers Normal, Insert and Command. Modes
/// without an entry have their keys dropped.
///
/// # Example
///
/// ```
/// use vimlet::editor::handlers::{HandlerTable, InsertHandler};
/// use vimlet::editor::mode::EditorMode;
///
/// let mut table = HandlerTable::default();
/// assert!(!table.is_registered(EditorMode::Replace));
///
/// table.register(EditorMode::Replace, InsertHandler);
/// assert!(table.is_registered(EditorMode::Replace));
/// ```
pub struct HandlerTable {
    handlers: HashMap<EditorMode, Box<dyn ModeHandler>>,
}

impl HandlerTable {
    /// Creates a table with no handlers.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers `handler` for `mode`, replacing any existing one.
    pub fn register<H: ModeHandler + 'static>(&mut self, mode: EditorMode, handler: H) {
        self.handlers.insert(mode, Box::new(handler));
    }

    pub fn get(&self, mode: EditorMode) -> Option<&dyn ModeHandler> {
        self.handlers.get(&mode).map(|h| h.as_ref())
    }

    pub fn is_registered(&self, mode: EditorMode) -> bool {
        self.handlers.contains_key(&mode)
    }
}

impl Default for HandlerTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.register(EditorMode::Normal, NormalHandler);
        table.register(EditorMode::Insert, InsertHandler);
        table.register(EditorMode::Command, CommandHandler);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::FocusWidget;

    #[test]
    fn test_default_registrations() {
        let table = HandlerTable::default();
        assert!(table.is_registered(EditorMode::Normal));
        assert!(table.is_registered(EditorMode::Insert));
        assert!(table.is_registered(EditorMode::Command));
        assert!(table.get(EditorMode::Visual).is_none());
        assert!(table.get(EditorMode::Replace).is_none());
    }

    #[test]
    fn test_normal_moves_cursor_only_on_arrows() {
        let mut session = EditorSession::new("a.txt");
        session.buffer_mut().set_value("ab\ncd");

        NormalHandler.handle(Key::Down, &mut session);
        assert_eq!(session.buffer().cursor(), (1, 0));

        NormalHandler.handle(Key::Char('x'), &mut session);
        assert_eq!(session.buffer().value(), "ab\ncd");
    }

    #[test]
    fn test_insert_forwards_everything() {
        let mut session = EditorSession::new("a.txt");
        InsertHandler.handle(Key::Char('h'), &mut session);
        InsertHandler.handle(Key::Char('i'), &mut session);
        InsertHandler.handle(Key::Char('\n'), &mut session);
        assert_eq!(session.buffer().value(), "hi\n");
    }

    #[test]
    fn test_command_edits_line_until_confirm() {
        let mut session = EditorSession::new("a.txt");
        session.set_mode(EditorMode::Command);
        session.command_line_mut().focus();
        session.command_line_mut().set_value(":");

        assert!(CommandHandler.handle(Key::Char('q'), &mut session).is_empty());
        assert_eq!(session.command_line().value(), ":q");
        assert_eq!(
            CommandHandler.handle(CONFIRM, &mut session),
            vec![Effect::Quit]
        );
    }

    #[test]
    fn test_command_never_touches_buffer() {
        let mut session = EditorSession::new("a.txt");
        session.set_mode(EditorMode::Command);
        session.command_line_mut().focus();
        CommandHandler.handle(Key::Char('z'), &mut session);
        assert_eq!(session.buffer().value(), "");
    }
}
