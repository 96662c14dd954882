//! The event router: single entry point for every event the editor sees.
//!
//! For a key event the router first runs the handler registered for the
//! current mode, then re-checks the original key for global mode triggers in
//! this order:
//!
//! 1. `Esc` returns to Normal from any other mode, whatever the handler did.
//! 2. `i` in Normal mode enters Insert.
//! 3. `:` in Normal mode enters Command, resetting the command line to `:`
//!    and focusing it.
//! 4. Any other key focuses the buffer if it lost focus, unless in Command mode.
//!
//! Resize events resize the buffer and reload the target from disk, which
//! discards unsaved edits. Save completions record errors and finish `:wq`.

use termion::event::Key;
use tracing::{debug, trace};

use super::event::{AppEvent, Effect};
use super::keys::{global_trigger, GlobalTrigger};
use crate::editor::command::COMMAND_PREFIX;
use crate::editor::handlers::HandlerTable;
use crate::editor::mode::EditorMode;
use crate::editor::session::{EditorSession, ErrorSource};
use crate::file::loader;
use crate::file::saver::SaveOutcome;
use crate::widgets::FocusWidget;

/// Default horizontal frame margin, per side.
pub const DEFAULT_MARGIN_X: u16 = 2;
/// Default vertical frame margin, per side.
pub const DEFAULT_MARGIN_Y: u16 = 1;

/// Routes events to mode handlers and applies mode transitions.
///
/// # Example
///
/// ```
/// use termion::event::Key;
/// use vimlet::editor::mode::EditorMode;
/// use vimlet::editor::session::EditorSession;
/// use vimlet::input::{AppEvent, EventRouter};
///
/// let router = EventRouter::new();
/// let mut session = EditorSession::new("notes.txt");
///
/// router.dispatch(AppEvent::Key(Key::Char(':')), &mut session);
/// assert_eq!(session.mode(), EditorMode::Command);
/// assert_eq!(session.command_line().value(), ":");
/// ```
pub struct EventRouter {
    handlers: HandlerTable,
    margin_x: u16,
    margin_y: u16,
}

impl EventRouter {
    /// Creates a router with the default handlers and margins.
    pub fn new() -> Self {
        Self::with_handlers(HandlerTable::default())
    }

    pub fn with_handlers(handlers: HandlerTable) -> Self {
        Self {
            handlers,
            margin_x: DEFAULT_MARGIN_X,
            margin_y: DEFAULT_MARGIN_Y,
        }
    }

    /// Sets the per-side frame margins subtracted from the terminal size.
    pub fn with_margins(mut self, margin_x: u16, margin_y: u16) -> Self {
        self.margin_x = margin_x;
        self.margin_y = margin_y;
        self
    }

    /// Processes one event, returning the follow-up effects to run.
    pub fn dispatch(&self, event: AppEvent, session: &mut EditorSession) -> Vec<Effect> {
        match event {
            AppEvent::Key(key) => self.handle_key(key, session),
            AppEvent::Resize { width, height } => {
                self.handle_resize(width, height, session);
                Vec::new()
            }
            AppEvent::SaveCompleted(outcome) => self.handle_save_completed(outcome, session),
        }
    }

    fn handle_key(&self, key: Key, session: &mut EditorSession) -> Vec<Effect> {
        let effects = match self.handlers.get(session.mode()) {
            Some(handler) => handler.handle(key, session),
            None => {
                trace!(target: "router", mode = %session.mode(), ?key, "dropped_key");
                Vec::new()
            }
        };

        // A quit request ends the session; nothing else applies this turn.
        if effects.contains(&Effect::Quit) {
            return effects;
        }

        apply_global_trigger(key, session);
        effects
    }

    fn handle_resize(&self, width: u16, height: u16, session: &mut EditorSession) {
        let buffer = session.buffer_mut();
        buffer.set_width(width.saturating_sub(self.margin_x.saturating_mul(2)));
        buffer.set_height(height.saturating_sub(self.margin_y.saturating_mul(2)));

        if session.is_directory() {
            return;
        }

        match loader::load_file(session.target_path()) {
            Ok(text) => {
                debug!(
                    target: "router",
                    path = %session.target_path().display(),
                    bytes = text.len(),
                    "reload_on_resize"
                );
                session.buffer_mut().set_value(&text);
            }
            Err(e) => session.record_error(ErrorSource::Load, e.to_string()),
        }
    }

    fn handle_save_completed(&self, outcome: SaveOutcome, session: &mut EditorSession) -> Vec<Effect> {
        match outcome.result {
            Ok(bytes) => {
                session.clear_error();
                session.set_message(format!("\"{}\" {}B written", outcome.path.display(), bytes));
                if outcome.quit_after {
                    return vec![Effect::Quit];
                }
            }
            Err(e) => {
                session.record_error(ErrorSource::Save, e.to_string());
                if outcome.quit_after {
                    // Failed `:wq`: stay open so the error is visible.
                    session.set_mode(EditorMode::Normal);
                }
            }
        }
        Vec::new()
    }
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_global_trigger(key: Key, session: &mut EditorSession) {
    match global_trigger(key) {
        Some(GlobalTrigger::Escape) => {
            if !session.in_mode(EditorMode::Normal) {
                session.set_mode(EditorMode::Normal);
            }
        }
        Some(GlobalTrigger::EnterInsert) => {
            if session.in_mode(EditorMode::Normal) {
                session.set_mode(EditorMode::Insert);
            }
        }
        Some(GlobalTrigger::EnterCommand) => {
            if session.in_mode(EditorMode::Normal) {
                session.set_mode(EditorMode::Command);
                let command_line = session.command_line_mut();
                command_line.set_value(&COMMAND_PREFIX.to_string());
                command_line.focus();
            }
        }
        None => {
            if !session.buffer().focused() && !session.in_mode(EditorMode::Command) {
                session.buffer_mut().focus();
            }
        }
    }
}
