//! Key vocabulary and terminal event mapping.

use termion::event::{Event, Key};

use super::event::AppEvent;

/// Leaves any mode back to Normal.
pub const ESCAPE: Key = Key::Esc;
/// Confirms the command line.
pub const CONFIRM: Key = Key::Char('\n');
/// Enters Insert mode from Normal mode.
pub const ENTER_INSERT: Key = Key::Char('i');
/// Enters Command mode from Normal mode.
pub const ENTER_COMMAND: Key = Key::Char(':');

/// Mode transitions the router checks after every mode handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalTrigger {
    Escape,
    EnterInsert,
    EnterCommand,
}

/// Returns the global trigger carried by `key`, if any.
///
/// # Example
///
/// ```
/// use termion::event::Key;
/// use vimlet::input::keys::{global_trigger, GlobalTrigger};
///
/// assert_eq!(global_trigger(Key::Esc), Some(GlobalTrigger::Escape));
/// assert_eq!(global_trigger(Key::Char('x')), None);
/// ```
pub fn global_trigger(key: Key) -> Option<GlobalTrigger> {
    match key {
        ESCAPE => Some(GlobalTrigger::Escape),
        ENTER_INSERT => Some(GlobalTrigger::EnterInsert),
        ENTER_COMMAND => Some(GlobalTrigger::EnterCommand),
        _ => None,
    }
}

/// Returns true for the four arrow keys.
pub fn is_direction(key: Key) -> bool {
    matches!(key, Key::Up | Key::Down | Key::Left | Key::Right)
}

/// Maps a termion event to an `AppEvent`.
///
/// Only key presses are forwarded; mouse and unsupported sequences map to
/// `None`.
pub fn map_terminal_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        _ => None,
    }
}
