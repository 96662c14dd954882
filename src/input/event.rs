//! Events consumed by the router and the follow-up effects it returns.

use termion::event::Key;

use crate::file::saver::{SaveOutcome, SaveRequest};

/// Everything the event loop feeds into `EventRouter::dispatch`.
///
/// Terminal input, terminal resizes, and save completions all arrive on one
/// channel and are processed strictly in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press from the terminal.
    Key(Key),
    /// The terminal was resized to `width` x `height` cells.
    Resize { width: u16, height: u16 },
    /// A previously dispatched save finished.
    SaveCompleted(SaveOutcome),
}

/// Work the router asks the event loop to perform after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand the request to the save worker.
    Save(SaveRequest),
    /// Leave the event loop and exit.
    Quit,
}
