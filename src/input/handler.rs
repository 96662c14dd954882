//! Terminal event sources feeding the editor's event channel.
//!
//! `InputHandler` reads key presses on a background thread and forwards them
//! as `AppEvent::Key`. termion has no resize event, so `ResizeWatcher` polls
//! the terminal size from the event loop and reports changes.

use std::io::{self, Read};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use termion::input::TermRead;
use tracing::{debug, warn};

use super::event::AppEvent;
use super::keys::map_terminal_event;

/// Reads terminal input on a dedicated thread.
pub struct InputHandler {
    handle: JoinHandle<()>,
}

impl InputHandler {
    /// Starts reading stdin, sending every key press on `events`.
    pub fn spawn(events: Sender<AppEvent>) -> Self {
        Self::spawn_with_reader(io::stdin(), events)
    }

    /// Starts reading `reader`, sending every key press on `events`.
    ///
    /// The thread stops at end of input, on a read error, or once the
    /// receiving side of `events` is gone.
    pub fn spawn_with_reader<R: Read + Send + 'static>(reader: R, events: Sender<AppEvent>) -> Self {
        let handle = thread::spawn(move || {
            for event in reader.events() {
                let event = match event {
                    Ok(event) => event,
                    Err(e) => {
                        warn!(target: "input", error = %e, "terminal_read_failed");
                        break;
                    }
                };
                if let Some(app_event) = map_terminal_event(event) {
                    if events.send(app_event).is_err() {
                        break;
                    }
                }
            }
            debug!(target: "input", "input_thread_stopped");
        });

        Self { handle }
    }

    /// Returns true once the reader thread has stopped.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Detects terminal size changes between polls.
#[derive(Debug, Default)]
pub struct ResizeWatcher {
    last: Option<(u16, u16)>,
}

impl ResizeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the current terminal size and reports it if it changed.
    pub fn poll(&mut self) -> Result<Option<AppEvent>> {
        let size = termion::terminal_size().context("Failed to read terminal size")?;
        Ok(self.observe(size))
    }

    /// Records `size`, returning a `Resize` event if it differs from the last
    /// one seen. The first observation always reports.
    pub fn observe(&mut self, size: (u16, u16)) -> Option<AppEvent> {
        if self.last == Some(size) {
            return None;
        }
        self.last = Some(size);
        let (width, height) = size;
        Some(AppEvent::Resize { width, height })
    }
}
