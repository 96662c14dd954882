//! Saving buffer contents to disk.
//!
//! `save_file` overwrites the target in place. `SaveWorker` runs saves on a
//! background thread and reports each result back into the editor's event
//! channel as an `AppEvent::SaveCompleted`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use tracing::{info, warn};

use super::error::PersistError;
use crate::input::event::AppEvent;

/// A request to write `contents` to `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub path: PathBuf,
    pub contents: String,
    /// Quit the editor once this save has succeeded (`:wq`).
    pub quit_after: bool,
}

/// The result of one `SaveRequest`, delivered as a completion event.
#[derive(Debug)]
pub struct SaveOutcome {
    pub path: PathBuf,
    /// Bytes written on success.
    pub result: Result<usize, PersistError>,
    pub quit_after: bool,
}

impl SaveOutcome {
    /// Builds the outcome for a request that never reached the disk.
    pub fn failed(request: SaveRequest, error: PersistError) -> Self {
        Self {
            path: request.path,
            result: Err(error),
            quit_after: request.quit_after,
        }
    }
}

/// Writes `contents` to `path`, replacing whatever was there.
///
/// The file is created with default permissions if it does not exist. There
/// is no temp-file rename, so a failed write can leave a partial file.
///
/// # Examples
///
/// ```no_run
/// use vimlet::file::saver::save_file;
///
/// let written = save_file("notes.txt", "hello\n").unwrap();
/// assert_eq!(written, 6);
/// ```
///
/// # Errors
///
/// Returns `PersistError::IsDirectory` if `path` is a directory and
/// `PersistError::Write` for any other I/O failure.
pub fn save_file<P: AsRef<Path>>(path: P, contents: &str) -> Result<usize, PersistError> {
    let path = path.as_ref();
    if path.is_dir() {
        return Err(PersistError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, contents.as_bytes()).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.len())
}

/// Runs `SaveRequest`s on a background thread, one at a time, in the order
/// they were submitted.
///
/// Every submitted request produces exactly one `AppEvent::SaveCompleted` on
/// the event channel given to `spawn`.
pub struct SaveWorker {
    requests: Option<mpsc::Sender<SaveRequest>>,
    handle: Option<JoinHandle<()>>,
}

impl SaveWorker {
    /// Spawns the worker thread, reporting completions on `events`.
    pub fn spawn(events: mpsc::Sender<AppEvent>) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<SaveRequest>();

        let handle = thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let result = save_file(&request.path, &request.contents);
                match &result {
                    Ok(bytes) => {
                        info!(target: "persist", path = %request.path.display(), bytes, "save_ok")
                    }
                    Err(e) => {
                        warn!(target: "persist", path = %request.path.display(), error = %e, "save_failed")
                    }
                }

                let outcome = SaveOutcome {
                    path: request.path,
                    result,
                    quit_after: request.quit_after,
                };
                // Keep writing queued saves even if nobody is listening anymore.
                let _ = events.send(AppEvent::SaveCompleted(outcome));
            }
        });

        Self {
            requests: Some(request_tx),
            handle: Some(handle),
        }
    }

    /// Queues a save.
    ///
    /// On error the request is handed back so the caller can report it.
    pub fn submit(&self, request: SaveRequest) -> Result<(), SaveRequest> {
        match &self.requests {
            Some(tx) => tx.send(request).map_err(|e| e.0),
            None => Err(request),
        }
    }

    /// Stops accepting requests and waits for queued saves to finish.
    pub fn shutdown(&mut self) {
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!(target: "persist", "save worker panicked");
            }
        }
    }
}

impl Drop for SaveWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
