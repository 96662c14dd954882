//! File I/O for the edited target.
//!
//! This module loads the target file into the buffer, lists directory
//! targets, and saves buffer contents back to disk, either directly or
//! through the background `SaveWorker`.

pub mod error;
pub mod loader;
pub mod saver;

pub use error::{LoadError, PersistError};
