//! Error types for loading and saving the target file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving buffer contents.
#[derive(Debug, Error)]
pub enum PersistError {
    /// The target path names a directory.
    #[error("\"{}\" is a directory", .path.display())]
    IsDirectory { path: PathBuf },
    /// Writing the file failed.
    #[error("can't write \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The background save worker is no longer accepting requests.
    #[error("save worker is not running")]
    WorkerStopped,
}

/// Errors that can occur while reading the target.
///
/// A missing file is not an error; it loads as an empty buffer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("can't read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_include_path() {
        let err = PersistError::IsDirectory {
            path: PathBuf::from("src/"),
        };
        assert_eq!(err.to_string(), "\"src/\" is a directory");

        let err = LoadError::Read {
            path: PathBuf::from("a.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "can't read \"a.txt\": denied");
    }
}
