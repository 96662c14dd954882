//! Target loading.
//!
//! Reads the target file into text for the buffer widget and lists the
//! entries of directory targets.

use std::fs;
use std::io;
use std::path::{Path, MAIN_SEPARATOR};

use super::error::LoadError;

/// Reads the file at `path` as text.
///
/// A file that does not exist loads as an empty string. Bytes that are not
/// valid UTF-8 are replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use vimlet::file::loader::load_file;
///
/// let text = load_file("definitely/not/here.txt").unwrap();
/// assert_eq!(text, "");
/// ```
///
/// # Errors
///
/// Returns `LoadError::Read` for any I/O failure other than not-found.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<String, LoadError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(LoadError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Reports whether `path` denotes a directory.
///
/// A path ending in a separator or `.` counts as a directory even if nothing
/// exists there yet; otherwise the filesystem decides.
///
/// ```
/// use vimlet::file::loader::is_directory;
///
/// assert!(is_directory("./"));
/// assert!(is_directory("."));
/// assert!(!is_directory("missing-file.txt"));
/// ```
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let text = path.to_string_lossy();
    text.ends_with('/') || text.ends_with(MAIN_SEPARATOR) || text.ends_with('.') || path.is_dir()
}

/// Lists the entries of a directory, sorted by name.
///
/// Subdirectories carry a trailing `/`.
pub fn list_directory<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            name.push('/');
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello\n").unwrap();
        assert_eq!(load_file(&path).unwrap(), "hello\n");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_file(dir.path().join("nope.txt")).unwrap(), "");
    }

    #[test]
    fn test_load_directory_is_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_file(dir.path()).is_err());
    }

    #[test]
    fn test_load_invalid_utf8_is_lossy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin");
        fs::write(&path, [b'a', 0xff, b'b']).unwrap();
        assert_eq!(load_file(&path).unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn test_is_directory_lexical_and_real() {
        let dir = TempDir::new().unwrap();
        assert!(is_directory(dir.path()));
        assert!(is_directory("some/dir/"));
        assert!(!is_directory(dir.path().join("file.txt")));
    }

    #[test]
    fn test_list_directory_sorted_with_markers() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        assert_eq!(list_directory(dir.path()).unwrap(), ["a/", "b.txt"]);
    }
}
