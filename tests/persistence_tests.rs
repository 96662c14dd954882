//! Integration tests for loading, saving, and the background save worker.

use std::fs;
use std::sync::mpsc;
use std::time::Duration;

use tempfile::TempDir;
use vimlet::file::loader::{is_directory, list_directory, load_file};
use vimlet::file::saver::{save_file, SaveRequest, SaveWorker};
use vimlet::file::PersistError;
use vimlet::input::AppEvent;

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    let written = save_file(&path, "line one\nline two\n").unwrap();

    assert_eq!(written, 18);
    assert_eq!(load_file(&path).unwrap(), "line one\nline two\n");
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "a much longer original body").unwrap();

    save_file(&path, "short").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn test_save_to_directory_is_rejected() {
    let dir = TempDir::new().unwrap();
    let err = save_file(dir.path(), "x").unwrap_err();
    assert!(matches!(err, PersistError::IsDirectory { .. }));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("out.txt");
    let err = save_file(&path, "x").unwrap_err();
    assert!(matches!(err, PersistError::Write { .. }));
    assert!(err.to_string().contains("out.txt"));
}

#[test]
fn test_directory_detection() {
    let dir = TempDir::new().unwrap();
    assert!(is_directory(dir.path()));
    assert!(is_directory("./"));
    assert!(is_directory("."));
    assert!(!is_directory(dir.path().join("file.txt")));
}

#[test]
fn test_list_directory_sorted_with_markers() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.txt"), "").unwrap();
    fs::write(dir.path().join("a.txt"), "").unwrap();
    fs::create_dir(dir.path().join("c")).unwrap();

    let entries = list_directory(dir.path()).unwrap();
    assert_eq!(entries, vec!["a.txt", "b.txt", "c/"]);
}

#[test]
fn test_worker_reports_each_save_in_order() {
    let dir = TempDir::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let mut worker = SaveWorker::spawn(tx);

    for (i, name) in ["first.txt", "second.txt"].iter().enumerate() {
        worker
            .submit(SaveRequest {
                path: dir.path().join(name),
                contents: "x".repeat(i + 1),
                quit_after: false,
            })
            .unwrap();
    }

    let mut completed = Vec::new();
    for _ in 0..2 {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::SaveCompleted(outcome) => completed.push(outcome),
            other => panic!("unexpected event {:?}", other),
        }
    }
    worker.shutdown();

    assert!(completed[0].path.ends_with("first.txt"));
    assert_eq!(completed[0].result.as_ref().unwrap(), &1);
    assert!(completed[1].path.ends_with("second.txt"));
    assert_eq!(completed[1].result.as_ref().unwrap(), &2);
}

#[test]
fn test_worker_failure_is_reported_not_dropped() {
    let dir = TempDir::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let worker = SaveWorker::spawn(tx);

    worker
        .submit(SaveRequest {
            path: dir.path().to_path_buf(),
            contents: "x".to_string(),
            quit_after: true,
        })
        .unwrap();

    match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
        AppEvent::SaveCompleted(outcome) => {
            assert!(outcome.quit_after);
            assert!(matches!(outcome.result, Err(PersistError::IsDirectory { .. })));
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_shutdown_finishes_queued_saves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("late.txt");
    let (tx, _rx) = mpsc::channel();
    let mut worker = SaveWorker::spawn(tx);

    worker
        .submit(SaveRequest {
            path: path.clone(),
            contents: "kept".to_string(),
            quit_after: false,
        })
        .unwrap();
    worker.shutdown();

    assert_eq!(fs::read_to_string(&path).unwrap(), "kept");
}

#[test]
fn test_submit_after_shutdown_hands_request_back() {
    let (tx, _rx) = mpsc::channel();
    let mut worker = SaveWorker::spawn(tx);
    worker.shutdown();

    let request = SaveRequest {
        path: "unused.txt".into(),
        contents: String::new(),
        quit_after: false,
    };
    assert_eq!(worker.submit(request.clone()), Err(request));
}
