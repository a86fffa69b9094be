use std::{fs, thread::sleep, time::Duration};

use tempfile::tempdir;

// The global subscriber can only be installed once per process, so this
// binary holds the single file-logging test.
#[test]
fn writes_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.txt");

    retropaint::logging::init(true, Some(path.clone()));
    tracing::info!("test");

    sleep(Duration::from_millis(100));

    assert!(path.exists(), "log file was not created");
    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("test"));
}
