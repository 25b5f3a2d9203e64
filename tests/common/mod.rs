// Shared helpers for integration tests.
//
// Provides temporary-directory-backed config files so each integration test
// can set up an isolated environment without repeating filesystem
// boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Convert a slice of string literals into an owned token vector.
pub fn tokens(args: &[&str]) -> Vec<String> {
    args.iter().map(ToString::to_string).collect()
}

/// Write `content` into a fresh temp dir as `torc.cfg`.
///
/// Returns the directory guard (keep it alive for the test's duration)
/// and the config file path.
pub fn config_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("torc.cfg");
    std::fs::write(&path, content).expect("failed to write config file");
    (dir, path)
}

/// A path inside a fresh temp dir where no file exists.
pub fn absent_file() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("absent.cfg");
    (dir, path)
}
