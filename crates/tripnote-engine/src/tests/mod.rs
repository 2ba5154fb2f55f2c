use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary memos directory for tests
pub fn create_test_memos_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a memo file with content, under the test memos directory
pub fn create_test_file(memos_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = memos_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}
