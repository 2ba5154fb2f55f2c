use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Memo not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid memos directory: {0}")]
    InvalidMemosDir(String),
}

/// Read a memo file and return its content
pub fn read_memo(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for memo files (`.md`) under the memos directory
pub fn scan_memo_files(memos_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !memos_root.exists() {
        return Err(IoError::InvalidMemosDir(
            "memos directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(memos_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_memos_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidMemosDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_memos_dir};

    #[test]
    fn test_scan_and_read_memos() {
        // Given a memos directory with memo files
        let memos_dir = create_test_memos_dir();
        create_test_file(&memos_dir, "jeju.md", "주소: 제주시 애월읍");
        create_test_file(&memos_dir, "tokyo.md", "- [ ] 환전");

        // When scanning for files
        let files = scan_memo_files(memos_dir.path()).unwrap();

        // Then we find the expected files in sorted order
        assert_eq!(files.len(), 2);
        assert!(files[0].file_name().unwrap() == "jeju.md");
        assert!(files[1].file_name().unwrap() == "tokyo.md");

        // And reading one returns its content
        let content = read_memo(&files[0]).unwrap();
        assert_eq!(content, "주소: 제주시 애월읍");
    }

    #[test]
    fn test_scan_recurses_and_skips_other_extensions() {
        // Given nested directories with mixed files
        let memos_dir = create_test_memos_dir();
        std::fs::create_dir(memos_dir.path().join("europe")).unwrap();
        create_test_file(&memos_dir, "europe/paris.md", "🍽️ 맛집");
        create_test_file(&memos_dir, "notes.txt", "ignored");

        // When scanning for files
        let files = scan_memo_files(memos_dir.path()).unwrap();

        // Then only the markdown memo is found
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("europe/paris.md"));
    }

    #[test]
    fn test_handle_invalid_memos_directory() {
        let nonexistent = PathBuf::from("/this/path/does/not/exist");

        assert!(matches!(
            scan_memo_files(&nonexistent),
            Err(IoError::InvalidMemosDir(_))
        ));
        assert!(validate_memos_dir(&nonexistent).is_err());
    }

    #[test]
    fn test_read_missing_memo_returns_not_found() {
        let memos_dir = create_test_memos_dir();
        let missing = memos_dir.path().join("ghost.md");

        assert!(matches!(read_memo(&missing), Err(IoError::NotFound(_))));
    }
}
