//! Directory scanner
//!
//! Lists a single directory (non-recursive) and turns every entry with a
//! `.heic` extension, matched case-insensitively, into a [`ConversionTask`].
//! The listing is sorted by path so runs are reproducible. An unreadable or
//! missing directory fails the whole run with `DirectoryAccess` before any
//! conversion starts; an empty match list is not an error.

use crate::errors::ConvertError;
use crate::task::{is_heic_source, ConversionTask};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

pub fn scan_directory(dir: &Path) -> Result<Vec<ConversionTask>, ConvertError> {
    if !dir.is_dir() {
        return Err(ConvertError::DirectoryAccess {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let mut sources = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| ConvertError::DirectoryAccess {
            path: dir.to_path_buf(),
            source: e
                .into_io_error()
                .unwrap_or_else(|| io::Error::other("unreadable directory entry")),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if is_heic_source(entry.path()) {
            sources.push(entry.path().to_path_buf());
        }
    }

    sources.sort();
    Ok(sources.into_iter().map(ConversionTask::for_source).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"stub").unwrap();
    }

    #[test]
    fn test_scan_selects_heic_case_insensitively() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.heic");
        touch(tmp.path(), "b.HEIC");
        touch(tmp.path(), "c.png");
        touch(tmp.path(), "d.jpg");

        let tasks = scan_directory(tmp.path()).unwrap();
        assert_eq!(tasks.len(), 2);
        let names: Vec<String> = tasks.iter().map(|t| t.file_name()).collect();
        assert_eq!(names, vec!["a.heic", "b.HEIC"]);
    }

    #[test]
    fn test_scan_is_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "zz.heic");
        touch(tmp.path(), "aa.heic");
        touch(tmp.path(), "mm.heic");

        let tasks = scan_directory(tmp.path()).unwrap();
        let names: Vec<String> = tasks.iter().map(|t| t.file_name()).collect();
        assert_eq!(names, vec!["aa.heic", "mm.heic", "zz.heic"]);
    }

    #[test]
    fn test_scan_empty_directory_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let tasks = scan_directory(tmp.path()).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_scan_ignores_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "top.heic");
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.heic");

        let tasks = scan_directory(tmp.path()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].file_name(), "top.heic");
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        let err = scan_directory(&missing).unwrap_err();
        assert!(matches!(err, ConvertError::DirectoryAccess { .. }));
    }

    #[test]
    fn test_scan_path_to_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "plain.heic");
        let err = scan_directory(&tmp.path().join("plain.heic")).unwrap_err();
        assert!(matches!(err, ConvertError::DirectoryAccess { .. }));
    }

    #[test]
    fn test_tasks_have_png_targets_in_same_dir() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "photo.heic");
        let tasks = scan_directory(tmp.path()).unwrap();
        assert_eq!(tasks[0].target, tmp.path().join("photo.png"));
    }
}
