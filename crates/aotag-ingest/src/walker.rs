//! Directory listing for acquisition files.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists files under `root` whose name ends with `suffix`, e.g. `.avi`.
///
/// Without `recursive`, only direct children are listed. With it, the walk
/// descends depth-first. Entries come back in per-directory filename order,
/// parents before children, so listings are stable across runs. The suffix
/// comparison is case-sensitive.
pub fn list_files_with_suffix(root: &Path, suffix: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = std::fs::read_dir(&dir).map_err(|e| IngestError::DirectoryRead {
            path: dir.clone(),
            source: e,
        })?;

        let mut matched = Vec::new();
        let mut subdirs = Vec::new();
        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_dir() {
                if recursive {
                    subdirs.push(path);
                }
            } else if path.is_file() {
                let name_matches = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.ends_with(suffix))
                    .unwrap_or(false);
                if name_matches {
                    matched.push(path);
                }
            }
        }

        matched.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        files.extend(matched);

        // Pop order is LIFO, so push subdirectories reversed to visit them
        // in name order.
        subdirs.sort();
        for sub in subdirs.into_iter().rev() {
            stack.push(sub);
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").expect("create test file");
    }

    #[test]
    fn lists_only_matching_direct_children() {
        let dir = TempDir::new().expect("create temp dir");
        touch(dir.path(), "b_0002.avi");
        touch(dir.path(), "a_0001.avi");
        touch(dir.path(), "a_0001.tif");
        fs::create_dir(dir.path().join("nested")).expect("create subdir");
        touch(&dir.path().join("nested"), "c_0003.avi");

        let files = list_files_with_suffix(dir.path(), ".avi", false).expect("list files");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a_0001.avi", "b_0002.avi"]);
    }

    #[test]
    fn recursive_walk_descends_in_name_order() {
        let dir = TempDir::new().expect("create temp dir");
        fs::create_dir(dir.path().join("zz")).expect("create subdir");
        fs::create_dir(dir.path().join("aa")).expect("create subdir");
        fs::create_dir(dir.path().join("aa/deep")).expect("create subdir");
        touch(dir.path(), "root.avi");
        touch(&dir.path().join("zz"), "z.avi");
        touch(&dir.path().join("aa"), "a.avi");
        touch(&dir.path().join("aa/deep"), "d.avi");

        let files = list_files_with_suffix(dir.path(), ".avi", true).expect("list files");
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["root.avi", "a.avi", "d.avi", "z.avi"]);
    }

    #[test]
    fn suffix_comparison_is_case_sensitive() {
        let dir = TempDir::new().expect("create temp dir");
        touch(dir.path(), "upper.AVI");
        touch(dir.path(), "lower.avi");

        let files = list_files_with_suffix(dir.path(), ".avi", false).expect("list files");
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("lower.avi"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().expect("create temp dir");
        let missing = dir.path().join("not_here");
        let err = list_files_with_suffix(&missing, ".avi", false).expect_err("missing dir");
        assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = TempDir::new().expect("create temp dir");
        let files = list_files_with_suffix(dir.path(), ".avi", true).expect("list files");
        assert!(files.is_empty());
    }
}
