//! Mail file discovery.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Every file below `root` whose name ends with `suffix`.
///
/// The walk is top-down: a directory's files come before its
/// subdirectories, and each group is sorted by name. Symlinked directories
/// are neither followed nor returned. Any unreadable entry fails the whole
/// walk.
pub fn discover_files(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let walker = WalkDir::new(root).min_depth(1).sort_by(|a, b| {
        a.file_type()
            .is_dir()
            .cmp(&b.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        // `path().is_dir()` follows a symlink so linked directories are skipped too.
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
