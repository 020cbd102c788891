//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides the file system helpers the runner needs: sorted
//! directory listings, path expansion and executable checks.
//!
//! 此模块提供运行器所需的文件系统辅助功能：排序的目录列表、
//! 路径展开和可执行文件检查。

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::RunError;

/// Kind of a directory entry, as seen through symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

/// A directory entry returned by [`list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Lists the direct children of `dir`, sorted by file name.
///
/// Sorting makes the order deterministic for a given directory content,
/// independent of the order the OS returns entries in.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>, RunError> {
    let io_err = |source| RunError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        // `Path::is_dir`/`is_file` follow symlinks
        let kind = if path.is_dir() {
            EntryKind::Directory
        } else if path.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            kind,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Expands `~` and environment variables in a path taken from the settings file.
pub fn expand_path(raw: &str) -> Result<PathBuf, RunError> {
    let expanded = shellexpand::full(raw).map_err(|e| RunError::PathExpansion {
        path: raw.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Checks whether `path` is a file the OS would let us execute.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}
