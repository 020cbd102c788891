//! # Discovery Module / 发现模块
//!
//! Enumerates suites (directories directly under the test root) and cases
//! (files directly inside a suite). Nothing is cached: every call reflects the
//! file system as it is now.
//!
//! 枚举套件（测试根目录下的直接子目录）和用例（套件内的直接文件）。
//! 不做缓存：每次调用都反映文件系统的当前状态。

use std::path::{Path, PathBuf};

use crate::core::config::RunConfig;
use crate::core::error::RunError;
use crate::core::models::{Case, Suite};
use crate::infra::fs::{self, EntryKind};

/// Lists the suite directories under `root`, sorted by name. No recursion.
///
/// Returns `(name, path)` pairs; cases are not read.
pub fn discover_suite_dirs(root: &Path) -> Result<Vec<(String, PathBuf)>, RunError> {
    if !fs::is_directory(root) {
        return Err(RunError::RootNotFound(root.to_path_buf()));
    }

    Ok(fs::list_dir(root)?
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::Directory)
        .map(|entry| (entry.name, entry.path))
        .collect())
}

/// Lists the cases of the suite at `suite_dir`, sorted by file name.
///
/// Only regular files (or symlinks to them) accepted by the extension filter
/// are cases; nested directories are ignored.
pub fn discover_cases(
    suite_name: &str,
    suite_dir: &Path,
    config: &RunConfig,
) -> Result<Vec<Case>, RunError> {
    let cases: Vec<Case> = fs::list_dir(suite_dir)?
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::File && config.accepts_case(&entry.path))
        .map(|entry| Case::new(suite_name, entry.path))
        .collect();

    tracing::debug!(suite = suite_name, count = cases.len(), "discovered cases");
    Ok(cases)
}

/// Discovers every suite under the configured root together with its cases.
#[tracing::instrument(skip_all, fields(root = %config.root.display()))]
pub fn discover_suites(config: &RunConfig) -> Result<Vec<Suite>, RunError> {
    discover_suite_dirs(&config.root)?
        .into_iter()
        .map(|(name, path)| {
            let cases = discover_cases(&name, &path, config)?;
            Ok(Suite { name, path, cases })
        })
        .collect()
}
