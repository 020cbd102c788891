//! # Configuration Module / 配置模块
//!
//! This module defines the on-disk settings file (`SuiteRunner.toml`) and the
//! resolved [`RunConfig`] that is built once at startup and handed to the runner.
//!
//! 此模块定义磁盘上的设置文件（`SuiteRunner.toml`）以及在启动时构建一次
//! 并传递给运行器的 [`RunConfig`]。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::RunError;
use crate::infra::fs::expand_path;

/// Default file name of the settings file, looked up in the project directory.
pub const DEFAULT_CONFIG_FILE: &str = "SuiteRunner.toml";

/// The settings file as written by users and by the `init` command.
/// 用户和 `init` 命令写入的设置文件。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerSettings {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory holding one subdirectory per suite.
    /// 每个套件一个子目录的根目录。
    #[serde(default = "default_root")]
    pub root: String,

    /// The subject executable, invoked once per case file.
    /// 被测可执行文件，每个用例文件调用一次。
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Suite names accepted by `--test-suite`. An empty list accepts any name.
    /// `--test-suite` 接受的套件名称。空列表表示接受任何名称。
    #[serde(default = "default_suites")]
    pub suites: Vec<String>,

    /// File extensions (without the dot) that count as cases. Empty means every file.
    /// 被视为用例的文件扩展名（不含点）。为空表示所有文件。
    #[serde(default)]
    pub extensions: Vec<String>,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            root: default_root(),
            executable: default_executable(),
            suites: default_suites(),
            extensions: vec![],
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_root() -> String {
    "test".to_string()
}

fn default_executable() -> String {
    "./build/sif".to_string()
}

fn default_suites() -> Vec<String> {
    vec!["parser".to_string()]
}

/// Loads and parses a settings file.
///
/// Both a missing file and malformed TOML are configuration errors.
pub fn load_settings(path: &Path) -> Result<RunnerSettings, RunError> {
    let content = fs::read_to_string(path).map_err(|source| RunError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&content, path)
}

/// Parses settings from a TOML string. `origin` is only used in error messages.
pub fn parse_settings(content: &str, origin: &Path) -> Result<RunnerSettings, RunError> {
    toml::from_str(content).map_err(|e| RunError::ConfigParse {
        path: origin.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads the settings file, falling back to the built-in defaults when the
/// default file is absent. An explicitly requested file must exist.
pub fn load_or_default(path: &Path, explicit: bool) -> Result<RunnerSettings, RunError> {
    if !explicit && !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(RunnerSettings::default());
    }
    load_settings(path)
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub suite_filter: Option<String>,
    pub root: Option<PathBuf>,
    pub executable: Option<PathBuf>,
}

/// The fully resolved configuration for one run.
///
/// Built once at startup from the settings file and command-line overrides;
/// the runner reads nothing else.
/// 一次运行的完全解析配置。在启动时由设置文件和命令行覆盖项构建一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory the subject runs in and relative paths are resolved against.
    pub project_dir: PathBuf,
    /// Root test directory.
    pub root: PathBuf,
    /// Subject executable.
    pub executable: PathBuf,
    /// Optional single suite to run.
    pub suite_filter: Option<String>,
    /// Suite names the filter may name. Empty accepts any.
    pub known_suites: Vec<String>,
    /// Case extension filter. Empty accepts every file.
    pub extensions: Vec<String>,
}

impl RunConfig {
    /// Resolves settings and overrides against `project_dir`.
    pub fn resolve(
        settings: &RunnerSettings,
        overrides: Overrides,
        project_dir: &Path,
    ) -> Result<Self, RunError> {
        let root = match overrides.root {
            Some(root) => root,
            None => expand_path(&settings.root)?,
        };
        let executable = match overrides.executable {
            Some(executable) => executable,
            None => expand_path(&settings.executable)?,
        };

        Ok(Self {
            project_dir: project_dir.to_path_buf(),
            root: project_dir.join(root),
            executable: project_dir.join(executable),
            suite_filter: overrides.suite_filter,
            known_suites: settings.suites.clone(),
            extensions: settings.extensions.clone(),
        })
    }

    /// Whether `name` may be passed as a suite filter.
    pub fn is_known_suite(&self, name: &str) -> bool {
        self.known_suites.is_empty() || self.known_suites.iter().any(|s| s == name)
    }

    /// Whether a file with this path is a case under the extension filter.
    pub fn accepts_case(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
