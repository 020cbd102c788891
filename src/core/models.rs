//! # Data Models Module / 数据模型模块
//!
//! This module defines the data structures the runner works with: suites
//! discovered on disk, the cases inside them, invocation results and the
//! summary of a successful run.
//!
//! 此模块定义运行器使用的数据结构：磁盘上发现的套件、其中的用例、
//! 调用结果以及成功运行的摘要。

use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::ExitOutcome;

/// A single input file fed to the subject executable.
/// 传递给被测可执行文件的单个输入文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    /// Name of the suite this case belongs to / 此用例所属套件的名称
    pub suite: String,
    /// Path of the input file / 输入文件的路径
    pub path: PathBuf,
}

impl Case {
    pub fn new(suite: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            suite: suite.into(),
            path: path.into(),
        }
    }

    /// The file name of the case, used to identify it in messages.
    /// 用例的文件名，用于在消息中识别它。
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A suite directory and the cases discovered inside it.
/// 一个套件目录及其中发现的用例。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suite {
    /// Directory name / 目录名
    pub name: String,
    /// Path of the suite directory / 套件目录的路径
    pub path: PathBuf,
    /// Cases in discovery order / 按发现顺序排列的用例
    pub cases: Vec<Case>,
}

/// What a run covers: every suite, or the one named by the filter.
/// 运行范围：所有套件，或过滤器指定的单个套件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunScope {
    All,
    Single(String),
}

impl RunScope {
    pub fn from_filter(filter: Option<&str>) -> Self {
        match filter {
            Some(name) => RunScope::Single(name.to_string()),
            None => RunScope::All,
        }
    }
}

/// The outcome of running the subject against one case.
/// 针对单个用例运行被测程序的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub case: Case,
    pub exit: ExitOutcome,
    pub duration: Duration,
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        self.exit.is_success()
    }
}

/// Per-suite line of a run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    pub name: String,
    pub cases_run: usize,
}

/// The result of a run in which every case passed.
/// 所有用例都通过的运行结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub scope: RunScope,
    pub suites: Vec<SuiteReport>,
    pub duration: Duration,
}

impl RunSummary {
    /// Total number of cases executed across all suites.
    pub fn total_cases(&self) -> usize {
        self.suites.iter().map(|s| s.cases_run).sum()
    }
}
