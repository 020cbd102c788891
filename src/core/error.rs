//! # Run Errors / 运行错误
//!
//! Every way a run can end other than success. All variants are terminal:
//! the runner never recovers from one and never continues past it.
//!
//! 运行除成功之外的所有结束方式。所有变体都是终止性的。

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`RunError`], used for exit codes and reporting.
/// [`RunError`] 的粗略分类，用于退出码和报告。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request or the settings are wrong; nothing was invoked.
    /// 请求或设置有误；没有执行任何调用。
    Configuration,
    /// The subject rejected a case.
    /// 被测程序拒绝了某个用例。
    CaseFailure,
    /// The test environment is broken (missing executable, unreadable files).
    /// 测试环境损坏（缺少可执行文件、文件不可读）。
    Environment,
}

impl ErrorKind {
    /// The process exit code the CLI reports for this kind of error.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::CaseFailure => 1,
            ErrorKind::Configuration => 2,
            ErrorKind::Environment => 3,
        }
    }
}

/// The exit status of a subject invocation, as far as the runner cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome(pub Option<i32>);

impl ExitOutcome {
    pub fn is_success(self) -> bool {
        self.0 == Some(0)
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "{code}"),
            None => f.write_str("none (terminated by signal)"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("unknown test suite '{name}' (known suites: {known})")]
    UnknownSuite { name: String, known: String },

    #[error("test suite '{name}' not found under {}", .root.display())]
    SuiteNotFound { name: String, root: PathBuf },

    #[error("test root {} is not a directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to read settings file {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("failed to parse settings file {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("failed to expand path '{path}': {message}")]
    PathExpansion { path: String, message: String },

    #[error("test '{case_name}' failed (suite '{suite}', file {}, exit code {code})", .path.display())]
    CaseFailed {
        suite: String,
        case_name: String,
        path: PathBuf,
        code: ExitOutcome,
    },

    #[error("subject executable {} does not exist or is not executable", .0.display())]
    ExecutableMissing(PathBuf),

    #[error("failed to launch subject executable {}: {source}", .path.display())]
    Launch { path: PathBuf, source: io::Error },

    #[error("test case {} is missing or unreadable", .0.display())]
    CaseUnreadable(PathBuf),

    #[error("failed to list directory {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl RunError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RunError::UnknownSuite { .. }
            | RunError::SuiteNotFound { .. }
            | RunError::RootNotFound(_)
            | RunError::ConfigRead { .. }
            | RunError::ConfigParse { .. }
            | RunError::PathExpansion { .. } => ErrorKind::Configuration,
            RunError::CaseFailed { .. } => ErrorKind::CaseFailure,
            RunError::ExecutableMissing(_)
            | RunError::Launch { .. }
            | RunError::CaseUnreadable(_)
            | RunError::Io { .. } => ErrorKind::Environment,
        }
    }
}
