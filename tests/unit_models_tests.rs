//! # Models Module Unit Tests / Models 模块单元测试
//!
//! Tests for the data models and the error taxonomy.
//!
//! 测试数据模型和错误分类。

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use suite_runner::error::{ErrorKind, ExitOutcome, RunError};
use suite_runner::models::{Case, InvocationResult, RunScope, RunSummary, SuiteReport};

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn test_case_name_is_file_name() {
        let case = Case::new("parser", "/tmp/test/parser/a.src");
        assert_eq!(case.name(), "a.src");
        assert_eq!(case.suite, "parser");
    }

    #[test]
    fn test_run_scope_from_filter() {
        assert_eq!(RunScope::from_filter(None), RunScope::All);
        assert_eq!(
            RunScope::from_filter(Some("parser")),
            RunScope::Single("parser".to_string())
        );
    }

    #[test]
    fn test_summary_total_cases() {
        let summary = RunSummary {
            scope: RunScope::All,
            suites: vec![
                SuiteReport {
                    name: "lexer".to_string(),
                    cases_run: 3,
                },
                SuiteReport {
                    name: "parser".to_string(),
                    cases_run: 0,
                },
                SuiteReport {
                    name: "types".to_string(),
                    cases_run: 4,
                },
            ],
            duration: Duration::from_millis(5),
        };
        assert_eq!(summary.total_cases(), 7);
    }

    #[test]
    fn test_invocation_success_requires_zero() {
        let case = Case::new("parser", "a.src");
        let result = |code| InvocationResult {
            case: case.clone(),
            exit: ExitOutcome(code),
            duration: Duration::ZERO,
        };

        assert!(result(Some(0)).is_success());
        assert!(!result(Some(1)).is_success());
        assert!(!result(Some(-1)).is_success());
        // No exit code (killed by a signal) is a failure too.
        assert!(!result(None).is_success());
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_exit_outcome_display() {
        assert_eq!(ExitOutcome(Some(3)).to_string(), "3");
        assert!(ExitOutcome(None).to_string().contains("signal"));
    }

    #[test]
    fn test_error_kinds() {
        let unknown = RunError::UnknownSuite {
            name: "unknown".to_string(),
            known: "parser".to_string(),
        };
        let not_found = RunError::SuiteNotFound {
            name: "parser".to_string(),
            root: PathBuf::from("test"),
        };
        let failed = RunError::CaseFailed {
            suite: "parser".to_string(),
            case_name: "b.src".to_string(),
            path: PathBuf::from("test/parser/b.src"),
            code: ExitOutcome(Some(1)),
        };
        let missing = RunError::ExecutableMissing(PathBuf::from("build/sif"));
        let launch = RunError::Launch {
            path: PathBuf::from("build/sif"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };

        assert_eq!(unknown.kind(), ErrorKind::Configuration);
        assert_eq!(not_found.kind(), ErrorKind::Configuration);
        assert_eq!(RunError::RootNotFound(PathBuf::from("t")).kind(), ErrorKind::Configuration);
        assert_eq!(failed.kind(), ErrorKind::CaseFailure);
        assert_eq!(missing.kind(), ErrorKind::Environment);
        assert_eq!(launch.kind(), ErrorKind::Environment);
        assert_eq!(
            RunError::CaseUnreadable(PathBuf::from("x")).kind(),
            ErrorKind::Environment
        );
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(ErrorKind::CaseFailure.exit_code(), 1);
        assert_eq!(ErrorKind::Configuration.exit_code(), 2);
        assert_eq!(ErrorKind::Environment.exit_code(), 3);
    }

    #[test]
    fn test_case_failure_message_identifies_case() {
        let failed = RunError::CaseFailed {
            suite: "parser".to_string(),
            case_name: "b.src".to_string(),
            path: PathBuf::from("test/parser/b.src"),
            code: ExitOutcome(Some(1)),
        };
        let message = failed.to_string();

        assert!(message.contains("test 'b.src' failed"));
        assert!(message.contains("suite 'parser'"));
        assert!(message.contains("exit code 1"));
    }

    #[test]
    fn test_unknown_suite_message_lists_known_suites() {
        let err = RunError::UnknownSuite {
            name: "unknown".to_string(),
            known: "parser, lexer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown test suite 'unknown' (known suites: parser, lexer)"
        );
    }
}
