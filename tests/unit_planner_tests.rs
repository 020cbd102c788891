//! # Discovery and Planner Unit Tests / 发现与计划单元测试
//!
//! Tests suite and case discovery and the execution plan built from them,
//! including the suite filter and its configuration errors.
//!
//! 测试套件和用例的发现以及由此构建的执行计划，包括套件过滤器及其配置错误。

mod common;

use common::TestProject;
use std::fs;
use suite_runner::core::discovery::{discover_cases, discover_suite_dirs, discover_suites};
use suite_runner::core::planner::plan_execution;
use suite_runner::error::{ErrorKind, RunError};
use suite_runner::models::RunScope;

fn case_names(cases: &[suite_runner::models::Case]) -> Vec<String> {
    cases.iter().map(|c| c.name()).collect()
}

#[cfg(test)]
mod discovery_tests {
    use super::*;

    #[test]
    fn test_suites_are_directories_sorted_by_name() {
        let project = TestProject::new();
        project.add_suite("parser");
        project.add_suite("lexer");
        fs::write(project.root().join("README.md"), "not a suite").unwrap();

        let suites = discover_suite_dirs(&project.root()).unwrap();
        let names: Vec<_> = suites.iter().map(|(name, _)| name.as_str()).collect();

        assert_eq!(names, vec!["lexer", "parser"]);
    }

    #[test]
    fn test_no_recursion_beyond_one_level() {
        let project = TestProject::new();
        project.add_case("parser", "a.src", 0);
        fs::create_dir_all(project.root().join("parser").join("nested")).unwrap();
        fs::write(project.root().join("parser").join("nested").join("deep.src"), "0").unwrap();

        let suites = discover_suites(&project.config(None)).unwrap();

        assert_eq!(suites.len(), 1);
        assert_eq!(case_names(&suites[0].cases), vec!["a.src"]);
    }

    #[test]
    fn test_cases_sorted_and_tagged_with_suite() {
        let project = TestProject::new();
        project.add_case("parser", "c.src", 0);
        project.add_case("parser", "a.src", 0);
        project.add_case("parser", "b.src", 0);

        let cases =
            discover_cases("parser", &project.root().join("parser"), &project.config(None))
                .unwrap();

        assert_eq!(case_names(&cases), vec!["a.src", "b.src", "c.src"]);
        assert!(cases.iter().all(|c| c.suite == "parser"));
    }

    #[test]
    fn test_every_file_is_a_case_without_extension_filter() {
        let project = TestProject::new();
        project.add_case("parser", "a.src", 0);
        project.add_case("parser", "notes.txt", 0);
        project.add_case("parser", "Makefile", 0);

        let cases =
            discover_cases("parser", &project.root().join("parser"), &project.config(None))
                .unwrap();
        assert_eq!(cases.len(), 3);
    }

    #[test]
    fn test_extension_filter_limits_cases() {
        let project = TestProject::new();
        project.add_case("parser", "a.src", 0);
        project.add_case("parser", "notes.txt", 0);
        let mut config = project.config(None);
        config.extensions = vec!["src".to_string()];

        let cases = discover_cases("parser", &project.root().join("parser"), &config).unwrap();
        assert_eq!(case_names(&cases), vec!["a.src"]);
    }

    #[test]
    fn test_missing_root_is_configuration_error() {
        let project = TestProject::new();
        let mut config = project.config(None);
        config.root = project.path().join("does-not-exist");

        let err = discover_suites(&config).unwrap_err();
        assert!(matches!(err, RunError::RootNotFound(_)));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_root_that_is_a_file_is_configuration_error() {
        let project = TestProject::new();
        let file = project.path().join("plain-file");
        fs::write(&file, "").unwrap();
        let mut config = project.config(None);
        config.root = file;

        assert!(matches!(
            discover_suites(&config),
            Err(RunError::RootNotFound(_))
        ));
    }

    #[test]
    fn test_discovery_reflects_current_file_system() {
        let project = TestProject::new();
        project.add_case("parser", "a.src", 0);
        let config = project.config(None);

        assert_eq!(discover_suites(&config).unwrap()[0].cases.len(), 1);

        project.add_case("parser", "b.src", 0);
        assert_eq!(discover_suites(&config).unwrap()[0].cases.len(), 2);
    }
}

#[cfg(test)]
mod plan_tests {
    use super::*;

    #[test]
    fn test_plan_without_filter_covers_every_suite() {
        let project = TestProject::new();
        project.add_case("lexer", "x.src", 0);
        project.add_case("parser", "a.src", 0);
        project.add_case("parser", "b.src", 0);

        let plan = plan_execution(&project.config(None)).unwrap();

        assert_eq!(plan.scope, RunScope::All);
        let names: Vec<_> = plan.suites.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["lexer", "parser"]);
        assert_eq!(plan.case_count(), 3);
    }

    #[test]
    fn test_plan_with_filter_covers_only_that_suite() {
        let project = TestProject::new();
        project.add_case("lexer", "x.src", 0);
        project.add_case("parser", "a.src", 0);

        let plan = plan_execution(&project.config(Some("parser"))).unwrap();

        assert_eq!(plan.scope, RunScope::Single("parser".to_string()));
        assert_eq!(plan.suites.len(), 1);
        assert_eq!(plan.suites[0].name, "parser");
        assert_eq!(plan.case_count(), 1);
    }

    #[test]
    fn test_empty_suites_give_empty_plan() {
        let project = TestProject::new();
        project.add_suite("lexer");
        project.add_suite("parser");

        let plan = plan_execution(&project.config(None)).unwrap();

        assert_eq!(plan.suites.len(), 2);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_filter_not_in_known_suites_is_configuration_error() {
        let project = TestProject::new();
        project.add_case("parser", "a.src", 0);
        let mut config = project.config(Some("unknown"));
        config.known_suites = vec!["parser".to_string()];

        let err = plan_execution(&config).unwrap_err();

        assert!(matches!(err, RunError::UnknownSuite { ref name, .. } if name == "unknown"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_known_filter_without_directory_is_configuration_error() {
        let project = TestProject::new();
        project.add_case("lexer", "x.src", 0);
        let mut config = project.config(Some("parser"));
        config.known_suites = vec!["parser".to_string()];

        let err = plan_execution(&config).unwrap_err();

        assert!(matches!(err, RunError::SuiteNotFound { ref name, .. } if name == "parser"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_filter_matching_a_file_is_not_a_suite() {
        let project = TestProject::new();
        fs::write(project.root().join("parser"), "file, not a directory").unwrap();

        let err = plan_execution(&project.config(Some("parser"))).unwrap_err();
        assert!(matches!(err, RunError::SuiteNotFound { .. }));
    }
}
