//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! This module runs an execution plan: every case is handed to the subject
//! executable in turn, one at a time, and the first non-zero exit code ends
//! the run with a [`RunError::CaseFailed`].
//!
//! 此模块执行执行计划：每个用例依次交给被测可执行文件，一次一个，
//! 第一个非零退出码以 [`RunError::CaseFailed`] 结束运行。

use colored::*;
use std::time::Instant;

use crate::{
    core::{
        config::RunConfig,
        error::RunError,
        models::{Case, InvocationResult, RunSummary, SuiteReport},
        planner::{self, ExecutionPlan},
    },
    infra::{command, fs, t},
};

/// Executes the suites selected by a [`RunConfig`].
///
/// The runner holds no state besides its configuration, so the same value can
/// be run any number of times; each run rediscovers the file system.
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Validates the filter and discovers the cases to run.
    pub fn plan(&self) -> Result<ExecutionPlan, RunError> {
        planner::plan_execution(&self.config)
    }

    /// Plans and executes a full run.
    pub async fn run(&self) -> Result<RunSummary, RunError> {
        let plan = self.plan()?;
        self.execute_plan(&plan).await
    }

    /// Executes `plan` sequentially, stopping at the first failing case.
    ///
    /// The subject is only checked when there is at least one case to run.
    #[tracing::instrument(skip_all, fields(cases = plan.case_count()))]
    pub async fn execute_plan(&self, plan: &ExecutionPlan) -> Result<RunSummary, RunError> {
        if !plan.is_empty() {
            check_executable(&self.config)?;
        }

        let start_time = Instant::now();
        let mut suites = Vec::with_capacity(plan.suites.len());

        for suite in &plan.suites {
            println!(
                "{}",
                t!("run.suite_start", name = &suite.name, count = suite.cases.len()).cyan()
            );
            for case in &suite.cases {
                let result = execute_case(case, &self.config).await?;
                ensure_passed(&result)?;
            }
            suites.push(SuiteReport {
                name: suite.name.clone(),
                cases_run: suite.cases.len(),
            });
        }

        Ok(RunSummary {
            scope: plan.scope.clone(),
            suites,
            duration: start_time.elapsed(),
        })
    }
}

/// Fails with an environment error unless the subject executable can be run.
pub fn check_executable(config: &RunConfig) -> Result<(), RunError> {
    if fs::is_executable(&config.executable) {
        Ok(())
    } else {
        Err(RunError::ExecutableMissing(config.executable.clone()))
    }
}

/// Invokes the subject on a single case and records its exit code.
///
/// Only launch problems are errors here; a non-zero exit code is reported in
/// the returned [`InvocationResult`]. See [`ensure_passed`].
pub async fn execute_case(case: &Case, config: &RunConfig) -> Result<InvocationResult, RunError> {
    if !case.path.is_file() || std::fs::File::open(&case.path).is_err() {
        return Err(RunError::CaseUnreadable(case.path.clone()));
    }

    println!("{}", t!("run.running_test", name = case.name()).blue());

    let start_time = Instant::now();
    let exit = command::run_subject(&config.executable, &case.path, &config.project_dir).await?;
    let duration = start_time.elapsed();

    let result = InvocationResult {
        case: case.clone(),
        exit,
        duration,
    };

    if result.is_success() {
        println!(
            "{}",
            t!(
                "run.test_passed",
                name = case.name(),
                duration = format!("{:.2}", duration.as_secs_f64())
            )
            .green()
        );
    } else {
        println!(
            "{}",
            t!("run.test_failed", name = case.name(), code = exit).red()
        );
    }
    tracing::debug!(case = %case.path.display(), exit = %exit, "case finished");

    Ok(result)
}

/// Turns a non-zero invocation into [`RunError::CaseFailed`].
pub fn ensure_passed(result: &InvocationResult) -> Result<(), RunError> {
    if result.is_success() {
        return Ok(());
    }
    Err(RunError::CaseFailed {
        suite: result.case.suite.clone(),
        case_name: result.case.name(),
        path: result.case.path.clone(),
        code: result.exit,
    })
}
