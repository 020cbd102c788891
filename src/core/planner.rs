//! # Test Execution Planner Module / 测试执行计划模块
//!
//! This module turns a [`RunConfig`] into an [`ExecutionPlan`]: it validates the
//! suite filter, discovers the selected suites and fixes the order cases will
//! run in. All configuration errors surface here, before anything is invoked.
//!
//! 此模块将 [`RunConfig`] 转换为 [`ExecutionPlan`]：校验套件过滤器，
//! 发现所选套件并确定用例的执行顺序。所有配置错误都在此处、在任何调用之前出现。

use crate::core::config::RunConfig;
use crate::core::discovery;
use crate::core::error::RunError;
use crate::core::models::{RunScope, Suite};

/// Represents the complete, ordered work of one run.
/// 表示一次运行的完整有序工作。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Whether all suites or a single one were selected.
    /// 选择了所有套件还是单个套件。
    pub scope: RunScope,
    /// The selected suites with their cases, in execution order.
    /// 所选套件及其用例，按执行顺序排列。
    pub suites: Vec<Suite>,
}

impl ExecutionPlan {
    /// Number of cases the plan will execute.
    pub fn case_count(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.case_count() == 0
    }
}

/// Creates an execution plan for the given configuration.
///
/// With a suite filter, only that suite is discovered. The filter must name a
/// known suite and a directory under the root must exist for it; otherwise a
/// configuration error is returned.
///
/// 为给定配置创建执行计划。带有套件过滤器时，仅发现该套件。
pub fn plan_execution(config: &RunConfig) -> Result<ExecutionPlan, RunError> {
    let scope = RunScope::from_filter(config.suite_filter.as_deref());

    let suites = match &scope {
        RunScope::All => discovery::discover_suites(config)?,
        RunScope::Single(name) => {
            if !config.is_known_suite(name) {
                return Err(RunError::UnknownSuite {
                    name: name.clone(),
                    known: config.known_suites.join(", "),
                });
            }

            let (name, path) = discovery::discover_suite_dirs(&config.root)?
                .into_iter()
                .find(|(dir_name, _)| dir_name == name)
                .ok_or_else(|| RunError::SuiteNotFound {
                    name: name.clone(),
                    root: config.root.clone(),
                })?;

            let cases = discovery::discover_cases(&name, &path, config)?;
            vec![Suite { name, path, cases }]
        }
    };

    Ok(ExecutionPlan { scope, suites })
}
