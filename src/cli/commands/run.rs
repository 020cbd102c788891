//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command: resolve the configuration, plan,
//! execute sequentially and report.
//!
//! 此模块实现 `run` 命令：解析配置、制定计划、顺序执行并报告。

use anyhow::Result;
use colored::*;

use crate::{
    cli::{SelectionArgs, commands::load_run_config},
    core::execution::Runner,
    infra::t,
    reporting::console::{print_banner, print_run_error, print_summary},
};

/// Executes the run command with the provided arguments.
///
/// Any [`crate::core::RunError`] is printed in detail and then returned, so
/// the caller can derive the exit code from it.
pub async fn execute(args: SelectionArgs) -> Result<()> {
    let (config, locale) = load_run_config(args)?;

    println!(
        "{}",
        t!("run.project_root", locale = &locale, path = config.project_dir.display())
    );
    println!(
        "{}",
        t!("run.subject", locale = &locale, path = config.executable.display().to_string().yellow())
    );

    let runner = Runner::new(config);

    let plan = match runner.plan() {
        Ok(plan) => plan,
        Err(e) => {
            print_run_error(&e, &locale);
            return Err(e.into());
        }
    };

    print_banner(&plan.scope, &locale);

    if plan.is_empty() {
        println!("{}", t!("run.no_cases", locale = &locale).green());
    }

    match runner.execute_plan(&plan).await {
        Ok(summary) => {
            print_summary(&summary, &locale);
            Ok(())
        }
        Err(e) => {
            print_run_error(&e, &locale);
            Err(e.into())
        }
    }
}
