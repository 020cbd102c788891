//! # List Command Module / 列表命令模块
//!
//! Prints the suites and cases a run would execute, without invoking the
//! subject.
//!
//! 打印一次运行将执行的套件和用例，但不调用被测程序。

use anyhow::Result;

use crate::{
    cli::{SelectionArgs, commands::load_run_config},
    core::planner,
    reporting::console::{print_banner, print_plan, print_run_error},
};

pub fn execute(args: SelectionArgs) -> Result<()> {
    let (config, locale) = load_run_config(args)?;

    match planner::plan_execution(&config) {
        Ok(plan) => {
            print_banner(&plan.scope, &locale);
            print_plan(&plan, &locale);
            Ok(())
        }
        Err(e) => {
            print_run_error(&e, &locale);
            Err(e.into())
        }
    }
}
