//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the run banner, the success summary, the plan listing
//! and failure details to the console, with color and i18n support.
//!
//! 此模块向控制台打印运行横幅、成功摘要、计划列表和失败详情，
//! 支持颜色和国际化。

use colored::*;

use crate::core::error::{ErrorKind, RunError};
use crate::core::models::{RunScope, RunSummary};
use crate::core::planner::ExecutionPlan;
use crate::infra::t;

/// Prints the line announcing what the run covers.
///
/// ```text
/// Running all available test suites
/// Running tests in suite: 'parser'
/// ```
pub fn print_banner(scope: &RunScope, locale: &str) {
    let line = match scope {
        RunScope::All => t!("run.all_suites", locale = locale),
        RunScope::Single(name) => t!("run.single_suite", locale = locale, name = name),
    };
    println!("{}", line.bold());
}

/// Prints the summary of a successful run: per suite the number of cases
/// executed, then the total.
///
/// 打印成功运行的摘要：每个套件执行的用例数，然后是总数。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - parser               |     12 cases
///   - lexer                |      3 cases
/// All tests passed: 15 cases in 2 suites (0.42s)
/// ```
pub fn print_summary(summary: &RunSummary, locale: &str) {
    println!("\n{}", t!("report.summary_banner", locale = locale).bold());

    for suite in &summary.suites {
        println!(
            "  - {:<20} | {:>6} {}",
            suite.name.cyan(),
            suite.cases_run,
            t!("report.cases", locale = locale)
        );
    }

    let line = match &summary.scope {
        RunScope::All => t!(
            "report.all_passed",
            locale = locale,
            count = summary.total_cases(),
            suites = summary.suites.len(),
            duration = format!("{:.2}", summary.duration.as_secs_f64())
        ),
        RunScope::Single(name) => t!(
            "report.suite_passed",
            locale = locale,
            count = summary.total_cases(),
            name = name,
            duration = format!("{:.2}", summary.duration.as_secs_f64())
        ),
    };
    println!("\n{}", line.green().bold());
}

/// Prints the suites and cases of a plan without running them.
pub fn print_plan(plan: &ExecutionPlan, locale: &str) {
    for suite in &plan.suites {
        println!(
            "{} ({})",
            suite.name.cyan().bold(),
            t!("list.case_count", locale = locale, count = suite.cases.len())
        );
        for case in &suite.cases {
            println!("  - {}", case.path.display());
        }
    }
    println!(
        "\n{}",
        t!(
            "list.total",
            locale = locale,
            count = plan.case_count(),
            suites = plan.suites.len()
        )
    );
}

/// Prints a run-ending error with a header naming its category.
///
/// Case failures name the failing input file first, the way a failed
/// assertion would.
///
/// 打印导致运行结束的错误，并带有指明其类别的标题。
pub fn print_run_error(error: &RunError, locale: &str) {
    let header = match error.kind() {
        ErrorKind::Configuration => t!("report.config_error", locale = locale),
        ErrorKind::Environment => t!("report.environment_error", locale = locale),
        ErrorKind::CaseFailure => t!("report.case_failure", locale = locale),
    };

    println!("\n{}", header.red().bold());
    println!("{}", "-".repeat(80));

    if let RunError::CaseFailed {
        suite,
        case_name,
        path,
        code,
    } = error
    {
        println!(
            "{}",
            t!("report.test_failed", locale = locale, name = case_name).red()
        );
        println!("  {:<10} {}", t!("report.suite", locale = locale), suite);
        println!("  {:<10} {}", t!("report.file", locale = locale), path.display());
        println!("  {:<10} {}", t!("report.exit_code", locale = locale), code);
    }
    println!("{}", "-".repeat(80));
}
