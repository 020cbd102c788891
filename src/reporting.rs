//! # Reporting Module / 报告模块
//!
//! This module handles console output for runs: the start banner, the success
//! summary, plan listings and failure details, with internationalization
//! support.
//!
//! 此模块处理运行的控制台输出：开始横幅、成功摘要、计划列表和失败详情，
//! 支持国际化。

pub mod console;

// Re-export common reporting functions
pub use console::{print_banner, print_plan, print_run_error, print_summary};
