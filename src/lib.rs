//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the Suite Runner tool,
//! which feeds every input file of a test tree to an external executable, one
//! at a time, and stops at the first non-zero exit code.
//!
//! 此库为 Suite Runner 工具提供核心功能，
//! 它将测试目录树中的每个输入文件逐一交给外部可执行文件，并在第一个非零退出码处停止。
//!
//! ## Modules / 模块
//!
//! - `core` - Configuration, discovery, planning and sequential execution
//! - `infra` - Subject process launching, file system helpers and i18n
//! - `reporting` - Console output
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 配置、发现、计划和顺序执行
//! - `infra` - 被测进程启动、文件系统辅助和国际化
//! - `reporting` - 控制台输出
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::error;
pub use crate::core::execution;
pub use crate::core::models;

/// Picks the best available locale for a requested one.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en" from "en-US"), and finally falls back to "en".
pub fn resolve_locale(requested: &str) -> &str {
    let available_locales = rust_i18n::available_locales!();

    if available_locales.contains(&requested) {
        requested
    } else {
        requested
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    }
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
