//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Suite Runner:
//! launching the subject process, file system helpers and i18n access.
//!
//! 此模块为 Suite Runner 提供基础设施服务：
//! 启动被测进程、文件系统辅助功能和国际化访问。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
