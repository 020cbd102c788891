//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Runner,
//! including configuration, discovery, planning and sequential execution.
//!
//! 此模块包含 Suite Runner 的核心功能，
//! 包括配置、发现、计划和顺序执行。

pub mod config;
pub mod discovery;
pub mod error;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::RunConfig;
pub use error::{ErrorKind, RunError};
pub use execution::Runner;
