//! # Commands / 命令
//!
//! One module per subcommand, plus the configuration loading `run` and
//! `list` share.
//!
//! 每个子命令一个模块，以及 `run` 和 `list` 共享的配置加载。

pub mod init;
pub mod list;
pub mod run;

use anyhow::{Context, Result};
use std::fs;

use crate::cli::SelectionArgs;
use crate::core::config::{self, Overrides, RunConfig};
use crate::infra::t;

/// Resolves the settings file and command-line overrides into a [`RunConfig`].
///
/// Returns the configuration and the locale to print messages in: `--lang`
/// wins over the settings file language.
pub(crate) fn load_run_config(args: SelectionArgs) -> Result<(RunConfig, String)> {
    let project_dir = fs::canonicalize(&args.project_dir).with_context(|| {
        t!("run.project_dir_not_found", path = args.project_dir.display()).to_string()
    })?;

    let config_path = if args.config.is_absolute() {
        args.config.clone()
    } else {
        project_dir.join(&args.config)
    };
    let settings = config::load_or_default(&config_path, args.config_explicit)?;

    let requested = args.lang.unwrap_or_else(|| settings.language.clone());
    let locale = crate::resolve_locale(&requested).to_string();
    rust_i18n::set_locale(&locale);

    let run_config = RunConfig::resolve(
        &settings,
        Overrides {
            suite_filter: args.suite,
            root: args.root,
            executable: args.executable,
        },
        &project_dir,
    )?;
    tracing::debug!(?run_config, "resolved configuration");

    Ok((run_config, locale))
}
