//! # Init Command Module / 初始化命令模块
//!
//! This module implements the `init` command, which writes a new
//! `SuiteRunner.toml` settings file. By default it runs a short interactive
//! wizard; `--non-interactive` writes the defaults directly.
//!
//! 此模块实现 `init` 命令，用于写入新的 `SuiteRunner.toml` 设置文件。
//! 默认运行一个简短的交互式向导；`--non-interactive` 直接写入默认值。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::{fs, path::Path, path::PathBuf};

use crate::core::config::RunnerSettings;
use crate::infra::t;

const CONFIG_HEADER: &str = "# Suite Runner settings / Suite Runner 设置
#
# root:       directory with one subdirectory per test suite
# executable: program invoked as `<executable> <case-file>` for every case
# suites:     names accepted by --test-suite (empty list accepts any)
# extensions: only files with these extensions are cases (empty: all files)

";

/// Renders settings as the text of a settings file.
pub fn render_settings(settings: &RunnerSettings) -> Result<String> {
    let body = toml::to_string(settings).context("Failed to serialize settings")?;
    Ok(format!("{CONFIG_HEADER}{body}"))
}

/// Executes the init command.
///
/// # Arguments
/// * `output` - Path for the new settings file
/// * `force` - Overwrite an existing file without asking
/// * `non_interactive` - Skip the wizard and write the defaults
/// * `language` - Language for messages, also stored in the file
pub fn execute(output: PathBuf, force: bool, non_interactive: bool, language: &str) -> Result<()> {
    let theme = ColorfulTheme::default();

    if output.exists() && !force {
        if non_interactive {
            println!(
                "{}",
                t!("init.file_exists", locale = language, path = output.display()).red()
            );
            println!("{}", t!("init.use_force", locale = language).yellow());
            return Ok(());
        }

        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init.overwrite_prompt", locale = language, path = output.display()))
            .default(false)
            .interact()
            .context(t!("init.confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    let mut settings = RunnerSettings {
        language: language.to_string(),
        ..RunnerSettings::default()
    };

    if !non_interactive {
        println!("\n{}", t!("init.welcome", locale = language).cyan().bold());
        settings = run_wizard(settings, &theme, language)?;
    }

    write_settings(&output, &settings, language)?;

    println!(
        "{}",
        t!("init.success", locale = language, path = output.display()).green()
    );
    println!("{}", t!("init.next_steps", locale = language));
    Ok(())
}

/// Asks for each setting, offering the current value as the default.
fn run_wizard(
    defaults: RunnerSettings,
    theme: &ColorfulTheme,
    language: &str,
) -> Result<RunnerSettings> {
    let prompt_failed = || t!("init.prompt_failed", locale = language).to_string();

    let root: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_root", locale = language))
        .default(defaults.root.clone())
        .interact_text()
        .with_context(prompt_failed)?;

    let executable: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_executable", locale = language))
        .default(defaults.executable.clone())
        .interact_text()
        .with_context(prompt_failed)?;

    let suites: String = Input::with_theme(theme)
        .with_prompt(t!("init.prompt_suites", locale = language))
        .default(defaults.suites.join(","))
        .interact_text()
        .with_context(prompt_failed)?;

    Ok(RunnerSettings {
        root,
        executable,
        suites: split_list(&suites),
        ..defaults
    })
}

/// Splits a comma-separated answer into trimmed, non-empty items.
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn write_settings(output: &Path, settings: &RunnerSettings, language: &str) -> Result<()> {
    // Create parent directories if needed
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                t!("init.create_parent_dir_failed", locale = language, path = parent.display())
                    .to_string()
            })?;
        }
    }

    fs::write(output, render_settings(settings)?).with_context(|| {
        t!("init.write_failed", locale = language, path = output.display()).to_string()
    })
}
