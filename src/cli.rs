//! # Command Line Interface / 命令行接口
//!
//! Builds the `suite-runner` command line and dispatches to the `run`,
//! `list` and `init` commands. Running without a subcommand is `run`.
//!
//! 构建 `suite-runner` 命令行并分派到 `run`、`list` 和 `init` 命令。
//! 不带子命令运行即为 `run`。

pub mod commands;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, parser::ValueSource};
use std::{env, path::PathBuf};

use crate::core::config::DEFAULT_CONFIG_FILE;
use crate::infra::t;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
pub fn pre_parse_language<I, S>(args: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

/// Arguments shared by `run` and `list`: what to select and where to find it.
fn selection_args(locale: &str) -> Vec<Arg> {
    vec![
        Arg::new("test-suite")
            .short('t')
            .long("test-suite")
            .help(t!("cli.arg_test_suite", locale = locale).to_string())
            .value_name("SUITE")
            .action(ArgAction::Set),
        Arg::new("config")
            .short('c')
            .long("config")
            .help(t!("cli.arg_config", locale = locale).to_string())
            .value_name("CONFIG")
            .default_value(DEFAULT_CONFIG_FILE)
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("project-dir")
            .long("project-dir")
            .help(t!("cli.arg_project_dir", locale = locale).to_string())
            .value_name("PROJECT_DIR")
            .default_value(".")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("root")
            .long("root")
            .help(t!("cli.arg_root", locale = locale).to_string())
            .value_name("ROOT")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("executable")
            .long("executable")
            .help(t!("cli.arg_executable", locale = locale).to_string())
            .value_name("EXECUTABLE")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
    ]
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("suite-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.arg_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .args(selection_args(locale))
        .args_conflicts_with_subcommands(true)
        .subcommand(
            Command::new("run")
                .about(t!("cli.cmd_run_about", locale = locale).to_string())
                .args(selection_args(locale)),
        )
        .subcommand(
            Command::new("list")
                .about(t!("cli.cmd_list_about", locale = locale).to_string())
                .args(selection_args(locale)),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cli.cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("cli.arg_output", locale = locale).to_string())
                        .value_name("OUTPUT")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .help(t!("cli.arg_force", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("cli.arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Values of the selection arguments after parsing.
#[derive(Debug, Clone)]
pub struct SelectionArgs {
    pub suite: Option<String>,
    pub config: PathBuf,
    /// `true` when `--config` was given on the command line.
    pub config_explicit: bool,
    pub project_dir: PathBuf,
    pub root: Option<PathBuf>,
    pub executable: Option<PathBuf>,
    /// `--lang`, if given.
    pub lang: Option<String>,
}

impl SelectionArgs {
    fn from_matches(matches: &ArgMatches, lang: Option<String>) -> Self {
        Self {
            suite: matches.get_one::<String>("test-suite").cloned(),
            config: matches
                .get_one::<PathBuf>("config")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE)),
            config_explicit: matches.value_source("config") == Some(ValueSource::CommandLine),
            project_dir: matches
                .get_one::<PathBuf>("project-dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            root: matches.get_one::<PathBuf>("root").cloned(),
            executable: matches.get_one::<PathBuf>("executable").cloned(),
            lang,
        }
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let cli_lang = pre_parse_language(env::args());
    let language = cli_lang
        .clone()
        .unwrap_or_else(|| sys_locale::get_locale().unwrap_or_else(|| "en".to_string()));
    let language = crate::resolve_locale(&language).to_string();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(SelectionArgs::from_matches(run_matches, cli_lang)).await?;
        }
        Some(("list", list_matches)) => {
            commands::list::execute(SelectionArgs::from_matches(list_matches, cli_lang))?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let force = init_matches.get_flag("force");
            let non_interactive = init_matches.get_flag("non-interactive");
            commands::init::execute(output, force, non_interactive, &language)?;
        }
        _ => {
            commands::run::execute(SelectionArgs::from_matches(&matches, cli_lang)).await?;
        }
    }
    Ok(())
}
