//! # Subject Process Module / 被测进程模块
//!
//! Launches the subject executable for one case and waits for it to exit.
//! The child inherits the runner's stdio; its output is neither captured nor
//! interpreted.
//!
//! 为单个用例启动被测可执行文件并等待其退出。子进程继承运行器的标准输入输出；
//! 其输出既不被捕获也不被解析。

use std::path::Path;
use std::process::Stdio;

use crate::core::error::{ExitOutcome, RunError};

/// Runs `<executable> <case_path>` in `working_dir` and returns its exit code.
///
/// A spawn failure is an environment error, not a case failure.
pub async fn run_subject(
    executable: &Path,
    case_path: &Path,
    working_dir: &Path,
) -> Result<ExitOutcome, RunError> {
    let mut cmd = tokio::process::Command::new(executable);
    cmd.arg(case_path)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true);

    tracing::debug!(
        executable = %executable.display(),
        case = %case_path.display(),
        "spawning subject"
    );

    let status = cmd.status().await.map_err(|source| RunError::Launch {
        path: executable.to_path_buf(),
        source,
    })?;

    Ok(ExitOutcome(status.code()))
}
