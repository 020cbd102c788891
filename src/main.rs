use std::process::ExitCode;
use suite_runner::{cli, error::RunError};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // Configuration and usage problems share exit code 2.
            match e.downcast_ref::<RunError>() {
                Some(run_error) => ExitCode::from(run_error.kind().exit_code()),
                None => ExitCode::from(2),
            }
        }
    }
}
