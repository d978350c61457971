use std::process::ExitCode;

use phishcheck_core::logging::{self, LogTarget};

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() -> ExitCode {
    if let LogTarget::File(path) = logging::init() {
        tracing::debug!(path = %path.display(), "logging to file");
    }

    match CliCommand::run_from_args().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("phishcheck error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
