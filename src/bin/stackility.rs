use stackility::cli::start;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match start::start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
