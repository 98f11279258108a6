use std::process::ExitCode;

use prompt_history_viewer::cli;
use prompt_history_viewer::utils::init_logging;

fn main() -> ExitCode {
    init_logging();

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
