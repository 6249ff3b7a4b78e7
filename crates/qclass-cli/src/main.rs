use qclass_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let result = Cli::run_from_args();
    if let Err(err) = &result {
        eprintln!("qclass error: {:#}", err);
    }
    std::process::exit(exit_code(&result));
}

/// 0 when every query was classified, 1 on any unrecoverable failure.
fn exit_code(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
