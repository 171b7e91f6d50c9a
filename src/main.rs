//! Binary entrypoint for the `classclash` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();
    classclash::logging::init();

    match classclash::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
