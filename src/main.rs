//! Binary entrypoint for the `crumbs` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Recording is handled in commands::dispatch via CRUMBS_RECORD=<file>.
    match crumbs::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
