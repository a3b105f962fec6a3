//! Prints `Top-level-1` then `Low-level-1` to stdout.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match top_level_1::run(io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}
