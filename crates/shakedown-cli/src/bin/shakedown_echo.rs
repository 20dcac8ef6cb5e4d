//! `shakedown-echo`: banner, styled echo, and captured command output.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - For `capture`, the captured command's own exit code

use std::process::ExitCode;

use clap::Parser;
use shakedown_cli::{init_tracing, run, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
