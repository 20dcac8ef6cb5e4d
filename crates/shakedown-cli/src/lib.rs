//! Command-line front end for [`shakedown_console`].
//!
//! The `shakedown-echo` binary prints the product banner, echoes styled
//! text, and runs commands with stdout or stderr captured into a file.
//! Argument parsing lives in [`Cli`]; [`run`] carries out a parsed command
//! and returns the process exit code.

mod cli;
mod run;

pub use cli::{Cli, Commands};
pub use run::{init_tracing, run};
