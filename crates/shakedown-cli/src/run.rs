//! Command execution.

use std::io::Write;
use std::process::Command;

use anyhow::{bail, Context, Result};
use shakedown_console::{redirected, Banner, Decoration, Echo, EchoOptions, Tone};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks warn, info, or debug.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs a parsed command line against standard output.
///
/// Returns the exit code for the process.
pub fn run(cli: &Cli) -> Result<i32> {
    let mut echo = Echo::builder()
        .quiet(cli.quiet)
        .output_mode(cli.output)
        .build();
    run_with(cli, &mut echo)
}

pub(crate) fn run_with<W: Write>(cli: &Cli, echo: &mut Echo<W>) -> Result<i32> {
    match &cli.command {
        Commands::Banner { version_string } => {
            let kind = cli.term_kind();
            tracing::debug!(?kind, "rendering banner");
            echo.banner(&Banner::new(version_string.as_str()), kind)
                .context("failed to write banner")?;
            Ok(0)
        }

        Commands::Say {
            style,
            no_newline,
            text,
        } => {
            let mut options = EchoOptions::new().newline(!no_newline);
            if let Some(style) = style {
                options = options.style(style);
                if options.get_decoration().is_none() {
                    tracing::info!(style = %style, "unknown style, echoing plain text");
                }
            }
            echo.echo(&text.join(" "), &options)
                .context("failed to write to stdout")?;
            Ok(0)
        }

        Commands::Capture {
            stderr,
            to,
            command,
        } => {
            let Some((program, args)) = command.split_first() else {
                bail!("no command given to capture");
            };
            let channel = Commands::capture_channel(*stderr);

            let status = redirected(channel, to, || -> Result<_> {
                Command::new(program)
                    .args(args)
                    .status()
                    .with_context(|| format!("failed to run '{}'", program))
            })?;
            let code = status.code().unwrap_or(1);
            tracing::info!(program = %program, code, path = %to.display(), "captured command");

            echo.echo(
                &format!("{} > {}", command.join(" "), to.display()),
                &EchoOptions::new().decoration(Decoration::StepMinor).newline(false),
            )?;
            let tone = if status.success() { Tone::Pass } else { Tone::Fail };
            echo.echo(tone.as_str(), &EchoOptions::new().decoration(Decoration::Outcome(tone)))?;
            Ok(code)
        }
    }
}
