//! Argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use shakedown_console::{Channel, OutputMode, TermKind};

/// Styled console output for shakedown.
#[derive(Debug, Parser)]
#[command(name = "shakedown-echo", version, about, long_about = None)]
pub struct Cli {
    /// Suppress all console output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output mode: auto, term, text, or term-debug
    #[arg(long, global = true, value_name = "MODE", default_value = "auto")]
    pub output: OutputMode,

    /// Terminal type to assume instead of reading TERM
    #[arg(long, global = true, value_name = "TERM")]
    pub term: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The terminal kind from `--term`, falling back to the environment.
    pub fn term_kind(&self) -> TermKind {
        match &self.term {
            Some(term) => TermKind::from_term(Some(term)),
            None => TermKind::from_env(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the product banner
    Banner {
        /// Version shown in the banner
        #[arg(long, value_name = "VERSION", default_value = env!("CARGO_PKG_VERSION"))]
        version_string: String,
    },

    /// Echo text, optionally in a named style
    Say {
        /// Style name, e.g. step-maj, quote-fail, pass
        #[arg(short, long)]
        style: Option<String>,

        /// Do not print the trailing newline
        #[arg(short = 'n', long)]
        no_newline: bool,

        /// Text to echo; several words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Run a command with its output captured into a file
    Capture {
        /// Capture standard error instead of standard output
        #[arg(long)]
        stderr: bool,

        /// File receiving the output; truncated first
        #[arg(long, value_name = "PATH")]
        to: PathBuf,

        /// Command and arguments to run
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

impl Commands {
    /// The stream a `capture` command redirects.
    pub fn capture_channel(stderr: bool) -> Channel {
        if stderr {
            Channel::Stderr
        } else {
            Channel::Stdout
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_say_with_style() {
        let cli = Cli::try_parse_from(["shakedown-echo", "say", "--style", "pass", "all", "good"])
            .unwrap();
        assert!(!cli.quiet);
        assert_eq!(cli.output, OutputMode::Auto);
        match cli.command {
            Commands::Say {
                style,
                no_newline,
                text,
            } => {
                assert_eq!(style.as_deref(), Some("pass"));
                assert!(!no_newline);
                assert_eq!(text, vec!["all", "good"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shakedown-echo",
            "banner",
            "-q",
            "--output",
            "term-debug",
            "-vv",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.output, OutputMode::TermDebug);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_invalid_output_mode_rejected() {
        let result = Cli::try_parse_from(["shakedown-echo", "--output", "json", "banner"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_banner_version_default() {
        let cli = Cli::try_parse_from(["shakedown-echo", "banner"]).unwrap();
        match cli.command {
            Commands::Banner { version_string } => {
                assert_eq!(version_string, env!("CARGO_PKG_VERSION"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_capture_keeps_command_flags() {
        let cli = Cli::try_parse_from([
            "shakedown-echo",
            "capture",
            "--stderr",
            "--to",
            "out.log",
            "--",
            "ls",
            "-la",
            "/tmp",
        ])
        .unwrap();
        match cli.command {
            Commands::Capture {
                stderr,
                to,
                command,
            } => {
                assert!(stderr);
                assert_eq!(to, PathBuf::from("out.log"));
                assert_eq!(command, vec!["ls", "-la", "/tmp"]);
                assert_eq!(Commands::capture_channel(stderr), Channel::Stderr);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_say_requires_text() {
        assert!(Cli::try_parse_from(["shakedown-echo", "say"]).is_err());
    }

    #[test]
    fn test_term_override() {
        let cli = Cli::try_parse_from(["shakedown-echo", "--term", "xterm", "banner"]).unwrap();
        assert_eq!(cli.term_kind(), TermKind::Glyphs);

        let cli = Cli::try_parse_from(["shakedown-echo", "--term", "dumb", "banner"]).unwrap();
        assert_eq!(cli.term_kind(), TermKind::Plain);
    }
}
