//! Redirection errors.

use std::io;
use std::os::fd::RawFd;
use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a redirect cannot be set up or torn down.
///
/// Setup errors (`Duplicate`, `Open`, `Replace`) leave the target stream as
/// it was. Teardown errors (`Restore`, `Close`) are reported after both
/// teardown steps have been attempted.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The target descriptor could not be saved.
    #[error("failed to duplicate descriptor {fd}")]
    Duplicate { fd: RawFd, source: io::Error },

    /// The destination file could not be opened for writing.
    #[error("failed to open redirect destination '{}'", .path.display())]
    Open { path: PathBuf, source: io::Error },

    /// The destination could not be installed over the target descriptor.
    #[error("failed to redirect descriptor {fd} to '{}'", .path.display())]
    Replace {
        fd: RawFd,
        path: PathBuf,
        source: io::Error,
    },

    /// The saved descriptor could not be put back.
    #[error("failed to restore descriptor {fd}")]
    Restore { fd: RawFd, source: io::Error },

    /// The destination file did not close cleanly.
    #[error("failed to close redirect destination '{}'", .path.display())]
    Close { path: PathBuf, source: io::Error },
}

impl RedirectError {
    /// Returns true for errors raised while leaving a redirect scope.
    pub fn is_teardown(&self) -> bool {
        matches!(
            self,
            RedirectError::Restore { .. } | RedirectError::Close { .. }
        )
    }
}
