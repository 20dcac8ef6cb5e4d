//! Scoped redirection of an output stream into a file.
//!
//! A [`Redirect`] swaps the descriptor behind standard output (or standard
//! error, or any raw descriptor) for a freshly truncated file, at the OS
//! level. Everything written to that descriptor while the guard lives lands
//! in the file, including output from child processes that inherit it.
//! Dropping the guard, or calling [`Redirect::finish`], puts the original
//! descriptor back and closes the file.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::io::Write;
//! use shakedown_console::redirect::{redirected, Channel, RedirectError};
//!
//! redirected(Channel::Stdout, "/tmp/run.log", || -> Result<(), RedirectError> {
//!     // Goes to /tmp/run.log, not the terminal.
//!     let _ = std::io::stdout().write_all(b"hello\n");
//!     Ok(())
//! })?;
//! # Ok::<(), RedirectError>(())
//! ```
//!
//! Redirections of one stream may nest as long as each inner guard is
//! released before the outer one. Redirecting from several threads at once
//! is not supported.

mod error;
mod sys;

pub use error::RedirectError;

use std::fs::File;
use std::io::{self, Write};
use std::os::fd::{AsRawFd, OwnedFd, RawFd};
use std::path::{Path, PathBuf};

/// The stream a [`Redirect`] takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
    /// Any open descriptor owned by the caller.
    Fd(RawFd),
}

impl Channel {
    /// Returns the descriptor number behind this channel.
    pub fn raw_fd(&self) -> RawFd {
        match self {
            Channel::Stdout => io::stdout().as_raw_fd(),
            Channel::Stderr => io::stderr().as_raw_fd(),
            Channel::Fd(fd) => *fd,
        }
    }

    /// Pushes buffered Rust-level output to the current descriptor.
    fn flush(&self) -> io::Result<()> {
        match self {
            Channel::Stdout => io::stdout().flush(),
            Channel::Stderr => io::stderr().flush(),
            Channel::Fd(_) => Ok(()),
        }
    }
}

/// An active redirection. See the [module docs](self).
#[derive(Debug)]
pub struct Redirect {
    channel: Channel,
    target: RawFd,
    path: PathBuf,
    saved: Option<OwnedFd>,
    file: Option<File>,
}

impl Redirect {
    /// Redirects `channel` into the file at `path`, creating or truncating it.
    ///
    /// On error nothing is redirected and no descriptor is leaked.
    pub fn new(channel: Channel, path: impl AsRef<Path>) -> Result<Self, RedirectError> {
        let path = path.as_ref().to_path_buf();
        let target = channel.raw_fd();

        if let Err(err) = channel.flush() {
            tracing::warn!(fd = target, error = %err, "failed to flush stream before redirecting");
        }

        let saved = sys::duplicate(target)
            .map_err(|source| RedirectError::Duplicate { fd: target, source })?;

        // `saved` and `file` close on drop if any later step fails; the
        // target has not been touched until `replace` succeeds.
        let file = File::create(&path).map_err(|source| RedirectError::Open {
            path: path.clone(),
            source,
        })?;

        // Logged before the swap so a stderr target never captures it.
        tracing::debug!(fd = target, path = %path.display(), "redirecting descriptor");

        sys::replace(file.as_raw_fd(), target).map_err(|source| RedirectError::Replace {
            fd: target,
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            channel,
            target,
            path,
            saved: Some(saved),
            file: Some(file),
        })
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// The destination file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ends the redirection and reports any teardown failure.
    ///
    /// Restoring the descriptor and closing the file are both attempted even
    /// if one of them fails. A restore failure takes precedence in the
    /// returned error.
    pub fn finish(mut self) -> Result<(), RedirectError> {
        self.release()
    }

    fn release(&mut self) -> Result<(), RedirectError> {
        if self.saved.is_none() && self.file.is_none() {
            return Ok(());
        }

        let flushed = self.channel.flush();

        let restored = match self.saved.take() {
            Some(saved) => sys::replace(saved.as_raw_fd(), self.target).map_err(|source| {
                RedirectError::Restore {
                    fd: self.target,
                    source,
                }
            }),
            None => Ok(()),
        };

        let closed = match self.file.take() {
            Some(file) => sys::close(file).map_err(|source| RedirectError::Close {
                path: self.path.clone(),
                source,
            }),
            None => Ok(()),
        };

        // Logged after the restore for the same reason as in `new`.
        if let Err(err) = flushed {
            tracing::warn!(fd = self.target, error = %err, "failed to flush redirected stream");
        }
        tracing::debug!(fd = self.target, path = %self.path.display(), "restored descriptor");

        combine_teardown(restored, closed)
    }
}

/// Folds the two teardown outcomes into one, preferring the restore error.
fn combine_teardown(
    restored: Result<(), RedirectError>,
    closed: Result<(), RedirectError>,
) -> Result<(), RedirectError> {
    match (restored, closed) {
        (Err(restore), Err(close)) => {
            tracing::warn!(error = %close, "redirect destination also failed to close");
            Err(restore)
        }
        (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        (Ok(()), Ok(())) => Ok(()),
    }
}

impl Drop for Redirect {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            tracing::warn!(error = %err, "failed to tear down redirect");
        }
    }
}

/// Runs `body` with `channel` redirected into the file at `path`.
///
/// The redirection is always torn down, also when `body` fails or panics.
/// An error from `body` wins over a teardown error, which is then only
/// logged.
pub fn redirected<T, E, F>(channel: Channel, path: impl AsRef<Path>, body: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<RedirectError>,
{
    let guard = Redirect::new(channel, path)?;
    let result = body();
    let teardown = guard.finish();

    match (result, teardown) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(err.into()),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(teardown)) => {
            tracing::warn!(error = %teardown, "redirect teardown failed after scope error");
            Err(err)
        }
    }
}
