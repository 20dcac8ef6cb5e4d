//! Thin wrappers over the descriptor calls used by redirection.

use std::fs::File;
use std::io::Result;
use std::os::fd::{FromRawFd, IntoRawFd, OwnedFd, RawFd};

/// Converts a libc status code into a Rust result.
trait IntoResult {
    fn into_result(self) -> Result<libc::c_int>;
}

impl IntoResult for libc::c_int {
    #[inline]
    fn into_result(self) -> Result<libc::c_int> {
        if self == -1 {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(self)
        }
    }
}

/// Duplicates `fd` into a new close-on-exec descriptor.
///
/// An invalid or closed `fd` yields `EBADF`.
pub(crate) fn duplicate(fd: RawFd) -> Result<OwnedFd> {
    let dup = unsafe { libc::fcntl(fd, libc::F_DUPFD_CLOEXEC, 0) }.into_result()?;
    // fcntl just handed us a fresh descriptor nobody else owns.
    Ok(unsafe { OwnedFd::from_raw_fd(dup) })
}

/// Makes `target` refer to the same open file as `source`.
pub(crate) fn replace(source: RawFd, target: RawFd) -> Result<()> {
    loop {
        match unsafe { libc::dup2(source, target) }.into_result() {
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            result => return result.map(|_| ()),
        }
    }
}

/// Closes a file, reporting the error that dropping it would swallow.
pub(crate) fn close(file: File) -> Result<()> {
    unsafe { libc::close(file.into_raw_fd()) }
        .into_result()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::fd::AsRawFd;

    #[test]
    fn test_duplicate_invalid_descriptor() {
        let err = duplicate(-1).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));
    }

    #[test]
    fn test_duplicate_is_close_on_exec() {
        let file = tempfile::tempfile().unwrap();
        let dup = duplicate(file.as_raw_fd()).unwrap();
        assert_ne!(dup.as_raw_fd(), file.as_raw_fd());

        let flags = unsafe { libc::fcntl(dup.as_raw_fd(), libc::F_GETFD) };
        assert!(flags != -1 && flags & libc::FD_CLOEXEC != 0);
    }

    #[test]
    fn test_replace_with_invalid_source() {
        let file = tempfile::tempfile().unwrap();
        let err = replace(-1, file.as_raw_fd()).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));
    }

    #[test]
    fn test_replace_onto_invalid_target() {
        let file = tempfile::tempfile().unwrap();
        let err = replace(file.as_raw_fd(), -1).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::EBADF));
    }
}
