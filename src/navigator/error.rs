//! Error taxonomy for navigator operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a single navigator operation.
///
/// Every variant renders as a one-line, human-readable message; the command
/// loop prints it and carries on.
#[derive(Debug, Error)]
pub enum NavError {
    /// Nothing exists at the path.
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Something already exists at the path.
    #[error("path already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The path exists but is not a directory (or does not exist at all
    /// when a directory was required).
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The OS refused access.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// A rename crossed devices and the copy-then-delete fallback failed.
    #[error("cannot move {} to {} across devices: {reason}", .src.display(), .dst.display())]
    CrossDevice {
        /// Source of the move.
        src: PathBuf,
        /// Requested destination.
        dst: PathBuf,
        /// What went wrong in the fallback.
        reason: String,
    },

    /// A directory copy would recurse into its own output.
    #[error("cannot copy {} into itself ({})", .src.display(), .dst.display())]
    DestinationInsideSource {
        /// Directory being copied.
        src: PathBuf,
        /// Destination inside it.
        dst: PathBuf,
    },

    /// A file copy whose destination is the source itself, through the same
    /// path, a hard link, or a symbolic link.
    #[error("{} and {} are the same file", .src.display(), .dst.display())]
    SameFile {
        /// File being copied.
        src: PathBuf,
        /// Destination naming the same file.
        dst: PathBuf,
    },

    /// Search was asked for an empty name.
    #[error("search text must not be empty")]
    EmptyNeedle,

    /// Any other OS error.
    #[error("{}: {source}", .path.display())]
    Io {
        /// Path the failing call was made on.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}

impl NavError {
    /// Classifies an `io::Error` raised while operating on `path`.
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source: err },
        }
    }

    /// Returns `true` for `NotFound`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_io_kinds() {
        let p = Path::new("/x");
        assert!(matches!(
            NavError::from_io(p, io::ErrorKind::NotFound.into()),
            NavError::NotFound(_)
        ));
        assert!(matches!(
            NavError::from_io(p, io::ErrorKind::AlreadyExists.into()),
            NavError::AlreadyExists(_)
        ));
        assert!(matches!(
            NavError::from_io(p, io::ErrorKind::PermissionDenied.into()),
            NavError::PermissionDenied(_)
        ));
        assert!(matches!(
            NavError::from_io(p, io::Error::other("disk on fire")),
            NavError::Io { .. }
        ));
    }

    #[test]
    fn messages_name_the_path() {
        let err = NavError::AlreadyExists(PathBuf::from("/tmp/a"));
        assert_eq!(err.to_string(), "path already exists: /tmp/a");

        let err = NavError::from_io(Path::new("/tmp/b"), io::Error::other("boom"));
        assert_eq!(err.to_string(), "/tmp/b: boom");
    }
}
