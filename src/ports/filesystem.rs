//! Filesystem port for the primitives the navigator is built on.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of object a path names, as seen by a stat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// A symbolic link (only reported by no-follow stats).
    Symlink,
    /// Sockets, FIFOs, devices and anything else.
    Other,
}

/// Metadata snapshot returned by the stat calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Kind of the object.
    pub kind: EntryKind,
    /// Length in bytes as reported by the OS.
    pub size: u64,
    /// Owner/group/other permission bits (`0o777` mask), if known.
    pub mode: Option<u32>,
    /// Last modification time, if the platform reports one.
    pub modified: Option<DateTime<Utc>>,
    /// Identity of the underlying object, where the platform exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<FileId>,
}

/// Device and inode pair; two paths with equal ids name the same object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId {
    /// Device the object lives on.
    pub dev: u64,
    /// Inode (or file index) on that device.
    pub ino: u64,
}

impl Stat {
    /// Returns `true` if this is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Returns `true` if this is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Returns `true` if this is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}

/// Provides every file-system primitive the navigator uses.
///
/// Abstracting the filesystem allows recording a session to a cassette and
/// replaying it deterministically without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is gone or unreadable.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Stats a path, following symbolic links.
    ///
    /// # Errors
    ///
    /// Returns an error if the path (or a link target) does not exist or
    /// cannot be queried.
    fn metadata(&self, path: &Path) -> io::Result<Stat>;

    /// Stats a path without following a final symbolic link.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be queried.
    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat>;

    /// Lists the names of a directory's immediate children in OS order.
    ///
    /// Names are returned as the OS reports them, whether or not they are
    /// valid UTF-8. Children that vanish while the listing is in progress
    /// are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Reads the target a symbolic link points at, unresolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is missing or not a symbolic link.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Creates a symbolic link at `link` pointing at `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `link` exists or links are not supported.
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()>;

    /// Resolves a path to its absolute, symlink-free form.
    ///
    /// # Errors
    ///
    /// Returns an error if any component does not exist.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Creates a new empty file, failing if anything already exists there.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the path is taken, `NotFound` if the
    /// parent directory is missing.
    fn create_new_file(&self, path: &Path) -> io::Result<()>;

    /// Creates a single directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists or the parent is missing.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates a directory and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if any component cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Removes a file or symbolic link.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be removed.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Removes an empty directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory is not empty or cannot be removed.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Copies a file's contents to `to`, overwriting it, and returns the
    /// number of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns an error if `from` cannot be read or `to` cannot be written.
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Renames `from` to `to` in a single step.
    ///
    /// # Errors
    ///
    /// Returns an error if the rename fails, including when the two paths
    /// live on different devices.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}
