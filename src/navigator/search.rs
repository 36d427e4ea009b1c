//! Recursive, lazy search for entries by name.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use super::{NavError, Navigator};
use crate::ports::filesystem::FileSystem;

/// Lazy depth-first walk yielding paths whose final component contains the
/// needle.
///
/// Children are visited in the order the OS lists them, and a directory's
/// subtree is finished before its next sibling. Symlinks are reported but
/// never descended. Directories that cannot be read are skipped and counted.
pub struct SearchResults<'a> {
    fs: &'a dyn FileSystem,
    needle: String,
    stack: Vec<Frame>,
    skipped: usize,
}

struct Frame {
    dir: PathBuf,
    names: std::vec::IntoIter<OsString>,
}

impl<'a> SearchResults<'a> {
    fn new(fs: &'a dyn FileSystem, root: &Path, names: Vec<OsString>, needle: &str) -> Self {
        Self {
            fs,
            needle: needle.to_string(),
            stack: vec![Frame { dir: root.to_path_buf(), names: names.into_iter() }],
            skipped: 0,
        }
    }

    /// Number of directories skipped so far because they could not be read.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn descend(&mut self, dir: &Path) {
        match self.fs.read_dir(dir) {
            Ok(names) => {
                self.stack.push(Frame { dir: dir.to_path_buf(), names: names.into_iter() });
            }
            Err(err) => {
                self.skipped += 1;
                if matches!(err.kind(), io::ErrorKind::PermissionDenied | io::ErrorKind::NotFound)
                {
                    tracing::debug!(dir = %dir.display(), %err, "search skipped directory");
                } else {
                    tracing::warn!(dir = %dir.display(), %err, "search skipped directory");
                }
            }
        }
    }
}

impl Iterator for SearchResults<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(name) = frame.names.next() else {
                self.stack.pop();
                continue;
            };
            let path = frame.dir.join(&name);

            match self.fs.symlink_metadata(&path) {
                Ok(stat) if stat.is_dir() => self.descend(&path),
                Ok(_) => {}
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "entry vanished during search");
                    continue;
                }
            }

            if name.to_string_lossy().contains(self.needle.as_str()) {
                return Some(path);
            }
        }
    }
}

impl<'a> Navigator<'a> {
    /// Searches `root` and every directory below it for entries whose name
    /// contains `needle` (case-sensitive substring match).
    ///
    /// The root itself is never reported. The walk is lazy: nothing below
    /// the root is read until the iterator is advanced. The iterator borrows
    /// the service context, not this navigator. Names that are not valid
    /// UTF-8 are matched on their lossy form.
    ///
    /// # Errors
    ///
    /// Returns `EmptyNeedle` for an empty needle, and `NotFound`,
    /// `NotADirectory`, or the read error if `root` cannot be listed.
    pub fn search_by_name(
        &self,
        root: &Path,
        needle: &str,
    ) -> Result<SearchResults<'a>, NavError> {
        if needle.is_empty() {
            return Err(NavError::EmptyNeedle);
        }
        let fs = self.ctx.fs.as_ref();
        let stat = fs.metadata(root).map_err(|e| NavError::from_io(root, e))?;
        if !stat.is_dir() {
            return Err(NavError::NotADirectory(root.to_path_buf()));
        }
        let names = fs.read_dir(root).map_err(|e| NavError::from_io(root, e))?;
        tracing::debug!(root = %root.display(), %needle, "search started");
        Ok(SearchResults::new(fs, root, names, needle))
    }
}
