//! Path-mutating operations: create, delete, copy, move.

use std::io;
use std::path::{Path, PathBuf};

use super::{NavError, Navigator};
use crate::ports::filesystem::Stat;

/// Outcome of a successful copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySummary {
    /// Where the copy was written.
    pub destination: PathBuf,
    /// Regular files copied.
    pub files: u64,
    /// Bytes copied across all files.
    pub bytes: u64,
}

impl Navigator<'_> {
    /// Creates an empty regular file. Parent directories are not created.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if anything (even a dangling symlink) is at
    /// `path`, and `NotFound` if the parent directory is missing.
    pub fn create_file(&self, path: &Path) -> Result<PathBuf, NavError> {
        self.ensure_vacant(path)?;
        self.ctx.fs.create_new_file(path).map_err(|e| NavError::from_io(path, e))?;
        tracing::debug!(path = %path.display(), "file created");
        Ok(path.to_path_buf())
    }

    /// Creates a directory together with any missing parents.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if `path` is taken.
    pub fn create_directory(&self, path: &Path) -> Result<PathBuf, NavError> {
        self.ensure_vacant(path)?;
        self.ctx.fs.create_dir_all(path).map_err(|e| NavError::from_io(path, e))?;
        tracing::debug!(path = %path.display(), "directory created");
        Ok(path.to_path_buf())
    }

    /// Deletes a path and returns how many file-system entries were removed.
    ///
    /// Directories are removed recursively; the count includes the
    /// directory itself. A symlink is removed, never its target.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing is at `path`, or the first error hit
    /// while removing. Entries removed before that error stay removed.
    pub fn delete_path(&self, path: &Path) -> Result<u64, NavError> {
        let stat =
            self.ctx.fs.symlink_metadata(path).map_err(|e| NavError::from_io(path, e))?;
        let removed = if stat.is_dir() {
            self.remove_tree(path)?
        } else {
            self.remove_leaf(path)?
        };
        tracing::debug!(path = %path.display(), removed, "deleted");
        Ok(removed)
    }

    /// Copies a file or directory tree to `dst`, overwriting existing files.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `src` is missing, `DestinationInsideSource`
    /// if a directory would be copied into its own subtree, `SameFile` if a
    /// file would be copied onto itself, or the first I/O error hit. A
    /// failed tree copy may leave a partial destination.
    pub fn copy_path(&self, src: &Path, dst: &Path) -> Result<CopySummary, NavError> {
        let stat = self.ctx.fs.metadata(src).map_err(|e| NavError::from_io(src, e))?;
        let mut summary = CopySummary { destination: dst.to_path_buf(), files: 0, bytes: 0 };
        if stat.is_dir() {
            let root = self.ctx.fs.canonicalize(src).map_err(|e| NavError::from_io(src, e))?;
            if self.absolute_target(dst).starts_with(&root) {
                return Err(NavError::DestinationInsideSource {
                    src: src.to_path_buf(),
                    dst: dst.to_path_buf(),
                });
            }
            self.copy_tree(src, dst, &mut summary)?;
        } else {
            summary.bytes = self.copy_one(src, &stat, dst)?;
            summary.files = 1;
        }
        tracing::debug!(
            src = %src.display(),
            dst = %dst.display(),
            files = summary.files,
            bytes = summary.bytes,
            "copied"
        );
        Ok(summary)
    }

    /// Moves or renames `src` to `dst`.
    ///
    /// Uses a single rename where the OS allows it. When the rename crosses
    /// devices, falls back to copy followed by delete.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `src` is missing, or `CrossDevice` if the
    /// fallback fails. When the copy half fails the partial destination is
    /// removed and `src` is untouched.
    pub fn move_path(&self, src: &Path, dst: &Path) -> Result<PathBuf, NavError> {
        self.ctx.fs.symlink_metadata(src).map_err(|e| NavError::from_io(src, e))?;
        match self.ctx.fs.rename(src, dst) {
            Ok(()) => {}
            Err(err) if self.ctx.platform.is_cross_device(&err) => {
                tracing::debug!(src = %src.display(), dst = %dst.display(), "rename crossed devices");
                self.move_across_devices(src, dst)?;
            }
            Err(err) => return Err(NavError::from_io(src, err)),
        }
        tracing::debug!(src = %src.display(), dst = %dst.display(), "moved");
        Ok(dst.to_path_buf())
    }

    fn ensure_vacant(&self, path: &Path) -> Result<(), NavError> {
        match self.ctx.fs.symlink_metadata(path) {
            Ok(_) => Err(NavError::AlreadyExists(path.to_path_buf())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(NavError::from_io(path, err)),
        }
    }

    fn remove_leaf(&self, path: &Path) -> Result<u64, NavError> {
        match self.ctx.fs.remove_file(path) {
            Ok(()) => Ok(1),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(err) => Err(NavError::from_io(path, err)),
        }
    }

    fn remove_tree(&self, dir: &Path) -> Result<u64, NavError> {
        let fs = &self.ctx.fs;
        let mut removed = 0;
        for name in fs.read_dir(dir).map_err(|e| NavError::from_io(dir, e))? {
            let child = dir.join(name);
            let stat = match fs.symlink_metadata(&child) {
                Ok(stat) => stat,
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(NavError::from_io(&child, err)),
            };
            removed += if stat.is_dir() {
                self.remove_tree(&child)?
            } else {
                self.remove_leaf(&child)?
            };
        }
        fs.remove_dir(dir).map_err(|e| NavError::from_io(dir, e))?;
        Ok(removed + 1)
    }

    fn copy_tree(&self, src: &Path, dst: &Path, summary: &mut CopySummary) -> Result<(), NavError> {
        let fs = &self.ctx.fs;
        match fs.metadata(dst) {
            Ok(stat) if stat.is_dir() => {}
            Ok(_) => return Err(NavError::NotADirectory(dst.to_path_buf())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs.create_dir(dst).map_err(|e| NavError::from_io(dst, e))?;
            }
            Err(err) => return Err(NavError::from_io(dst, err)),
        }

        for name in fs.read_dir(src).map_err(|e| NavError::from_io(src, e))? {
            let from = src.join(&name);
            let to = dst.join(&name);
            let lstat = match fs.symlink_metadata(&from) {
                Ok(stat) => stat,
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(NavError::from_io(&from, err)),
            };
            let stat = if lstat.is_symlink() {
                match fs.metadata(&from) {
                    Ok(stat) => stat,
                    Err(err) => {
                        tracing::warn!(path = %from.display(), %err, "skipping dangling symlink");
                        continue;
                    }
                }
            } else {
                lstat.clone()
            };

            if stat.is_dir() {
                if lstat.is_symlink() && self.links_to_ancestor(src, &from)? {
                    tracing::warn!(path = %from.display(), "skipping symlink to an ancestor");
                    continue;
                }
                self.copy_tree(&from, &to, summary)?;
            } else {
                summary.bytes += self.copy_one(&from, &stat, &to)?;
                summary.files += 1;
            }
        }
        Ok(())
    }

    /// Copies one file, refusing when `dst` already names the same file:
    /// opening it for writing would truncate the source.
    fn copy_one(&self, src: &Path, src_stat: &Stat, dst: &Path) -> Result<u64, NavError> {
        let fs = &self.ctx.fs;
        if let Ok(dst_stat) = fs.metadata(dst) {
            let same = match (src_stat.file_id, dst_stat.file_id) {
                (Some(a), Some(b)) => a == b,
                _ => match (fs.canonicalize(src), fs.canonicalize(dst)) {
                    (Ok(a), Ok(b)) => a == b,
                    _ => false,
                },
            };
            if same {
                return Err(NavError::SameFile { src: src.to_path_buf(), dst: dst.to_path_buf() });
            }
        }
        fs.copy_file(src, dst).map_err(|e| NavError::from_io(dst, e))
    }

    fn links_to_ancestor(&self, dir: &Path, link: &Path) -> Result<bool, NavError> {
        let fs = &self.ctx.fs;
        let here = fs.canonicalize(dir).map_err(|e| NavError::from_io(dir, e))?;
        let target = fs.canonicalize(link).map_err(|e| NavError::from_io(link, e))?;
        Ok(here.starts_with(target))
    }

    /// Absolute form of a path that may not exist yet: the longest existing
    /// prefix is canonicalized and the rest appended unchanged.
    fn absolute_target(&self, path: &Path) -> PathBuf {
        for ancestor in path.ancestors() {
            if let Ok(base) = self.ctx.fs.canonicalize(ancestor) {
                let rest = path.strip_prefix(ancestor).unwrap_or(Path::new(""));
                return if rest.as_os_str().is_empty() { base } else { base.join(rest) };
            }
        }
        path.to_path_buf()
    }

    fn move_across_devices(&self, src: &Path, dst: &Path) -> Result<(), NavError> {
        let lstat = self.ctx.fs.symlink_metadata(src).map_err(|e| NavError::from_io(src, e))?;
        if lstat.is_symlink() {
            return self.move_link_across_devices(src, dst);
        }
        let dst_existed = self.ctx.fs.symlink_metadata(dst).is_ok();
        if let Err(copy_err) = self.copy_path(src, dst) {
            if !dst_existed {
                if let Err(cleanup) = self.delete_path(dst) {
                    if !cleanup.is_not_found() {
                        tracing::warn!(path = %dst.display(), %cleanup, "partial copy left behind");
                    }
                }
            }
            return Err(NavError::CrossDevice {
                src: src.to_path_buf(),
                dst: dst.to_path_buf(),
                reason: copy_err.to_string(),
            });
        }
        self.delete_path(src).map_err(|e| NavError::CrossDevice {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            reason: format!("copied, but removing the source failed: {e}"),
        })?;
        Ok(())
    }

    /// Recreates the link itself at `dst`, never its target.
    fn move_link_across_devices(&self, src: &Path, dst: &Path) -> Result<(), NavError> {
        let fs = &self.ctx.fs;
        let cross = |reason: String| NavError::CrossDevice {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            reason,
        };
        let target = fs.read_link(src).map_err(|e| cross(format!("reading the link failed: {e}")))?;
        fs.symlink(&target, dst).map_err(|e| cross(format!("creating the link failed: {e}")))?;
        fs.remove_file(src)
            .map_err(|e| cross(format!("linked, but removing the source failed: {e}")))?;
        tracing::debug!(src = %src.display(), target = %target.display(), "moved symlink");
        Ok(())
    }
}
