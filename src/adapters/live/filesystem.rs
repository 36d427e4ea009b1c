//! Live filesystem adapter using `std::fs`.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::ports::filesystem::{EntryKind, FileSystem, Stat};
use crate::ports::platform::Platform;

/// Live filesystem adapter backed by real disk I/O.
///
/// Permission bits are read through the platform port so the same adapter
/// works on every target.
pub struct LiveFileSystem {
    platform: Arc<dyn Platform>,
}

impl LiveFileSystem {
    /// Creates a live filesystem that reads permissions through `platform`.
    #[must_use]
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self { platform }
    }

    fn stat(&self, metadata: &fs::Metadata) -> Stat {
        let file_type = metadata.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        };
        Stat {
            kind,
            size: metadata.len(),
            mode: Some(self.platform.permission_mode(metadata)),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            file_id: self.platform.file_id(metadata),
        }
    }
}

impl FileSystem for LiveFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn metadata(&self, path: &Path) -> io::Result<Stat> {
        Ok(self.stat(&fs::metadata(path)?))
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat> {
        Ok(self.stat(&fs::symlink_metadata(path)?))
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            match entry {
                Ok(entry) => names.push(entry.file_name()),
                Err(err) => {
                    tracing::debug!(dir = %path.display(), %err, "skipping unreadable entry");
                }
            }
        }
        Ok(names)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    #[cfg(unix)]
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }

    #[cfg(windows)]
    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        let resolved = link.parent().map_or_else(|| target.to_path_buf(), |p| p.join(target));
        if fs::metadata(resolved).is_ok_and(|m| m.is_dir()) {
            std::os::windows::fs::symlink_dir(target, link)
        } else {
            std::os::windows::fs::symlink_file(target, link)
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn create_new_file(&self, path: &Path) -> io::Result<()> {
        OpenOptions::new().write(true).create_new(true).open(path)?;
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        fs::copy(from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::platform::default_platform;

    fn live() -> LiveFileSystem {
        LiveFileSystem::new(default_platform())
    }

    #[test]
    fn stats_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, b"hello").unwrap();

        let fs = live();
        let stat = fs.metadata(&file).unwrap();
        assert!(stat.is_file());
        assert_eq!(stat.size, 5);
        assert!(stat.modified.is_some());
        assert!(stat.mode.is_some());

        assert!(fs.metadata(dir.path()).unwrap().is_dir());
    }

    #[test]
    fn create_new_file_refuses_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("once");

        let fs = live();
        fs.create_new_file(&file).unwrap();
        let err = fs.create_new_file(&file).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn read_dir_returns_child_names() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("one"), b"").unwrap();
        std::fs::create_dir(dir.path().join("two")).unwrap();

        let mut names = live().read_dir(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec![OsString::from("one"), OsString::from("two")]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn read_dir_keeps_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = std::ffi::OsStr::from_bytes(b"bad\xffname");
        std::fs::write(dir.path().join(raw), b"").unwrap();

        let names = live().read_dir(dir.path()).unwrap();
        assert_eq!(names, vec![raw.to_os_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_and_read_link_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("link");

        let fs = live();
        fs.symlink(Path::new("elsewhere"), &link).unwrap();
        assert_eq!(fs.read_link(&link).unwrap(), PathBuf::from("elsewhere"));
        assert!(fs.symlink_metadata(&link).unwrap().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_metadata_does_not_follow() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("target");
        std::fs::create_dir(&target).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let fs = live();
        assert!(fs.symlink_metadata(&link).unwrap().is_symlink());
        assert!(fs.metadata(&link).unwrap().is_dir());
    }
}
