//! Recording adapter for the `FileSystem` port.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::format::RecordedName;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::filesystem::{FileSystem, Stat};

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }

    fn on_path<T: Serialize>(&self, method: &str, path: &Path, result: Result<T, &io::Error>) {
        record_result(&self.recorder, "fs", method, &PathInput::new(path), result);
    }

    fn on_pair<T: Serialize>(
        &self,
        method: &str,
        from: &Path,
        to: &Path,
        result: Result<T, &io::Error>,
    ) {
        record_result(&self.recorder, "fs", method, &PairInput::new(from, to), result);
    }
}

/// Recorded input of a single-path call.
#[derive(Serialize)]
pub(crate) struct PathInput {
    path: RecordedName,
}

impl PathInput {
    pub(crate) fn new(path: &Path) -> Self {
        Self { path: path.as_os_str().into() }
    }
}

/// Recorded input of a two-path call.
#[derive(Serialize)]
pub(crate) struct PairInput {
    from: RecordedName,
    to: RecordedName,
}

impl PairInput {
    pub(crate) fn new(from: &Path, to: &Path) -> Self {
        Self { from: from.as_os_str().into(), to: to.as_os_str().into() }
    }
}

impl FileSystem for RecordingFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        let result = self.inner.current_dir();
        let output = result.as_ref().map(|p| RecordedName::from(p.as_os_str()));
        record_result(&self.recorder, "fs", "current_dir", &serde_json::json!({}), output);
        result
    }

    fn metadata(&self, path: &Path) -> io::Result<Stat> {
        let result = self.inner.metadata(path);
        self.on_path("metadata", path, result.as_ref());
        result
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat> {
        let result = self.inner.symlink_metadata(path);
        self.on_path("symlink_metadata", path, result.as_ref());
        result
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let result = self.inner.read_dir(path);
        let output = result.as_ref().map(|names| {
            names.iter().map(|n| RecordedName::from(n.as_os_str())).collect::<Vec<_>>()
        });
        self.on_path("read_dir", path, output);
        result
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        let result = self.inner.read_link(path);
        let output = result.as_ref().map(|p| RecordedName::from(p.as_os_str()));
        self.on_path("read_link", path, output);
        result
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        let result = self.inner.symlink(target, link);
        self.on_pair("symlink", target, link, result.as_ref());
        result
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let result = self.inner.canonicalize(path);
        let output = result.as_ref().map(|p| RecordedName::from(p.as_os_str()));
        self.on_path("canonicalize", path, output);
        result
    }

    fn create_new_file(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_new_file(path);
        self.on_path("create_new_file", path, result.as_ref());
        result
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_dir(path);
        self.on_path("create_dir", path, result.as_ref());
        result
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_dir_all(path);
        self.on_path("create_dir_all", path, result.as_ref());
        result
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_file(path);
        self.on_path("remove_file", path, result.as_ref());
        result
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_dir(path);
        self.on_path("remove_dir", path, result.as_ref());
        result
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let result = self.inner.copy_file(from, to);
        self.on_pair("copy_file", from, to, result.as_ref());
        result
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let result = self.inner.rename(from, to);
        self.on_pair("rename", from, to, result.as_ref());
        result
    }
}
