//! Replaying adapter for the `FileSystem` port.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use super::replay_result;
use crate::adapters::recording::filesystem::{PairInput, PathInput};
use crate::cassette::format::RecordedName;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::{FileSystem, Stat};

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn next<T: DeserializeOwned>(&self, method: &str, input: serde_json::Value) -> io::Result<T> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            replayer.next_interaction("fs", method, &input).output.clone()
        };
        replay_result(&output, &format!("fs::{method}"))
    }

    fn on_path<T: DeserializeOwned>(&self, method: &str, path: &Path) -> io::Result<T> {
        let input = serde_json::to_value(PathInput::new(path)).map_err(io::Error::other)?;
        self.next(method, input)
    }

    fn on_pair<T: DeserializeOwned>(&self, method: &str, from: &Path, to: &Path) -> io::Result<T> {
        let input = serde_json::to_value(PairInput::new(from, to)).map_err(io::Error::other)?;
        self.next(method, input)
    }

    fn path_from(&self, method: &str, path: &Path) -> io::Result<PathBuf> {
        self.on_path::<RecordedName>(method, path).map(PathBuf::from)
    }
}

impl FileSystem for ReplayingFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        self.next::<RecordedName>("current_dir", serde_json::json!({})).map(PathBuf::from)
    }

    fn metadata(&self, path: &Path) -> io::Result<Stat> {
        self.on_path("metadata", path)
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat> {
        self.on_path("symlink_metadata", path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let names: Vec<RecordedName> = self.on_path("read_dir", path)?;
        Ok(names.into_iter().map(OsString::from).collect())
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        self.path_from("read_link", path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        self.on_pair("symlink", target, link)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.path_from("canonicalize", path)
    }

    fn create_new_file(&self, path: &Path) -> io::Result<()> {
        self.on_path("create_new_file", path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.on_path("create_dir", path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.on_path("create_dir_all", path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.on_path("remove_file", path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        self.on_path("remove_dir", path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        self.on_pair("copy_file", from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.on_pair("rename", from, to)
    }
}
