//! Test doubles: a deterministic platform and a fault-injecting filesystem.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::platform::default_platform;
use crate::context::ServiceContext;
use crate::ports::filesystem::{FileSystem, Stat};
use crate::ports::platform::Platform;

/// Marker carried inside the error a faulty rename returns.
#[derive(Debug)]
pub(crate) struct SimulatedCrossDevice;

impl fmt::Display for SimulatedCrossDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("simulated cross-device link")
    }
}

impl std::error::Error for SimulatedCrossDevice {}

/// Formats timestamps in UTC and recognises simulated cross-device errors.
pub(crate) struct UtcPlatform;

impl Platform for UtcPlatform {
    fn name(&self) -> &'static str {
        "test"
    }

    fn permission_mode(&self, metadata: &std::fs::Metadata) -> u32 {
        default_platform().permission_mode(metadata)
    }

    fn is_cross_device(&self, err: &io::Error) -> bool {
        err.get_ref().is_some_and(|inner| inner.is::<SimulatedCrossDevice>())
    }

    fn format_timestamp(&self, time: DateTime<Utc>) -> String {
        time.format("%a %b %e %H:%M:%S %Y").to_string()
    }
}

/// Faults to inject on top of the live filesystem.
#[derive(Default)]
pub(crate) struct Faults {
    deny_read: Vec<PathBuf>,
    deny_remove: Vec<PathBuf>,
    fail_copy_to: Vec<PathBuf>,
    cross_device: bool,
}

impl Faults {
    /// `read_dir` on exactly this path fails with permission denied.
    pub(crate) fn deny_read(&mut self, path: &Path) -> &mut Self {
        self.deny_read.push(path.to_path_buf());
        self
    }

    /// Removing exactly this path fails with permission denied.
    pub(crate) fn deny_remove(&mut self, path: &Path) -> &mut Self {
        self.deny_remove.push(path.to_path_buf());
        self
    }

    /// Copying a file to exactly this destination fails.
    pub(crate) fn fail_copy_to(&mut self, path: &Path) -> &mut Self {
        self.fail_copy_to.push(path.to_path_buf());
        self
    }

    /// Every rename fails as if source and destination were on different devices.
    pub(crate) fn cross_device(&mut self) -> &mut Self {
        self.cross_device = true;
        self
    }
}

struct FaultyFileSystem {
    inner: LiveFileSystem,
    faults: Faults,
}

fn denied() -> io::Error {
    io::Error::from(io::ErrorKind::PermissionDenied)
}

impl FileSystem for FaultyFileSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        self.inner.current_dir()
    }

    fn metadata(&self, path: &Path) -> io::Result<Stat> {
        self.inner.metadata(path)
    }

    fn symlink_metadata(&self, path: &Path) -> io::Result<Stat> {
        self.inner.symlink_metadata(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        if self.faults.deny_read.iter().any(|p| p == path) {
            return Err(denied());
        }
        self.inner.read_dir(path)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        self.inner.read_link(path)
    }

    fn symlink(&self, target: &Path, link: &Path) -> io::Result<()> {
        self.inner.symlink(target, link)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.inner.canonicalize(path)
    }

    fn create_new_file(&self, path: &Path) -> io::Result<()> {
        self.inner.create_new_file(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.inner.create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        if self.faults.deny_remove.iter().any(|p| p == path) {
            return Err(denied());
        }
        self.inner.remove_file(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        if self.faults.deny_remove.iter().any(|p| p == path) {
            return Err(denied());
        }
        self.inner.remove_dir(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<u64> {
        if self.faults.fail_copy_to.iter().any(|p| p == to) {
            return Err(io::Error::other("simulated disk full"));
        }
        self.inner.copy_file(from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.faults.cross_device {
            return Err(io::Error::other(SimulatedCrossDevice));
        }
        self.inner.rename(from, to)
    }
}

/// Builds a context over the live disk with the configured faults.
pub(crate) fn faulty_context(configure: impl FnOnce(&mut Faults)) -> ServiceContext {
    let mut faults = Faults::default();
    configure(&mut faults);
    let platform: Arc<dyn Platform> = Arc::new(UtcPlatform);
    let fs = FaultyFileSystem { inner: LiveFileSystem::new(Arc::clone(&platform)), faults };
    ServiceContext::with_ports(Box::new(fs), platform)
}
