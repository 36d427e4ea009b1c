//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::platform::default_platform;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;
use crate::ports::platform::Platform;

/// Bundles all port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying). The navigator only ever sees the traits.
pub struct ServiceContext {
    /// Filesystem primitives.
    pub fs: Box<dyn FileSystem>,
    /// Platform-specific metadata handling.
    pub platform: Arc<dyn Platform>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context backed by the real disk and host platform.
    #[must_use]
    pub fn live() -> Self {
        let platform = default_platform();
        Self {
            fs: Box::new(LiveFileSystem::new(Arc::clone(&platform))),
            platform,
            recorder: None,
        }
    }

    /// Creates a context from explicit ports.
    #[must_use]
    pub fn with_ports(fs: Box<dyn FileSystem>, platform: Arc<dyn Platform>) -> Self {
        Self { fs, platform, recorder: None }
    }

    /// Creates a recording context that writes a cassette file on drop.
    ///
    /// Uses live adapters for the actual work. This is the mechanism behind
    /// the `FSNAV_RECORD` env var.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let platform = default_platform();
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "fsnav-session", platform.name())));
        let live = LiveFileSystem::new(Arc::clone(&platform));
        Self {
            fs: Box::new(RecordingFileSystem::new(Box::new(live), Arc::clone(&recorder))),
            platform,
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// The platform port stays live: it only formats values that the
    /// cassette already carries.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::from_file(path)?;
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(replayer)),
            platform: default_platform(),
            recorder: None,
        })
    }

    /// Returns `true` if this context records its interactions.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        let result = match recorder.lock() {
            Ok(guard) => guard.write_snapshot(),
            Err(poisoned) => poisoned.into_inner().write_snapshot(),
        };
        match result {
            Ok(path) => tracing::info!(path = %path.display(), "recording saved"),
            Err(e) => eprintln!("Warning: failed to write cassette: {e}"),
        }
    }
}
