//! Unix platform: permission bits straight from `st_mode`.

use std::io;
use std::os::unix::fs::{MetadataExt, PermissionsExt};

use crate::ports::filesystem::FileId;
use crate::ports::platform::Platform;

/// Platform implementation for Unix-like targets.
pub struct UnixPlatform;

impl Platform for UnixPlatform {
    fn name(&self) -> &'static str {
        "unix"
    }

    fn permission_mode(&self, metadata: &std::fs::Metadata) -> u32 {
        metadata.permissions().mode() & 0o777
    }

    fn is_cross_device(&self, err: &io::Error) -> bool {
        err.kind() == io::ErrorKind::CrossesDevices
    }

    fn file_id(&self, metadata: &std::fs::Metadata) -> Option<FileId> {
        Some(FileId { dev: metadata.dev(), ino: metadata.ino() })
    }
}
