//! Windows platform: permission bits synthesised from the read-only flag.
//!
//! Windows has no owner/group/other triads, so every class gets the same
//! bits: read always, write unless read-only, execute for directories.

use std::io;

use crate::ports::platform::Platform;

/// Platform implementation for Windows targets.
pub struct WindowsPlatform;

impl WindowsPlatform {
    fn synthesise(readonly: bool, is_dir: bool) -> u32 {
        let mut triad = 0o4;
        if !readonly {
            triad |= 0o2;
        }
        if is_dir {
            triad |= 0o1;
        }
        (triad << 6) | (triad << 3) | triad
    }
}

impl Platform for WindowsPlatform {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn permission_mode(&self, metadata: &std::fs::Metadata) -> u32 {
        Self::synthesise(metadata.permissions().readonly(), metadata.is_dir())
    }

    fn is_cross_device(&self, err: &io::Error) -> bool {
        err.kind() == io::ErrorKind::CrossesDevices
    }
}
