//! Per-platform implementations of the `Platform` port.

#[cfg(unix)]
pub mod unix;
pub mod windows;

use std::sync::Arc;

use crate::ports::platform::Platform;

#[cfg(unix)]
pub use unix::UnixPlatform;
pub use windows::WindowsPlatform;

/// Returns the platform implementation for the build target.
#[must_use]
pub fn default_platform() -> Arc<dyn Platform> {
    #[cfg(unix)]
    {
        Arc::new(UnixPlatform)
    }
    #[cfg(not(unix))]
    {
        Arc::new(WindowsPlatform)
    }
}
