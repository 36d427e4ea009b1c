//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the navigator core and the
//! operating system. Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod platform;

pub use filesystem::{EntryKind, FileId, FileSystem, Stat};
pub use platform::{mode_string, Platform};
