//! Platform port for metadata details that differ between operating systems.

use std::io;

use chrono::{DateTime, Local, Utc};

use super::filesystem::FileId;

/// Platform-specific metadata capabilities.
///
/// One implementation exists per target platform; the live adapters pick
/// the right one at build time through `adapters::live::platform::default_platform`.
pub trait Platform: Send + Sync {
    /// Short name of the platform, used in log output.
    fn name(&self) -> &'static str;

    /// Extracts the nine owner/group/other permission bits from metadata.
    fn permission_mode(&self, metadata: &std::fs::Metadata) -> u32;

    /// Returns `true` if the error says a rename crossed a device boundary.
    fn is_cross_device(&self, err: &io::Error) -> bool;

    /// Device/inode identity of the object, if the platform has one.
    fn file_id(&self, _metadata: &std::fs::Metadata) -> Option<FileId> {
        None
    }

    /// Formats a modification time for the listing's MODIFIED column.
    ///
    /// The default renders local time in the classic `ctime` layout,
    /// e.g. `Mon Jan  6 10:00:00 2025`.
    fn format_timestamp(&self, time: DateTime<Utc>) -> String {
        time.with_timezone(&Local).format("%a %b %e %H:%M:%S %Y").to_string()
    }
}

/// Renders permission bits as the 9-character `rwxrwxrwx` string,
/// with `-` for every bit that is not set.
#[must_use]
pub fn mode_string(mode: u32) -> String {
    const FLAGS: [(u32, char); 9] = [
        (0o400, 'r'),
        (0o200, 'w'),
        (0o100, 'x'),
        (0o040, 'r'),
        (0o020, 'w'),
        (0o010, 'x'),
        (0o004, 'r'),
        (0o002, 'w'),
        (0o001, 'x'),
    ];
    FLAGS.iter().map(|&(bit, c)| if mode & bit == 0 { '-' } else { c }).collect()
}
