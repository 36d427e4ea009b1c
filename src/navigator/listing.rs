//! Directory listing and its fixed-width table rendering.

use std::ffi::OsString;
use std::path::Path;

use chrono::{DateTime, Utc};

use super::{NavError, Navigator};
use crate::ports::filesystem::EntryKind;
use crate::ports::platform::{mode_string, Platform};

/// Shown in the PERMS column when permission bits could not be read.
pub const UNKNOWN_PERMS: &str = "---------";

const RULE: &str = "------------------------------------------------------------";

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Kind, taken without following symlinks.
    pub kind: EntryKind,
    /// Permission bits of the entry (or its link target).
    pub permissions: Option<u32>,
    /// Size in bytes; 0 for everything but regular files.
    pub size: u64,
    /// Last modification time, if it could be read.
    pub modified: Option<DateTime<Utc>>,
    /// Final path component, exactly as the OS reports it.
    pub name: OsString,
}

impl DirectoryEntry {
    /// TYPE column label.
    #[must_use]
    pub fn type_label(&self) -> &'static str {
        match self.kind {
            EntryKind::Directory => "[DIR]",
            EntryKind::Symlink => "[LNK]",
            EntryKind::File | EntryKind::Other => "[FILE]",
        }
    }

    /// PERMS column text.
    #[must_use]
    pub fn perms_label(&self) -> String {
        self.permissions.map_or_else(|| UNKNOWN_PERMS.to_string(), mode_string)
    }
}

impl Navigator<'_> {
    /// Lists the immediate children of `dir` in the order the OS returns them.
    ///
    /// Entries that disappear mid-listing are skipped. Missing permission
    /// bits, size, or modification time degrade to placeholders instead of
    /// failing the listing.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` itself cannot be read.
    pub fn list_directory(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, NavError> {
        let fs = &self.ctx.fs;
        let names = fs.read_dir(dir).map_err(|e| NavError::from_io(dir, e))?;
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(&name);
            let lstat = match fs.symlink_metadata(&path) {
                Ok(stat) => stat,
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "entry vanished");
                    continue;
                }
            };
            let followed = if lstat.is_symlink() {
                fs.metadata(&path).ok()
            } else {
                Some(lstat.clone())
            };
            entries.push(DirectoryEntry {
                kind: lstat.kind,
                permissions: followed.as_ref().and_then(|s| s.mode),
                size: if lstat.is_file() { lstat.size } else { 0 },
                modified: followed.and_then(|s| s.modified),
                name,
            });
        }
        tracing::debug!(dir = %dir.display(), count = entries.len(), "listed");
        Ok(entries)
    }
}

/// Renders the banner and column header printed above every listing.
#[must_use]
pub fn render_header(cwd: &Path) -> String {
    format!(
        "\nCurrent Directory: {}\n{RULE}\n{:<8}{:<12}{:<12}{:<24}NAME\n{RULE}\n",
        cwd.display(),
        "TYPE",
        "PERMS",
        "SIZE(B)",
        "MODIFIED",
    )
}

/// Renders one table row, newline-terminated.
#[must_use]
pub fn render_row(entry: &DirectoryEntry, platform: &dyn Platform) -> String {
    let modified = entry.modified.map(|t| platform.format_timestamp(t)).unwrap_or_default();
    format!(
        "{:<8}{:<12}{:<12}{:<24}{}\n",
        entry.type_label(),
        entry.perms_label(),
        entry.size,
        modified,
        entry.name.to_string_lossy(),
    )
}

/// Renders the header followed by every row.
#[must_use]
pub fn render_listing(cwd: &Path, entries: &[DirectoryEntry], platform: &dyn Platform) -> String {
    let mut out = render_header(cwd);
    for entry in entries {
        out.push_str(&render_row(entry, platform));
    }
    out
}
