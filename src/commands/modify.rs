//! One-shot commands that change the tree: `touch`, `mkdir`, `rm`, `cp`, `mv`.

use std::io::Write;

use super::{console, failure};
use crate::navigator::Navigator;
use crate::session::Session;

/// Execute the `touch` command.
///
/// # Errors
///
/// Returns an error string if the file cannot be created.
pub fn touch(
    nav: &Navigator<'_>,
    session: &Session,
    path: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let created = nav.create_file(&session.resolve(path)).map_err(|e| failure(&e))?;
    writeln!(out, "File created: {}", created.display()).map_err(|e| console(&e))
}

/// Execute the `mkdir` command.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created.
pub fn mkdir(
    nav: &Navigator<'_>,
    session: &Session,
    path: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let created = nav.create_directory(&session.resolve(path)).map_err(|e| failure(&e))?;
    writeln!(out, "Directory created: {}", created.display()).map_err(|e| console(&e))
}

/// Execute the `rm` command.
///
/// # Errors
///
/// Returns an error string if nothing is at `path` or removal fails.
pub fn rm(
    nav: &Navigator<'_>,
    session: &Session,
    path: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let removed = nav.delete_path(&session.resolve(path)).map_err(|e| failure(&e))?;
    writeln!(out, "Deleted entries: {removed}").map_err(|e| console(&e))
}

/// Execute the `cp` command.
///
/// # Errors
///
/// Returns an error string if the copy fails.
pub fn cp(
    nav: &Navigator<'_>,
    session: &Session,
    src: &str,
    dst: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let summary = nav
        .copy_path(&session.resolve(src), &session.resolve(dst))
        .map_err(|e| failure(&e))?;
    writeln!(out, "Copied to: {}", summary.destination.display()).map_err(|e| console(&e))
}

/// Execute the `mv` command.
///
/// # Errors
///
/// Returns an error string if the move fails.
pub fn mv(
    nav: &Navigator<'_>,
    session: &Session,
    src: &str,
    dst: &str,
    out: &mut impl Write,
) -> Result<(), String> {
    let moved =
        nav.move_path(&session.resolve(src), &session.resolve(dst)).map_err(|e| failure(&e))?;
    writeln!(out, "Moved/Renamed to: {}", moved.display()).map_err(|e| console(&e))
}
