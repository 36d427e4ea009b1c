//! `fsnav ls` command.

use std::io::Write;

use super::{console, failure};
use crate::navigator::listing::render_listing;
use crate::navigator::Navigator;
use crate::session::Session;

/// Execute the `ls` command.
///
/// Prints the same table the interactive menu shows, for `path` or the
/// session directory when no path is given.
///
/// # Errors
///
/// Returns an error string if the directory cannot be listed.
pub fn run(
    nav: &Navigator<'_>,
    session: &Session,
    path: Option<&str>,
    out: &mut impl Write,
) -> Result<(), String> {
    let dir = path.map_or_else(|| session.cwd().to_path_buf(), |p| session.resolve(p));
    let entries = nav.list_directory(&dir).map_err(|e| failure(&e))?;
    let table = render_listing(&dir, &entries, nav.context().platform.as_ref());
    write!(out, "{table}").map_err(|e| console(&e))
}
