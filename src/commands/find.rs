//! `fsnav find` command.

use std::io::Write;

use super::{console, failure};
use crate::navigator::Navigator;
use crate::session::Session;

/// Execute the `find` command.
///
/// Streams each hit as it is found, then prints the match count. Skipped
/// directories are noted on stderr.
///
/// # Errors
///
/// Returns an error string for an empty needle or an unreadable root.
pub fn run(
    nav: &Navigator<'_>,
    session: &Session,
    needle: &str,
    root: Option<&str>,
    out: &mut impl Write,
) -> Result<(), String> {
    let root = root.map_or_else(|| session.cwd().to_path_buf(), |r| session.resolve(r));
    let mut results = nav.search_by_name(&root, needle).map_err(|e| failure(&e))?;

    let mut count = 0usize;
    for hit in results.by_ref() {
        writeln!(out, "{}", hit.display()).map_err(|e| console(&e))?;
        count += 1;
    }
    writeln!(out, "{count} match(es).").map_err(|e| console(&e))?;
    if results.skipped() > 0 {
        eprintln!("Skipped {} unreadable director(ies).", results.skipped());
    }
    Ok(())
}
