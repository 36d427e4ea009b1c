//! File-system navigator: listing, navigation, and path operations.
//!
//! A [`Navigator`] borrows the service context and carries no state of its
//! own. The current directory lives in a [`Session`] that the caller passes
//! into the two operations that move it.

mod error;
pub mod listing;
mod ops;
pub mod search;
#[cfg(test)]
pub(crate) mod testing;

use std::path::PathBuf;

use crate::context::ServiceContext;
use crate::session::Session;

pub use error::NavError;
pub use listing::DirectoryEntry;
pub use ops::CopySummary;
pub use search::SearchResults;

/// Performs file-system operations through the context's ports.
pub struct Navigator<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator over the given context.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The context this navigator works through.
    #[must_use]
    pub fn context(&self) -> &'a ServiceContext {
        self.ctx
    }

    /// Moves the session into a directory.
    ///
    /// `input` may be absolute or relative to the current directory. On
    /// success the session holds the canonical form of the target.
    ///
    /// # Errors
    ///
    /// Returns `NotADirectory` if the target is missing or not a directory;
    /// the session is left unchanged on any error.
    pub fn enter_directory(&self, session: &mut Session, input: &str) -> Result<PathBuf, NavError> {
        let candidate = session.resolve(input);
        match self.ctx.fs.metadata(&candidate) {
            Ok(stat) if stat.is_dir() => {}
            Ok(_) => return Err(NavError::NotADirectory(candidate)),
            Err(err) => {
                return Err(match NavError::from_io(&candidate, err) {
                    NavError::NotFound(path) => NavError::NotADirectory(path),
                    other => other,
                });
            }
        }
        let canonical =
            self.ctx.fs.canonicalize(&candidate).map_err(|e| NavError::from_io(&candidate, e))?;
        tracing::debug!(from = %session.cwd().display(), to = %canonical.display(), "enter");
        session.set_cwd(canonical.clone());
        Ok(canonical)
    }

    /// Moves the session to the parent directory.
    ///
    /// Returns `false` without changing anything when already at a root.
    pub fn go_up(&self, session: &mut Session) -> bool {
        let Some(parent) = session.cwd().parent().map(PathBuf::from) else {
            return false;
        };
        tracing::debug!(to = %parent.display(), "up");
        session.set_cwd(parent);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn canonical(path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap()
    }

    #[test]
    fn enter_then_up_returns_to_start() {
        let dir = tempfile::tempdir().unwrap();
        let proj = canonical(dir.path());
        let ctx = ServiceContext::live();
        let nav = Navigator::new(&ctx);
        let mut session = Session::new(&proj);

        nav.create_directory(&session.resolve("sub")).unwrap();
        assert!(proj.join("sub").is_dir());

        let entered = nav.enter_directory(&mut session, "sub").unwrap();
        assert_eq!(entered, proj.join("sub"));
        assert_eq!(session.cwd(), proj.join("sub"));

        assert!(nav.go_up(&mut session));
        assert_eq!(session.cwd(), proj);
    }

    #[test]
    fn enter_file_leaves_cwd_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let proj = canonical(dir.path());
        std::fs::write(proj.join("notes.txt"), b"x").unwrap();
        let ctx = ServiceContext::live();
        let nav = Navigator::new(&ctx);
        let mut session = Session::new(&proj);

        let err = nav.enter_directory(&mut session, "notes.txt").unwrap_err();
        assert!(matches!(err, NavError::NotADirectory(_)));
        assert_eq!(session.cwd(), proj);
    }

    #[test]
    fn enter_missing_reports_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let proj = canonical(dir.path());
        let ctx = ServiceContext::live();
        let nav = Navigator::new(&ctx);
        let mut session = Session::new(&proj);

        let err = nav.enter_directory(&mut session, "nope").unwrap_err();
        assert!(matches!(err, NavError::NotADirectory(_)));
        assert_eq!(session.cwd(), proj);
    }

    #[test]
    fn enter_accepts_absolute_and_dotted_paths() {
        let dir = tempfile::tempdir().unwrap();
        let proj = canonical(dir.path());
        std::fs::create_dir_all(proj.join("a").join("b")).unwrap();
        let ctx = ServiceContext::live();
        let nav = Navigator::new(&ctx);
        let mut session = Session::new(proj.join("a").join("b"));

        nav.enter_directory(&mut session, "..").unwrap();
        assert_eq!(session.cwd(), proj.join("a"));

        let absolute = proj.join("a").join("b");
        nav.enter_directory(&mut session, absolute.to_str().unwrap()).unwrap();
        assert_eq!(session.cwd(), absolute);
    }

    #[cfg(unix)]
    #[test]
    fn enter_resolves_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let proj = canonical(dir.path());
        std::fs::create_dir(proj.join("real")).unwrap();
        std::os::unix::fs::symlink(proj.join("real"), proj.join("alias")).unwrap();
        let ctx = ServiceContext::live();
        let nav = Navigator::new(&ctx);
        let mut session = Session::new(&proj);

        nav.enter_directory(&mut session, "alias").unwrap();
        assert_eq!(session.cwd(), proj.join("real"));
    }

    #[test]
    fn go_up_at_root_is_a_no_op() {
        let ctx = ServiceContext::live();
        let nav = Navigator::new(&ctx);
        let root = std::env::current_dir()
            .unwrap()
            .ancestors()
            .last()
            .map(PathBuf::from)
            .unwrap();
        let mut session = Session::new(&root);

        assert!(!nav.go_up(&mut session));
        assert_eq!(session.cwd(), root);
    }
}
