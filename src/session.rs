//! The browsing session: the current-directory cursor.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::navigator::NavError;

/// Owns the current directory that relative path input is resolved against.
///
/// Held by the command loop and passed into each navigator call; nothing
/// else keeps a current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cwd: PathBuf,
}

impl Session {
    /// Creates a session positioned at `cwd` as given.
    ///
    /// Callers are expected to pass a canonical directory; use
    /// [`Session::start`] to validate one.
    #[must_use]
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self { cwd: cwd.into() }
    }

    /// Opens a session at `start`, or at the process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the start path does not exist or is not a
    /// directory.
    pub fn start(ctx: &ServiceContext, start: Option<&Path>) -> Result<Self, NavError> {
        let start = match start {
            Some(path) => path.to_path_buf(),
            None => ctx.fs.current_dir().map_err(|e| NavError::from_io(Path::new("."), e))?,
        };
        let stat = ctx.fs.metadata(&start).map_err(|e| NavError::from_io(&start, e))?;
        if !stat.is_dir() {
            return Err(NavError::NotADirectory(start));
        }
        let cwd = ctx.fs.canonicalize(&start).map_err(|e| NavError::from_io(&start, e))?;
        tracing::debug!(cwd = %cwd.display(), "session started");
        Ok(Self { cwd })
    }

    /// The current directory.
    #[must_use]
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolves user input: absolute paths are kept, relative ones are
    /// joined onto the current directory.
    #[must_use]
    pub fn resolve(&self, input: &str) -> PathBuf {
        let path = Path::new(input);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    pub(crate) fn set_cwd(&mut self, cwd: PathBuf) {
        self.cwd = cwd;
    }
}
