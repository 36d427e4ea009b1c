//! Command dispatch and handlers.

pub mod find;
pub mod list;
pub mod menu;
pub mod modify;

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::navigator::{NavError, Navigator};
use crate::session::Session;

/// Dispatch parsed arguments to the menu or a one-shot handler.
///
/// When `FSNAV_RECORD` is set to a file path, every file-system interaction
/// is recorded to that cassette.
///
/// # Errors
///
/// Returns an error string if the start directory is unusable, the
/// selected command fails, or the console breaks.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = match env::var_os("FSNAV_RECORD") {
        Some(path) => ServiceContext::recording(&PathBuf::from(path)),
        None => ServiceContext::live(),
    };
    // The cassette is written when `ctx` drops, after the command finished.
    dispatch_with_context(cli, &ctx)
}

/// Dispatch with the given service context.
///
/// # Errors
///
/// Same as [`dispatch`].
pub fn dispatch_with_context(cli: &Cli, ctx: &ServiceContext) -> Result<(), String> {
    let mut session = Session::start(ctx, cli.dir.as_deref()).map_err(|e| failure(&e))?;
    let nav = Navigator::new(ctx);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        None => {
            let stdin = io::stdin();
            menu::Menu::new(&nav, &mut session, stdin.lock(), &mut out, io::stderr().lock())
                .run()
                .map_err(|e| console(&e))
        }
        Some(Command::Ls { path }) => list::run(&nav, &session, path.as_deref(), &mut out),
        Some(Command::Touch { path }) => modify::touch(&nav, &session, path, &mut out),
        Some(Command::Mkdir { path }) => modify::mkdir(&nav, &session, path, &mut out),
        Some(Command::Rm { path }) => modify::rm(&nav, &session, path, &mut out),
        Some(Command::Cp { src, dst }) => modify::cp(&nav, &session, src, dst, &mut out),
        Some(Command::Mv { src, dst }) => modify::mv(&nav, &session, src, dst, &mut out),
        Some(Command::Find { needle, root }) => {
            find::run(&nav, &session, needle, root.as_deref(), &mut out)
        }
    };
    out.flush().map_err(|e| console(&e))?;
    result
}

/// Formats a navigator failure the way the console reports it.
pub(crate) fn failure(err: &NavError) -> String {
    format!("Error: {err}")
}

/// Maps a broken output stream to the dispatch error type.
pub(crate) fn console(err: &io::Error) -> String {
    format!("Error: console: {err}")
}
