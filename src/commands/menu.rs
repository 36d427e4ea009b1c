//! Interactive numbered menu over the navigator.

use std::io::{self, BufRead, Write};

use crate::navigator::listing::{render_header, render_row};
use crate::navigator::{NavError, Navigator};
use crate::session::Session;

const MENU: &str = "\nCommands:\n\
1. List current directory\n\
2. Enter directory\n\
3. Go up (..)\n\
4. Create file\n\
5. Create directory\n\
6. Delete file/directory\n\
7. Copy file/directory\n\
8. Move/Rename file/directory\n\
9. Search by name (recursive)\n\
0. Exit\n\
Choose: ";

/// Whether the loop keeps going after a command.
enum Flow {
    Continue,
    Exit,
}

/// The menu loop: listing, menu, one command, repeat.
///
/// Reads commands from `input`, writes listings and results to `out`, and
/// operation errors to `err`. Navigator failures never end the loop; only
/// `0`, end of input, or a broken console does.
pub struct Menu<'n, 's, R, W, E> {
    nav: &'n Navigator<'n>,
    session: &'s mut Session,
    input: R,
    out: W,
    err: E,
}

impl<'n, 's, R: BufRead, W: Write, E: Write> Menu<'n, 's, R, W, E> {
    /// Creates a menu over the given console streams.
    pub fn new(nav: &'n Navigator<'n>, session: &'s mut Session, input: R, out: W, err: E) -> Self {
        Self { nav, session, input, out, err }
    }

    /// Runs until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(mut self) -> io::Result<()> {
        loop {
            self.print_listing()?;
            write!(self.out, "{MENU}")?;
            self.out.flush()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            if let Flow::Exit = self.handle(choice.trim())? {
                break;
            }
        }
        self.out.flush()
    }

    fn handle(&mut self, choice: &str) -> io::Result<Flow> {
        tracing::debug!(%choice, "menu choice");
        match choice {
            "1" => {}
            "2" => {
                if let Some(name) = self.prompt("Enter directory name: ")? {
                    if let Err(e) = self.nav.enter_directory(self.session, &name) {
                        self.report(&e)?;
                    }
                }
            }
            "3" => {
                self.nav.go_up(self.session);
            }
            "4" => {
                if let Some(path) = self.prompt("Enter file path to create: ")? {
                    let path = self.session.resolve(&path);
                    match self.nav.create_file(&path) {
                        Ok(p) => writeln!(self.out, "File created: {}", p.display())?,
                        Err(e) => self.report(&e)?,
                    }
                }
            }
            "5" => {
                if let Some(path) = self.prompt("Enter directory path to create: ")? {
                    let path = self.session.resolve(&path);
                    match self.nav.create_directory(&path) {
                        Ok(p) => writeln!(self.out, "Directory created: {}", p.display())?,
                        Err(e) => self.report(&e)?,
                    }
                }
            }
            "6" => {
                if let Some(path) = self.prompt("Enter file/directory to delete: ")? {
                    let path = self.session.resolve(&path);
                    match self.nav.delete_path(&path) {
                        Ok(n) => writeln!(self.out, "Deleted entries: {n}")?,
                        Err(e) => self.report(&e)?,
                    }
                }
            }
            "7" => {
                if let Some((src, dst)) = self.prompt_pair()? {
                    match self.nav.copy_path(&src, &dst) {
                        Ok(summary) => {
                            writeln!(self.out, "Copied to: {}", summary.destination.display())?;
                        }
                        Err(e) => self.report(&e)?,
                    }
                }
            }
            "8" => {
                if let Some((src, dst)) = self.prompt_pair()? {
                    match self.nav.move_path(&src, &dst) {
                        Ok(p) => writeln!(self.out, "Moved/Renamed to: {}", p.display())?,
                        Err(e) => self.report(&e)?,
                    }
                }
            }
            "9" => {
                if let Some(needle) = self.prompt("Enter name to search: ")? {
                    self.search(&needle)?;
                }
            }
            "0" => {
                writeln!(self.out, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.out, "Invalid choice.")?,
        }
        Ok(Flow::Continue)
    }

    fn print_listing(&mut self) -> io::Result<()> {
        write!(self.out, "{}", render_header(self.session.cwd()))?;
        match self.nav.list_directory(self.session.cwd()) {
            Ok(entries) => {
                let platform = self.nav.context().platform.as_ref();
                for entry in &entries {
                    write!(self.out, "{}", render_row(entry, platform))?;
                }
            }
            Err(e) => writeln!(self.err, "Error listing directory: {e}")?,
        }
        Ok(())
    }

    fn search(&mut self, needle: &str) -> io::Result<()> {
        let mut results = match self.nav.search_by_name(self.session.cwd(), needle) {
            Ok(results) => results,
            Err(e) => return self.report(&e),
        };
        let mut count = 0usize;
        for path in results.by_ref() {
            writeln!(self.out, "{}", path.display())?;
            count += 1;
        }
        writeln!(self.out, "{count} match(es).")?;
        if results.skipped() > 0 {
            writeln!(self.err, "Skipped {} unreadable director(ies).", results.skipped())?;
        }
        Ok(())
    }

    fn report(&mut self, e: &NavError) -> io::Result<()> {
        writeln!(self.err, "Error: {e}")
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts for a value; `None` if the answer is empty or input ended.
    /// Only the line terminator is stripped, so names may keep surrounding
    /// spaces.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(self
            .read_line()?
            .map(|line| line.trim_end_matches(['\n', '\r']).to_string())
            .filter(|line| !line.is_empty()))
    }

    fn prompt_pair(&mut self) -> io::Result<Option<(std::path::PathBuf, std::path::PathBuf)>> {
        let Some(src) = self.prompt("Enter source path: ")? else {
            return Ok(None);
        };
        let Some(dst) = self.prompt("Enter destination path: ")? else {
            return Ok(None);
        };
        Ok(Some((self.session.resolve(&src), self.session.resolve(&dst))))
    }
}
