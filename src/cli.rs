//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `fsnav`.
///
/// With no subcommand the interactive menu starts.
#[derive(Debug, Parser)]
#[command(name = "fsnav", version, about = "Browse and manipulate the file system")]
pub struct Cli {
    /// Directory to start in (defaults to the working directory).
    #[arg(long, short = 'd', global = true, env = "FSNAV_START_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// One-shot command to run instead of the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot subcommands. Relative paths resolve against the start directory.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a directory.
    Ls {
        /// Directory to list (defaults to the start directory).
        path: Option<String>,
    },
    /// Create an empty file.
    Touch {
        /// File to create.
        path: String,
    },
    /// Create a directory and any missing parents.
    Mkdir {
        /// Directory to create.
        path: String,
    },
    /// Delete a file or directory tree.
    Rm {
        /// Path to delete.
        path: String,
    },
    /// Copy a file or directory tree.
    Cp {
        /// Source path.
        src: String,
        /// Destination path.
        dst: String,
    },
    /// Move or rename a file or directory.
    Mv {
        /// Source path.
        src: String,
        /// Destination path.
        dst: String,
    },
    /// Search recursively for names containing a substring.
    Find {
        /// Text the name must contain.
        needle: String,
        /// Directory to search (defaults to the start directory).
        #[arg(long)]
        root: Option<String>,
    },
}
