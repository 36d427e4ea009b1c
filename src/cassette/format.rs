//! Cassette data structures for recording and replaying interactions.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (e.g. "fs").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Host the session was recorded on (`unix` or `windows`).
    pub platform: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

/// An `io::Error` in a form that survives a trip through YAML.
///
/// The raw OS code is kept when present so that platform checks such as
/// cross-device detection still work on replay.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordedError {
    /// `io::ErrorKind` name, e.g. `NotFound`.
    pub kind: String,
    /// Raw OS error code, if the error came from the OS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_os_error: Option<i32>,
    /// Display text of the original error.
    pub message: String,
}

impl RecordedError {
    /// Captures an `io::Error`.
    #[must_use]
    pub fn from_io(err: &io::Error) -> Self {
        Self {
            kind: format!("{:?}", err.kind()),
            raw_os_error: err.raw_os_error(),
            message: err.to_string(),
        }
    }

    /// Rebuilds an `io::Error` with the same kind (and OS code, if any).
    #[must_use]
    pub fn to_io(&self) -> io::Error {
        if let Some(code) = self.raw_os_error {
            return io::Error::from_raw_os_error(code);
        }
        io::Error::new(kind_from_name(&self.kind), self.message.clone())
    }
}

/// A file name or path as stored in a cassette.
///
/// UTF-8 names are written as plain strings so cassettes stay readable;
/// anything else keeps its raw OS encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RecordedName {
    /// A name that is valid UTF-8.
    Text(String),
    /// A name in the platform's native encoding.
    Raw(OsString),
}

impl From<&OsStr> for RecordedName {
    fn from(name: &OsStr) -> Self {
        match name.to_str() {
            Some(text) => Self::Text(text.to_string()),
            None => Self::Raw(name.to_os_string()),
        }
    }
}

impl From<RecordedName> for OsString {
    fn from(name: RecordedName) -> Self {
        match name {
            RecordedName::Text(text) => text.into(),
            RecordedName::Raw(raw) => raw,
        }
    }
}

impl From<RecordedName> for PathBuf {
    fn from(name: RecordedName) -> Self {
        OsString::from(name).into()
    }
}

fn kind_from_name(name: &str) -> io::ErrorKind {
    match name {
        "NotFound" => io::ErrorKind::NotFound,
        "PermissionDenied" => io::ErrorKind::PermissionDenied,
        "AlreadyExists" => io::ErrorKind::AlreadyExists,
        "InvalidInput" => io::ErrorKind::InvalidInput,
        "InvalidData" => io::ErrorKind::InvalidData,
        "Interrupted" => io::ErrorKind::Interrupted,
        "UnexpectedEof" => io::ErrorKind::UnexpectedEof,
        "Unsupported" => io::ErrorKind::Unsupported,
        "CrossesDevices" => io::ErrorKind::CrossesDevices,
        "DirectoryNotEmpty" => io::ErrorKind::DirectoryNotEmpty,
        "NotADirectory" => io::ErrorKind::NotADirectory,
        "IsADirectory" => io::ErrorKind::IsADirectory,
        _ => io::ErrorKind::Other,
    }
}
