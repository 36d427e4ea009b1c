//! Replaying adapters that serve recorded interactions back.

pub mod filesystem;

use std::io;

use serde::de::DeserializeOwned;

use crate::cassette::format::RecordedError;

pub use filesystem::ReplayingFileSystem;

/// Rebuild an `io::Result<T>` from a cassette output value.
///
/// Mirror of `recording::record_result`: expects `{"ok": <value>}` or
/// `{"err": RecordedError}`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> io::Result<T> {
    if let Some(err) = output.get("err") {
        let recorded: RecordedError = serde_json::from_value(err.clone()).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("{context}: bad error record: {e}"))
        })?;
        return Err(recorded.to_io());
    }
    let value = output.get("ok").cloned().unwrap_or(serde_json::Value::Null);
    serde_json::from_value(value).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("{context}: failed to deserialize: {e}"))
    })
}
