//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::format::RecordedError;
use crate::cassette::recorder::CassetteRecorder;

pub use filesystem::RecordingFileSystem;

/// Record an `io::Result<T>` interaction using the ok/err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"ok": v}`
/// - `Err(e)` is serialized as `{"err": RecordedError}`
pub(crate) fn record_result<T, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: Result<T, &std::io::Error>,
) where
    T: Serialize,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).expect("failed to serialize recording input");

    let output_json = match result {
        Ok(v) => {
            let inner = serde_json::to_value(&v).expect("failed to serialize ok value");
            serde_json::json!({ "ok": inner })
        }
        Err(e) => {
            let inner = serde_json::to_value(RecordedError::from_io(e))
                .expect("failed to serialize recorded error");
            serde_json::json!({ "err": inner })
        }
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
