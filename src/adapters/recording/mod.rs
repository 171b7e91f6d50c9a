//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;

pub use filesystem::RecordingFileSystem;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Records a `Result<T, E>` interaction.
///
/// `Ok(v)` is stored as `{"ok": v}` and `Err(e)` as `{"err": e.to_string()}`,
/// the shape `replaying::replay_result` reads back.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = serde_json::to_value(input).unwrap_or(serde_json::Value::Null);
    let output_json = match result {
        Ok(v) => serde_json::json!({ "ok": serde_json::to_value(v).unwrap_or_default() }),
        Err(e) => serde_json::json!({ "err": e.to_string() }),
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input_json, output_json);
}
