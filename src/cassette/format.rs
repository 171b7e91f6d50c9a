//! Cassette data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, assigned by the recorder.
    pub seq: u64,
    /// Port name, e.g. `"fs"`.
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Arguments of the call.
    pub input: serde_json::Value,
    /// Result of the call, `{"ok": ..}` or `{"err": ".."}` for fallible methods.
    pub output: serde_json::Value,
}

/// A named, timestamped sequence of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error string if the YAML does not describe a cassette.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("invalid cassette: {e}"))
    }
}
