//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use tracing::warn;

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem reads from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let interaction = self
            .replayer
            .lock()
            .expect("replayer lock poisoned")
            .next_interaction("fs", "read_to_string");

        let requested = path.display().to_string();
        let recorded = interaction.input.get("path").and_then(serde_json::Value::as_str);
        if recorded != Some(requested.as_str()) {
            warn!(
                requested = %requested,
                recorded = recorded.unwrap_or("<none>"),
                seq = interaction.seq,
                "replayed read does not match the recorded path"
            );
        }

        replay_result(&interaction.output, "fs::read_to_string")
    }
}
