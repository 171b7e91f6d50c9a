//! Records interactions into a cassette file.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Collects interactions and writes them out as a YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
    next_seq: u64,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new(), next_seq: 0 }
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Records an interaction. `seq` is assigned automatically.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        self.interactions.push(Interaction {
            seq: self.next_seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
        self.next_seq += 1;
    }

    /// Writes everything recorded so far to the cassette file.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails.
    pub fn finish(&self) -> Result<PathBuf, std::io::Error> {
        let cassette = Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            interactions: self.interactions.clone(),
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_and_finish() {
        let dir = std::env::temp_dir().join("classclash_recorder_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("scan.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "test-recording");
        assert!(recorder.is_empty());
        recorder.record("fs", "read_to_string", json!({"path": "a.css"}), json!({"ok": ".a{}"}));
        recorder.record("fs", "read_to_string", json!({"path": "b.css"}), json!({"err": "gone"}));
        assert_eq!(recorder.len(), 2);

        let written = recorder.finish().expect("finish should succeed");
        assert_eq!(written, path);

        let cassette = Cassette::from_yaml(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cassette.name, "test-recording");
        assert_eq!(cassette.interactions[0].seq, 0);
        assert_eq!(cassette.interactions[1].seq, 1);
        assert_eq!(cassette.interactions[1].output, json!({"err": "gone"}));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
