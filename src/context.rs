//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveFileSystem;
use crate::adapters::recording::RecordingFileSystem;
use crate::adapters::replaying::ReplayingFileSystem;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::CassetteMode;
use crate::ports::filesystem::FileSystem;

/// Bundles the ports a scan needs.
///
/// Constructors wire up different adapters (live, recording, replaying).
pub struct ServiceContext {
    /// Filesystem used to read stylesheets.
    pub fs: Box<dyn FileSystem>,
    /// Cassette recorder shared with the recording adapter; written on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context that reads from the real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem), recorder: None }
    }

    /// Creates a context that reads from disk and records every read.
    ///
    /// The cassette is written to `path` when the context is dropped.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, "classclash-scan")));
        Self {
            fs: Box::new(RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder))),
            recorder: Some(recorder),
        }
    }

    /// Creates a context whose reads are served from the cassette at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let replayer = CassetteReplayer::from_path(path)?;
        Ok(Self { fs: Box::new(ReplayingFileSystem::new(replayer)), recorder: None })
    }

    /// Creates the context selected by `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if a replay cassette cannot be loaded.
    pub fn for_mode(mode: &CassetteMode) -> Result<Self, String> {
        match mode {
            CassetteMode::Off => Ok(Self::live()),
            CassetteMode::Record(path) => Ok(Self::recording(path)),
            CassetteMode::Replay(path) => Self::replaying(path),
        }
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        let Some(recorder) = self.recorder.take() else {
            return;
        };
        let Ok(guard) = recorder.lock() else {
            eprintln!("Warning: cassette recorder lock poisoned; cassette not written");
            return;
        };
        match guard.finish() {
            Ok(path) => tracing::info!(path = %path.display(), "cassette written"),
            Err(e) => eprintln!("Warning: failed to write cassette: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;

    #[test]
    fn recording_context_writes_cassette_on_drop() {
        let dir = std::env::temp_dir().join("classclash_ctx_record");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let css = dir.join("common.css");
        std::fs::write(&css, ".card {}").unwrap();
        let cassette_path = dir.join("scan.cassette.yaml");

        {
            let ctx = ServiceContext::recording(&cassette_path);
            assert_eq!(ctx.fs.read_to_string(&css).unwrap(), ".card {}");
        }

        let cassette =
            Cassette::from_yaml(&std::fs::read_to_string(&cassette_path).unwrap()).unwrap();
        assert_eq!(cassette.name, "classclash-scan");
        assert_eq!(cassette.interactions.len(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_context_rejects_missing_cassette() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/scan.cassette.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn off_mode_is_live() {
        let ctx = ServiceContext::for_mode(&CassetteMode::Off).unwrap();
        assert!(ctx.fs.read_to_string(Path::new("/nonexistent/classclash.css")).is_err());
    }
}
