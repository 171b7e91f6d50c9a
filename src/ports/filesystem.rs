//! Filesystem port for reading stylesheets.

use std::path::Path;

/// Provides read access to files.
///
/// Abstracting the filesystem lets a scan be recorded to a cassette and
/// replayed later without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// The file handle is released before this returns, whether or not the
    /// read succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is
    /// not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
