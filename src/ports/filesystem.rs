//! Filesystem port for descriptor store I/O.

use std::path::Path;

/// Provides filesystem access for the descriptor store.
///
/// Abstracting the filesystem keeps the store testable without touching
/// the real descriptor directory or the host inventory.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Replaces the contents of an existing file.
    ///
    /// The file is truncated, never created.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or the write fails.
    fn overwrite(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Lists the entry names in a directory, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;
}
