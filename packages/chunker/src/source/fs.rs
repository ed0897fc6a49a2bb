//! Local file text source.

use std::fs;
use std::path::{Path, PathBuf};

use super::{decode_utf8, TextSource};
use crate::error::{ChunkerError, Result};

/// Read a document from disk with strict UTF-8 validation.
///
/// # Errors
/// Fails if the path does not exist, is a directory, cannot be read,
/// or is not valid UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ChunkerError::FileNotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(ChunkerError::IsADirectory(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    decode_utf8(bytes, &path.display().to_string())
}

/// Text source backed by a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn fetch(&self) -> Result<String> {
        read_document(&self.path)
    }

    fn name(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            })
    }
}
