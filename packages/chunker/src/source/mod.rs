//! Document text sources.
//!
//! The splitter core never touches the file system or the network; a
//! [`TextSource`] supplies whole-document text from wherever it lives.
//! Retry and backoff live out here with the sources, never in the core.

mod fs;
mod http;

use std::path::{Path, PathBuf};

pub use fs::{read_document, FileSource};
pub use http::{create_client, download_bytes, HttpSource};

use crate::config::DOCUMENT_EXTENSIONS;
use crate::error::{ChunkerError, Result};

/// Supplies raw document text for splitting.
pub trait TextSource {
    /// Fetch the whole document as UTF-8 text.
    ///
    /// # Errors
    /// Implementations fail on unreachable documents and on invalid
    /// UTF-8; they never repair encoding silently.
    fn fetch(&self) -> Result<String>;

    /// Human-readable name of the document (file name or URL).
    fn name(&self) -> String;
}

/// Strictly decode bytes as UTF-8.
pub(crate) fn decode_utf8(bytes: Vec<u8>, context: &str) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ChunkerError::Encoding {
        context: context.to_string(),
        position: e.utf8_error().valid_up_to(),
    })
}

/// Discover chunkable documents in a directory.
///
/// With `target` set, returns exactly that file; otherwise every file
/// with a recognized extension (`.md`, `.txt`), sorted by path for
/// deterministic processing order.
///
/// # Errors
/// Fails if the directory does not exist, is not a directory, or the
/// target file is missing.
pub fn discover_documents(directory: &Path, target: Option<&str>) -> Result<Vec<PathBuf>> {
    if !directory.exists() {
        return Err(ChunkerError::FileNotFound(directory.to_path_buf()));
    }
    if !directory.is_dir() {
        return Err(ChunkerError::NotADirectory(directory.to_path_buf()));
    }

    if let Some(target) = target {
        let target_path = directory.join(target);
        if !target_path.exists() {
            return Err(ChunkerError::FileNotFound(target_path));
        }
        tracing::info!(file = target, "Found target file");
        return Ok(vec![target_path]);
    }

    let mut documents: Vec<PathBuf> = std::fs::read_dir(directory)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
        })
        .collect();
    documents.sort();

    if documents.is_empty() {
        tracing::warn!(directory = %directory.display(), "No documents found");
    } else {
        tracing::info!(
            count = documents.len(),
            directory = %directory.display(),
            "Discovered documents"
        );
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_discover_finds_md_and_txt_sorted() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("b.txt"), "text").expect("writable");
        fs::write(dir.path().join("a.md"), "# A").expect("writable");
        fs::write(dir.path().join("c.pdf"), "ignored").expect("writable");

        let documents = discover_documents(dir.path(), None).expect("discovers");
        let names: Vec<_> = documents
            .iter()
            .map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(
            names,
            vec![Some("a.md".to_string()), Some("b.txt".to_string())]
        );
    }

    #[test]
    fn test_discover_target_file() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("doc.md"), "# A").expect("writable");
        fs::write(dir.path().join("other.md"), "# B").expect("writable");

        let documents = discover_documents(dir.path(), Some("doc.md")).expect("discovers");
        assert_eq!(documents.len(), 1);
        assert!(documents[0].ends_with("doc.md"));
    }

    #[test]
    fn test_discover_missing_target_fails() {
        let dir = tempdir().expect("tempdir");
        let err = discover_documents(dir.path(), Some("nope.md")).expect_err("must fail");
        assert!(matches!(err, ChunkerError::FileNotFound(_)));
    }

    #[test]
    fn test_discover_missing_directory_fails() {
        let err =
            discover_documents(Path::new("no/such/directory"), None).expect_err("must fail");
        assert!(matches!(err, ChunkerError::FileNotFound(_)));
    }

    #[test]
    fn test_discover_empty_directory_is_ok() {
        let dir = tempdir().expect("tempdir");
        let documents = discover_documents(dir.path(), None).expect("discovers");
        assert!(documents.is_empty());
    }

    #[test]
    fn test_decode_utf8_reports_position() {
        let err = decode_utf8(vec![0x61, 0x62, 0xff], "doc.md").expect_err("must fail");
        match err {
            ChunkerError::Encoding { context, position } => {
                assert_eq!(context, "doc.md");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
