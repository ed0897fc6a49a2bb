//! Error types for the chunker.
//!
//! A single `ChunkerError` enum covers the library surface, with a
//! `Result` alias used throughout.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the chunker library.
#[derive(Debug, Error)]
pub enum ChunkerError {
    /// Input bytes were not valid UTF-8.
    ///
    /// Encoding problems are a hard failure: substituting replacement
    /// characters would silently corrupt section content.
    #[error("Invalid UTF-8 in {context} at byte {position}")]
    Encoding { context: String, position: usize },

    /// Document file does not exist.
    #[error("Document not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Expected a document file but found a directory.
    #[error("Expected a file but found a directory: {}", .0.display())]
    IsADirectory(PathBuf),

    /// Expected a directory but found something else.
    #[error("Expected a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download a document.
    #[error("Failed to download document from {url}: {source}")]
    DownloadFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts were exhausted.
    #[error("Giving up after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSONL line failed to parse in strict mode.
    #[error("Failed to parse JSON at line {line} in {}: {source}", .path.display())]
    JsonLine {
        line: usize,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid batch size for the JSONL reader.
    #[error("batch_size must be at least 1, got {0}")]
    InvalidBatchSize(usize),

    /// Invalid line range for the JSONL reader.
    #[error("start_line ({start}) must be <= end_line ({end})")]
    InvalidLineRange { start: usize, end: usize },

    /// Nothing to process in the given location.
    #[error("No documents to process in: {}", .0.display())]
    NoDocuments(PathBuf),

    /// One or more documents failed during a batch run.
    #[error("{failed} of {total} document(s) failed to process")]
    PartialFailure { failed: usize, total: usize },
}

/// Result type alias for chunker operations.
pub type Result<T> = std::result::Result<T, ChunkerError>;
