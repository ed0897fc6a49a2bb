//! md-chunker - Split Markdown documents into hierarchical sections.
//!
//! This crate converts long-form Markdown into a forest of sections
//! keyed by header hierarchy (H1-H5), preserving parent/child and
//! sibling relationships, so each section can be handed to retrieval or
//! question-generation pipelines as an addressable unit. Header-like
//! syntax inside fenced code blocks is never treated as structure.
//!
//! # Example
//!
//! ```
//! use md_chunker::MarkdownSplitter;
//!
//! let splitter = MarkdownSplitter::new();
//! let output = splitter.split("# Intro\nWelcome.\n## Setup\nInstall the package.\n");
//!
//! assert_eq!(output.sections.len(), 2);
//! assert_eq!(output.sections[1].path, ["Intro", "Setup"]);
//! assert_eq!(output.sections[1].parent_id, Some(output.sections[0].id));
//! ```
//!
//! Splitting is a single synchronous pass per document with no shared
//! state between documents. Outputs are plain owned data, so callers
//! scale out by processing documents in parallel, one per worker.
//!
//! # Architecture
//!
//! The chunker is organized into several modules:
//!
//! - [`config`]: Configuration constants and naming helpers
//! - [`section`]: Core data types (Section, SectionId, SplitOutput)
//! - [`error`]: Error types and Result alias
//! - [`splitting`]: The hierarchical splitter state machine
//! - [`outline`]: Nested outline view of a split document
//! - [`jsonl`]: JSONL chunk file output and batched reading
//! - [`source`]: Document text sources (local files, HTTP)
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod jsonl;
pub mod outline;
pub mod section;
pub mod source;
pub mod splitting;

// Re-export the main entry point
pub use splitting::MarkdownSplitter;

// Re-export commonly used items
pub use error::{ChunkerError, Result};
pub use jsonl::{generate_jsonl, save_jsonl, BatchReader, SectionRecord};
pub use outline::{build_outline, OutlineNode};
pub use section::{Section, SectionId, SplitOutput};
pub use source::{discover_documents, FileSource, HttpSource, TextSource};
