//! Configuration constants and naming helpers for the chunker.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Deepest header level that opens a section.
///
/// Headers with more `#` markers than this are treated as body text,
/// matching the graceful-degradation contract of the line classifier.
pub const MAX_HEADER_LEVEL: usize = 5;

/// HTTP timeout in seconds.
///
/// Set to 30 seconds to accommodate large documents and slow connections.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default output directory for chunk files.
pub const DEFAULT_OUTPUT_DIR: &str = "data/chunks";

/// File extensions recognized as chunkable documents.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["md", "txt"];

/// Suffix appended to the document slug to form the chunk file name.
pub const CHUNKS_FILE_SUFFIX: &str = "_chunks.jsonl";

/// Regex for slug generation - matches non-word characters.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));

/// Regex for slug generation - matches whitespace and dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_SPACE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid regex"));

/// Generate a file-system-friendly slug from a document name.
///
/// Decomposes accented characters and drops combining marks, so titles
/// from arbitrary prose produce stable ASCII-leaning names.
///
/// # Examples
/// ```
/// use md_chunker::config::document_slug;
///
/// assert_eq!(document_slug("User Guide (v2)"), "user_guide_v2");
/// assert_eq!(document_slug("Résumé tips"), "resume_tips");
/// ```
#[must_use]
pub fn document_slug(name: &str) -> String {
    let decomposed: String = name.nfkd().filter(|c| !is_combining_mark(*c)).collect();
    let text = decomposed.to_lowercase();
    let text = SLUG_NON_WORD.replace_all(&text, "");
    let text = SLUG_SPACE_DASH.replace_all(&text, "_");
    text.trim_matches('_').to_string()
}

/// Build the chunk file name for a document stem.
///
/// # Examples
/// ```
/// use md_chunker::config::chunks_file_name;
///
/// assert_eq!(chunks_file_name("guide"), "guide_chunks.jsonl");
/// ```
#[must_use]
pub fn chunks_file_name(stem: &str) -> String {
    format!("{}{CHUNKS_FILE_SUFFIX}", document_slug(stem))
}
