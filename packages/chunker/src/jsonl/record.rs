//! Serialization records for JSONL output.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// One section as written to (and read back from) a JSONL chunk file.
///
/// Field names are the wire contract for downstream consumers; `length`
/// lets callers flag sections below their own minimum without the
/// chunker filtering anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Section id, unique within the document, in emission order.
    pub id: usize,

    /// Header text without `#` markers; empty for the preamble.
    pub header: String,

    /// Header level 1-5, or 0 for the preamble.
    pub level: u8,

    /// Body lines, verbatim.
    pub content: Vec<String>,

    /// Id of the enclosing section, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<usize>,

    /// Ids of same-level sections under the same parent, excluding self.
    pub siblings: Vec<usize>,

    /// Breadcrumb of header texts from the root to this section.
    pub path: Vec<String>,

    /// Character count of the content, counting interior newlines.
    pub length: usize,

    /// Name of the source document, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl SectionRecord {
    /// Build a record from a section, tagging it with its source name.
    #[must_use]
    pub fn from_section(section: &Section, source: Option<&str>) -> Self {
        Self {
            id: section.id.index(),
            header: section.header.clone(),
            level: section.level,
            content: section.content.clone(),
            parent_id: section.parent_id.map(|id| id.index()),
            siblings: section.siblings.iter().map(|id| id.index()).collect(),
            path: section.path.clone(),
            length: section.content_len(),
            source: source.map(String::from),
        }
    }
}
