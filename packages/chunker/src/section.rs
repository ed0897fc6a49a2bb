//! Core data types for split documents.
//!
//! A [`Section`] is the unit of output: one header (or the preamble)
//! together with the body lines that belong exclusively to it, plus the
//! hierarchy metadata needed to treat it as an addressable unit.

use std::fmt;

/// Identifier of a section within one document.
///
/// Ids are arena indices assigned in emission order, so they are stable
/// and deterministic across runs on the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(usize);

impl SectionId {
    /// Create an id from an arena index.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The underlying arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single section of a split document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Identifier, unique within the document, in emission order.
    pub id: SectionId,

    /// Header text without the leading `#` markers.
    ///
    /// Empty only for the preamble section.
    pub header: String,

    /// Header level 1-5, or 0 for the preamble.
    pub level: u8,

    /// Body lines belonging exclusively to this section, verbatim.
    ///
    /// Blank lines are preserved as empty strings so paragraph spacing
    /// survives downstream. Lines of nested sections are never included.
    pub content: Vec<String>,

    /// Nearest enclosing section at a strictly lower level, if any.
    pub parent_id: Option<SectionId>,

    /// Sections at the same level sharing the same parent, in document
    /// order, excluding this section itself.
    pub siblings: Vec<SectionId>,

    /// Header texts from the document root down to this section,
    /// including its own header. Empty for the preamble.
    pub path: Vec<String>,
}

impl Section {
    /// Whether this is the preamble section (body text before any header).
    #[must_use]
    pub fn is_preamble(&self) -> bool {
        self.level == 0
    }

    /// Content joined back into a single text block.
    #[must_use]
    pub fn content_text(&self) -> String {
        self.content.join("\n")
    }

    /// Character count of the content, counting interior newlines.
    ///
    /// Callers flag sections below their own minimum via this value;
    /// the chunker itself never filters on it.
    #[must_use]
    pub fn content_len(&self) -> usize {
        let chars: usize = self.content.iter().map(|line| line.chars().count()).sum();
        chars + self.content.len().saturating_sub(1)
    }

    /// Render the section back to Markdown.
    ///
    /// The preamble has no header line, so it renders as its content only.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        if self.is_preamble() {
            self.content_text()
        } else {
            format!(
                "{} {}\n\n{}",
                "#".repeat(self.level as usize),
                self.header,
                self.content_text()
            )
        }
    }
}

/// Result of splitting one document.
///
/// Warnings are non-fatal degradations (an unterminated code fence
/// closed at end of input); callers decide whether to log them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutput {
    /// Finalized sections in document order.
    pub sections: Vec<Section>,

    /// Non-fatal problems encountered during the pass.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_section(level: u8, header: &str, content: &[&str]) -> Section {
        Section {
            id: SectionId::new(0),
            header: header.to_string(),
            level,
            content: content.iter().map(|l| (*l).to_string()).collect(),
            parent_id: None,
            siblings: Vec::new(),
            path: Vec::new(),
        }
    }

    #[test]
    fn test_section_id_ordering() {
        assert!(SectionId::new(0) < SectionId::new(1));
        assert_eq!(SectionId::new(3).index(), 3);
        assert_eq!(SectionId::new(3).to_string(), "3");
    }

    #[test]
    fn test_content_text_joins_lines() {
        let section = make_section(1, "Intro", &["first", "", "second"]);
        assert_eq!(section.content_text(), "first\n\nsecond");
    }

    #[test]
    fn test_content_len_counts_newlines() {
        let section = make_section(1, "Intro", &["ab", "cd"]);
        // "ab\ncd" is five characters
        assert_eq!(section.content_len(), 5);
    }

    #[test]
    fn test_content_len_empty() {
        let section = make_section(1, "Intro", &[]);
        assert_eq!(section.content_len(), 0);
    }

    #[test]
    fn test_content_len_counts_chars_not_bytes() {
        let section = make_section(1, "Intro", &["héllo"]);
        assert_eq!(section.content_len(), 5);
    }

    #[test]
    fn test_to_markdown() {
        let section = make_section(2, "Setup", &["Install the package."]);
        assert_eq!(section.to_markdown(), "## Setup\n\nInstall the package.");
    }

    #[test]
    fn test_to_markdown_preamble() {
        let section = make_section(0, "", &["Loose text."]);
        assert!(section.is_preamble());
        assert_eq!(section.to_markdown(), "Loose text.");
    }
}
