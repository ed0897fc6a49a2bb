//! Nested outline view of a split document.
//!
//! Sections are flat records with parent references; the outline folds
//! them back into a tree for inspection and navigation. The preamble is
//! not part of the outline - it has no header to hang a node on.

use crate::section::{Section, SectionId};

/// One node of the document outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// Header text of the section.
    pub header: String,

    /// Header level 1-5.
    pub level: u8,

    /// Body lines of the section itself.
    pub content: Vec<String>,

    /// Header texts of sibling sections (same parent, same level).
    pub siblings: Vec<String>,

    /// Nested sections, in document order.
    pub children: Vec<OutlineNode>,
}

/// Build the outline forest for a list of sections.
#[must_use]
pub fn build_outline(sections: &[Section]) -> Vec<OutlineNode> {
    collect_children(sections, None)
}

fn collect_children(sections: &[Section], parent: Option<SectionId>) -> Vec<OutlineNode> {
    sections
        .iter()
        .filter(|section| section.parent_id == parent && section.level > 0)
        .map(|section| OutlineNode {
            header: section.header.clone(),
            level: section.level,
            content: section.content.clone(),
            siblings: section
                .siblings
                .iter()
                .map(|id| sections[id.index()].header.clone())
                .collect(),
            children: collect_children(sections, Some(section.id)),
        })
        .collect()
}

/// Render an outline as an indented plain-text tree.
#[must_use]
pub fn render_outline(nodes: &[OutlineNode]) -> String {
    let mut lines = Vec::new();
    render_into(nodes, 0, &mut lines);
    lines.join("\n")
}

fn render_into(nodes: &[OutlineNode], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        lines.push(format!("{}{}", "  ".repeat(depth), node.header));
        render_into(&node.children, depth + 1, lines);
    }
}
