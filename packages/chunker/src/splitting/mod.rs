//! Hierarchical Markdown splitting.
//!
//! A single pass walks the document line by line:
//!
//! ```text
//! classify -> HierarchyTracker -> SectionArena
//!    |             |                  |
//!  fence        parents,          content,
//!  state        siblings          paths
//! ```
//!
//! The classifier is pure; tracker and arena close sections in
//! lockstep; emission happens once at end of input, in document order.

mod accumulator;
mod classifier;
mod hierarchy;
mod splitter;

pub use accumulator::SectionArena;
pub use classifier::{classify, LineClass};
pub use hierarchy::{HierarchyTracker, SiblingKey};
pub use splitter::MarkdownSplitter;
