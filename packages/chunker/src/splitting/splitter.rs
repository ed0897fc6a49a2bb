//! Single-pass splitter over classified lines.

use std::path::Path;

use crate::error::{ChunkerError, Result};
use crate::section::{SectionId, SplitOutput};
use crate::source::read_document;
use crate::splitting::accumulator::SectionArena;
use crate::splitting::classifier::{classify, LineClass};
use crate::splitting::hierarchy::HierarchyTracker;

/// Splits Markdown documents into hierarchical sections.
///
/// One pass, no backtracking: each line is classified against the
/// current fence state, headers drive the tracker and arena in
/// lockstep, and body lines accumulate on the deepest open section.
/// Malformed input degrades gracefully; the only hard failure is
/// invalid UTF-8 at the byte boundary.
#[derive(Debug, Default)]
pub struct MarkdownSplitter;

impl MarkdownSplitter {
    /// Create a new splitter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Split a text buffer into sections.
    pub fn split(&self, text: &str) -> SplitOutput {
        self.split_lines(text.lines())
    }

    /// Split an ordered sequence of lines into sections.
    pub fn split_lines<'a, I>(&self, lines: I) -> SplitOutput
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = SplitState::new();
        for line in lines {
            state.step(line);
        }
        state.finish()
    }

    /// Split raw bytes, validating UTF-8 first.
    ///
    /// # Errors
    /// Returns [`ChunkerError::Encoding`] on invalid byte sequences;
    /// corrupting text via lossy substitution is never acceptable here.
    pub fn split_bytes(&self, bytes: &[u8], context: &str) -> Result<SplitOutput> {
        let text = std::str::from_utf8(bytes).map_err(|e| ChunkerError::Encoding {
            context: context.to_string(),
            position: e.valid_up_to(),
        })?;
        Ok(self.split(text))
    }

    /// Split a document read from a file.
    ///
    /// # Errors
    /// Fails if the path does not exist, is a directory, cannot be
    /// read, or contains invalid UTF-8.
    pub fn split_file(&self, path: &Path) -> Result<SplitOutput> {
        let text = read_document(path)?;
        Ok(self.split(&text))
    }
}

/// Fold state for one pass: fence flag, tracker, arena, preamble
/// buffer, and the single accumulation target.
#[derive(Debug, Default)]
struct SplitState {
    fence_open: bool,
    tracker: HierarchyTracker,
    arena: SectionArena,
    preamble: Vec<String>,
    current_target: Option<SectionId>,
}

impl SplitState {
    fn new() -> Self {
        Self::default()
    }

    /// Consume one classified line.
    fn step(&mut self, line: &str) {
        match classify(self.fence_open, line) {
            LineClass::FenceToggle => {
                // The delimiter itself is structural, never content
                self.fence_open = !self.fence_open;
            }
            LineClass::Header { level, text } => {
                if self.current_target.is_none() {
                    self.flush_preamble();
                }
                for id in self.tracker.close_from(level) {
                    self.arena.close(id);
                }
                let parent = self.tracker.parent_of(level);
                let id = self.arena.open(text, level, parent);
                self.tracker.open(level, id);
                self.current_target = Some(id);
            }
            LineClass::Body(text) => {
                if let Some(id) = self.current_target {
                    self.arena.append_body(id, text);
                } else {
                    self.preamble.push(text.to_string());
                }
            }
        }
    }

    /// Close everything still open and emit.
    fn finish(mut self) -> SplitOutput {
        if self.current_target.is_none() {
            self.flush_preamble();
        }
        for id in self.tracker.close_from(1) {
            self.arena.close(id);
        }

        let mut warnings = Vec::new();
        if self.fence_open {
            warnings.push("unterminated code fence; treated as closed at end of input".to_string());
        }

        let sibling_groups = self.tracker.into_sibling_groups();
        SplitOutput {
            sections: self.arena.into_sections(&sibling_groups),
            warnings,
        }
    }

    /// Materialize the preamble as a level-0 section.
    ///
    /// Runs at most once, when the first header appears or input ends.
    /// A buffer with no non-whitespace line produces nothing, so blank
    /// or empty documents yield an empty section sequence.
    fn flush_preamble(&mut self) {
        if self.preamble.iter().any(|line| !line.trim().is_empty()) {
            let id = self.arena.open("", 0, None);
            for line in &self.preamble {
                self.arena.append_body(id, line);
            }
            self.arena.close(id);
        }
        self.preamble.clear();
    }
}
