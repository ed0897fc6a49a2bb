//! Active-section stack and sibling bookkeeping.

use std::collections::HashMap;

use crate::config::MAX_HEADER_LEVEL;
use crate::section::SectionId;

/// Key of a sibling group: sections sharing a parent and a level.
pub type SiblingKey = (Option<SectionId>, u8);

/// Tracks the open section at each header level and the append-only
/// sibling groups.
///
/// One slot per level 1-5; an empty slot means no open section at that
/// level. The preamble never occupies a slot - it closes before the
/// first header opens, so it can never become a parent.
#[derive(Debug, Default)]
pub struct HierarchyTracker {
    slots: [Option<SectionId>; MAX_HEADER_LEVEL],
    sibling_groups: HashMap<SiblingKey, Vec<SectionId>>,
}

impl HierarchyTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parent for a new header at `level`: the deepest still-open
    /// section at a strictly lower level.
    ///
    /// Returns `None` for level-1 headers and for level jumps with no
    /// shallower section open (no intermediate levels are invented).
    #[must_use]
    pub fn parent_of(&self, level: u8) -> Option<SectionId> {
        self.slots[..level as usize - 1]
            .iter()
            .rev()
            .find_map(|slot| *slot)
    }

    /// Take every open section at `level` or deeper, deepest first.
    ///
    /// The caller must close these sections before opening the new one;
    /// tracker and accumulator close in lockstep.
    pub fn close_from(&mut self, level: u8) -> Vec<SectionId> {
        self.slots[level as usize - 1..]
            .iter_mut()
            .rev()
            .filter_map(Option::take)
            .collect()
    }

    /// Open a section at `level`, recording it in its sibling group.
    ///
    /// Slots at `level` and deeper must already have been drained via
    /// [`close_from`](Self::close_from); deeper slots are cleared again
    /// here since they are no longer valid ancestors.
    pub fn open(&mut self, level: u8, id: SectionId) {
        let parent = self.parent_of(level);
        self.sibling_groups.entry((parent, level)).or_default().push(id);
        self.slots[level as usize - 1] = Some(id);
        for slot in &mut self.slots[level as usize..] {
            *slot = None;
        }
    }

    /// Consume the tracker, yielding the final sibling groups.
    ///
    /// Group membership is append-only for the whole pass, so sibling
    /// relationships remain valid after sections close.
    #[must_use]
    pub fn into_sibling_groups(self) -> HashMap<SiblingKey, Vec<SectionId>> {
        self.sibling_groups
    }
}
