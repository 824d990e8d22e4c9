//! # Undo History
//!
//! A single linear stack per session: every applied mutation pushes exactly
//! one inverse record, `undo` pops and replays the most recent one. No redo
//! and no branching; undoing with an empty history is a no-op, not an
//! error.

use pagecraft_document::Document;

use crate::mutations::InverseOp;

/// One recorded undo step.
#[derive(Debug)]
struct UndoEntry {
    /// Short operation label, for logging.
    label: &'static str,
    inverse: InverseOp,
}

/// Linear undo history.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<UndoEntry>,
    /// 0 = unlimited.
    max_levels: usize,
}

impl UndoStack {
    /// Default history depth of 100 steps.
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_levels,
        }
    }

    pub(crate) fn push(&mut self, label: &'static str, inverse: InverseOp) {
        self.entries.push(UndoEntry { label, inverse });
        if self.max_levels > 0 && self.entries.len() > self.max_levels {
            self.entries.remove(0);
        }
    }

    /// Revert the most recent operation. Returns the label of the undone
    /// operation, or `None` when history is empty.
    pub(crate) fn undo(&mut self, document: &mut Document) -> Option<&'static str> {
        let entry = self.entries.pop()?;
        entry.inverse.apply(document);
        Some(entry.label)
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
