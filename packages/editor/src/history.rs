//! # Undo/Redo History
//!
//! Linear history over whole-document snapshots.
//!
//! ## Design
//!
//! - `past` holds prior snapshots, oldest first
//! - `future` holds undone snapshots, the next redo last
//! - Committing clears `future` (no branching timeline)
//! - Committing a document equal to `current` records nothing
//!
//! Snapshots are `Document` values whose blocks are `Arc`-shared, so keeping
//! every level costs one `Vec` of pointers per step.
//!
//! ## Example
//!
//! ```rust
//! use pagecraft_editor::History;
//! use pagecraft_model::{BlockKind, Document, IdGenerator};
//!
//! let mut ids = IdGenerator::new("memory://history");
//! let mut history = History::new(Document::new());
//!
//! let (doc, _) = history.current().insert(BlockKind::Hero, &mut ids);
//! history.commit(doc);
//! assert_eq!(history.current().len(), 1);
//!
//! history.undo();
//! assert!(history.current().is_empty());
//!
//! history.redo();
//! assert_eq!(history.current().len(), 1);
//! ```

use pagecraft_model::Document;
use tracing::debug;

/// Undo/redo registers around the live document
#[derive(Debug, Clone)]
pub struct History {
    /// Prior snapshots (most recent last)
    past: Vec<Document>,

    /// The live document
    current: Document,

    /// Undone snapshots (next redo last)
    future: Vec<Document>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// Unbounded history starting at `initial`
    pub fn new(initial: Document) -> Self {
        Self::with_max_levels(initial, 0)
    }

    /// History that keeps at most `max_levels` undo steps
    pub fn with_max_levels(initial: Document, max_levels: usize) -> Self {
        Self {
            past: Vec::new(),
            current: initial,
            future: Vec::new(),
            max_levels,
        }
    }

    pub fn current(&self) -> &Document {
        &self.current
    }

    /// Make `document` the live document. Returns `false` (and records
    /// nothing) when it equals the current one.
    pub fn commit(&mut self, document: Document) -> bool {
        if document == self.current {
            debug!("commit skipped: document unchanged");
            return false;
        }

        let previous = std::mem::replace(&mut self.current, document);
        self.past.push(previous);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.past.len() > self.max_levels {
            let excess = self.past.len() - self.max_levels;
            self.past.drain(..excess);
        }

        // New commit invalidates the redo branch
        self.future.clear();
        true
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop() else {
            return false;
        };

        let undone = std::mem::replace(&mut self.current, previous);
        self.future.push(undone);
        debug!(undo_levels = self.past.len(), redo_levels = self.future.len(), "undo");
        true
    }

    /// Re-apply the most recently undone snapshot
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop() else {
            return false;
        };

        let previous = std::mem::replace(&mut self.current, next);
        self.past.push(previous);
        debug!(undo_levels = self.past.len(), redo_levels = self.future.len(), "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    /// Drop all undo/redo levels, keeping the live document
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    /// Replace the live document and forget all history
    pub fn reset(&mut self, document: Document) {
        self.current = document;
        self.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{BlockKind, GlobalSettings, IdGenerator};

    fn docs() -> (Document, Document, Document) {
        let mut ids = IdGenerator::from_seed("h".to_string());
        let d0 = Document::new();
        let (d1, _) = d0.insert(BlockKind::Hero, &mut ids);
        let (d2, _) = d1.insert(BlockKind::Faq, &mut ids);
        (d0, d1, d2)
    }

    #[test]
    fn test_history_creation() {
        let history = History::default();
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_redo_on_empty_history_is_noop() {
        let mut history = History::default();
        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.current().is_empty());
    }

    #[test]
    fn test_linearity() {
        let (d0, d1, d2) = docs();
        let mut history = History::new(d0);

        history.commit(d1.clone());
        history.commit(d2);
        history.undo();
        history.undo();
        history.redo();

        assert_eq!(history.current(), &d1);
    }

    #[test]
    fn test_commit_discards_redo() {
        let (d0, d1, d2) = docs();
        let mut history = History::new(d0);

        history.commit(d1);
        history.undo();
        assert_eq!(history.redo_levels(), 1);

        history.commit(d2.clone());
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.redo());
        assert_eq!(history.current(), &d2);
    }

    #[test]
    fn test_commit_of_unchanged_document_is_ignored() {
        let (d0, d1, _) = docs();
        let mut history = History::new(d0);

        assert!(history.commit(d1.clone()));
        assert!(!history.commit(d1.clone()));
        assert_eq!(history.undo_levels(), 1);
    }

    #[test]
    fn test_settings_change_is_a_step() {
        let (d0, _, _) = docs();
        let mut history = History::new(d0.clone());

        let mut settings = GlobalSettings::default();
        settings.title = "Launch".to_string();
        assert!(history.commit(d0.with_settings(settings)));

        history.undo();
        assert_eq!(history.current().settings().title, "My Awesome Site");
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut ids = IdGenerator::from_seed("cap".to_string());
        let mut history = History::with_max_levels(Document::new(), 2);

        for _ in 0..3 {
            let (doc, _) = history.current().insert(BlockKind::Text, &mut ids);
            history.commit(doc);
        }

        // Should only keep 2 (max levels)
        assert_eq!(history.undo_levels(), 2);
        history.undo();
        history.undo();
        assert!(!history.undo());
        assert_eq!(history.current().len(), 1);
    }

    #[test]
    fn test_clear_keeps_current() {
        let (d0, d1, _) = docs();
        let mut history = History::new(d0);
        history.commit(d1.clone());
        history.clear();

        assert!(!history.can_undo());
        assert_eq!(history.current(), &d1);
    }
}
