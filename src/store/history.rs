//! Linear undo/redo history over annotation-set snapshots.
//!
//! History stores full snapshots of the annotation list rather than diffs:
//! annotation counts stay small in an interactive markup session, so snapshot
//! simplicity wins over diff compactness. The stack is capped to bound memory
//! over long sessions.

use crate::constants::UNDO_HISTORY_SIZE;
use crate::model::Annotation;

/// Snapshot stack with a cursor.
///
/// The entry at `index` is always the current state; entries before it are
/// undoable, entries after it are redoable. Recording a new snapshot discards
/// the redo branch.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<Annotation>>,
    index: usize,
    limit: usize,
}

impl History {
    /// Create a history whose baseline is the given annotation list.
    ///
    /// The baseline itself is not undoable; `can_undo` stays false until the
    /// first recorded mutation.
    pub fn new(baseline: Vec<Annotation>) -> Self {
        Self::with_limit(baseline, UNDO_HISTORY_SIZE)
    }

    /// Create a history with a custom snapshot cap (minimum 1).
    pub fn with_limit(baseline: Vec<Annotation>, limit: usize) -> Self {
        Self {
            snapshots: vec![baseline],
            index: 0,
            limit: limit.max(1),
        }
    }

    /// Record a snapshot as the new current state.
    ///
    /// Discards any entries beyond the cursor first, then drops the oldest
    /// entry if the cap is exceeded.
    pub fn push(&mut self, snapshot: Vec<Annotation>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.limit {
            self.snapshots.remove(0);
        }
        self.index = self.snapshots.len() - 1;
        log::debug!(
            "history: recorded snapshot {} of {}",
            self.index,
            self.snapshots.len()
        );
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    /// Step back and return the snapshot to restore, or None at the lower
    /// bound.
    pub fn undo(&mut self) -> Option<&[Annotation]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Step forward and return the snapshot to restore, or None at the upper
    /// bound.
    pub fn redo(&mut self) -> Option<&[Annotation]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }

    /// The snapshot the cursor currently points at.
    pub fn current(&self) -> &[Annotation] {
        &self.snapshots[self.index]
    }

    /// Number of retained snapshots.
    pub fn entry_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Cursor position within the stack.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Annotation, AnnotationId, Color, FreehandAnnotation};

    fn stroke(id: &str) -> Annotation {
        Annotation::Freehand(FreehandAnnotation {
            id: AnnotationId::new(id),
            color: Color::Red,
            stroke_width: 3.0,
            points: vec![0.0, 0.0, 1.0, 1.0],
        })
    }

    #[test]
    fn test_baseline_is_not_undoable() {
        let history = History::new(vec![stroke("a")]);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current().len(), 1);
    }

    #[test]
    fn test_undo_redo_bounds() {
        let mut history = History::new(Vec::new());
        history.push(vec![stroke("a")]);

        assert!(history.can_undo());
        assert_eq!(history.undo().map(<[Annotation]>::len), Some(0));
        assert!(history.undo().is_none());

        assert!(history.can_redo());
        assert_eq!(history.redo().map(<[Annotation]>::len), Some(1));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_push_discards_redo_branch() {
        let mut history = History::new(Vec::new());
        history.push(vec![stroke("a")]);
        history.push(vec![stroke("a"), stroke("b")]);
        history.undo();
        assert!(history.can_redo());

        history.push(vec![stroke("c")]);
        assert!(!history.can_redo());
        assert_eq!(history.current()[0].id().as_str(), "c");
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut history = History::with_limit(Vec::new(), 3);
        for i in 0..5 {
            history.push(vec![stroke(&format!("s{i}"))]);
        }

        assert_eq!(history.entry_count(), 3);
        assert_eq!(history.index(), 2);
        // Most recent states survive, including the newest.
        assert_eq!(history.current()[0].id().as_str(), "s4");
        history.undo();
        history.undo();
        assert!(!history.can_undo());
        assert_eq!(history.current()[0].id().as_str(), "s2");
    }

    #[test]
    fn test_default_cap_is_fifty() {
        let mut history = History::new(Vec::new());
        for i in 0..80 {
            history.push(vec![stroke(&format!("s{i}"))]);
        }
        assert_eq!(history.entry_count(), crate::constants::UNDO_HISTORY_SIZE);
        assert_eq!(history.current()[0].id().as_str(), "s79");
    }
}
