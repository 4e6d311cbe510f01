//! The annotation store: mutable state, contexts and undo/redo history for
//! one editing session.
//!
//! Two store instances exist in a running widget - one over a captured
//! screenshot, one over the live viewport during a recording - but they share
//! a single engine parameterized by an [`EditorContext`]. Everything that
//! differs between the two (background references, the annotation-mode gate,
//! id prefixes, Escape behavior) lives in the context.

mod context;
mod editor;
mod history;

#[cfg(test)]
mod tests;

pub use context::{EditorContext, OverlayContext, ScreenshotContext};
pub use editor::{AnnotationEdit, AnnotationStore, EditorOptions, OverlayEditor, ScreenshotEditor};
pub use history::History;
