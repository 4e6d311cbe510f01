//! Text entry protocol: open an editable field over a label, then confirm or
//! cancel.
//!
//! The buffer mirrors the host's input field. Empty labels are never
//! persisted: confirming or cancelling with nothing typed abandons the
//! annotation instead of keeping an empty box around.

use crate::model::{Annotation, AnnotationId};
use crate::store::{AnnotationEdit, AnnotationStore, EditorContext};

use super::keyboard::Key;

/// Drives the text-entry lifecycle for one editing surface.
#[derive(Debug, Clone, Default)]
pub struct TextEditController {
    buffer: String,
}

impl TextEditController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open text entry on an annotation, seeding the buffer with its current
    /// text. Returns false (and does nothing) if the id is not a text label.
    pub fn begin<X: EditorContext>(
        &mut self,
        store: &mut AnnotationStore<X>,
        id: &AnnotationId,
    ) -> bool {
        let Some(label) = store.get(id).and_then(Annotation::as_text) else {
            return false;
        };
        self.buffer = label.text.clone();
        store.set_editing_text_id(Some(id.clone()));
        true
    }

    /// Current input buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer as the host's input field changes.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Confirm the edit.
    ///
    /// Non-empty trimmed input replaces the label's text as one undoable
    /// step; whitespace-only input deletes the annotation through the
    /// standard remove path. Exits text-entry mode either way.
    pub fn confirm<X: EditorContext>(&mut self, store: &mut AnnotationStore<X>) {
        let Some(id) = store.editing_text_id().cloned() else {
            return;
        };
        let trimmed = self.buffer.trim();
        if trimmed.is_empty() {
            store.remove_annotation(&id);
        } else if store.update_annotation(&id, AnnotationEdit::Text(trimmed.to_string())) {
            store.push_history();
        }
        store.set_editing_text_id(None);
        self.buffer.clear();
    }

    /// Cancel the edit.
    ///
    /// A label whose stored text is still empty (a never-committed new
    /// annotation) is deleted; otherwise the existing text stays unchanged.
    /// Exits text-entry mode either way.
    pub fn cancel<X: EditorContext>(&mut self, store: &mut AnnotationStore<X>) {
        let Some(id) = store.editing_text_id().cloned() else {
            return;
        };
        let abandoned = store
            .get(&id)
            .and_then(Annotation::as_text)
            .is_some_and(|label| label.text.trim().is_empty());
        if abandoned {
            store.remove_annotation(&id);
        }
        store.set_editing_text_id(None);
        self.buffer.clear();
    }

    /// Enter confirms, Escape cancels; anything else is the host input
    /// field's business. Returns whether the key was consumed.
    pub fn handle_key<X: EditorContext>(
        &mut self,
        store: &mut AnnotationStore<X>,
        key: Key,
    ) -> bool {
        match key {
            Key::Enter => {
                self.confirm(store);
                true
            }
            Key::Escape => {
                self.cancel(store);
                true
            }
            _ => false,
        }
    }
}
