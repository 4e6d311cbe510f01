//! Feedback draft state: the attachment list and the editing lifecycle
//! around it.
//!
//! The session owns what the user has captured so far. Opening the annotation
//! editor for a screenshot hands out a fresh store seeded from the
//! attachment; saving hands the store's state back and refreshes the preview
//! composite. Nothing here survives past the session - attachments are
//! in-memory only.

use crate::model::{Attachment, FeedbackKind};
use crate::render::{CompositeRenderer, export_composite};
use crate::store::ScreenshotEditor;

/// A feedback draft being assembled in the widget.
#[derive(Debug, Clone, Default)]
pub struct FeedbackSession {
    open: bool,
    recording: bool,
    kind: FeedbackKind,
    note: String,
    attachments: Vec<Attachment>,
    preview_index: Option<usize>,
    editing_index: Option<usize>,
}

impl FeedbackSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Widget lifecycle
    // ------------------------------------------------------------------

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: FeedbackKind) {
        self.kind = kind;
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    // ------------------------------------------------------------------
    // Attachments
    // ------------------------------------------------------------------

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn attachment(&self, index: usize) -> Option<&Attachment> {
        self.attachments.get(index)
    }

    pub fn add_attachment(&mut self, attachment: Attachment) {
        self.attachments.push(attachment);
        log::debug!("attachment added ({} total)", self.attachments.len());
    }

    /// Remove an attachment, keeping the preview/editing indices coherent.
    /// Unknown indices are a no-op.
    pub fn remove_attachment(&mut self, index: usize) {
        if index >= self.attachments.len() {
            return;
        }
        self.attachments.remove(index);
        self.preview_index = adjust_index(self.preview_index, index);
        self.editing_index = adjust_index(self.editing_index, index);
    }

    pub fn preview_index(&self) -> Option<usize> {
        self.preview_index
    }

    /// Open or close the attachment preview. Unknown indices clear it.
    pub fn set_preview_index(&mut self, index: Option<usize>) {
        self.preview_index = index.filter(|i| *i < self.attachments.len());
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    // ------------------------------------------------------------------
    // Annotation editing round-trip
    // ------------------------------------------------------------------

    /// Open the annotation editor for a screenshot attachment.
    ///
    /// Returns None for recordings and unknown indices. The editor starts
    /// from the pristine original and the annotations persisted on the
    /// attachment, so re-editing never draws over an already-composited
    /// preview.
    pub fn open_editor(&mut self, index: usize) -> Option<ScreenshotEditor> {
        match self.attachments.get(index) {
            Some(Attachment::Screenshot {
                original,
                annotations,
                ..
            }) => {
                self.editing_index = Some(index);
                Some(ScreenshotEditor::open(original.clone(), annotations.clone()))
            }
            _ => None,
        }
    }

    /// Persist an editor's state back into the attachment being edited.
    ///
    /// The annotation list always round-trips; the preview is replaced only
    /// when the renderer produces a composite, otherwise the previous preview
    /// is kept. Ends the editing session either way.
    pub fn save_editor(&mut self, editor: &ScreenshotEditor, renderer: &dyn CompositeRenderer) {
        let Some(index) = self.editing_index.take() else {
            return;
        };
        let composite = export_composite(editor, renderer);
        let Some(Attachment::Screenshot {
            preview,
            original,
            annotations,
        }) = self.attachments.get_mut(index)
        else {
            return;
        };

        *annotations = editor.annotations().to_vec();
        if let Some(background) = editor.original_background() {
            *original = background.clone();
        }
        match composite {
            Some(image) => *preview = std::sync::Arc::new(image),
            None => log::info!("keeping previous preview for attachment {index}"),
        }
        log::info!(
            "saved {} annotations to attachment {index}",
            annotations.len()
        );
    }

    /// Abandon the current editing session without saving.
    pub fn close_editor(&mut self) {
        self.editing_index = None;
    }

    /// Discard the draft: note, kind, attachments and indices. The open and
    /// recording flags are owned by the surrounding UI and stay as they are.
    pub fn reset(&mut self) {
        self.kind = FeedbackKind::default();
        self.note.clear();
        self.attachments.clear();
        self.preview_index = None;
        self.editing_index = None;
        log::debug!("feedback draft reset");
    }
}

/// Shift a stored index after removing `removed` from the list.
fn adjust_index(current: Option<usize>, removed: usize) -> Option<usize> {
    match current {
        Some(i) if i == removed => None,
        Some(i) if i > removed => Some(i - 1),
        other => other,
    }
}
