//! Attachment records captured into a feedback draft.

use std::sync::Arc;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::model::Annotation;

/// What kind of feedback the draft files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    #[default]
    Bug,
    Improvement,
}

/// A captured artifact attached to the feedback draft.
///
/// Attachments stay client-side for the duration of the session; the
/// annotation list is the part that round-trips through the editor when a
/// screenshot is re-opened for markup.
#[derive(Debug, Clone)]
pub enum Attachment {
    /// Still capture with its annotation state.
    Screenshot {
        /// Latest composite, shown in the attachment gallery.
        preview: Arc<RgbaImage>,
        /// Pristine capture; annotation operations never mutate it, and
        /// re-editing always starts from it.
        original: Arc<RgbaImage>,
        /// Persisted annotations for re-editing.
        annotations: Vec<Annotation>,
    },
    /// Encoded screen recording. The bytes are opaque to the engine; overlay
    /// annotations are burned into the stream by the capture pipeline.
    Recording {
        data: Arc<Vec<u8>>,
    },
}

impl Attachment {
    /// A fresh screenshot attachment with no annotations yet.
    pub fn screenshot(capture: Arc<RgbaImage>) -> Self {
        Attachment::Screenshot {
            preview: capture.clone(),
            original: capture,
            annotations: Vec::new(),
        }
    }

    /// A finished recording attachment.
    pub fn recording(data: Vec<u8>) -> Self {
        Attachment::Recording {
            data: Arc::new(data),
        }
    }

    pub fn is_screenshot(&self) -> bool {
        matches!(self, Attachment::Screenshot { .. })
    }
}
