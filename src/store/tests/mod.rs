//! Unit tests for the annotation store engine.
//!
//! These cover the store contracts (history coupling, selection rules,
//! restyle semantics) and the end-to-end editing scenarios the widget relies
//! on.

mod editor_tests;
mod scenario_tests;

use std::sync::Arc;

use image::RgbaImage;

use crate::model::{Annotation, AnnotationId, Color, FreehandAnnotation, TextAnnotation};
use crate::store::ScreenshotEditor;

/// A freehand stroke with a fixed id, for seeding stores directly.
pub(crate) fn stroke(id: &str) -> Annotation {
    Annotation::Freehand(FreehandAnnotation {
        id: AnnotationId::new(id),
        color: Color::Red,
        stroke_width: 3.0,
        points: vec![0.0, 0.0, 10.0, 10.0],
    })
}

/// A text label with a fixed id and content.
pub(crate) fn label(id: &str, text: &str) -> Annotation {
    Annotation::Text(TextAnnotation {
        id: AnnotationId::new(id),
        color: Color::Blue,
        x: 5.0,
        y: 5.0,
        width: 200.0,
        height: 30.0,
        text: text.to_string(),
        font_size: 28.0,
    })
}

/// An editor over a small blank capture.
pub(crate) fn open_editor(existing: Vec<Annotation>) -> ScreenshotEditor {
    ScreenshotEditor::open(Arc::new(RgbaImage::new(16, 16)), existing)
}
