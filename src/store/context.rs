//! Editor contexts: what distinguishes the screenshot editor from the live
//! recording overlay.

use std::sync::Arc;

use image::RgbaImage;

/// Context-specific extension state carried by an annotation store.
///
/// The annotation/history logic is identical for both editing surfaces; a
/// context holds what differs and hooks the few behaviors that diverge.
pub trait EditorContext {
    /// Prefix for annotation ids allocated in this context.
    fn id_prefix(&self) -> &'static str;

    /// Whether the editor currently accepts pointer/keyboard input.
    fn accepts_input(&self) -> bool {
        true
    }

    /// Context hook for the Escape shortcut, invoked after the tool resets
    /// to Select.
    fn on_escape(&mut self) {}
}

/// Screenshot editor context: annotations sit on a captured image.
#[derive(Debug, Clone, Default)]
pub struct ScreenshotContext {
    /// Working composite reference shown behind the annotations.
    pub working: Option<Arc<RgbaImage>>,
    /// Pristine capture; never mutated by annotation operations.
    pub original: Option<Arc<RgbaImage>>,
}

impl ScreenshotContext {
    pub fn new(background: Arc<RgbaImage>) -> Self {
        Self {
            working: Some(background.clone()),
            original: Some(background),
        }
    }
}

impl EditorContext for ScreenshotContext {
    fn id_prefix(&self) -> &'static str {
        "ann"
    }
}

/// Recording overlay context: annotations sit on the live viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayContext {
    /// While false the overlay and its input handling are inert.
    pub annotation_mode: bool,
}

impl EditorContext for OverlayContext {
    fn id_prefix(&self) -> &'static str {
        "vann"
    }

    fn accepts_input(&self) -> bool {
        self.annotation_mode
    }

    fn on_escape(&mut self) {
        // Escape leaves annotation mode entirely, handing input back to the
        // page beneath the overlay.
        self.annotation_mode = false;
    }
}
