//! Composite export: background capture + annotations -> final raster.
//!
//! The engine itself never rasterizes anything; it asks a
//! [`CompositeRenderer`] for the composite and degrades gracefully when none
//! can be produced. [`RasterRenderer`] is a self-contained software
//! implementation for hosts without their own drawing surface.

mod error;
mod raster;

pub use error::CompositeError;
pub use raster::RasterRenderer;

use image::RgbaImage;

use crate::model::Annotation;
use crate::store::ScreenshotEditor;

/// Renders the final composite for a screenshot attachment.
///
/// Implementations draw the annotations in list order (later entries on top)
/// over the background at its native resolution.
pub trait CompositeRenderer {
    fn render(
        &self,
        background: &RgbaImage,
        annotations: &[Annotation],
    ) -> Result<RgbaImage, CompositeError>;
}

/// Request a composite for an editor's current state.
///
/// Returns None when the editor has no background or the renderer fails;
/// callers then persist the annotation data without an updated preview.
pub fn export_composite(
    editor: &ScreenshotEditor,
    renderer: &dyn CompositeRenderer,
) -> Option<RgbaImage> {
    let Some(background) = editor.original_background() else {
        log::warn!("composite requested without a background image");
        return None;
    };
    match renderer.render(background, editor.annotations()) {
        Ok(composite) => Some(composite),
        Err(err) => {
            log::warn!("composite rendering failed: {err}");
            None
        }
    }
}

/// Encode a composite as PNG bytes for the attachment record.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CompositeError> {
    let mut bytes = Vec::new();
    image.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )?;
    Ok(bytes)
}
