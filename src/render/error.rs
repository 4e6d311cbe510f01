//! Error types for composite rendering and encoding.

use thiserror::Error;

/// Errors that can occur while producing or encoding a composite.
///
/// These never surface to the end user as hard failures; the save path
/// falls back to persisting annotation data without an updated preview.
#[derive(Error, Debug)]
pub enum CompositeError {
    /// The editor has no background capture to composite onto
    #[error("no background image to composite onto")]
    MissingBackground,

    /// The background's dimensions cannot back a raster surface
    #[error("invalid composite surface: {width}x{height}")]
    InvalidSurface {
        /// Surface width in pixels
        width: u32,
        /// Surface height in pixels
        height: u32,
    },

    /// Encoding the composite failed
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}
