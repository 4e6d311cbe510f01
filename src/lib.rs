//! Redline - feedback-capture annotation engine.
//!
//! The shared model behind an in-page "annotate a screenshot or screen
//! recording and attach it to feedback" widget: freehand strokes and text
//! labels drawn over a captured image (or over the live viewport while a
//! recording runs), with selection, tool and style state, and linear
//! undo/redo over the annotation set.
//!
//! The engine is headless. Pixel capture, video encoding and widget chrome
//! are host concerns; this crate owns the annotation state and the rules for
//! mutating it:
//!
//! - [`model`] - annotation and attachment data types
//! - [`store`] - the annotation store (one per editing context) with its
//!   snapshot history
//! - [`input`] - pointer, keyboard and text-entry controllers that drive the
//!   store
//! - [`render`] - the composite-export boundary and a software renderer
//! - [`session`] - the feedback draft holding captured attachments

pub mod constants;
pub mod input;
pub mod model;
pub mod render;
pub mod session;
pub mod store;

pub use input::{DrawingController, KeyboardController, TextEditController};
pub use model::{Annotation, AnnotationId, AnnotationTool, Attachment, Color, FeedbackKind, FontSize};
pub use render::{CompositeError, CompositeRenderer, RasterRenderer};
pub use session::FeedbackSession;
pub use store::{AnnotationStore, EditorOptions, OverlayEditor, ScreenshotEditor};
