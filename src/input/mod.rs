//! Input controllers: translate pointer, keyboard and text-entry events into
//! store operations.
//!
//! Controllers hold no reference to a store; the owning editor passes its
//! store into each call. That keeps one controller usable against either
//! editing context and keeps ownership with the editor.

mod drawing;
mod keyboard;
mod text_edit;

pub use drawing::{CanvasTransform, DrawingController, PointerTarget};
pub use keyboard::{Focus, Key, KeyBindings, KeyOutcome, KeyboardController, Modifiers};
pub use text_edit::TextEditController;
