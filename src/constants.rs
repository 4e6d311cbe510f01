//! Global constants for the annotation engine.

/// Maximum number of history snapshots retained per editor.
pub const UNDO_HISTORY_SIZE: usize = 50;

/// Default stroke width for new freehand annotations, in content pixels.
pub const DEFAULT_STROKE_WIDTH: f32 = 3.0;

/// Stroke widths offered by the toolbar.
pub const STROKE_WIDTHS: [f32; 4] = [2.0, 4.0, 6.0, 8.0];

/// Advisory width of a newly placed text box, in content pixels.
pub const TEXT_BOX_WIDTH: f32 = 200.0;

/// Advisory height of a newly placed text box, in content pixels.
pub const TEXT_BOX_HEIGHT: f32 = 30.0;

/// Minimum coordinate count for a freehand stroke to be kept (two x/y pairs).
pub const MIN_FREEHAND_COORDS: usize = 4;
