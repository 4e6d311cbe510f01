//! Annotation data model: the shape variants and their style types.
//!
//! Annotations are pure data; all mutation rules live in the store. The
//! tagged-union layout (one struct per shape kind) anticipates more kinds
//! than the two implemented here.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identity
// ============================================================================

/// Unique identifier for an annotation.
///
/// Ids are the sole identity used for selection, update and deletion. The
/// owning store allocates them from a monotonic sequence, so an id is never
/// reused within a session, including across undo/redo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(String);

impl AnnotationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Style types
// ============================================================================

/// Annotation color, one of the fixed widget palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
    Black,
}

impl Color {
    /// All palette entries in toolbar order.
    pub fn all() -> &'static [Color] {
        &[
            Color::Red,
            Color::Orange,
            Color::Yellow,
            Color::Green,
            Color::Blue,
            Color::Purple,
            Color::White,
            Color::Black,
        ]
    }

    /// CSS-style hex value for this palette entry.
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#FF3B30",
            Color::Orange => "#FF9500",
            Color::Yellow => "#FFCC00",
            Color::Green => "#34C759",
            Color::Blue => "#007AFF",
            Color::Purple => "#5856D6",
            Color::White => "#FFFFFF",
            Color::Black => "#000000",
        }
    }

    /// RGBA bytes for raster rendering (fully opaque).
    pub fn to_rgba8(&self) -> [u8; 4] {
        match self {
            Color::Red => [255, 59, 48, 255],
            Color::Orange => [255, 149, 0, 255],
            Color::Yellow => [255, 204, 0, 255],
            Color::Green => [52, 199, 89, 255],
            Color::Blue => [0, 122, 255, 255],
            Color::Purple => [88, 86, 214, 255],
            Color::White => [255, 255, 255, 255],
            Color::Black => [0, 0, 0, 255],
        }
    }
}

/// Named font size for text annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Regular,
    Large,
}

impl FontSize {
    /// Pixel size this named size maps to.
    pub fn px(&self) -> f32 {
        match self {
            FontSize::Small => 18.0,
            FontSize::Regular => 28.0,
            FontSize::Large => 42.0,
        }
    }

    /// All sizes from smallest to largest.
    pub fn all() -> &'static [FontSize] {
        &[FontSize::Small, FontSize::Regular, FontSize::Large]
    }
}

// ============================================================================
// Tools
// ============================================================================

/// Annotation tools available in the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationTool {
    /// Selection tool for picking and moving existing annotations
    Select,
    /// Freehand stroke drawing
    #[default]
    Freehand,
    /// Text label placement
    Text,
}

impl AnnotationTool {
    /// Get the display name for this tool.
    pub fn name(&self) -> &'static str {
        match self {
            AnnotationTool::Select => "Select",
            AnnotationTool::Freehand => "Draw",
            AnnotationTool::Text => "Text",
        }
    }

    /// Get all available tools.
    pub fn all() -> &'static [AnnotationTool] {
        &[
            AnnotationTool::Select,
            AnnotationTool::Freehand,
            AnnotationTool::Text,
        ]
    }

    /// Check if this tool is a drawing tool (not Select).
    pub fn is_drawing_tool(&self) -> bool {
        !matches!(self, AnnotationTool::Select)
    }
}

// ============================================================================
// Annotation shapes
// ============================================================================

/// A freehand stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreehandAnnotation {
    /// Unique identifier.
    pub id: AnnotationId,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in content pixels.
    pub stroke_width: f32,
    /// Flattened x/y pairs in content coordinates: `[x1, y1, x2, y2, ...]`.
    /// Always even in length; a stroke is only persisted with two or more
    /// points.
    pub points: Vec<f32>,
}

impl FreehandAnnotation {
    /// Number of recorded coordinate pairs.
    pub fn point_count(&self) -> usize {
        self.points.len() / 2
    }
}

/// A placed text label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnnotation {
    /// Unique identifier.
    pub id: AnnotationId,
    /// Text color.
    pub color: Color,
    /// Top-left position in content coordinates (not screen pixels).
    pub x: f32,
    pub y: f32,
    /// Advisory box width; not enforced on render.
    pub width: f32,
    /// Advisory box height; not enforced on render.
    pub height: f32,
    /// Label content. Empty only transiently, while text entry is open.
    pub text: String,
    /// Pixel size derived from a named [`FontSize`].
    pub font_size: f32,
}

/// A single user-drawn mark or placed label.
///
/// More shape kinds (arrows, rectangles, ...) are anticipated but not yet
/// implemented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Annotation {
    Freehand(FreehandAnnotation),
    Text(TextAnnotation),
}

impl Annotation {
    /// This annotation's identity.
    pub fn id(&self) -> &AnnotationId {
        match self {
            Annotation::Freehand(a) => &a.id,
            Annotation::Text(a) => &a.id,
        }
    }

    /// Current color.
    pub fn color(&self) -> Color {
        match self {
            Annotation::Freehand(a) => a.color,
            Annotation::Text(a) => a.color,
        }
    }

    pub fn as_freehand(&self) -> Option<&FreehandAnnotation> {
        match self {
            Annotation::Freehand(a) => Some(a),
            Annotation::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextAnnotation> {
        match self {
            Annotation::Text(a) => Some(a),
            Annotation::Freehand(_) => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
