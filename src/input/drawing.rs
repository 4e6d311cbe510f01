//! Pointer gesture handling: freehand drawing, text placement, selection.

use crate::constants::{MIN_FREEHAND_COORDS, TEXT_BOX_HEIGHT, TEXT_BOX_WIDTH};
use crate::model::{Annotation, AnnotationId, AnnotationTool, FreehandAnnotation, TextAnnotation};
use crate::store::{AnnotationStore, EditorContext};

/// Display-to-content coordinate mapping.
///
/// The screenshot editor renders the capture scaled to fit its container, so
/// pointer positions arrive in display space and are divided back by that
/// scale before being recorded. The overlay canvas always matches the
/// viewport and uses the identity mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    scale: f32,
}

impl CanvasTransform {
    /// 1:1 mapping.
    pub fn identity() -> Self {
        Self { scale: 1.0 }
    }

    /// Mapping for a canvas rendered at `scale` times the content's native
    /// size. Non-positive scales fall back to identity.
    pub fn with_scale(scale: f32) -> Self {
        if scale > 0.0 {
            Self { scale }
        } else {
            log::warn!("ignoring non-positive canvas scale {scale}");
            Self::identity()
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Map a display-space position into content coordinates.
    pub fn to_content(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.scale, y / self.scale)
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// What the pointer went down on, as resolved by the presentation layer's hit
/// testing.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    /// Empty canvas or the background capture itself.
    Background,
    /// An existing annotation's hit area.
    Annotation(AnnotationId),
}

#[derive(Debug, Clone, Default)]
enum Gesture {
    #[default]
    Idle,
    /// Freehand stroke in progress; points are content coordinates, not yet
    /// committed to the store.
    Drawing { points: Vec<f32> },
}

/// Per-gesture pointer state machine.
///
/// One instance per editing surface. In-progress stroke points live here
/// until pointer-up commits them; the store only ever sees finished strokes.
#[derive(Debug, Clone, Default)]
pub struct DrawingController {
    transform: CanvasTransform,
    gesture: Gesture,
}

impl DrawingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transform(transform: CanvasTransform) -> Self {
        Self {
            transform,
            gesture: Gesture::Idle,
        }
    }

    /// Update the display-to-content mapping (e.g. after a container resize).
    pub fn set_transform(&mut self, transform: CanvasTransform) {
        self.transform = transform;
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }

    /// Points of the stroke in progress, for live preview rendering. Empty
    /// while idle.
    pub fn current_points(&self) -> &[f32] {
        match &self.gesture {
            Gesture::Drawing { points } => points,
            Gesture::Idle => &[],
        }
    }

    /// Handle pointer-down at a display-space position.
    ///
    /// Ignored entirely while a text edit is open or the surface is inert;
    /// otherwise dispatches on the active tool.
    pub fn pointer_down<X: EditorContext>(
        &mut self,
        store: &mut AnnotationStore<X>,
        x: f32,
        y: f32,
        target: PointerTarget,
    ) {
        if !store.context().accepts_input() || store.editing_text_id().is_some() {
            return;
        }

        let (cx, cy) = self.transform.to_content(x, y);
        match store.active_tool() {
            AnnotationTool::Select => match target {
                PointerTarget::Background => store.clear_selection(),
                PointerTarget::Annotation(id) => store.set_selected_id(Some(id)),
            },
            AnnotationTool::Freehand => {
                self.gesture = Gesture::Drawing {
                    points: vec![cx, cy],
                };
            }
            AnnotationTool::Text => self.place_text(store, cx, cy, target),
        }
    }

    /// Handle pointer-move. Appends to the in-progress stroke; does nothing
    /// otherwise.
    pub fn pointer_move<X: EditorContext>(
        &mut self,
        store: &mut AnnotationStore<X>,
        x: f32,
        y: f32,
    ) {
        if !store.context().accepts_input() || store.active_tool() != AnnotationTool::Freehand {
            return;
        }
        if let Gesture::Drawing { points } = &mut self.gesture {
            let (cx, cy) = self.transform.to_content(x, y);
            points.push(cx);
            points.push(cy);
        }
    }

    /// Handle pointer-up, committing the stroke if it recorded at least two
    /// points. Always returns to idle, whether or not a commit happened.
    pub fn pointer_up<X: EditorContext>(&mut self, store: &mut AnnotationStore<X>) {
        let Gesture::Drawing { points } = std::mem::take(&mut self.gesture) else {
            return;
        };
        if !store.context().accepts_input() {
            return;
        }
        if points.len() < MIN_FREEHAND_COORDS {
            log::debug!("discarding freehand gesture with {} coordinates", points.len());
            return;
        }
        let id = store.allocate_id();
        store.add_annotation(Annotation::Freehand(FreehandAnnotation {
            id,
            color: store.active_color(),
            stroke_width: store.stroke_width(),
            points,
        }));
    }

    /// Text tool pointer-down: re-edit an existing label, or create a new
    /// empty one at the pointer and open text entry on it.
    fn place_text<X: EditorContext>(
        &mut self,
        store: &mut AnnotationStore<X>,
        cx: f32,
        cy: f32,
        target: PointerTarget,
    ) {
        if let PointerTarget::Annotation(id) = &target {
            if store.get(id).is_some_and(|a| a.as_text().is_some()) {
                store.set_selected_id(Some(id.clone()));
                store.set_editing_text_id(Some(id.clone()));
                return;
            }
        }

        let id = store.allocate_id();
        store.add_annotation(Annotation::Text(TextAnnotation {
            id: id.clone(),
            color: store.active_color(),
            x: cx,
            y: cy,
            width: TEXT_BOX_WIDTH,
            height: TEXT_BOX_HEIGHT,
            text: String::new(),
            font_size: store.font_size().px(),
        }));
        store.set_selected_id(Some(id.clone()));
        store.set_editing_text_id(Some(id));
    }
}
