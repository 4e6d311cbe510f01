//! The annotation store engine: the single mutable owner of an editing
//! session's annotation set, selection, tool state and history.

use std::sync::Arc;

use image::RgbaImage;

use crate::constants::{DEFAULT_STROKE_WIDTH, UNDO_HISTORY_SIZE};
use crate::model::{Annotation, AnnotationId, AnnotationTool, Color, FontSize};
use crate::store::context::{EditorContext, OverlayContext, ScreenshotContext};
use crate::store::history::History;

/// Store over a captured screenshot.
pub type ScreenshotEditor = AnnotationStore<ScreenshotContext>;

/// Store over the live viewport during a screen recording.
pub type OverlayEditor = AnnotationStore<OverlayContext>;

// ============================================================================
// Options
// ============================================================================

/// Tunables for a store instance.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    /// Maximum number of history snapshots to retain.
    pub history_limit: usize,
    /// Tool active when the editor opens.
    pub tool: AnnotationTool,
    /// Default color for new annotations.
    pub color: Color,
    /// Default stroke width for new freehand annotations.
    pub stroke_width: f32,
    /// Default named size for new text annotations.
    pub font_size: FontSize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: UNDO_HISTORY_SIZE,
            tool: AnnotationTool::Freehand,
            color: Color::Red,
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: FontSize::Regular,
        }
    }
}

// ============================================================================
// Typed field edits
// ============================================================================

/// A typed field update applied through [`AnnotationStore::update_annotation`].
///
/// Edits that do not apply to the target's shape kind (stroke width on a text
/// label, font size or position on a stroke) are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationEdit {
    /// Recolor the annotation (applies to every kind).
    Color(Color),
    /// Change a freehand stroke's width.
    StrokeWidth(f32),
    /// Change a text label's pixel font size.
    FontSize(f32),
    /// Replace a text label's content.
    Text(String),
    /// Move a text label to a new position.
    MoveTo { x: f32, y: f32 },
}

/// Apply an edit in place. Returns whether the edit applied to this kind.
fn apply_edit(annotation: &mut Annotation, edit: AnnotationEdit) -> bool {
    match (annotation, edit) {
        (Annotation::Freehand(a), AnnotationEdit::Color(color)) => {
            a.color = color;
            true
        }
        (Annotation::Text(a), AnnotationEdit::Color(color)) => {
            a.color = color;
            true
        }
        (Annotation::Freehand(a), AnnotationEdit::StrokeWidth(width)) => {
            a.stroke_width = width;
            true
        }
        (Annotation::Text(a), AnnotationEdit::FontSize(px)) => {
            a.font_size = px;
            true
        }
        (Annotation::Text(a), AnnotationEdit::Text(text)) => {
            a.text = text;
            true
        }
        (Annotation::Text(a), AnnotationEdit::MoveTo { x, y }) => {
            a.x = x;
            a.y = y;
            true
        }
        _ => false,
    }
}

// ============================================================================
// Store
// ============================================================================

/// Owns the mutable annotation set, selection, active tool/style settings and
/// the undo/redo history for one editing surface.
///
/// All operations are synchronous; the store is driven from a single event
/// loop and needs no locking. Operations referencing an unknown annotation id
/// are silent no-ops.
#[derive(Debug, Clone)]
pub struct AnnotationStore<X: EditorContext> {
    annotations: Vec<Annotation>,
    selected_id: Option<AnnotationId>,
    editing_text_id: Option<AnnotationId>,
    active_tool: AnnotationTool,
    active_color: Color,
    stroke_width: f32,
    font_size: FontSize,
    history: History,
    next_seq: u64,
    context: X,
}

impl<X: EditorContext + Default> AnnotationStore<X> {
    pub fn new() -> Self {
        Self::with_context(X::default())
    }
}

impl<X: EditorContext + Default> Default for AnnotationStore<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: EditorContext> AnnotationStore<X> {
    /// Create an empty store with the given context.
    pub fn with_context(context: X) -> Self {
        Self::with_options(context, EditorOptions::default())
    }

    /// Create an empty store with explicit options.
    pub fn with_options(context: X, options: EditorOptions) -> Self {
        Self {
            annotations: Vec::new(),
            selected_id: None,
            editing_text_id: None,
            active_tool: options.tool,
            active_color: options.color,
            stroke_width: options.stroke_width,
            font_size: options.font_size,
            history: History::with_limit(Vec::new(), options.history_limit),
            next_seq: 0,
            context,
        }
    }

    // ------------------------------------------------------------------
    // Identity
    // ------------------------------------------------------------------

    /// Allocate a fresh annotation id.
    ///
    /// The sequence is monotonic and never rolls back, so ids stay unique
    /// across undo/redo within the session.
    pub fn allocate_id(&mut self) -> AnnotationId {
        let id = AnnotationId::new(format!("{}_{}", self.context.id_prefix(), self.next_seq));
        self.next_seq += 1;
        id
    }

    /// Advance the id sequence past any `prefix_N` ids already present, so
    /// re-opening a previously annotated attachment cannot collide.
    fn seed_sequence(&mut self) {
        let prefix = self.context.id_prefix();
        for annotation in &self.annotations {
            let Some(rest) = annotation
                .id()
                .as_str()
                .strip_prefix(prefix)
                .and_then(|r| r.strip_prefix('_'))
            else {
                continue;
            };
            if let Ok(n) = rest.parse::<u64>() {
                self.next_seq = self.next_seq.max(n + 1);
            }
        }
    }

    // ------------------------------------------------------------------
    // Annotation set
    // ------------------------------------------------------------------

    /// Current annotations in z-order (later entries draw on top).
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Look up an annotation by id.
    pub fn get(&self, id: &AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Append an annotation and record a history snapshot.
    ///
    /// Ids are assumed unique; adding a duplicate id is a caller error and
    /// leaves identity-based operations ambiguous.
    pub fn add_annotation(&mut self, annotation: Annotation) {
        log::debug!("add annotation {}", annotation.id());
        self.annotations.push(annotation);
        self.push_history();
    }

    /// Apply a field edit to the matching annotation. Returns whether the
    /// edit applied.
    ///
    /// Unknown ids and kind-mismatched edits are no-ops. This never pushes
    /// history: in-progress gesture updates are not individually undoable,
    /// only the committed end state is.
    pub fn update_annotation(&mut self, id: &AnnotationId, edit: AnnotationEdit) -> bool {
        match self.annotations.iter_mut().find(|a| a.id() == id) {
            Some(annotation) => apply_edit(annotation, edit),
            None => false,
        }
    }

    /// Delete the matching annotation, clearing selection if it was selected,
    /// and record a history snapshot. Unknown ids are a no-op.
    pub fn remove_annotation(&mut self, id: &AnnotationId) {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id() != id);
        if self.annotations.len() == before {
            return;
        }
        log::debug!("remove annotation {id}");
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        self.push_history();
    }

    // ------------------------------------------------------------------
    // Selection & text-entry mode
    // ------------------------------------------------------------------

    /// Select an annotation (or clear with None). Selection is not undoable.
    /// Selecting an unknown id is a no-op.
    pub fn set_selected_id(&mut self, id: Option<AnnotationId>) {
        if let Some(id) = &id {
            if self.get(id).is_none() {
                return;
            }
        }
        self.selected_id = id;
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn selected_id(&self) -> Option<&AnnotationId> {
        self.selected_id.as_ref()
    }

    /// Enter or exit text-entry mode. While set, canvas pointer input and
    /// keyboard shortcuts are suppressed. Unknown ids are a no-op.
    pub fn set_editing_text_id(&mut self, id: Option<AnnotationId>) {
        if let Some(id) = &id {
            if self.get(id).is_none() {
                return;
            }
        }
        self.editing_text_id = id;
    }

    pub fn editing_text_id(&self) -> Option<&AnnotationId> {
        self.editing_text_id.as_ref()
    }

    // ------------------------------------------------------------------
    // Tools & style defaults
    // ------------------------------------------------------------------

    /// Switch the active tool. Drawing tools and selection are mutually
    /// exclusive visual states, so any non-Select tool clears the selection.
    pub fn set_active_tool(&mut self, tool: AnnotationTool) {
        self.active_tool = tool;
        if tool != AnnotationTool::Select {
            self.selected_id = None;
        }
    }

    pub fn active_tool(&self) -> AnnotationTool {
        self.active_tool
    }

    /// Set the default color for new annotations; also restyles the selected
    /// annotation (any kind) and records that as one undoable step.
    pub fn set_active_color(&mut self, color: Color) {
        self.active_color = color;
        if let Some(id) = self.selected_id.clone() {
            if self.update_annotation(&id, AnnotationEdit::Color(color)) {
                self.push_history();
            }
        }
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Set the default stroke width; also restyles the selected annotation if
    /// it is a freehand stroke, recording one undoable step.
    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
        if let Some(id) = self.selected_id.clone() {
            if self.update_annotation(&id, AnnotationEdit::StrokeWidth(width)) {
                self.push_history();
            }
        }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Set the default font size; also restyles the selected annotation if it
    /// is a text label, recording one undoable step.
    pub fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
        if let Some(id) = self.selected_id.clone() {
            if self.update_annotation(&id, AnnotationEdit::FontSize(size.px())) {
                self.push_history();
            }
        }
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    // ------------------------------------------------------------------
    // Gesture commits
    // ------------------------------------------------------------------

    /// Commit a completed drag of a text annotation.
    ///
    /// In-progress drag positions go through [`Self::update_annotation`]
    /// without history; the final position is the single undoable step.
    pub fn finish_drag(&mut self, id: &AnnotationId, x: f32, y: f32) {
        if self.update_annotation(id, AnnotationEdit::MoveTo { x, y }) {
            self.push_history();
        }
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Record the current annotation list as a new history snapshot.
    ///
    /// Called automatically by every discrete mutation (add, remove, restyle,
    /// confirmed text edit); callers invoke it directly only to commit a
    /// continuous gesture.
    pub fn push_history(&mut self) {
        self.history.push(self.annotations.clone());
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restore the previous snapshot and clear selection. No-op at the lower
    /// bound.
    pub fn undo(&mut self) {
        let Some(snapshot) = self.history.undo() else {
            return;
        };
        self.annotations = snapshot.to_vec();
        self.selected_id = None;
        log::debug!("undo -> {} annotations", self.annotations.len());
    }

    /// Restore the next snapshot and clear selection. No-op at the upper
    /// bound.
    pub fn redo(&mut self) {
        let Some(snapshot) = self.history.redo() else {
            return;
        };
        self.annotations = snapshot.to_vec();
        self.selected_id = None;
        log::debug!("redo -> {} annotations", self.annotations.len());
    }

    /// Read access to the snapshot stack.
    pub fn history(&self) -> &History {
        &self.history
    }

    // ------------------------------------------------------------------
    // Context & persistence
    // ------------------------------------------------------------------

    pub fn context(&self) -> &X {
        &self.context
    }

    pub(crate) fn context_mut(&mut self) -> &mut X {
        &mut self.context
    }

    /// Export the current annotation list as JSON, the form persisted back to
    /// the attachment record on save.
    pub fn annotations_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.annotations)
    }

    /// Parse a previously exported annotation list.
    pub fn annotations_from_json(json: &str) -> Result<Vec<Annotation>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Screenshot editor
// ============================================================================

impl AnnotationStore<ScreenshotContext> {
    /// Open an editor over a captured image, optionally re-editing the
    /// annotations persisted on the attachment.
    ///
    /// The existing list becomes the history baseline: it is the state undo
    /// bottoms out at, not an undoable step itself.
    pub fn open(background: Arc<RgbaImage>, existing: Vec<Annotation>) -> Self {
        let mut store = Self::with_context(ScreenshotContext::new(background));
        store.history = History::with_limit(existing.clone(), UNDO_HISTORY_SIZE);
        store.annotations = existing;
        store.seed_sequence();
        log::info!("opened screenshot editor with {} annotations", store.len());
        store
    }

    /// The pristine capture; annotation operations never mutate it.
    pub fn original_background(&self) -> Option<&Arc<RgbaImage>> {
        self.context.original.as_ref()
    }

    /// The working composite reference shown behind the annotations.
    pub fn working_background(&self) -> Option<&Arc<RgbaImage>> {
        self.context.working.as_ref()
    }
}

// ============================================================================
// Recording overlay
// ============================================================================

impl AnnotationStore<OverlayContext> {
    pub fn is_annotation_mode(&self) -> bool {
        self.context.annotation_mode
    }

    /// Gate the overlay. While disabled, the overlay and its input handling
    /// are inert and events pass through to the page beneath.
    pub fn set_annotation_mode(&mut self, enabled: bool) {
        self.context.annotation_mode = enabled;
    }

    pub fn toggle_annotation_mode(&mut self) {
        self.context.annotation_mode = !self.context.annotation_mode;
    }

    /// Wipe every annotation in a single undoable step (the toolbar's
    /// clear-all action).
    pub fn clear_all_annotations(&mut self) {
        log::debug!("clear all ({} annotations)", self.annotations.len());
        self.annotations.clear();
        self.selected_id = None;
        self.push_history();
    }

    /// Discard all overlay state when the recording ends.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
