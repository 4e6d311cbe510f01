//! Tests for individual store operations and their contracts.

use super::{label, open_editor, stroke};
use crate::model::{AnnotationId, AnnotationTool, Color, FontSize};
use crate::store::{AnnotationEdit, OverlayEditor};

#[test]
fn test_history_tracks_every_discrete_mutation() {
    let mut editor = open_editor(Vec::new());

    editor.add_annotation(stroke("ann_a"));
    assert_eq!(editor.history().current(), editor.annotations());

    editor.add_annotation(label("ann_b", "note"));
    assert_eq!(editor.history().current(), editor.annotations());

    editor.remove_annotation(&AnnotationId::new("ann_a"));
    assert_eq!(editor.history().current(), editor.annotations());

    // The cursor never runs past the stack.
    assert!(editor.history().entry_count() - 1 >= editor.history().index());
}

#[test]
fn test_remove_unknown_id_is_a_noop() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));
    let entries = editor.history().entry_count();

    editor.remove_annotation(&AnnotationId::new("nope"));

    assert_eq!(editor.len(), 1);
    assert_eq!(editor.history().entry_count(), entries);
}

#[test]
fn test_remove_selected_clears_selection() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));

    editor.remove_annotation(&AnnotationId::new("ann_a"));
    assert!(editor.selected_id().is_none());
}

#[test]
fn test_update_unknown_id_returns_false() {
    let mut editor = open_editor(Vec::new());
    assert!(!editor.update_annotation(&AnnotationId::new("nope"), AnnotationEdit::Color(Color::Blue)));
}

#[test]
fn test_update_does_not_push_history() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(label("ann_a", "hi"));
    let entries = editor.history().entry_count();

    assert!(editor.update_annotation(
        &AnnotationId::new("ann_a"),
        AnnotationEdit::MoveTo { x: 50.0, y: 60.0 }
    ));
    assert_eq!(editor.history().entry_count(), entries);
}

#[test]
fn test_select_unknown_id_is_a_noop() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));

    editor.set_selected_id(Some(AnnotationId::new("ghost")));
    assert_eq!(editor.selected_id(), Some(&AnnotationId::new("ann_a")));
}

#[test]
fn test_drawing_tools_clear_selection() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));

    editor.set_active_tool(AnnotationTool::Select);
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));
    editor.set_active_tool(AnnotationTool::Freehand);
    assert!(editor.selected_id().is_none());

    editor.set_active_tool(AnnotationTool::Select);
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));
    editor.set_active_tool(AnnotationTool::Text);
    assert!(editor.selected_id().is_none());

    // Switching to Select keeps the selection.
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));
    editor.set_active_tool(AnnotationTool::Select);
    assert_eq!(editor.selected_id(), Some(&AnnotationId::new("ann_a")));
}

#[test]
fn test_stroke_width_restyles_selected_freehand() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));
    editor.set_active_tool(AnnotationTool::Select);
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));
    let entries = editor.history().entry_count();

    editor.set_stroke_width(8.0);

    let id = AnnotationId::new("ann_a");
    let updated = editor.get(&id).and_then(|a| a.as_freehand()).expect("freehand");
    assert_eq!(updated.stroke_width, 8.0);
    assert_eq!(editor.history().entry_count(), entries + 1);
}

#[test]
fn test_stroke_width_ignores_selected_text() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(label("ann_a", "note"));
    editor.set_active_tool(AnnotationTool::Select);
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));
    let entries = editor.history().entry_count();

    editor.set_stroke_width(8.0);

    // The default changed, the text label did not, and nothing was recorded.
    assert_eq!(editor.stroke_width(), 8.0);
    let id = AnnotationId::new("ann_a");
    let unchanged = editor.get(&id).and_then(|a| a.as_text()).expect("text");
    assert_eq!(unchanged.font_size, 28.0);
    assert_eq!(editor.history().entry_count(), entries);
}

#[test]
fn test_color_restyles_selected_annotation_of_any_kind() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(label("ann_a", "note"));
    editor.set_active_tool(AnnotationTool::Select);
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));
    let entries = editor.history().entry_count();

    editor.set_active_color(Color::Green);

    let id = AnnotationId::new("ann_a");
    assert_eq!(editor.get(&id).map(|a| a.color()), Some(Color::Green));
    assert_eq!(editor.history().entry_count(), entries + 1);
}

#[test]
fn test_font_size_restyles_selected_text() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(label("ann_a", "note"));
    editor.set_active_tool(AnnotationTool::Select);
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));

    editor.set_font_size(FontSize::Large);

    let id = AnnotationId::new("ann_a");
    let updated = editor.get(&id).and_then(|a| a.as_text()).expect("text");
    assert_eq!(updated.font_size, FontSize::Large.px());
}

#[test]
fn test_undo_and_redo_clear_selection() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));
    editor.set_active_tool(AnnotationTool::Select);
    editor.set_selected_id(Some(AnnotationId::new("ann_a")));

    editor.undo();
    assert!(editor.selected_id().is_none());

    editor.set_active_tool(AnnotationTool::Select);
    editor.redo();
    assert!(editor.selected_id().is_none());
}

#[test]
fn test_finish_drag_commits_once() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(label("ann_a", "note"));
    let entries = editor.history().entry_count();
    let id = AnnotationId::new("ann_a");

    // Mid-drag positions are plain updates...
    editor.update_annotation(&id, AnnotationEdit::MoveTo { x: 20.0, y: 20.0 });
    editor.update_annotation(&id, AnnotationEdit::MoveTo { x: 40.0, y: 25.0 });
    assert_eq!(editor.history().entry_count(), entries);

    // ...and only the drop point is recorded.
    editor.finish_drag(&id, 42.0, 24.0);
    assert_eq!(editor.history().entry_count(), entries + 1);
    let moved = editor.get(&id).and_then(|a| a.as_text()).expect("text");
    assert_eq!((moved.x, moved.y), (42.0, 24.0));
}

#[test]
fn test_open_with_existing_annotations_is_the_baseline() {
    let editor = open_editor(vec![stroke("ann_0"), label("ann_1", "note")]);

    assert_eq!(editor.len(), 2);
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn test_open_seeds_id_sequence_past_existing_ids() {
    let mut editor = open_editor(vec![stroke("ann_0"), stroke("ann_7")]);
    assert_eq!(editor.allocate_id().as_str(), "ann_8");
}

#[test]
fn test_ids_are_not_reused_after_undo() {
    let mut editor = open_editor(Vec::new());
    let first = editor.allocate_id();
    editor.add_annotation(stroke(first.as_str()));
    editor.undo();

    let second = editor.allocate_id();
    assert_ne!(first, second);
}

#[test]
fn test_annotations_json_round_trip() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_0"));
    editor.add_annotation(label("ann_1", "note"));

    let json = editor.annotations_to_json().expect("export");
    let parsed = crate::store::ScreenshotEditor::annotations_from_json(&json).expect("import");
    assert_eq!(parsed, editor.annotations());
}

// ----------------------------------------------------------------------
// Overlay-specific behavior
// ----------------------------------------------------------------------

#[test]
fn test_overlay_starts_empty_and_gated() {
    let overlay = OverlayEditor::new();
    assert!(overlay.is_empty());
    assert!(!overlay.is_annotation_mode());
    assert!(!overlay.can_undo());
}

#[test]
fn test_overlay_clear_all_is_one_undoable_step() {
    let mut overlay = OverlayEditor::new();
    overlay.add_annotation(stroke("vann_0"));
    overlay.add_annotation(stroke("vann_1"));
    let entries = overlay.history().entry_count();

    overlay.clear_all_annotations();
    assert!(overlay.is_empty());
    assert!(overlay.selected_id().is_none());
    assert_eq!(overlay.history().entry_count(), entries + 1);

    overlay.undo();
    assert_eq!(overlay.len(), 2);
}

#[test]
fn test_overlay_id_prefix() {
    let mut overlay = OverlayEditor::new();
    assert_eq!(overlay.allocate_id().as_str(), "vann_0");
}

#[test]
fn test_overlay_reset_discards_everything() {
    let mut overlay = OverlayEditor::new();
    overlay.set_annotation_mode(true);
    overlay.add_annotation(stroke("vann_0"));

    overlay.reset();
    assert!(overlay.is_empty());
    assert!(!overlay.is_annotation_mode());
    assert!(!overlay.can_undo());
}
