//! End-to-end editing scenarios across multiple store operations.

use super::{label, open_editor, stroke};
use crate::store::{EditorOptions, OverlayEditor};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn ids(editor_annotations: &[crate::model::Annotation]) -> Vec<&str> {
    editor_annotations.iter().map(|a| a.id().as_str()).collect()
}

#[test]
fn test_add_add_undo_undo_redo_redo() {
    init_logging();
    let mut editor = open_editor(Vec::new());

    editor.add_annotation(stroke("ann_a"));
    editor.add_annotation(label("ann_b", "note"));
    assert_eq!(ids(editor.annotations()), ["ann_a", "ann_b"]);

    editor.undo();
    assert_eq!(ids(editor.annotations()), ["ann_a"]);

    editor.undo();
    assert!(editor.is_empty());

    editor.redo();
    editor.redo();
    assert_eq!(ids(editor.annotations()), ["ann_a", "ann_b"]);
}

#[test]
fn test_undo_redo_is_an_inverse_pair() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));
    editor.add_annotation(stroke("ann_b"));
    let before = editor.annotations().to_vec();

    editor.undo();
    editor.redo();
    assert_eq!(editor.annotations(), before);
}

#[test]
fn test_mutation_after_undo_discards_redo_branch() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));
    editor.add_annotation(stroke("ann_b"));

    editor.undo();
    assert!(editor.can_redo());

    editor.add_annotation(stroke("ann_c"));
    assert!(!editor.can_redo());
    assert_eq!(ids(editor.annotations()), ["ann_a", "ann_c"]);
}

#[test]
fn test_undo_beyond_bounds_does_nothing() {
    let mut editor = open_editor(Vec::new());
    editor.add_annotation(stroke("ann_a"));

    editor.undo();
    editor.undo();
    editor.undo();
    assert!(editor.is_empty());
    assert!(!editor.can_undo());

    editor.redo();
    editor.redo();
    assert_eq!(editor.len(), 1);
    assert!(!editor.can_redo());
}

#[test]
fn test_history_limit_drops_oldest_states() {
    let mut overlay = OverlayEditor::with_options(
        Default::default(),
        EditorOptions {
            history_limit: 3,
            ..Default::default()
        },
    );

    for i in 0..6 {
        overlay.add_annotation(stroke(&format!("vann_{i}")));
    }
    assert_eq!(overlay.history().entry_count(), 3);

    // Undo bottoms out at the oldest retained state, not the empty baseline.
    overlay.undo();
    overlay.undo();
    assert!(!overlay.can_undo());
    assert_eq!(overlay.len(), 4);
}

#[test]
fn test_interleaved_edit_session() {
    init_logging();
    let mut editor = open_editor(vec![stroke("ann_0")]);

    // Re-styling the pre-existing stroke, then adding and deleting on top.
    editor.set_active_tool(crate::model::AnnotationTool::Select);
    editor.set_selected_id(Some(crate::model::AnnotationId::new("ann_0")));
    editor.set_stroke_width(6.0);

    editor.set_active_tool(crate::model::AnnotationTool::Freehand);
    editor.add_annotation(stroke("ann_1"));
    editor.remove_annotation(&crate::model::AnnotationId::new("ann_1"));

    // Three undoable steps back to the baseline.
    editor.undo();
    editor.undo();
    editor.undo();
    assert!(!editor.can_undo());
    let original = editor
        .get(&crate::model::AnnotationId::new("ann_0"))
        .and_then(|a| a.as_freehand())
        .expect("baseline stroke");
    assert_eq!(original.stroke_width, 3.0);
}
