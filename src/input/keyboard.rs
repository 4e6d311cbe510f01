//! Keyboard shortcut handling for the annotation editors.

use crate::model::AnnotationTool;
use crate::store::{AnnotationStore, EditorContext};

/// A key press as delivered by the host's event layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Delete,
    Backspace,
}

/// Modifier state at the time of the key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        meta: false,
        shift: false,
        alt: false,
    };

    /// The primary shortcut modifier: Ctrl, or Cmd on macOS hosts.
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Where keyboard focus is, as reported by the host.
///
/// Shortcuts are suppressed while a text input or content-editable element
/// has focus; only Escape acts there, by blurring the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Canvas,
    TextInput,
}

/// Outcome of a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A binding fired; the host should suppress the default behavior.
    Handled,
    /// Focus was in a text input and Escape was pressed; the host should
    /// blur that input instead of running a shortcut.
    BlurTextInput,
    /// Not a bound key; let it pass through.
    Ignored,
}

/// Rebindable tool hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    /// Hotkey for the Select tool
    pub tool_select: char,
    /// Hotkey for the freehand Draw tool
    pub tool_freehand: char,
    /// Hotkey for the Text tool
    pub tool_text: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            tool_select: 'v',
            tool_freehand: 'd',
            tool_text: 't',
        }
    }
}

impl KeyBindings {
    /// Get the tool bound to a key, if any. Case-insensitive.
    pub fn tool_for_key(&self, key: char) -> Option<AnnotationTool> {
        let key = key.to_ascii_lowercase();
        if key == self.tool_select {
            Some(AnnotationTool::Select)
        } else if key == self.tool_freehand {
            Some(AnnotationTool::Freehand)
        } else if key == self.tool_text {
            Some(AnnotationTool::Text)
        } else {
            None
        }
    }

    /// Get the hotkey for a specific tool.
    pub fn key_for_tool(&self, tool: AnnotationTool) -> char {
        match tool {
            AnnotationTool::Select => self.tool_select,
            AnnotationTool::Freehand => self.tool_freehand,
            AnnotationTool::Text => self.tool_text,
        }
    }
}

/// Maps key events onto store operations.
///
/// Bindings: Delete/Backspace removes the selection, Ctrl/Cmd+Z undoes,
/// Ctrl/Cmd+Shift+Z or Ctrl/Cmd+Y redoes, Escape resets to the Select tool
/// (and, on the overlay, leaves annotation mode), V/D/T switch tools.
#[derive(Debug, Clone, Default)]
pub struct KeyboardController {
    bindings: KeyBindings,
}

impl KeyboardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Handle a key press against a store.
    pub fn handle_key<X: EditorContext>(
        &self,
        store: &mut AnnotationStore<X>,
        key: Key,
        modifiers: Modifiers,
        focus: Focus,
    ) -> KeyOutcome {
        if !store.context().accepts_input() {
            return KeyOutcome::Ignored;
        }
        // An open text entry owns the keyboard; only Escape acts, by blurring.
        if focus == Focus::TextInput || store.editing_text_id().is_some() {
            return if key == Key::Escape {
                KeyOutcome::BlurTextInput
            } else {
                KeyOutcome::Ignored
            };
        }

        match key {
            Key::Delete | Key::Backspace => {
                let Some(id) = store.selected_id().cloned() else {
                    return KeyOutcome::Ignored;
                };
                store.remove_annotation(&id);
                KeyOutcome::Handled
            }
            Key::Escape => {
                store.set_active_tool(AnnotationTool::Select);
                store.context_mut().on_escape();
                KeyOutcome::Handled
            }
            Key::Char(c) => self.handle_char(store, c, modifiers),
            Key::Enter => KeyOutcome::Ignored,
        }
    }

    fn handle_char<X: EditorContext>(
        &self,
        store: &mut AnnotationStore<X>,
        c: char,
        modifiers: Modifiers,
    ) -> KeyOutcome {
        let c = c.to_ascii_lowercase();

        if modifiers.primary() && c == 'z' && !modifiers.shift {
            if store.can_undo() {
                store.undo();
            }
            return KeyOutcome::Handled;
        }

        if (modifiers.primary() && modifiers.shift && c == 'z')
            || (modifiers.primary() && c == 'y')
        {
            if store.can_redo() {
                store.redo();
            }
            return KeyOutcome::Handled;
        }

        if !modifiers.primary() {
            if let Some(tool) = self.bindings.tool_for_key(c) {
                store.set_active_tool(tool);
                return KeyOutcome::Handled;
            }
        }

        KeyOutcome::Ignored
    }
}
