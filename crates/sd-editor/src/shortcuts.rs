//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s so every host
//! shares the same bindings:
//! - ⌘Z / Ctrl+Z = undo last move
//! - ⌘⇧Z, ⌘Y = redo
//! - C / S = add circle / square

use crate::input::InputEvent;
use sd_core::model::ShapeTool;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    AddCircle,
    AddSquare,
}

impl ShortcutAction {
    /// The input event this action stands for.
    pub fn to_event(self) -> InputEvent {
        match self {
            ShortcutAction::Undo => InputEvent::Undo,
            ShortcutAction::Redo => InputEvent::Redo,
            ShortcutAction::AddCircle => InputEvent::AddShape {
                tool: ShapeTool::Circle,
            },
            ShortcutAction::AddSquare => InputEvent::AddShape {
                tool: ShapeTool::Square,
            },
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the logical key value (e.g. `"z"`, `"Z"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        if alt {
            return None;
        }

        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if shift {
            return None;
        }

        match key {
            "c" | "C" => Some(ShortcutAction::AddCircle),
            "s" | "S" => Some(ShortcutAction::AddSquare),
            _ => None,
        }
    }
}
