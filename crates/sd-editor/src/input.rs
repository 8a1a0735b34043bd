//! Input abstraction layer.
//!
//! The host toolkit translates its mouse, button, and keyboard callbacks
//! into `InputEvent`s and hands them to [`Canvas::dispatch`](crate::canvas::Canvas::dispatch).

use sd_core::model::{Color, ShapeTool};
use serde::{Deserialize, Serialize};

/// A normalized input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer pressed at canvas coordinates.
    PointerDown { x: i32, y: i32 },

    /// Pointer released at canvas coordinates.
    PointerUp { x: i32, y: i32 },

    /// Toolbar: create a shape of the given kind with default geometry.
    AddShape { tool: ShapeTool },

    /// Color picker confirmed a color.
    ChangeColor { color: Color },

    Undo,

    Redo,

    /// Keyboard shortcut, resolved through [`ShortcutMap`](crate::shortcuts::ShortcutMap).
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        meta: bool,
    },
}

impl InputEvent {
    pub fn pointer_down(x: i32, y: i32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn pointer_up(x: i32, y: i32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(i32, i32)> {
        match self {
            Self::PointerDown { x, y } | Self::PointerUp { x, y } => Some((*x, *y)),
            _ => None,
        }
    }
}
