//! Canvas configuration.
//!
//! Hosts may load a JSON document; any missing field falls back to the
//! defaults of the classic 400×400 white drawing board.

use crate::model::{Color, ShapeTool};
use serde::{Deserialize, Serialize};

// ─── Config ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Preferred canvas width in pixels. Read by the host when sizing its
    /// window; see `Canvas::size`.
    pub width: u32,
    /// Preferred canvas height in pixels.
    pub height: u32,
    /// Color the surface is cleared to before painting shapes.
    pub background: Color,
    /// Where toolbar-created shapes are placed.
    pub default_position: (i32, i32),
    /// Radius of toolbar-created circles.
    pub circle_radius: i32,
    /// Side length of toolbar-created squares.
    pub square_side: i32,
    /// Color toolbar-created shapes start with (before the brush color is applied).
    pub default_color: Color,
    /// Maximum number of undoable moves kept; the oldest is dropped first.
    /// Values below 1 are treated as 1.
    pub max_undo_depth: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            background: Color::WHITE,
            default_position: (100, 100),
            circle_radius: 30,
            square_side: 50,
            default_color: Color::BLACK,
            max_undo_depth: 1000,
        }
    }
}

impl CanvasConfig {
    /// Parse a JSON config document.
    ///
    /// # Errors
    /// Returns the JSON error message if the document is malformed.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("invalid canvas config: {e}"))
    }

    /// Default size for a toolbar-created shape of the given kind.
    pub fn default_size(&self, tool: ShapeTool) -> i32 {
        match tool {
            ShapeTool::Circle => self.circle_radius,
            ShapeTool::Square => self.square_side,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
