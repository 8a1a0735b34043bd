//! Canvas: the invoker.
//!
//! Owns the scene, the undo history, and the current selection, and turns
//! pointer gestures into move commands. A press picks the topmost shape
//! under the pointer; the release moves that shape's anchor to the release
//! point as one undoable step.
//!
//! Every operation is total. Gestures that hit nothing, color changes
//! without a selection, and undo on an empty history are silent no-ops.

use crate::commands::{Command, CommandStack};
use crate::input::InputEvent;
use crate::shortcuts::ShortcutMap;
use sd_core::model::*;
use sd_core::{CanvasConfig, ShapeId};
use sd_render::{Surface, hit_test, paint_scene};

pub struct Canvas {
    scene: Scene,
    commands: CommandStack,
    /// Last shape picked by a press or created from the toolbar.
    /// Stays set after release.
    selected: Option<ShapeId>,
    /// Last color confirmed through the color picker.
    brush: Color,
    config: CanvasConfig,
    /// Set whenever visible state changes; cleared by `take_redraw`.
    needs_redraw: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            scene: Scene::new(),
            commands: CommandStack::new(config.max_undo_depth),
            selected: None,
            brush: config.default_color,
            config,
            needs_redraw: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Preferred surface size `(width, height)` for the host window.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.scene.get(id))
    }

    pub fn brush_color(&self) -> Color {
        self.brush
    }

    pub fn can_undo(&self) -> bool {
        self.commands.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.commands.can_redo()
    }

    /// Returns whether a redraw was requested since the last call, and
    /// clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ─── Shapes ──────────────────────────────────────────────────────────

    /// Append a shape on top of the z-order. Does not change the selection.
    pub fn add_shape(
        &mut self,
        tool: ShapeTool,
        position: (i32, i32),
        size: i32,
        color: Color,
    ) -> ShapeId {
        let (x, y) = position;
        let id = self
            .scene
            .add(ShapeKind::with_size(tool, size), x, y, color);
        self.needs_redraw = true;
        id
    }

    /// Toolbar action: add a shape with the configured defaults and select it.
    pub fn add_default_shape(&mut self, tool: ShapeTool) -> ShapeId {
        let id = self.add_shape(
            tool,
            self.config.default_position,
            self.config.default_size(tool),
            self.config.default_color,
        );
        self.select(id);
        id
    }

    /// Make `id` the selection and paint it with the brush color.
    /// Unknown ids are ignored.
    pub fn select(&mut self, id: ShapeId) {
        let brush = self.brush;
        if let Some(shape) = self.scene.get_mut(id) {
            shape.set_color(brush);
            self.selected = Some(id);
            self.needs_redraw = true;
            log::debug!("select: {id}");
        }
    }

    // ─── Pointer gestures ────────────────────────────────────────────────

    /// Pointer pressed: select the topmost shape under `(x, y)`.
    /// A press on the background keeps the current selection.
    pub fn select_at(&mut self, x: i32, y: i32) {
        if let Some(id) = hit_test(&self.scene, x, y) {
            log::debug!("select_at ({x}, {y}): {id}");
            self.selected = Some(id);
        }
    }

    /// Pointer released: move the selected shape's anchor to `(x, y)`.
    /// A zero displacement records nothing.
    pub fn release_at(&mut self, x: i32, y: i32) {
        let Some(shape) = self.selected_shape() else {
            return;
        };
        let dx = x.wrapping_sub(shape.x());
        let dy = y.wrapping_sub(shape.y());
        if dx == 0 && dy == 0 {
            return;
        }
        let command = Command::Move {
            id: shape.id(),
            dx,
            dy,
        };
        self.commands.execute(&mut self.scene, command);
        self.needs_redraw = true;
    }

    // ─── Edits ───────────────────────────────────────────────────────────

    /// Remember `color` as the brush and recolor the selected shape.
    /// Not recorded in the undo history.
    pub fn set_color_of_selected(&mut self, color: Color) {
        self.brush = color;
        if let Some(id) = self.selected
            && let Some(shape) = self.scene.get_mut(id)
        {
            shape.set_color(color);
            self.needs_redraw = true;
            log::debug!("recolor {id} to {}", color.to_hex());
        }
    }

    /// Revert the most recent move. Returns its description, or `None`
    /// when the history is empty.
    pub fn undo(&mut self) -> Option<String> {
        let desc = self.commands.undo(&mut self.scene)?;
        self.needs_redraw = true;
        Some(desc)
    }

    /// Reapply the most recently undone move.
    pub fn redo(&mut self) -> Option<String> {
        let desc = self.commands.redo(&mut self.scene)?;
        self.needs_redraw = true;
        Some(desc)
    }

    // ─── Host bridge ─────────────────────────────────────────────────────

    /// Clear to the background color and draw every shape bottom to top.
    pub fn render(&self, surface: &mut dyn Surface) {
        paint_scene(surface, &self.scene, self.config.background);
    }

    /// Route one input event to the matching canvas operation.
    pub fn dispatch(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.select_at(*x, *y),
            InputEvent::PointerUp { x, y } => self.release_at(*x, *y),
            InputEvent::AddShape { tool } => {
                self.add_default_shape(*tool);
            }
            InputEvent::ChangeColor { color } => self.set_color_of_selected(*color),
            InputEvent::Undo => {
                self.undo();
            }
            InputEvent::Redo => {
                self.redo();
            }
            InputEvent::Key {
                key,
                ctrl,
                shift,
                alt,
                meta,
            } => {
                if let Some(action) = ShortcutMap::resolve(key, *ctrl, *shift, *alt, *meta) {
                    self.dispatch(&action.to_event());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_on_background_keeps_selection() {
        let mut canvas = Canvas::default();
        let id = canvas.add_default_shape(ShapeTool::Circle);

        canvas.select_at(300, 300);
        assert_eq!(canvas.selected(), Some(id));
    }

    #[test]
    fn press_with_nothing_selected_stays_empty() {
        let mut canvas = Canvas::default();
        canvas.add_shape(ShapeTool::Square, (100, 100), 50, Color::BLACK);
        canvas.select_at(0, 0);
        assert_eq!(canvas.selected(), None);

        // Release without a selection does nothing
        canvas.release_at(200, 200);
        assert!(!canvas.can_undo());
    }

    #[test]
    fn release_at_anchor_records_nothing() {
        let mut canvas = Canvas::default();
        canvas.add_default_shape(ShapeTool::Square);
        canvas.select_at(120, 120);
        canvas.release_at(100, 100);
        assert!(!canvas.can_undo());
    }

    #[test]
    fn release_moves_anchor_to_pointer() {
        let mut canvas = Canvas::default();
        let id = canvas.add_default_shape(ShapeTool::Square);

        // Grab the square away from its corner; the corner still jumps
        // to the release point.
        canvas.select_at(140, 140);
        canvas.release_at(200, 50);
        assert_eq!(canvas.scene().get(id).unwrap().position(), (200, 50));
        assert_eq!(canvas.selected(), Some(id), "selection survives release");
    }

    #[test]
    fn redraw_requests_are_coalesced_flags() {
        let mut canvas = Canvas::default();
        assert!(canvas.take_redraw());
        assert!(!canvas.take_redraw());

        canvas.undo();
        assert!(!canvas.take_redraw(), "empty undo requests nothing");

        canvas.add_default_shape(ShapeTool::Circle);
        canvas.release_at(150, 150);
        assert!(canvas.take_redraw());
    }

    #[test]
    fn size_comes_from_config() {
        assert_eq!(Canvas::default().size(), (400, 400));
        let config = CanvasConfig {
            width: 640,
            height: 480,
            ..CanvasConfig::default()
        };
        assert_eq!(Canvas::new(config).size(), (640, 480));
    }

    #[test]
    fn zero_undo_depth_keeps_one_move() {
        let config = CanvasConfig {
            max_undo_depth: 0,
            ..CanvasConfig::default()
        };
        let mut canvas = Canvas::new(config);
        let id = canvas.add_default_shape(ShapeTool::Circle);
        canvas.release_at(130, 110);

        assert!(canvas.undo().is_some());
        assert_eq!(canvas.scene().get(id).unwrap().position(), (100, 100));
    }

    #[test]
    fn select_unknown_id_is_ignored() {
        let mut canvas = Canvas::default();
        canvas.select(ShapeId::from_index(3));
        assert_eq!(canvas.selected(), None);
    }
}
