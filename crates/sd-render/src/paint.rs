//! Scene → draw calls.
//!
//! Walks the scene bottom-to-top and issues fill operations against a
//! [`Surface`]. The host toolkit implements `Surface` on top of whatever
//! graphics context it owns.

use sd_core::model::*;

/// Drawing primitives a host must provide.
pub trait Surface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Set the color used by subsequent fills.
    fn set_color(&mut self, color: Color);

    /// Fill a circle centered at `(cx, cy)`.
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32);

    /// Fill an axis-aligned rectangle with top-left corner `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
}

/// A single recorded draw operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Color),
    SetColor(Color),
    FillCircle { cx: i32, cy: i32, radius: i32 },
    FillRect { x: i32, y: i32, width: i32, height: i32 },
}

/// A surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded calls, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn set_color(&mut self, color: Color) {
        self.calls.push(DrawCall::SetColor(color));
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        self.calls.push(DrawCall::FillCircle { cx, cy, radius });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
        });
    }
}

/// Clear to `background`, then paint every shape in z-order.
pub fn paint_scene(surface: &mut dyn Surface, scene: &Scene, background: Color) {
    surface.clear(background);
    for shape in scene.iter() {
        paint_shape(surface, shape);
    }
}

/// Paint one shape with its current position, color, and geometry.
pub fn paint_shape(surface: &mut dyn Surface, shape: &Shape) {
    let (x, y) = shape.position();
    log::trace!(
        "PAINT {} {} at ({x}, {y}) {}",
        shape.kind().name(),
        shape.id(),
        shape.color().to_hex()
    );
    surface.set_color(shape.color());
    match *shape.kind() {
        ShapeKind::Circle { radius } => surface.fill_circle(x, y, radius),
        ShapeKind::Square { side } => surface.fill_rect(x, y, side, side),
    }
}
