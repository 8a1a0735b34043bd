//! Core shape data model for SD canvases.
//!
//! A canvas holds a flat list of shapes. Insertion order is z-order:
//! later shapes draw on top and win hit tests. All coordinates are
//! integer canvas pixels, so moves and their inverses are exact.

use crate::id::ShapeId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// 8-bit sRGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let short = |i: usize| u8::from_str_radix(&hex[i..i + 1].repeat(2), 16).ok();
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Emit as shortest valid hex string.
    pub fn to_hex(&self) -> String {
        let Self { r, g, b, a } = *self;
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{s}`")))
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────

/// Geometry of a shape. The anchor `(x, y)` is the center for circles
/// and the top-left corner for squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    Circle { radius: i32 },
    Square { side: i32 },
}

impl ShapeKind {
    /// Build a shape kind from a toolbar tool and a single size value
    /// (radius for circles, side length for squares).
    pub fn with_size(tool: ShapeTool, size: i32) -> Self {
        match tool {
            ShapeTool::Circle => ShapeKind::Circle { radius: size },
            ShapeTool::Square => ShapeKind::Square { side: size },
        }
    }

    pub fn tool(&self) -> ShapeTool {
        match self {
            ShapeKind::Circle { .. } => ShapeTool::Circle,
            ShapeKind::Square { .. } => ShapeTool::Square,
        }
    }

    pub fn name(&self) -> &'static str {
        self.tool().name()
    }
}

/// Which kind of shape a toolbar action creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeTool {
    Circle,
    Square,
}

impl ShapeTool {
    pub fn name(self) -> &'static str {
        match self {
            ShapeTool::Circle => "circle",
            ShapeTool::Square => "square",
        }
    }
}

/// A drawable shape on the canvas: the receiver of move commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    id: ShapeId,
    x: i32,
    y: i32,
    color: Color,
    kind: ShapeKind,
}

impl Shape {
    pub fn new(id: ShapeId, kind: ShapeKind, x: i32, y: i32, color: Color) -> Self {
        Self {
            id,
            x,
            y,
            color,
            kind,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Translate by `(dx, dy)`. Unbounded; wraps on `i32` overflow so that
    /// moving back by the negated offset always lands on the start.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Hit test: is `(px, py)` inside this shape (edges inclusive)?
    pub fn contains(&self, px: i32, py: i32) -> bool {
        match self.kind {
            ShapeKind::Circle { radius } => {
                let dx = i128::from(self.x) - i128::from(px);
                let dy = i128::from(self.y) - i128::from(py);
                let r = i128::from(radius);
                dx * dx + dy * dy <= r * r
            }
            ShapeKind::Square { side } => {
                let (px, py) = (i64::from(px), i64::from(py));
                let (x, y, side) = (i64::from(self.x), i64::from(self.y), i64::from(side));
                px >= x && px <= x + side && py >= y && py <= y + side
            }
        }
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// Ordered shape collection. Insertion order is draw order; shapes live
/// for the lifetime of the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scene {
    shapes: Vec<Shape>,
}

/// Wire form of a scene; ids are reassigned from position on load.
#[derive(Deserialize)]
struct SceneRepr {
    shapes: Vec<Shape>,
}

impl<'de> Deserialize<'de> for Scene {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let SceneRepr { mut shapes } = SceneRepr::deserialize(deserializer)?;
        // Lookups index by id, so an id must equal its slot.
        for (index, shape) in shapes.iter_mut().enumerate() {
            shape.id = ShapeId::from_index(index);
        }
        Ok(Scene { shapes })
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new shape on top of the z-order and return its id.
    pub fn add(&mut self, kind: ShapeKind, x: i32, y: i32, color: Color) -> ShapeId {
        let id = ShapeId::from_index(self.shapes.len());
        self.shapes.push(Shape::new(id, kind, x, y, color));
        log::debug!("scene: added {} {id} at ({x}, {y})", kind.name());
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.index())
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(id.index())
    }

    /// Shapes in draw order (bottom to top).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle() -> Shape {
        Shape::new(
            ShapeId::from_index(0),
            ShapeKind::Circle { radius: 30 },
            100,
            100,
            Color::BLACK,
        )
    }

    fn square() -> Shape {
        Shape::new(
            ShapeId::from_index(1),
            ShapeKind::Square { side: 50 },
            100,
            100,
            Color::BLACK,
        )
    }

    #[test]
    fn circle_hit_test_uses_radius() {
        let c = circle();
        assert!(c.contains(100, 100));
        assert!(c.contains(100, 129));
        assert!(c.contains(100, 130), "edge is inclusive");
        assert!(!c.contains(100, 131));
        // Diagonal just outside: 22² + 22² = 968 > 900
        assert!(!c.contains(122, 122));
    }

    #[test]
    fn square_hit_test_is_inclusive_box() {
        let s = square();
        assert!(s.contains(100, 100));
        assert!(s.contains(150, 150));
        assert!(!s.contains(151, 100));
        assert!(!s.contains(99, 120));
        assert!(!s.contains(120, 151));
    }

    #[test]
    fn hit_test_far_coordinates_do_not_overflow() {
        let c = circle();
        assert!(!c.contains(i32::MIN, i32::MAX));
        let s = Shape::new(
            ShapeId::from_index(0),
            ShapeKind::Square { side: 50 },
            i32::MAX - 10,
            0,
            Color::BLACK,
        );
        assert!(s.contains(i32::MAX, 10));
    }

    #[test]
    fn move_then_inverse_restores_position() {
        for (dx, dy) in [(0, 0), (30, 10), (-7, 250), (i32::MAX, i32::MIN + 1)] {
            let mut s = square();
            s.move_by(dx, dy);
            s.move_by(dx.wrapping_neg(), dy.wrapping_neg());
            assert_eq!(s.position(), (100, 100), "offset ({dx}, {dy})");
        }
    }

    #[test]
    fn set_color_replaces_color() {
        let mut c = circle();
        c.set_color(Color::RED);
        assert_eq!(c.color(), Color::RED);
    }

    #[test]
    fn color_hex_forms() {
        assert_eq!(Color::from_hex("#F00"), Some(Color::RED));
        assert_eq!(Color::from_hex("#00ff00"), Some(Color::GREEN));
        assert_eq!(
            Color::from_hex("#0000FF80"),
            Some(Color::rgba(0, 0, 255, 128))
        );
        assert_eq!(Color::from_hex("#0000"), Some(Color::rgba(0, 0, 0, 0)));
        assert_eq!(Color::from_hex("000000"), None);
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GGGGGG"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
        assert_eq!(Color::from_hex("#+F+F+F"), None);
        assert_eq!(Color::RED.to_hex(), "#FF0000");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_hex(), "#01020304");
    }

    #[test]
    fn scene_assigns_ids_in_insertion_order() {
        let mut scene = Scene::new();
        let a = scene.add(ShapeKind::Circle { radius: 30 }, 100, 100, Color::BLACK);
        let b = scene.add(ShapeKind::Square { side: 50 }, 10, 20, Color::BLUE);
        assert_eq!(scene.len(), 2);
        assert!(a < b);
        assert_eq!(scene.get(b).map(Shape::position), Some((10, 20)));
        assert_eq!(scene.shapes()[0].id(), a);
        assert!(scene.get(ShapeId::from_index(5)).is_none());
    }

    #[test]
    fn loaded_scene_ids_match_their_slots() {
        let json = r##"{ "shapes": [
            { "id": 1, "x": 0, "y": 0, "color": "#000", "kind": { "type": "square", "side": 10 } },
            { "id": 0, "x": 300, "y": 300, "color": "#000", "kind": { "type": "square", "side": 10 } }
        ] }"##;
        let mut scene: Scene = serde_json::from_str(json).unwrap();

        let hit = scene.iter().rev().find(|s| s.contains(5, 5)).map(Shape::id);
        assert_eq!(hit, Some(ShapeId::from_index(0)));
        let shape = scene.get_mut(ShapeId::from_index(0)).unwrap();
        assert_eq!(shape.position(), (0, 0));

        for (index, shape) in scene.iter().enumerate() {
            assert_eq!(shape.id().index(), index);
        }
    }

    #[test]
    fn shape_kind_serializes_tagged() {
        let kind = ShapeKind::Square { side: 50 };
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, r#"{"type":"square","side":50}"#);
    }
}
