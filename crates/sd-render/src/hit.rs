//! Hit testing: point → shape lookup.
//!
//! Reverse-walks the scene (front-to-back) to find which shape is at a
//! given (x, y) canvas position.

use sd_core::ShapeId;
use sd_core::model::Scene;

/// Find the topmost shape at position (px, py).
/// Returns `None` if no shape is hit (background).
pub fn hit_test(scene: &Scene, px: i32, py: i32) -> Option<ShapeId> {
    // Last painted = topmost
    scene
        .iter()
        .rev()
        .find(|shape| shape.contains(px, py))
        .map(|shape| shape.id())
}
