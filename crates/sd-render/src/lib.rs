pub mod hit;
pub mod paint;

pub use hit::hit_test;
pub use paint::{DrawCall, RecordingSurface, Surface, paint_scene, paint_shape};
