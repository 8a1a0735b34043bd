pub mod config;
pub mod id;
pub mod model;

pub use config::CanvasConfig;
pub use id::ShapeId;
pub use model::*;
