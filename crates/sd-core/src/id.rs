use serde::{Deserialize, Serialize};
use std::fmt;

/// A stable handle to a shape in a [`Scene`](crate::model::Scene).
///
/// Shapes are never removed, so the id doubles as the shape's insertion
/// index (and therefore its z-order).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(usize);

impl ShapeId {
    pub const fn from_index(index: usize) -> Self {
        ShapeId(index)
    }

    /// Position of the shape in insertion (draw) order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
