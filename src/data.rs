mod hull;
pub(crate) mod point;
mod vector;

pub use hull::{Hull, Traversal};
pub use point::{Point, PointId};
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
