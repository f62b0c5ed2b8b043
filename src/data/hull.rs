use std::slice;

use super::{Point, PointId};
use crate::validate::{self, HullViolation};
use crate::{HullScalar, Orientation};

/// Order in which hull vertices are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Traversal {
  /// Pivot first, then counter-clockwise around the hull.
  #[default]
  CounterClockWise,
  /// Clockwise around the hull, pivot last.
  ClockWise,
}

impl Traversal {
  /// Orientation of every consecutive vertex triple.
  pub fn orientation(self) -> Orientation {
    match self {
      Traversal::CounterClockWise => Orientation::CounterClockWise,
      Traversal::ClockWise => Orientation::ClockWise,
    }
  }
}

/// Ids of the convex hull vertices in traversal order.
///
/// Vertices are strict corners: no two consecutive edges are colinear.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hull {
  ids: Vec<PointId>,
  traversal: Traversal,
}

impl Hull {
  pub(crate) fn new_unchecked(ids: Vec<PointId>, traversal: Traversal) -> Hull {
    Hull { ids, traversal }
  }

  pub fn ids(&self) -> &[PointId] {
    &self.ids
  }

  pub fn as_usizes(&self) -> Vec<usize> {
    self.ids.iter().map(|id| id.usize()).collect()
  }

  pub fn into_ids(self) -> Vec<PointId> {
    self.ids
  }

  pub fn traversal(&self) -> Traversal {
    self.traversal
  }

  /// The anchor of the scan. Always a hull vertex.
  pub fn pivot(&self) -> PointId {
    // Hulls have at least three vertices.
    match self.traversal {
      Traversal::CounterClockWise => self.ids[0],
      Traversal::ClockWise => self.ids[self.ids.len() - 1],
    }
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn contains(&self, id: PointId) -> bool {
    self.ids.contains(&id)
  }

  pub fn iter(&self) -> slice::Iter<'_, PointId> {
    self.ids.iter()
  }

  /// The same hull walked the other way around, pivot kept at the reported end.
  #[must_use]
  pub fn reversed(&self) -> Hull {
    let mut ids = self.ids.clone();
    ids.reverse();
    let traversal = match self.traversal {
      Traversal::CounterClockWise => Traversal::ClockWise,
      Traversal::ClockWise => Traversal::CounterClockWise,
    };
    Hull { ids, traversal }
  }

  /// $O(n \cdot h)$ Check that this hull is the strictly convex hull of `points`.
  ///
  /// # Errors
  /// Reports the first violated property: size bounds, unknown or repeated ids,
  /// a vertex that is not a strict turn in the traversal direction, or an input
  /// point outside the hull.
  pub fn validate<T>(&self, points: &[Point<T>]) -> Result<(), HullViolation>
  where
    T: HullScalar,
  {
    validate::validate_hull(self, points)
  }
}

impl<'a> IntoIterator for &'a Hull {
  type Item = &'a PointId;
  type IntoIter = slice::Iter<'a, PointId>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}
