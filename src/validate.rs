//! Checks for computed hulls.
//!
//! These are independent of the scan: they only use the [`Orientation`] primitive and
//! the input coordinates, so they can vouch for results of any hull algorithm.
//!
//! [`validate_hull`] measures every point as an offset from the hull's pivot, the same
//! frame the scan works in. For float input this means both sides test turns of the
//! same rounded offsets, and the exact predicate makes them agree.
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::data::{Hull, Point, PointId, PointLocation, Traversal};
use crate::{HullScalar, Orientation, WideScalar};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HullViolation {
  #[error("Hull has {0} vertices, at least three are required")]
  TooFewVertices(usize),
  #[error("Hull has {len} vertices but the input only has {max} points")]
  TooManyVertices { len: usize, max: usize },
  #[error("Hull refers to unknown point {0}")]
  UnknownPoint(PointId),
  #[error("Point {0} appears more than once in the hull")]
  DuplicatePoint(PointId),
  /// Two consecutive edges are either colinear or turn against the traversal.
  #[error("Vertex {at} is a {found:?} turn")]
  ConvexViolation { at: PointId, found: Orientation },
  /// The vertices wind around the pivot more than once.
  #[error("Hull winds around vertex {0} more than once")]
  WindingViolation(PointId),
  #[error("Point {0} lies outside the hull")]
  OutsidePoint(PointId),
}

/// Whether two hulls list the same ids in the same order.
pub fn same_hull(a: &Hull, b: &Hull) -> bool {
  if a.len() != b.len() {
    debug!(left = a.len(), right = b.len(), "hulls differ in size");
    return false;
  }
  match a.iter().zip(b.iter()).position(|(x, y)| x != y) {
    Some(idx) => {
      debug!(idx, left = %a.ids()[idx], right = %b.ids()[idx], "hulls differ");
      false
    }
    None => true,
  }
}

/// $O(n)$ Every vertex turns in the traversal direction and the boundary winds once.
pub fn check_strictly_convex<W>(
  vertices: &[&Point<W>],
  traversal: Traversal,
) -> Result<(), HullViolation>
where
  W: WideScalar,
{
  let n = vertices.len();
  if n < 3 {
    return Err(HullViolation::TooFewVertices(n));
  }
  let expected = traversal.orientation();
  for idx in 0..n {
    let prev = vertices[(idx + n - 1) % n];
    let cur = vertices[idx];
    let next = vertices[(idx + 1) % n];
    let found = Orientation::of_points(prev, cur, next);
    if found != expected {
      return Err(HullViolation::ConvexViolation { at: cur.id, found });
    }
  }
  // Locally convex polygons can still wind several times around.
  let origin = vertices[0];
  for pair in vertices[1..].windows(2) {
    if Orientation::of_points(origin, pair[0], pair[1]) != expected {
      return Err(HullViolation::WindingViolation(origin.id));
    }
  }
  Ok(())
}

/// $O(n)$ Locate `pt` relative to a strictly convex polygon given in counter-clockwise order.
pub fn locate<W>(vertices: &[Point<W>], pt: &Point<W>) -> PointLocation
where
  W: WideScalar,
{
  let n = vertices.len();
  let mut on_edge = false;
  for idx in 0..n {
    match Orientation::of_points(&vertices[idx], &vertices[(idx + 1) % n], pt) {
      Orientation::ClockWise => return PointLocation::Outside,
      Orientation::CoLinear => on_edge = true,
      Orientation::CounterClockWise => {}
    }
  }
  if on_edge {
    PointLocation::OnBoundary
  } else {
    PointLocation::Inside
  }
}

/// $O(n \cdot h)$ Check that `hull` is the strictly convex hull of `points`.
pub fn validate_hull<T>(hull: &Hull, points: &[Point<T>]) -> Result<(), HullViolation>
where
  T: HullScalar,
{
  let len = hull.len();
  if len < 3 {
    return Err(HullViolation::TooFewVertices(len));
  }
  if len > points.len() {
    return Err(HullViolation::TooManyVertices {
      len,
      max: points.len(),
    });
  }

  let by_id: HashMap<PointId, &Point<T>> = points.iter().map(|pt| (pt.id, pt)).collect();
  let mut seen = HashSet::with_capacity(len);
  let mut corners = Vec::with_capacity(len);
  for &id in hull {
    let pt = by_id.get(&id).ok_or(HullViolation::UnknownPoint(id))?;
    if !seen.insert(id) {
      return Err(HullViolation::DuplicatePoint(id));
    }
    corners.push(*pt);
  }
  let pivot = *by_id
    .get(&hull.pivot())
    .ok_or(HullViolation::UnknownPoint(hull.pivot()))?;
  let mut vertices: Vec<Point<T::Wide>> = corners.iter().map(|pt| pt.offset_from(pivot)).collect();

  let refs: Vec<&Point<T::Wide>> = vertices.iter().collect();
  check_strictly_convex(&refs, hull.traversal())?;

  if hull.traversal() == Traversal::ClockWise {
    vertices.reverse();
  }
  for pt in points {
    if locate(&vertices, &pt.offset_from(pivot)) == PointLocation::Outside {
      return Err(HullViolation::OutsidePoint(pt.id));
    }
  }
  Ok(())
}
